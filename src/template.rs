use anyhow::{bail, Context, Result};
use console::style;
use indicatif::ProgressBar;
use log::debug;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::layout::{is_source_file, PLACEHOLDER, SOURCE_DIRS};
use crate::progressbar;
use crate::progressbar::spinner;
use crate::template_variables::ProjectName;
use crate::utils::list_files;

/// Replace every `token` in the text of `file` with `value`.
/// Returns whether the file changed.
pub fn replace_in_file(file: &Path, token: &str, value: &str) -> Result<bool> {
    let content = fs::read_to_string(file).with_context(|| {
        format!(
            "⛔ {} `{}`",
            style("Error reading template file.").bold().red(),
            style(file.display()).bold()
        )
    })?;
    if !content.contains(token) {
        return Ok(false);
    }
    fs::write(file, content.replace(token, value)).with_context(|| {
        format!(
            "⛔ {} `{}`",
            style("Error writing rendered file.").bold().red(),
            style(file.display()).bold()
        )
    })?;
    Ok(true)
}

/// Source files below the source directories of `project_dir`.
fn collect_source_files(project_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for dir in SOURCE_DIRS {
        files.extend(list_files(&project_dir.join(dir))?);
    }
    Ok(files)
}

/// Rename files below the source directories whose name carries the placeholder.
fn rename_placeholder_files(project_dir: &Path, name: &ProjectName) -> Result<()> {
    for file in collect_source_files(project_dir)? {
        let Some(file_name) = file.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !file_name.contains(PLACEHOLDER) {
            continue;
        }
        let renamed = file.with_file_name(file_name.replace(PLACEHOLDER, name.as_str()));
        if renamed.exists() {
            bail!(
                "⛔ cannot rename `{}`: `{}` already exists",
                file.display(),
                renamed.display()
            );
        }
        debug!("rename {} -> {}", file.display(), renamed.display());
        fs::rename(&file, &renamed)?;
    }
    Ok(())
}

/// Substitute the project name into every source file of the generated tree.
pub fn walk_dir(project_dir: &Path, name: &ProjectName) -> Result<()> {
    rename_placeholder_files(project_dir, name)?;

    let sources: Vec<PathBuf> = collect_source_files(project_dir)?
        .into_iter()
        .filter(|f| is_source_file(f))
        .collect();

    let mp = progressbar::new();
    let spinner_style = spinner();
    let total = sources.len().to_string();
    for (progress, filepath) in sources.iter().enumerate() {
        let filename = filepath.strip_prefix(project_dir).unwrap_or(filepath);
        let pb = mp.add(ProgressBar::new(50));
        pb.set_style(spinner_style.clone());
        pb.set_prefix(format!(
            "[{:width$}/{}]",
            progress + 1,
            total,
            width = total.len()
        ));
        pb.set_message(format!("Processing: {}", filename.display()));
        let changed = replace_in_file(filepath, PLACEHOLDER, name.as_str())?;
        if changed {
            debug!("rendered {}", filename.display());
        }
        pb.inc(50);
        pb.finish_with_message(format!("Done: {}", filename.display()));
    }
    Ok(())
}
