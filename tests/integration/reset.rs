use crate::helpers::prelude::*;

#[test]
fn it_restores_the_baseline() {
    let dir = create_workspace();

    binary()
        .arg_reset()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Done!"));

    assert_eq!(
        dir.read("README.md"),
        "Run `cxxgen -t <type> -n <name>` to create a project.\n"
    );
    assert!(dir.exists(".templates/common/CMakeLists.txt"));
}

#[test]
fn it_converges_after_generate() {
    let fresh = create_workspace();
    binary()
        .arg_reset()
        .current_dir(fresh.path())
        .assert()
        .success();

    let dir = create_workspace();
    binary()
        .arg_type("3")
        .arg_name("foo")
        .current_dir(dir.path())
        .assert()
        .success();
    binary()
        .arg_reset()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Resetting project foo"));

    assert_eq!(dir.snapshot("."), fresh.snapshot("."));
    assert!(!dir.exists("include"));
    assert!(!dir.exists(".clangd"));
    assert!(!dir.exists(".cxxgen.toml"));
    assert!(!dir.exists(".github/workflows/ci-build-and-test.yml"));
    assert!(!dir.exists("scripts"));
    assert!(!dir.exists(".vscode/launch.json"));
}

#[test]
fn it_keeps_files_it_does_not_own() {
    let dir = tempdir()
        .with_default_store()
        .file("notes.txt", "mine")
        .file("src/main.cpp", "generated earlier")
        .build();

    binary()
        .arg_reset()
        .current_dir(dir.path())
        .assert()
        .success();

    assert_eq!(dir.read("notes.txt"), "mine");
    assert!(!dir.exists("src"));
}

#[test]
fn it_wins_over_generation_flags() {
    let dir = create_workspace();

    binary()
        .arg_reset()
        .arg_type("1")
        .arg_name("foo")
        .current_dir(dir.path())
        .assert()
        .success();

    assert!(!dir.exists("include"));
    assert!(dir.exists("README.md"));
}

#[test]
fn it_fails_without_a_baseline() {
    let dir = tempdir()
        .file(".templates/common/CMakeLists.txt", "")
        .file("CMakeLists.txt", "project(existing)")
        .build();

    binary()
        .arg_reset()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    assert_eq!(dir.read("CMakeLists.txt"), "project(existing)");
}

#[test]
fn it_leaves_user_editor_settings_alone() {
    let dir = tempdir()
        .with_default_store()
        .file(".vscode/settings.json", "{ \"editor.tabSize\": 4 }")
        .build();

    binary()
        .arg_type("1")
        .arg_name("foo")
        .current_dir(dir.path())
        .assert()
        .success();
    assert!(dir.exists(".vscode/launch.json"));
    assert!(dir.exists("scripts/format.sh"));

    binary()
        .arg_reset()
        .current_dir(dir.path())
        .assert()
        .success();

    assert_eq!(dir.read(".vscode/settings.json"), "{ \"editor.tabSize\": 4 }");
    assert!(!dir.exists(".vscode/launch.json"));
    assert!(!dir.exists("scripts"));
}

#[test]
fn it_keeps_a_user_readme_through_generation() {
    let dir = tempdir()
        .with_default_store()
        .file("README.md", "my project")
        .build();

    binary()
        .arg_type("2")
        .arg_name("foo")
        .current_dir(dir.path())
        .assert()
        .success();

    assert_eq!(dir.read("README.md"), "my project");
}

#[test]
fn it_ignores_a_lone_project_name() {
    let dir = create_workspace();

    binary()
        .arg_reset()
        .arg_name("foo")
        .current_dir(dir.path())
        .assert()
        .success();

    assert!(dir.exists("README.md"));
    assert!(!dir.exists("include"));
}
