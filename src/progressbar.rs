use indicatif::{MultiProgress, ProgressDrawTarget, ProgressStyle};

pub fn new() -> MultiProgress {
    MultiProgress::with_draw_target(ProgressDrawTarget::stderr())
}

pub fn spinner() -> ProgressStyle {
    ProgressStyle::with_template("{prefix:.bold.dim} {spinner} {wide_msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
}
