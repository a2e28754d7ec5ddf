use env_logger::fmt::Formatter;
use log::Record;
use std::io::Write;

/// Initialize log environment variables
pub fn log_env_init(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let _ = env_logger::builder()
        .format(log_formatter)
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .format_module_path(false)
        .format_level(false)
        .target(env_logger::Target::Stdout)
        .try_init();
}

/// Logging formatter function
pub fn log_formatter(
    buf: &mut Formatter,
    record: &Record,
) -> std::result::Result<(), std::io::Error> {
    let prefix = match record.level() {
        log::Level::Error => "⛔ ",
        log::Level::Warn => "⚠️ ",
        _ => "",
    };
    writeln!(buf, "{}{}", prefix, record.args())
}
