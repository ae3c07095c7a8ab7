use chrono::Utc;
use env_logger::{Builder, Target};
use log::{debug, info};
use std::error::Error;
use std::path::PathBuf;

/// Initialize logging to a timestamped file.
///
/// The UI owns the terminal, so log output always goes to a file rather
/// than stdout or stderr.
pub fn init_logging() -> Result<PathBuf, Box<dyn Error>> {
    let log_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".dnascope")
        .join("logs");

    std::fs::create_dir_all(&log_dir)?;

    let log_file = log_dir.join(format!("dnascope_{}.log", Utc::now().format("%Y%m%d_%H%M%S")));

    Builder::from_default_env()
        .target(Target::Pipe(Box::new(std::fs::File::create(&log_file)?)))
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] [{}:{}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();

    info!("Logging system initialized");
    info!("Log file: {log_file:?}");
    debug!("Log directory: {log_dir:?}");

    Ok(log_file)
}

/// Set logging level based on environment variable or default
pub fn set_log_level() {
    let level = std::env::var("DNASCOPE_LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let env_filter = match level.as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" => "warn",
        "error" => "error",
        _ => {
            eprintln!("Invalid log level '{level}', defaulting to 'info'");
            "info"
        }
    };

    std::env::set_var("RUST_LOG", format!("dnascope={env_filter}"));
}

/// Log system information at startup
pub fn log_system_info() {
    info!("=== Dnascope Starting ===");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Build target: {}", std::env::consts::ARCH);
    info!("Operating system: {}", std::env::consts::OS);
    info!("Available CPU cores: {}", num_cpus::get());

    debug!("Environment variables:");
    for (key, value) in std::env::vars() {
        if key.starts_with("DNASCOPE_") || key == "RUST_LOG" {
            debug!("  {key}: {value}");
        }
    }
}

/// Log application shutdown
pub fn log_shutdown() {
    info!("=== Dnascope Shutting Down ===");
    info!("Terminated at {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
}
