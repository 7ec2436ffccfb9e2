//! Logging Infrastructure
//!
//! `RUST_LOG` wins when set; otherwise the crate, `tower_http` and the
//! `security` target log at `LOG_LEVEL`.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional JSON formatting and a daily rolling file
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(log_level.unwrap_or("info"))));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false);

    let file_appender = log_dir.and_then(|dir| {
        let path = Path::new(dir);
        match std::fs::create_dir_all(path) {
            Ok(()) => Some(tracing_appender::rolling::daily(path, "order-server.log")),
            Err(e) => {
                eprintln!("Cannot create log directory {dir}: {e}; logging to stdout");
                None
            }
        }
    });

    match (json, file_appender) {
        (true, Some(appender)) => subscriber.json().with_writer(appender).init(),
        (true, None) => subscriber.json().init(),
        (false, Some(appender)) => subscriber.with_ansi(false).with_writer(appender).init(),
        (false, None) => subscriber.init(),
    }
}

fn default_directives(level: &str) -> String {
    format!("order_server={level},tower_http={level},security={level}")
}
