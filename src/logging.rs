// src/logging.rs
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use log::LevelFilter;

/// Install the global logger. With `file`, lines are appended there (GUI);
/// otherwise they go to stderr (CLI). `RUST_LOG` still overrides `level`.
/// Calling this twice is harmless; the second call is ignored.
pub fn init(level: LevelFilter, file: Option<&Path>) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}][{}][{}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.target(),
                record.args()
            )
        });

    if let Some(path) = file {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                let _ = fs::create_dir_all(parent);
            }
        }
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => {
                builder.target(env_logger::Target::Pipe(Box::new(f)));
            }
            Err(e) => eprintln!("Log file {} unavailable ({e}); logging to stderr", path.display()),
        }
    }

    let _ = builder.try_init();
}

/// `-v` count → level. 0 = warnings and errors only.
pub fn level_from_verbosity(v: u8) -> LevelFilter {
    match v {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
