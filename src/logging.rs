//! File logging
//!
//! The terminal belongs to the UI, so log records only ever go to a file.
//! `RUST_LOG` overrides the default filter.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::error::WayfinderError;

const DEFAULT_FILTER: &str = "wayfinder=debug";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Start logging to `log_file`, appending. Without a file, logging stays off.
pub fn init(log_file: Option<&Path>) -> Result<(), WayfinderError> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| WayfinderError::Logging(format!("{}: {}", path.display(), e)))?;

    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} [{}] {}",
                chrono::Local::now().format(TIMESTAMP_FORMAT),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .map_err(|e| WayfinderError::Logging(e.to_string()))?;

    log::info!("wayfinder {} started", env!("CARGO_PKG_VERSION"));
    Ok(())
}
