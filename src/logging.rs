//! Log setup.
//!
//! The terminal is in raw mode on the alternate screen while the game runs,
//! so records go to a file instead of stderr. Nothing is logged unless
//! `RUST_LOG` is set.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

pub const LOG_FILE_NAME: &str = "flappy.log";

pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Install the file logger when `RUST_LOG` is set. Returns the log file path
/// when logging was enabled.
pub fn init() -> io::Result<Option<PathBuf>> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(None);
    }

    let path = log_path();
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_in_temp_dir() {
        let path = log_path();
        assert!(path.starts_with(std::env::temp_dir()));
        assert!(path.ends_with(LOG_FILE_NAME));
    }
}
