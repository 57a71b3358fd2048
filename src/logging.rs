use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::errors::Result;
use crate::settings::LoggingSettings;

/// Build the filter: `RUST_LOG` wins, otherwise the configured level.
fn env_filter(settings: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level))
}

/// Install the global tracing subscriber.
///
/// Logs go to stderr unless `settings.file` is set, in which case they are
/// appended to that file through a non-blocking writer. The returned guard
/// flushes the writer on drop and must be held for the life of the program.
pub fn init_tracing(settings: &LoggingSettings) -> Result<Option<WorkerGuard>> {
    let filter = env_filter(settings);
    match &settings.file {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(open_log_file(path)?);
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(writer))
                .try_init();
            Ok(Some(guard))
        }
        None => {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init();
            Ok(None)
        }
    }
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    crate::fs_op::helpers::ensure_parent_exists(path)?;
    Ok(fs::OpenOptions::new().create(true).append(true).open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn log_file_is_created_with_parents() {
        let td = tempdir().unwrap();
        let path = td.path().join("logs/nested/sysprobe.log");
        open_log_file(&path).unwrap();
        assert!(path.is_file());
    }
}
