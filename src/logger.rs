use anyhow::{Context, Result};
use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Shared logger that can be used across the application.
///
/// Log entries are always kept in memory so the `G` overlay can display them;
/// when enabled via config they are additionally appended to a log file under
/// the platform cache directory.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
    enabled: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            file_writer: None,
            enabled: false,
        }
    }

    /// Build a logger according to the `[logging]` config section.
    pub fn from_config(enabled: bool) -> Result<Self> {
        let file_writer = if enabled {
            let path = Self::get_log_file_path()?;
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            Some(Arc::new(Mutex::new(BufWriter::new(file))))
        } else {
            None
        };

        Ok(Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            file_writer,
            enabled,
        })
    }

    /// Where the log file lives: `<cache_dir>/sitepilot/sitepilot.log`
    pub fn get_log_file_path() -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir().context("Could not determine cache directory")?;
        Ok(cache_dir.join("sitepilot").join("sitepilot.log"))
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn has_file_writer(&self) -> bool {
        self.file_writer.is_some()
    }

    pub fn file_writer(&self) -> Option<&Arc<Mutex<BufWriter<File>>>> {
        self.file_writer.as_ref()
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Some(ref writer) = self.file_writer {
            if let Ok(mut writer) = writer.lock() {
                let _ = writeln!(writer, "{}", formatted_message);
            }
        }

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Bridge from the `log` facade into the shared [`Logger`], so that
/// `log::info!` and friends from any module end up in the overlay.
struct LogBridge {
    inner: Logger,
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Debug
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            self.inner.log(format!("{} {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

/// Install the shared logger as the global `log` backend.
///
/// Safe to call more than once; later calls are ignored.
pub fn install(logger: Logger) {
    let bridge = Box::new(LogBridge { inner: logger });
    if log::set_boxed_logger(bridge).is_ok() {
        log::set_max_level(log::LevelFilter::Debug);
    }
}
