use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use once_cell::sync::Lazy;
use log::{
    LevelFilter,
    Metadata,
    Record
};

use crate::{
    Error,
    core::Result,
};

static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));
static CONSOLE: AtomicBool = AtomicBool::new(true);

static MY_LOGGER: MyLogger = MyLogger;
struct MyLogger;
impl log::Log for MyLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!(
            "[{}] [{}] {}",
            record.target(),
            record.level(),
            record.args()
        );

        if CONSOLE.load(Ordering::Relaxed) {
            eprintln!("{}", line);
        }

        if let Ok(mut guard) = LOG_FILE.lock() {
            if let Some(file) = guard.as_mut() {
                _ = writeln!(file, "{}", line);
            }
        }
    }

    fn flush(&self) {
        _ = io::stderr().flush();
        if let Ok(mut guard) = LOG_FILE.lock() {
            if let Some(file) = guard.as_mut() {
                _ = file.flush();
            }
        }
    }
}

/// Installs the console logger, optionally mirrored into `file`.
///
/// The `log` facade accepts only one logger per process. It is installed on
/// the first call; later calls only adjust the level and the file.
pub fn setup(level: LevelFilter, file: Option<&str>) -> Result<()> {
    let output = match file {
        Some(path) => Some(OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| Error::Io(format!("Opening log file {} error: {e}", path)))?
        ),
        None => None,
    };

    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = output;
    }

    CONSOLE.store(true, Ordering::Relaxed);
    _ = log::set_logger(&MY_LOGGER);
    log::set_max_level(level);
    Ok(())
}

/// Keeps the file output but stops echoing records to the console.
pub fn revert_console_output() {
    CONSOLE.store(false, Ordering::Relaxed);
}

/// Silences all output and closes the log file.
pub fn teardown() {
    log::set_max_level(LevelFilter::Off);
    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = None;
    }
}
