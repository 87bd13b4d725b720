use crate::config::AppConfig;
use std::{
    env, fs,
    io::Write,
    panic,
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex, OnceLock,
    },
    time::{SystemTime, UNIX_EPOCH},
};

const LOG_MAX_BYTES: u64 = 5 * 1024 * 1024;
const CRASH_LOG_MAX_BYTES: u64 = 256 * 1024;
static LOG_ENABLED: AtomicBool = AtomicBool::new(false);
static LOG_CONTENT_ENABLED: AtomicBool = AtomicBool::new(false);
static LOG_STATE: OnceLock<Mutex<Option<SizedLog>>> = OnceLock::new();

/// Debug log location; truncated once it grows past its cap.
pub fn log_file_path() -> PathBuf {
    env::temp_dir().join("hemikey.log")
}

/// Crash log location (panic location only unless content logging is on).
pub fn crash_log_path() -> PathBuf {
    env::temp_dir().join("hemikey_crash.log")
}

/// Append-only file that starts over once `max_bytes` would be exceeded.
struct SizedLog {
    path: PathBuf,
    file: fs::File,
    max_bytes: u64,
    written: u64,
}

impl SizedLog {
    fn open(path: PathBuf, max_bytes: u64) -> Option<Self> {
        let mut written = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        if written > max_bytes {
            let _ = fs::remove_file(&path);
            written = 0;
        }
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .ok()?;
        Some(Self {
            path,
            file,
            max_bytes,
            written,
        })
    }

    fn append(&mut self, line: &str) {
        if self.written.saturating_add(line.len() as u64) > self.max_bytes {
            match fs::OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&self.path)
            {
                Ok(file) => {
                    self.file = file;
                    self.written = 0;
                }
                Err(_) => return,
            }
        }
        if self.file.write_all(line.as_bytes()).is_ok() {
            self.written = self.written.saturating_add(line.len() as u64);
        }
    }
}

fn log_state() -> &'static Mutex<Option<SizedLog>> {
    LOG_STATE.get_or_init(|| Mutex::new(None))
}

fn unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn set_enabled(enabled: bool, content_enabled: bool) {
    LOG_ENABLED.store(enabled, Ordering::Relaxed);
    LOG_CONTENT_ENABLED.store(enabled && content_enabled, Ordering::Relaxed);
    let mut state = log_state()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *state = if enabled {
        SizedLog::open(log_file_path(), LOG_MAX_BYTES)
    } else {
        None
    };
}

/// Configure logging from CLI flags or environment. `--no-logs` always wins.
pub fn init_logging(config: &AppConfig) {
    set_enabled(config.logs && !config.no_logs, config.log_content);
}

pub fn logging_enabled() -> bool {
    LOG_ENABLED.load(Ordering::Relaxed)
}

/// Write a debug line to the temp log so the full-screen UI stays clean.
pub fn log_debug(msg: &str) {
    if !logging_enabled() {
        return;
    }
    let line = format!("[{}] {msg}\n", unix_seconds());
    let mut state = log_state()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(log) = state.as_mut() {
        log.append(&line);
    }
}

/// Write a line that may include typed text. Requires `--log-content`.
pub fn log_debug_content(msg: &str) {
    if !LOG_CONTENT_ENABLED.load(Ordering::Relaxed) {
        return;
    }
    log_debug(msg);
}

/// Record a panic location in the crash log; the payload is kept only with `--log-content`.
pub fn log_panic(info: &panic::PanicHookInfo<'_>) {
    if !logging_enabled() {
        return;
    }
    let location = info
        .location()
        .map(|loc| format!("{}:{}", loc.file(), loc.line()))
        .unwrap_or_else(|| "unknown".to_string());
    let payload = if LOG_CONTENT_ENABLED.load(Ordering::Relaxed) {
        info.payload()
            .downcast_ref::<&str>()
            .map(|text| (*text).to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string())
    } else {
        "panic payload omitted (log-content disabled)".to_string()
    };
    let line = format!(
        "[{}] panic at {location}: {payload} (v{})\n",
        unix_seconds(),
        env!("CARGO_PKG_VERSION")
    );
    if let Some(mut crash_log) = SizedLog::open(crash_log_path(), CRASH_LOG_MAX_BYTES) {
        crash_log.append(&line);
    }
}

#[cfg(test)]
pub(crate) fn set_logging_for_tests(enabled: bool, content_enabled: bool) {
    set_enabled(enabled, content_enabled);
}
