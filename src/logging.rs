// ~/winelocale/src/logging.rs
//
// Lightweight file logger. Lines are pushed through a channel to a
// writer thread so logging never blocks the launch sequence; the log
// lives next to the settings file as ~/.winelocale.log.

use std::{
    fs::OpenOptions,
    io::Write,
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc::{self, Sender},
        OnceLock,
    },
    thread,
};

use chrono;

static DEBUG: AtomicBool = AtomicBool::new(false);
static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();
static LOG_TX: OnceLock<Sender<String>> = OnceLock::new();

//
// ---------- PUBLIC API ----------
//

pub fn init(debug: bool) {
    if LOG_TX.get().is_some() {
        panic!("logging::init() called more than once");
    }

    DEBUG.store(debug, Ordering::Relaxed);

    let path = log_path().clone();
    let (tx, rx) = mpsc::channel::<String>();
    LOG_TX.set(tx).expect("LOG_TX already set");

    thread::spawn(move || {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .expect("Failed to open log file");

        while let Ok(line) = rx.recv() {
            let _ = writeln!(file, "{line}");
            let _ = file.flush();
        }
    });
}

/// Whether INFO-level lines are recorded. WARN/ERROR always are.
#[inline]
pub fn debug_enabled() -> bool {
    DEBUG.load(Ordering::Relaxed)
}

#[inline]
pub fn emit(level: &str, msg: String) {
    if let Some(tx) = LOG_TX.get() {
        let ts = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let _ = tx.send(format!("{ts} [{level}] {msg}"));
    }
}

//
// ---------- MACROS ----------
//

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {{
        if $crate::logging::debug_enabled() {
            $crate::logging::emit("INFO", format!($($arg)*));
        }
    }};
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{
        $crate::logging::emit("WARN", format!($($arg)*));
    }};
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{
        $crate::logging::emit("ERROR", format!($($arg)*));
    }};
}

//
// ---------- PATH ----------
//

fn log_path() -> &'static PathBuf {
    LOG_PATH.get_or_init(|| {
        crate::paths::user_home_dir()
            .map(|home| home.join(".winelocale.log"))
            .unwrap_or_else(|| PathBuf::from("winelocale.log"))
    })
}
