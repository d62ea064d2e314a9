//! Level-filtered logging for the `collection` crates.
//!
//! A single global [`Logger`] holds the minimum level in an atomic, so the
//! macros cost one relaxed load when a message is filtered out. Messages are
//! written to stderr with the module path of the call site.
//!
//! The level is configured in code with [`set_level`] or from the
//! environment with [`init_from_env`], which reads [`ENV_VAR`]:
//!
//! ```text
//! COLLECTION_LOG=debug cargo test
//! ```
//!
//! # Example
//!
//! ```
//! use collection_log::{debug, warn, Level};
//!
//! collection_log::set_level(Level::Debug);
//!
//! let capacity = 32;
//! debug!("grew to {} slots", capacity);
//! warn!("this goes to stderr");
//! ```

use std::fmt::{self, Arguments};
use std::io::Write;
use std::str::FromStr;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Environment variable read by [`init_from_env`].
pub const ENV_VAR: &str = "COLLECTION_LOG";

/// Level used until something configures the logger.
pub const DEFAULT_LEVEL: Level = Level::Warn;

/// Severity of a log message, or `Off` as a filter that lets nothing through.
///
/// Lower numeric values are more severe. A filter level admits every message
/// whose level is less than or equal to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Filter only: disables all output.
    Off = 0,
    /// A failure the caller has to act on.
    Error = 1,
    /// Something unexpected that was recovered from.
    Warn = 2,
    /// Coarse progress information.
    Info = 3,
    /// Storage events such as reallocation.
    Debug = 4,
    /// Per-operation detail.
    Trace = 5,
}

impl Level {
    const fn from_u8(raw: u8) -> Level {
        match raw {
            0 => Level::Off,
            1 => Level::Error,
            2 => Level::Warn,
            3 => Level::Info,
            4 => Level::Debug,
            _ => Level::Trace,
        }
    }

    const fn color_code(self) -> &'static str {
        match self {
            Level::Off => "",
            Level::Error => "\x1b[31m",
            Level::Warn => "\x1b[33m",
            Level::Info => "\x1b[32m",
            Level::Debug => "\x1b[36m",
            Level::Trace => "\x1b[35m",
        }
    }

    /// Upper-case name of the level.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Off => "OFF",
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a [`Level`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError {
    input: String,
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid log level {:?} (expected off, error, warn, info, debug or trace)",
            self.input
        )
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parses a level name, ignoring case and surrounding whitespace.
    ///
    /// ```
    /// use collection_log::Level;
    ///
    /// assert_eq!("debug".parse::<Level>(), Ok(Level::Debug));
    /// assert_eq!(" WARN ".parse::<Level>(), Ok(Level::Warn));
    /// assert!("verbose".parse::<Level>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "none" => Ok(Level::Off),
            "error" => Ok(Level::Error),
            "warn" | "warning" => Ok(Level::Warn),
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            "trace" => Ok(Level::Trace),
            _ => Err(ParseLevelError {
                input: s.to_string(),
            }),
        }
    }
}

/// Process-wide logger state.
pub struct Logger {
    level: AtomicU8,
    color: AtomicBool,
}

impl Logger {
    const fn new(level: Level) -> Self {
        Logger {
            level: AtomicU8::new(level as u8),
            color: AtomicBool::new(true),
        }
    }

    /// Sets the minimum level that is written.
    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::SeqCst);
    }

    /// Returns the current filter level.
    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed))
    }

    /// Returns true if a message at `level` passes the filter.
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level != Level::Off && level as u8 <= self.level.load(Ordering::Relaxed)
    }

    /// Turns ANSI colouring of the level tag on or off.
    pub fn set_color(&self, enabled: bool) {
        self.color.store(enabled, Ordering::Relaxed);
    }

    fn format(&self, level: Level, target: &str, args: Arguments<'_>) -> String {
        if self.color.load(Ordering::Relaxed) {
            format!("{}[{}]\x1b[0m {target}: {args}", level.color_code(), level.as_str())
        } else {
            format!("[{}] {target}: {args}", level.as_str())
        }
    }
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Returns the global logger, creating it at [`DEFAULT_LEVEL`] on first use.
pub fn get_logger() -> &'static Logger {
    LOGGER.get_or_init(|| Logger::new(DEFAULT_LEVEL))
}

/// Sets the global filter level.
pub fn set_level(level: Level) {
    get_logger().set_level(level);
}

/// Parses `s` and sets the global filter level.
///
/// ```
/// collection_log::set_level_from_str("info").unwrap();
/// assert!(collection_log::set_level_from_str("loud").is_err());
/// ```
pub fn set_level_from_str(s: &str) -> Result<(), ParseLevelError> {
    set_level(s.parse::<Level>()?);
    Ok(())
}

/// Returns the global filter level.
pub fn level() -> Level {
    get_logger().level()
}

/// Configures the global logger from the environment.
///
/// Reads the level from [`ENV_VAR`] and disables colour when `NO_COLOR` is
/// set. An unparsable level is reported on stderr and the current level is
/// kept. Returns the level in effect afterwards.
pub fn init_from_env() -> Level {
    let logger = get_logger();
    let value = std::env::var(ENV_VAR).ok();
    let no_color = std::env::var_os("NO_COLOR").is_some();

    match configure(logger, value.as_deref(), no_color) {
        Ok(level) => level,
        Err(err) => {
            eprintln!("{ENV_VAR}: {err}; keeping {}", logger.level());
            logger.level()
        }
    }
}

/// Applies a level setting and the colour switch to `logger`.
///
/// `level` of `None` keeps the current level. An invalid name is returned as
/// an error and the level is left unchanged; the colour switch still applies.
fn configure(logger: &Logger, level: Option<&str>, no_color: bool) -> Result<Level, ParseLevelError> {
    if no_color {
        logger.set_color(false);
    }

    if let Some(value) = level {
        logger.set_level(value.parse::<Level>()?);
    }

    Ok(logger.level())
}

#[doc(hidden)]
pub fn __log_with_target(level: Level, target: &str, args: Arguments<'_>) {
    let logger = get_logger();
    if !logger.enabled(level) {
        return;
    }

    let line = logger.format(level, target, args);
    // Write errors are dropped.
    let _ = writeln!(std::io::stderr().lock(), "{line}");
}

/// Logs at an explicit level.
///
/// ```
/// use collection_log::{log, Level};
///
/// log!(level: Level::Info, "{} items", 3);
/// ```
#[macro_export]
macro_rules! log {
    (level: $level:expr, $($arg:tt)*) => {
        {
            let level = $level;
            if $crate::get_logger().enabled(level) {
                $crate::__log_with_target(level, module_path!(), format_args!($($arg)*));
            }
        }
    };
}

/// Logs at [`Level::Error`].
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Error, $($arg)*)
    };
}

/// Logs at [`Level::Warn`].
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Warn, $($arg)*)
    };
}

/// Logs at [`Level::Info`].
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Info, $($arg)*)
    };
}

/// Logs at [`Level::Debug`].
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Debug, $($arg)*)
    };
}

/// Logs at [`Level::Trace`].
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Trace, $($arg)*)
    };
}
