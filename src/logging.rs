//! Setup of the global logger, for binaries and tests.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use log::{Level, LevelFilter};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("could not open log file")]
    Io(#[from] io::Error),
    #[error("a global logger was already set")]
    AlreadySet(#[from] log::SetLoggerError),
}

/// Builder-style setup for logging
#[derive(Debug, Clone)]
pub struct GlobalLogger {
    path: Option<PathBuf>,
    verbosity: Verbosity,
    color: bool,
}

impl Default for GlobalLogger {
    fn default() -> Self
    { GlobalLogger { path: None, verbosity: Verbosity::Default, color: true } }
}

impl GlobalLogger {
    /// Also write the log to a file.
    ///
    /// NOTE: Relative paths will not be resolved until apply() is called.
    pub fn path<P: AsRef<Path>>(&mut self, path: P) -> &mut Self
    { self.path = Some(path.as_ref().to_owned()); self }

    /// Any integer will be accepted; the level will be truncated
    /// to the most extreme value supported.
    pub fn verbosity(&mut self, level: i32) -> &mut Self
    {
        self.verbosity = match level > 0 {
            true => Verbosity::Loud,
            false => Verbosity::Default,
        };
        self
    }

    /// Turn off ANSI colors on the level tag (e.g. when output is not a terminal).
    pub fn color(&mut self, color: bool) -> &mut Self
    { self.color = color; self }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Verbosity { Default, Loud }

impl GlobalLogger {
    /// Messages from the MBTR crates go to stdout (and the file, if any); the cache
    /// bookkeeping in `rsp2_mbtr_core` is at `trace` level and only shown when loud.
    ///
    /// Can only succeed once per process.
    pub fn apply(&mut self) -> Result<(), LoggerError>
    {
        let start = Instant::now();
        let color = self.color;
        let mut fern = fern::Dispatch::new();
        fern = fern.format(move |out, message, record| {
                let t = start.elapsed();
                out.finish(format_args!("[{:>4}.{:03}s][{}][{}] {}",
                    t.as_secs(),
                    t.subsec_millis(),
                    record.target(),
                    ColorizedLevel { level: record.level(), color },
                    message))
            })
            .level(LevelFilter::Info)
            .level_for("rsp2_mbtr", LevelFilter::Debug)
            .level_for("rsp2_mbtr_core", match self.verbosity {
                Verbosity::Default => LevelFilter::Debug,
                Verbosity::Loud => LevelFilter::Trace,
            })
            .chain(io::stdout());

        if let Some(path) = self.path.as_ref() {
            fern = fern.chain(fern::log_file(path)?);
        }

        fern.apply()?;
        Ok(())
    }
}

#[derive(Debug, Copy, Clone)]
pub struct ColorizedLevel {
    pub level: Level,
    pub color: bool,
}

impl fmt::Display for ColorizedLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.color {
            return write!(f, "{}", self.level);
        }
        let style = match self.level {
            Level::Error => ansi_term::Colour::Red.bold(),
            Level::Warn  => ansi_term::Colour::Red.normal(),
            Level::Info  => ansi_term::Colour::Cyan.bold(),
            Level::Debug => ansi_term::Colour::Yellow.dimmed(),
            Level::Trace => ansi_term::Colour::Cyan.normal(),
        };
        write!(f, "{}", style.paint(self.level.to_string()))
    }
}
