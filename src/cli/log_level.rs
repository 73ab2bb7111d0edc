use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    None,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Verbosity as understood by stderrlog (0 = errors only).
    /// Returns None if logging should be switched off
    pub fn verbosity(&self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Error => Some(0),
            Self::Warn => Some(1),
            Self::Info => Some(2),
            Self::Debug => Some(3),
            Self::Trace => Some(4),
        }
    }
}
