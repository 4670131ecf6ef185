//! Load and Configuration Errors.
//!
//! Nothing inside the cycle loop can fail: unknown opcodes decode to a no-op,
//! fetching past the program drains the pipeline, and unmapped data memory reads
//! as zero. The fallible edges of the simulator are reading a program image and
//! reading a configuration file, and both report here before simulation begins.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while turning program text into instruction words.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("failed to read program {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line's leading token is not a 32-bit hexadecimal word.
    #[error("line {line}: `{text}` is not a 32-bit hex instruction word")]
    InvalidWord {
        /// One-based line number in the source text.
        line: usize,
        /// The offending token.
        text: String,
    },
}

/// Failure while reading or parsing a simulator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration text is not valid JSON for [`crate::config::Config`].
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
