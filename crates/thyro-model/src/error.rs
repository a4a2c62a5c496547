use std::path::PathBuf;

use thiserror::Error;

use crate::analyte::Analyte;

#[derive(Debug, Error)]
pub enum ThyroError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML range file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid reference range for {analyte}: low={low}, high={high}")]
    InvalidRange { analyte: Analyte, low: f64, high: f64 },

    #[error("invalid TSH cutoff: {message}")]
    InvalidCutoff { message: String },
}

impl ThyroError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ThyroError>;
