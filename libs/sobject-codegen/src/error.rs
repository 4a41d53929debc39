//! Error types for sobject-codegen

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Metadata provider error: {0}")]
    Provider(String),

    #[error("Unsupported type {tag} for field {field}")]
    UnsupportedFieldType { field: String, tag: String },

    #[error("Error rendering template {template}: {message}")]
    Render { template: String, message: String },

    #[error("Error writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn render(template: &str, message: impl ToString) -> Self {
        Error::Render {
            template: template.to_string(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
