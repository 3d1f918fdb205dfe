//! Plugin errors.

use std::{fmt, io};

use thiserror::Error;

/// A failure which ends the invocation without a response.
///
/// Without a decoded request there is nothing to answer, and without an
/// encoded response there is nothing to write, so these are reported on stderr
/// with a non-zero exit status.
#[derive(Error, Debug)]
pub enum PluginError {
    #[error("failed to read or write the plugin stream: {0}")]
    Io(#[from] io::Error),

    #[error("invalid CodeGeneratorRequest: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("failed to encode CodeGeneratorResponse: {0}")]
    Encode(#[from] prost::EncodeError),
}

/// A failure while building an artifact.
///
/// These are reported back to the compiler through
/// `CodeGeneratorResponse.error` rather than by crashing the plugin.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("failed to render {file}: {source}")]
    Dump {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {file}: {source}")]
    Write {
        file: &'static str,
        #[source]
        source: fmt::Error,
    },
}

