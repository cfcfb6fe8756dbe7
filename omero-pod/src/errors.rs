//! Error types for the omero-pod crate.

use thiserror::Error;

pub type PodResult<T> = Result<T, PodError>;

#[derive(Debug, Error)]
pub enum PodError {
    /// The container runtime binary could not be located.
    #[error("runtime: {0}")]
    Runtime(String),

    /// A runtime invocation could not be spawned, or ran and reported failure.
    /// The message carries the runtime's own stderr verbatim.
    #[error("command: {0}")]
    Command(String),

    /// The runtime's status output could not be parsed.
    #[error("status: {0}")]
    Status(String),
}
