//! Container runtime invocation layer.
//!
//! Everything the bootstrapper does goes through the [`Runtime`] trait: an
//! ordered argv in, captured output out. The production implementation
//! shells out to podman; tests substitute a recording fake.

mod podman;

pub use podman::PodmanRuntime;

use crate::errors::PodResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One argv handed to the container runtime binary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.args.join(" "))
    }
}

/// Captured result of one runtime invocation.
#[derive(Clone, Debug)]
pub struct RuntimeOutput {
    /// Exit code, if the process exited normally.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl RuntimeOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Executes invocations against a container runtime.
///
/// Spawn-level failures (binary missing, not executable) are `Err`; a
/// process that ran and exited non-zero is `Ok` with its code and stderr
/// captured, so callers decide how runtime-reported failures are handled.
#[async_trait]
pub trait Runtime: Send + Sync {
    async fn invoke(&self, invocation: &Invocation) -> PodResult<RuntimeOutput>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invocation_display_joins_args() {
        let inv = Invocation::new(["pod", "create", "--name", "omero"]);
        assert_eq!(inv.to_string(), "pod create --name omero");
    }

    #[test]
    fn output_success_requires_zero_exit() {
        let ok = RuntimeOutput {
            code: Some(0),
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(ok.success());

        let failed = RuntimeOutput {
            code: Some(125),
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(!failed.success());

        let signalled = RuntimeOutput {
            code: None,
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(!signalled.success());
    }
}
