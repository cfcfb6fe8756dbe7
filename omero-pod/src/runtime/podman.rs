//! Podman CLI invocation with captured stdio.

use super::{Invocation, Runtime, RuntimeOutput};
use crate::constants::{envs, runtime as const_runtime};
use crate::errors::{PodError, PodResult};
use async_trait::async_trait;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Invokes the podman binary, one subprocess per invocation.
#[derive(Clone, Debug)]
pub struct PodmanRuntime {
    binary: PathBuf,
}

impl PodmanRuntime {
    /// Locate the runtime binary and build a runtime around it.
    ///
    /// Resolution order: `OMERO_POD_RUNTIME`, then `podman` on `PATH`.
    pub fn new() -> PodResult<Self> {
        Self::with_binary(None)
    }

    /// Like [`PodmanRuntime::new`], but an explicit path wins over discovery.
    ///
    /// The explicit path is taken as-is; a bad path surfaces when the first
    /// invocation fails to spawn.
    pub fn with_binary(binary: Option<PathBuf>) -> PodResult<Self> {
        let binary = match binary {
            Some(path) => path,
            None => Self::discover()?,
        };
        Ok(Self { binary })
    }

    /// Path of the resolved runtime binary.
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    fn discover() -> PodResult<PathBuf> {
        if let Ok(value) = std::env::var(envs::OMERO_POD_RUNTIME) {
            if !value.is_empty() {
                return Ok(PathBuf::from(value));
            }
        }

        let path = std::env::var_os("PATH").unwrap_or_default();
        search_path(&path, const_runtime::DEFAULT_BINARY).ok_or_else(|| {
            PodError::Runtime(format!(
                "{} not found on PATH; install podman or set {}",
                const_runtime::DEFAULT_BINARY,
                envs::OMERO_POD_RUNTIME
            ))
        })
    }
}

/// Find `name` in a PATH-style list of directories.
fn search_path(path: &OsStr, name: &str) -> Option<PathBuf> {
    std::env::split_paths(path)
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[async_trait]
impl Runtime for PodmanRuntime {
    async fn invoke(&self, invocation: &Invocation) -> PodResult<RuntimeOutput> {
        tracing::debug!(
            runtime = %self.binary.display(),
            args = %invocation,
            "invoking container runtime"
        );

        let output = Command::new(&self.binary)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                PodError::Command(format!(
                    "failed to spawn {}: {}",
                    self.binary.display(),
                    e
                ))
            })?;

        let result = RuntimeOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        if !result.success() {
            tracing::debug!(args = %invocation, code = ?result.code, "runtime reported failure");
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[cfg(unix)]
    fn make_executable(dir: &Path, name: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn explicit_binary_is_kept_verbatim() {
        let runtime = PodmanRuntime::with_binary(Some(PathBuf::from("/opt/podman"))).unwrap();
        assert_eq!(runtime.binary(), Path::new("/opt/podman"));
    }

    #[cfg(unix)]
    #[test]
    fn search_path_finds_executable() {
        let dir = tempfile::tempdir().unwrap();
        let expected = make_executable(dir.path(), "podman");

        let path = std::env::join_paths([dir.path()]).unwrap();
        assert_eq!(search_path(&path, "podman"), Some(expected));
    }

    #[cfg(unix)]
    #[test]
    fn search_path_skips_non_executable_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("podman"), "not a binary").unwrap();

        let path = std::env::join_paths([dir.path()]).unwrap();
        assert_eq!(search_path(&path, "podman"), None);
    }

    #[cfg(unix)]
    #[test]
    fn search_path_checks_entries_in_order() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        let expected = make_executable(first.path(), "podman");
        make_executable(second.path(), "podman");

        let path = std::env::join_paths([first.path(), second.path()]).unwrap();
        assert_eq!(search_path(&path, "podman"), Some(expected));
    }

    #[tokio::test]
    async fn invoke_surfaces_spawn_failure() {
        let runtime =
            PodmanRuntime::with_binary(Some(PathBuf::from("/nonexistent/podman"))).unwrap();
        let err = runtime
            .invoke(&Invocation::new(["pod", "create"]))
            .await
            .unwrap_err();
        assert!(matches!(err, PodError::Command(_)));
        assert!(err.to_string().contains("/nonexistent/podman"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn invoke_captures_exit_code_and_stderr() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fake-runtime");
        fs::write(&script, "#!/bin/sh\necho boom >&2\nexit 125\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let runtime = PodmanRuntime::with_binary(Some(script)).unwrap();
        let output = runtime
            .invoke(&Invocation::new(["pod", "create"]))
            .await
            .unwrap();
        assert_eq!(output.code, Some(125));
        assert!(!output.success());
        assert_eq!(output.stderr.trim(), "boom");
    }
}
