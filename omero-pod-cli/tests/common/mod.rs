#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

/// Stub container runtime: records each argv, models pod-name collisions
/// through a state file, and answers status listings with podman-shaped
/// JSON.
const FAKE_RUNTIME: &str = r#"#!/bin/sh
log="${OMERO_POD_FAKE_LOG:?}"
state="${log%.log}.pods"
printf '%s\n' "$*" >> "$log"
case "$*" in
  "pod create"*)
    if [ -f "$state" ]; then
      echo 'Error: adding pod to state: name "omero" is in use: pod already exists' >&2
      exit 125
    fi
    : > "$state"
    echo omero
    ;;
  "pod rm"*)
    if [ -f "$state" ]; then
      rm -f "$state"
      echo omero
    else
      echo 'Error: no pod with name or ID omero found: no such pod' >&2
      exit 1
    fi
    ;;
  "pod ps"*)
    if [ -f "$state" ]; then
      echo '[{"Id":"1f9c","Name":"omero","Status":"Running"}]'
    else
      echo '[]'
    fi
    ;;
  "ps --all"*)
    if [ -f "$state" ]; then
      echo '[{"Names":["omerodb"],"Image":"postgres:10","State":"running","Status":"Up 2 minutes"},{"Names":["omeroserver"],"Image":"openmicroscopy/omero-server:5.6","State":"running","Status":"Up 1 minute"}]'
    else
      echo '[]'
    fi
    ;;
  "run -d"*)
    echo 0123456789abcdef
    ;;
esac
exit 0
"#;

pub struct TestContext {
    pub dir: TempDir,
    pub runtime: PathBuf,
    pub log: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let runtime = dir.path().join("fake-podman");
        let log = dir.path().join("invocations.log");

        fs::write(&runtime, FAKE_RUNTIME).expect("write fake runtime");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&runtime, fs::Permissions::from_mode(0o755))
                .expect("chmod fake runtime");
        }

        Self { dir, runtime, log }
    }

    /// New `omero-pod` command wired to the stub runtime.
    pub fn new_cmd(&self) -> Command {
        let bin_path = env!("CARGO_BIN_EXE_omero-pod");
        let mut cmd = Command::new(bin_path);
        cmd.timeout(Duration::from_secs(30));
        cmd.arg("--runtime").arg(&self.runtime);
        cmd.env("OMERO_POD_FAKE_LOG", &self.log);
        cmd
    }

    /// Argv lines the stub runtime has recorded so far, in issue order.
    pub fn invocations(&self) -> Vec<String> {
        match fs::read_to_string(&self.log) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }
}
