//! Top-level CLI definition and shared flags.

use crate::commands::status::StatusArgs;
use crate::commands::up::UpArgs;
use clap::{Args, Parser, Subcommand};
use omero_pod::{Bootstrapper, PodmanRuntime, StackSpec};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "omero-pod",
    version,
    about = "Bootstraps a local OMERO development stack in a podman pod"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug)]
pub struct GlobalFlags {
    /// Path to the container runtime binary (default: podman on PATH)
    #[arg(long, global = true, value_name = "PATH", env = "OMERO_POD_RUNTIME")]
    pub runtime: Option<PathBuf>,
}

impl GlobalFlags {
    pub fn create_bootstrapper(&self) -> anyhow::Result<Bootstrapper<PodmanRuntime>> {
        let runtime = PodmanRuntime::with_binary(self.runtime.clone())?;
        tracing::debug!(runtime = %runtime.binary().display(), "resolved container runtime");
        Ok(Bootstrapper::new(runtime, StackSpec::default()))
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the pod and start the database and server containers
    Up(UpArgs),
    /// Remove the pod and everything in it
    Down,
    /// Show the pod and its containers
    Status(StatusArgs),
}
