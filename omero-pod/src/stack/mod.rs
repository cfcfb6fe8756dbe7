//! Specification of the OMERO development stack: one pod, two containers.
//!
//! [`StackSpec::default()`] reproduces the canonical bring-up exactly: pod
//! `omero` publishing 4064:4064, PostgreSQL 10 as `omerodb`, and OMERO
//! server 5.6 as `omeroserver` pointed at the database over the pod-local
//! loopback. The argv builders below are the single source of what is
//! handed to the runtime.

pub mod status;

use crate::constants::stack as consts;
use crate::runtime::Invocation;
use serde::{Deserialize, Serialize};

/// Host-to-container port publication.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortMapping {
    pub host: u16,
    pub container: u16,
}

impl PortMapping {
    fn flag_value(&self) -> String {
        format!("{}:{}", self.host, self.container)
    }
}

/// One `NAME=value` environment variable passed to a container.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}

impl EnvVar {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    fn flag_value(&self) -> String {
        format!("{}={}", self.name, self.value)
    }
}

/// A detached container attached to the pod.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSpec {
    pub name: String,
    pub image: String,
    pub env: Vec<EnvVar>,
}

impl ContainerSpec {
    /// `run -d` argv attaching this container to `pod`.
    pub fn run_invocation(&self, pod: &str) -> Invocation {
        let mut args = vec![
            "run".to_string(),
            "-d".to_string(),
            "--pod".to_string(),
            pod.to_string(),
            "--name".to_string(),
            self.name.clone(),
        ];
        for env in &self.env {
            args.push("-e".to_string());
            args.push(env.flag_value());
        }
        args.push(self.image.clone());
        Invocation { args }
    }
}

/// The shared-network pod with its published ports.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodSpec {
    pub name: String,
    pub ports: Vec<PortMapping>,
}

impl PodSpec {
    /// `pod create` argv for this pod.
    pub fn create_invocation(&self) -> Invocation {
        let mut args = vec![
            "pod".to_string(),
            "create".to_string(),
            "--name".to_string(),
            self.name.clone(),
        ];
        for port in &self.ports {
            args.push("-p".to_string());
            args.push(port.flag_value());
        }
        Invocation { args }
    }

    /// `pod rm --force` argv removing this pod and everything in it.
    pub fn remove_invocation(&self) -> Invocation {
        Invocation::new(["pod", "rm", "--force", self.name.as_str()])
    }

    /// `pod ps` argv listing this pod as JSON.
    pub fn ps_invocation(&self) -> Invocation {
        let filter = format!("name={}", self.name);
        Invocation::new(["pod", "ps", "--filter", filter.as_str(), "--format", "json"])
    }

    /// `ps --all` argv listing this pod's containers as JSON.
    pub fn containers_invocation(&self) -> Invocation {
        let filter = format!("pod={}", self.name);
        Invocation::new(["ps", "--all", "--filter", filter.as_str(), "--format", "json"])
    }
}

/// The full stack: pod plus the two containers, in start order.
///
/// The server's environment must reference the database container's
/// identity in the same pod; nothing enforces this at runtime, the
/// defaults simply keep it true.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackSpec {
    pub pod: PodSpec,
    pub db: ContainerSpec,
    pub server: ContainerSpec,
}

impl Default for StackSpec {
    fn default() -> Self {
        Self {
            pod: PodSpec {
                name: consts::POD_NAME.to_string(),
                ports: vec![PortMapping {
                    host: consts::OMERO_PORT,
                    container: consts::OMERO_PORT,
                }],
            },
            db: ContainerSpec {
                name: consts::DB_CONTAINER.to_string(),
                image: consts::DB_IMAGE.to_string(),
                env: vec![EnvVar::new(consts::DB_PASSWORD_ENV, consts::DB_PASSWORD)],
            },
            server: ContainerSpec {
                name: consts::SERVER_CONTAINER.to_string(),
                image: consts::SERVER_IMAGE.to_string(),
                env: vec![
                    EnvVar::new(consts::SERVER_DB_HOST_ENV, consts::SERVER_DB_HOST),
                    EnvVar::new(consts::SERVER_DB_USER_ENV, consts::SERVER_DB_USER),
                    EnvVar::new(consts::SERVER_DB_NAME_ENV, consts::SERVER_DB_NAME),
                ],
            },
        }
    }
}
