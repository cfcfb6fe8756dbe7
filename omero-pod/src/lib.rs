//! omero-pod - bring up a local OMERO development stack with podman.
//!
//! The library drives the podman CLI to create a shared-network pod and
//! start two pre-built images inside it: PostgreSQL for the database and
//! the OMERO application server. It is a thin, faithful wrapper around
//! three runtime invocations; anything beyond issuing them in order
//! (readiness probing, rollback, volume management) is out of scope.

pub mod bootstrap;
pub mod constants;
pub mod errors;
pub mod runtime;
pub mod stack;

pub use bootstrap::{Bootstrapper, FailureMode, Step, StepOutcome, StepReport, UpReport};
pub use errors::{PodError, PodResult};
pub use runtime::{Invocation, PodmanRuntime, Runtime, RuntimeOutput};
pub use stack::status::{ContainerRow, PodRow, StackStatus};
pub use stack::{ContainerSpec, EnvVar, PodSpec, PortMapping, StackSpec};
