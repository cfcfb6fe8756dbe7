//! The pod bootstrapper: three ordered runtime invocations, no more.
//!
//! Bring-up mirrors the original sequence exactly: create the pod, start
//! the database, start the server. There is no readiness wait between the
//! last two steps; the server image is expected to retry its own database
//! connection.

use crate::errors::{PodError, PodResult};
use crate::runtime::{Invocation, Runtime, RuntimeOutput};
use crate::stack::StackSpec;
use crate::stack::status::{StackStatus, parse_container_rows, parse_pod_rows};

/// How `up` reacts to a failing step.
///
/// The original bring-up ran under default shell semantics: a failed
/// command did not stop the ones after it. `Permissive` keeps that
/// behavior; `FailFast` aborts at the first failure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailureMode {
    #[default]
    Permissive,
    FailFast,
}

/// The three bring-up steps, in issue order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    CreatePod,
    StartDatabase,
    StartServer,
}

impl Step {
    pub fn label(&self) -> &'static str {
        match self {
            Step::CreatePod => "create pod",
            Step::StartDatabase => "start database",
            Step::StartServer => "start server",
        }
    }
}

/// Result of one bring-up step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Invocation ran and the runtime reported success.
    Completed,
    /// Invocation failed; the message carries the runtime's own error.
    Failed(String),
    /// Not attempted, an earlier step failed under [`FailureMode::FailFast`].
    Skipped,
}

/// One step of the bring-up, with the argv that was (or would have been)
/// issued.
#[derive(Clone, Debug)]
pub struct StepReport {
    pub step: Step,
    pub invocation: Invocation,
    pub outcome: StepOutcome,
}

/// Full bring-up report, one entry per step in issue order.
#[derive(Clone, Debug)]
pub struct UpReport {
    pub steps: Vec<StepReport>,
}

impl UpReport {
    /// True if every step completed.
    pub fn success(&self) -> bool {
        self.steps
            .iter()
            .all(|s| s.outcome == StepOutcome::Completed)
    }

    /// Steps that failed, with their messages.
    pub fn failures(&self) -> impl Iterator<Item = (&StepReport, &str)> {
        self.steps.iter().filter_map(|s| match &s.outcome {
            StepOutcome::Failed(message) => Some((s, message.as_str())),
            _ => None,
        })
    }
}

/// Issues the stack's invocations against a [`Runtime`], strictly in order.
pub struct Bootstrapper<R> {
    runtime: R,
    spec: StackSpec,
    failure_mode: FailureMode,
}

impl<R: Runtime> Bootstrapper<R> {
    pub fn new(runtime: R, spec: StackSpec) -> Self {
        Self {
            runtime,
            spec,
            failure_mode: FailureMode::default(),
        }
    }

    /// Set how a failing step affects the ones after it.
    pub fn failure_mode(mut self, mode: FailureMode) -> Self {
        self.failure_mode = mode;
        self
    }

    pub fn spec(&self) -> &StackSpec {
        &self.spec
    }

    /// Bring the stack up: create the pod, start the database, start the
    /// server.
    ///
    /// Under the default permissive mode every step is attempted even after
    /// a failure; under fail-fast the remaining steps are reported as
    /// skipped. Either way the report lists all three steps in issue order.
    pub async fn up(&self) -> UpReport {
        let planned = [
            (Step::CreatePod, self.spec.pod.create_invocation()),
            (
                Step::StartDatabase,
                self.spec.db.run_invocation(&self.spec.pod.name),
            ),
            (
                Step::StartServer,
                self.spec.server.run_invocation(&self.spec.pod.name),
            ),
        ];

        let mut steps = Vec::with_capacity(planned.len());
        let mut abort = false;
        for (step, invocation) in planned {
            if abort {
                steps.push(StepReport {
                    step,
                    invocation,
                    outcome: StepOutcome::Skipped,
                });
                continue;
            }

            let outcome = match self.runtime.invoke(&invocation).await {
                Ok(output) if output.success() => {
                    tracing::info!(step = step.label(), "step completed");
                    StepOutcome::Completed
                }
                Ok(output) => {
                    let message = failure_message(&invocation, &output);
                    tracing::warn!(step = step.label(), %message, "step failed");
                    StepOutcome::Failed(message)
                }
                Err(e) => {
                    tracing::warn!(step = step.label(), error = %e, "step failed");
                    StepOutcome::Failed(e.to_string())
                }
            };

            if matches!(outcome, StepOutcome::Failed(_))
                && self.failure_mode == FailureMode::FailFast
            {
                abort = true;
            }
            steps.push(StepReport {
                step,
                invocation,
                outcome,
            });
        }

        UpReport { steps }
    }

    /// Tear the stack down by removing the pod and everything in it.
    pub async fn down(&self) -> PodResult<()> {
        let invocation = self.spec.pod.remove_invocation();
        let output = self.runtime.invoke(&invocation).await?;
        if output.success() {
            tracing::info!(pod = %self.spec.pod.name, "pod removed");
            Ok(())
        } else {
            Err(PodError::Command(failure_message(&invocation, &output)))
        }
    }

    /// Ask the runtime for the pod and its containers.
    pub async fn status(&self) -> PodResult<StackStatus> {
        let pod_out = self.checked(&self.spec.pod.ps_invocation()).await?;
        let pod = parse_pod_rows(&pod_out.stdout)?
            .into_iter()
            .find(|p| p.name == self.spec.pod.name);

        let ps_out = self.checked(&self.spec.pod.containers_invocation()).await?;
        let containers = parse_container_rows(&ps_out.stdout)?;

        Ok(StackStatus { pod, containers })
    }

    async fn checked(&self, invocation: &Invocation) -> PodResult<RuntimeOutput> {
        let output = self.runtime.invoke(invocation).await?;
        if output.success() {
            Ok(output)
        } else {
            Err(PodError::Command(failure_message(invocation, &output)))
        }
    }
}

fn failure_message(invocation: &Invocation, output: &RuntimeOutput) -> String {
    let detail = output.stderr.trim();
    match output.code {
        Some(code) if !detail.is_empty() => {
            format!("`{invocation}` exited with status {code}: {detail}")
        }
        Some(code) => format!("`{invocation}` exited with status {code}"),
        None => format!("`{invocation}` terminated by signal"),
    }
}
