use clap::Args;
use omero_pod::{FailureMode, Step, StepOutcome};

#[derive(Args, Debug)]
pub struct UpArgs {
    /// Abort on the first failing step instead of attempting the rest
    #[arg(long)]
    pub fail_fast: bool,
}

pub async fn execute(args: UpArgs, global: &crate::cli::GlobalFlags) -> anyhow::Result<()> {
    let mode = if args.fail_fast {
        FailureMode::FailFast
    } else {
        FailureMode::Permissive
    };
    let bootstrapper = global.create_bootstrapper()?.failure_mode(mode);

    let report = bootstrapper.up().await;
    let spec = bootstrapper.spec();

    let mut errors = Vec::new();
    for step in &report.steps {
        let name = match step.step {
            Step::CreatePod => spec.pod.name.as_str(),
            Step::StartDatabase => spec.db.name.as_str(),
            Step::StartServer => spec.server.name.as_str(),
        };

        match &step.outcome {
            StepOutcome::Completed => println!("{}", name),
            StepOutcome::Failed(message) => {
                eprintln!("Error: {} '{}': {}", step.step.label(), name, message);
                errors.push(format!("{}: {}", step.step.label(), message));
            }
            StepOutcome::Skipped => {
                eprintln!("Skipped: {} '{}'", step.step.label(), name);
            }
        }
    }

    if !errors.is_empty() {
        anyhow::bail!(
            "Failed {} of {} step(s)\nErrors:\n  {}",
            errors.len(),
            report.steps.len(),
            errors.join("\n  ")
        );
    }
    Ok(())
}
