use clap::{Args, ValueEnum};
use comfy_table::Table;
use omero_pod::StackStatus;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

pub async fn execute(args: StatusArgs, global: &crate::cli::GlobalFlags) -> anyhow::Result<()> {
    let bootstrapper = global.create_bootstrapper()?;
    let status = bootstrapper.status().await?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&status)?),
        OutputFormat::Table => print_table(&bootstrapper.spec().pod.name, &status),
    }
    Ok(())
}

fn print_table(pod_name: &str, status: &StackStatus) {
    match &status.pod {
        Some(pod) => println!("pod {} ({})", pod.name, pod.status),
        None => println!("pod {} not found", pod_name),
    }

    if status.containers.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.set_header(["NAME", "IMAGE", "STATE", "STATUS"]);
    for container in &status.containers {
        table.add_row([
            container.name(),
            container.image.as_str(),
            container.state.as_str(),
            container.status.as_str(),
        ]);
    }
    println!("{table}");
}
