pub async fn execute(global: &crate::cli::GlobalFlags) -> anyhow::Result<()> {
    let bootstrapper = global.create_bootstrapper()?;
    let pod = bootstrapper.spec().pod.name.clone();

    if let Err(e) = bootstrapper.down().await {
        eprintln!("Error removing pod '{}': {}", pod, e);
        anyhow::bail!("Pod could not be removed");
    }
    println!("{}", pod);
    Ok(())
}
