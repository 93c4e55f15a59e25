#[tokio::main]
async fn main() -> anyhow::Result<()> {
    nudger::logging::enable_tracing()?;

    let config = nudger::app::Config::from_env()?;
    let app = config.build();
    app.run().await?;

    Ok(())
}
