use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Settings may also come from a `.env` file; it is fine if there is none.
    dotenvy::dotenv().ok();
    let args = deployer::arguments::Arguments::parse();
    observe::tracing::initialize(&args.logging.to_config());
    tracing::info!("running deployer with validated arguments:\n{}", args);
    deployer::run(args).await?;
    Ok(())
}
