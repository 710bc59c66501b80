use botchat::{config::load_config, logging::init_logging, ui::run_ui};
use log::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    let _logger = init_logging(&config.log_level)?;
    info!("Starting botchat in {:?} mode", config.environment);

    run_ui(&config).await?;

    info!("botchat exited");
    Ok(())
}
