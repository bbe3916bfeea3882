use anyhow::{Context, Result};
use reserve_metrics::{
    blockchain_manager::BlockchainManager, config::LocalConfig, metrics_reader::MetricsReader,
    utils,
};
use tracing::info;

/// Demonstration entry point for the Reserve Metrics Reader
///
/// Wires the reader against the deployment configured in the environment and
/// prints a handful of reads for the first listed reserve. The library
/// surface is `MetricsReader`; everything below is illustrative plumbing.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    init_pre_run()?;

    info!("Starting the reserve metrics reader");

    let local_config = LocalConfig::load_from_env()?;

    let provider = BlockchainManager::get_provider(&local_config).await?;

    let reader = MetricsReader::new(
        &provider,
        local_config
            .pool_address
            .parse()
            .context("POOL_ADDRESS is not a valid address")?,
        local_config
            .pool_data_provider
            .parse()
            .context("POOL_DATA_PROVIDER is not a valid address")?,
    );

    let reserves = reader.get_all_reserve_tokens().await?;
    info!("Market lists {} reserves", reserves.len());
    println!("{}", serde_json::to_string_pretty(&reserves)?);

    if let Some(reserve) = reserves.first() {
        let asset = reserve.address.to_checksum(None);
        info!("Reading metrics for {} ({})", reserve.symbol, asset);

        let configuration = reader.get_reserve_configuration_data(&asset).await?;
        println!("{}", serde_json::to_string_pretty(&configuration)?);

        let caps = reader.get_reserve_caps(&asset).await?;
        println!("{}", serde_json::to_string_pretty(&caps)?);

        let data = reader.get_reserve_data(&asset).await?;
        println!("{}", serde_json::to_string_pretty(&data)?);
    }

    Ok(())
}

/// Initializes the pre-run environment: `.env` variables and the logger.
fn init_pre_run() -> Result<()> {
    dotenvy::dotenv().context("Failed to load environment variables")?;
    utils::logger::setup_logger().context("Failed to setup logger")?;

    Ok(())
}
