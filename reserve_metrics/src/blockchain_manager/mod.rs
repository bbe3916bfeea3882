use alloy::{
    network::Ethereum,
    providers::{Provider, ProviderBuilder},
    rpc::client::RpcClient,
    transports::{http::reqwest::Url, layers::RetryBackoffLayer},
};
use anyhow::Result;

use crate::config::LocalConfig;

/// BlockchainManager builds the provider the reader runs over.
///
/// Transient RPC failures are retried inside the transport by
/// RetryBackoffLayer; the reader itself never retries a call.
pub struct BlockchainManager;

impl BlockchainManager {
    /// Creates an HTTP provider instance for the configured RPC endpoint.
    ///
    /// # Arguments
    /// * `local_config` - Local configuration containing the RPC URL
    ///
    /// # Returns
    /// * `Result<impl Provider<Ethereum>>` - A Result containing either the provider instance or an error
    pub async fn get_provider(local_config: &LocalConfig) -> Result<impl Provider<Ethereum>> {
        let retry_layer = RetryBackoffLayer::new(10, 1000, 10000);

        let client = RpcClient::builder()
            .layer(retry_layer)
            .http(Url::parse(&local_config.rpc_url)?);

        let provider = ProviderBuilder::new().on_client(client);

        Ok(provider)
    }
}
