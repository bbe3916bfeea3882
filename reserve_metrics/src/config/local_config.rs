use std::str::FromStr;

use anyhow::{Context, Result};

/// Runtime configuration for the reader, loaded from environment variables.
///
/// The two contract addresses identify the target deployment. They are kept
/// as strings here and parsed when the contract handles are created, so a bad
/// address-book entry surfaces at startup.
#[derive(Debug, Clone)]
pub struct LocalConfig {
    pub rpc_url: String,
    pub pool_address: String,
    pub pool_data_provider: String,
}

impl LocalConfig {
    pub fn load_from_env() -> Result<Self> {
        Ok(Self {
            rpc_url: load_env_var("RPC_URL")?,
            pool_address: load_env_var("POOL_ADDRESS")?,
            pool_data_provider: load_env_var("POOL_DATA_PROVIDER")?,
        })
    }
}

/// Read an environment variable and parse it into the requested type.
fn load_env_var<T: FromStr>(var_name: &str) -> Result<T> {
    let var = std::env::var(var_name).context(format!("{} is not set", var_name))?;
    var.parse::<T>()
        .map_err(|_| anyhow::anyhow!("{} is not a valid {}", var_name, var))
}
