pub mod models;

use alloy::{
    network::Ethereum,
    primitives::{Address, U256},
    providers::Provider,
};

use crate::{
    error::Result,
    utils::{
        address::normalize_address,
        contracts::{AavePoolContract, AavePoolDataProviderContract},
    },
};

use models::{
    ReserveCaps, ReserveConfigurationData, ReserveData, ReserveToken, ReserveTokensAddresses,
    UserAccountData, UserReserveData,
};

/// Read-only view over one deployment's Pool and PoolDataProvider contracts.
///
/// Each accessor normalizes its input addresses, performs exactly one
/// read-only contract call and repackages the decoded return into the named
/// record from [`models`]. Nothing is cached between calls, no call is
/// retried here and no state changes after construction, so a shared
/// reference can serve any number of concurrent callers if the provider
/// allows it.
pub struct MetricsReader<'a, P: Provider<Ethereum>> {
    pool_contract: AavePoolContract::AavePoolContractInstance<(), &'a P>,
    pool_data_provider_contract:
        AavePoolDataProviderContract::AavePoolDataProviderContractInstance<(), &'a P>,
}

impl<'a, P: Provider<Ethereum>> MetricsReader<'a, P> {
    /// Creates a reader for the deployment identified by the two contract
    /// addresses. The addresses come from the caller's address book; no
    /// global registry is consulted.
    pub fn new(provider: &'a P, pool_address: Address, pool_data_provider_address: Address) -> Self {
        Self {
            pool_contract: AavePoolContract::new(pool_address, provider),
            pool_data_provider_contract: AavePoolDataProviderContract::new(
                pool_data_provider_address,
                provider,
            ),
        }
    }

    /// Returns the list of all reserve tokens (underlying symbol and address).
    /// A market with no reserves yields an empty list.
    pub async fn get_all_reserve_tokens(&self) -> Result<Vec<ReserveToken>> {
        let res = self
            .pool_data_provider_contract
            .getAllReservesTokens()
            .call()
            .await?;
        Ok(res._0.into_iter().map(ReserveToken::from).collect())
    }

    /// Returns the list of all aTokens of the market.
    pub async fn get_all_a_tokens(&self) -> Result<Vec<ReserveToken>> {
        let res = self
            .pool_data_provider_contract
            .getAllATokens()
            .call()
            .await?;
        Ok(res._0.into_iter().map(ReserveToken::from).collect())
    }

    /// Returns the configuration data of the reserve.
    pub async fn get_reserve_configuration_data(
        &self,
        token_address: &str,
    ) -> Result<ReserveConfigurationData> {
        let token_address = normalize_address(token_address)?;
        let res = self
            .pool_data_provider_contract
            .getReserveConfigurationData(token_address)
            .call()
            .await?;
        Ok(res.into())
    }

    /// Returns the borrow and supply caps of the reserve, in whole-token
    /// units.
    pub async fn get_reserve_caps(&self, token_address: &str) -> Result<ReserveCaps> {
        let token_address = normalize_address(token_address)?;
        let res = self
            .pool_data_provider_contract
            .getReserveCaps(token_address)
            .call()
            .await?;
        Ok(res.into())
    }

    /// Returns the aggregate balances, rates and indices of the reserve.
    pub async fn get_reserve_data(&self, token_address: &str) -> Result<ReserveData> {
        let token_address = normalize_address(token_address)?;
        let res = self
            .pool_data_provider_contract
            .getReserveData(token_address)
            .call()
            .await?;
        Ok(res.into())
    }

    /// Returns the EMode category of the reserve.
    pub async fn get_reserve_emode_category(&self, token_address: &str) -> Result<U256> {
        let token_address = normalize_address(token_address)?;
        Ok(self
            .pool_data_provider_contract
            .getReserveEModeCategory(token_address)
            .call()
            .await?
            ._0)
    }

    /// Returns the addresses of the aToken, stable debt token and variable
    /// debt token of the reserve.
    pub async fn get_reserve_tokens_addresses(
        &self,
        token_address: &str,
    ) -> Result<ReserveTokensAddresses> {
        let token_address = normalize_address(token_address)?;
        let res = self
            .pool_data_provider_contract
            .getReserveTokensAddresses(token_address)
            .call()
            .await?;
        Ok(res.into())
    }

    /// Returns whether the asset is restricted to siloed borrowing.
    pub async fn get_siloed_borrowing(&self, token_address: &str) -> Result<bool> {
        let token_address = normalize_address(token_address)?;
        Ok(self
            .pool_data_provider_contract
            .getSiloedBorrowing(token_address)
            .call()
            .await?
            ._0)
    }

    /// Returns the total debt of the reserve.
    pub async fn get_total_debt(&self, token_address: &str) -> Result<U256> {
        let token_address = normalize_address(token_address)?;
        Ok(self
            .pool_data_provider_contract
            .getTotalDebt(token_address)
            .call()
            .await?
            ._0)
    }

    /// Returns the total aToken supply of the reserve.
    pub async fn get_a_token_total_supply(&self, token_address: &str) -> Result<U256> {
        let token_address = normalize_address(token_address)?;
        Ok(self
            .pool_data_provider_contract
            .getATokenTotalSupply(token_address)
            .call()
            .await?
            ._0)
    }

    /// Returns the unbacked mint cap of the reserve.
    pub async fn get_unbacked_mint_cap(&self, token_address: &str) -> Result<U256> {
        let token_address = normalize_address(token_address)?;
        Ok(self
            .pool_data_provider_contract
            .getUnbackedMintCap(token_address)
            .call()
            .await?
            ._0)
    }

    /// Returns the user data of the reserve.
    pub async fn get_user_reserve_data(
        &self,
        token_address: &str,
        user_address: &str,
    ) -> Result<UserReserveData> {
        let token_address = normalize_address(token_address)?;
        let user_address = normalize_address(user_address)?;
        let res = self
            .pool_data_provider_contract
            .getUserReserveData(token_address, user_address)
            .call()
            .await?;
        Ok(res.into())
    }

    /// Returns whether the reserve is paused.
    pub async fn get_paused(&self, token_address: &str) -> Result<bool> {
        let token_address = normalize_address(token_address)?;
        Ok(self
            .pool_data_provider_contract
            .getPaused(token_address)
            .call()
            .await?
            .isPaused)
    }

    /// Returns the liquidation protocol fee of the reserve, in basis points.
    pub async fn get_liquidation_protocol_fee(&self, token_address: &str) -> Result<U256> {
        let token_address = normalize_address(token_address)?;
        Ok(self
            .pool_data_provider_contract
            .getLiquidationProtocolFee(token_address)
            .call()
            .await?
            ._0)
    }

    /// Returns the address of the interest rate strategy of the reserve.
    pub async fn get_interest_rate_strategy_address(&self, token_address: &str) -> Result<Address> {
        let token_address = normalize_address(token_address)?;
        Ok(self
            .pool_data_provider_contract
            .getInterestRateStrategyAddress(token_address)
            .call()
            .await?
            .irStrategyAddress)
    }

    /// Returns whether flash loans are enabled for the reserve.
    pub async fn get_flash_loan_enabled(&self, token_address: &str) -> Result<bool> {
        let token_address = normalize_address(token_address)?;
        Ok(self
            .pool_data_provider_contract
            .getFlashLoanEnabled(token_address)
            .call()
            .await?
            ._0)
    }

    /// Returns the debt ceiling of the reserve in isolation mode.
    pub async fn get_debt_ceiling(&self, token_address: &str) -> Result<U256> {
        let token_address = normalize_address(token_address)?;
        Ok(self
            .pool_data_provider_contract
            .getDebtCeiling(token_address)
            .call()
            .await?
            ._0)
    }

    /// Returns the number of decimals the debt ceiling is expressed with.
    pub async fn get_debt_ceiling_decimals(&self) -> Result<U256> {
        Ok(self
            .pool_data_provider_contract
            .getDebtCeilingDecimals()
            .call()
            .await?
            ._0)
    }

    /// Returns the raw reserve underlying addresses straight from the pool
    /// contract.
    pub async fn get_reserves_list(&self) -> Result<Vec<Address>> {
        Ok(self.pool_contract.getReservesList().call().await?._0)
    }

    /// Returns the user's aggregate account figures from the pool contract.
    pub async fn get_user_account_data(&self, user_address: &str) -> Result<UserAccountData> {
        let user_address = normalize_address(user_address)?;
        let res = self
            .pool_contract
            .getUserAccountData(user_address)
            .call()
            .await?;
        Ok(res.into())
    }
}
