//! Record types returned by the reader, one per contract read.
//!
//! Every record is synthesized fresh from a decoded contract return and holds
//! chain-native values: amounts, rates and indices stay in the protocol's ray
//! or basis-point representation, caps stay in whole-token units. The `From`
//! conversions below are the only place positional ABI output meets named
//! fields.

use alloy::primitives::{Address, U256};
use serde::Serialize;

use crate::utils::contracts::{AavePoolContract, AavePoolDataProviderContract};

/// One reserve underlying as listed by the data provider.
#[derive(Debug, Clone, Serialize)]
pub struct ReserveToken {
    pub symbol: String,
    pub address: Address,
}

impl From<AavePoolDataProviderContract::TokenData> for ReserveToken {
    fn from(token: AavePoolDataProviderContract::TokenData) -> Self {
        Self {
            symbol: token.symbol,
            address: token.tokenAddress,
        }
    }
}

/// Risk parameters and status flags of a reserve. Ratios (ltv, thresholds,
/// bonus, reserve factor) are in basis points.
#[derive(Debug, Clone, Serialize)]
pub struct ReserveConfigurationData {
    pub decimals: U256,
    pub ltv: U256,
    pub liquidation_threshold: U256,
    pub liquidation_bonus: U256,
    pub reserve_factor: U256,
    pub usage_as_collateral_enabled: bool,
    pub borrowing_enabled: bool,
    pub stable_borrow_rate_enabled: bool,
    pub is_active: bool,
    pub is_frozen: bool,
}

impl From<AavePoolDataProviderContract::getReserveConfigurationDataReturn>
    for ReserveConfigurationData
{
    fn from(ret: AavePoolDataProviderContract::getReserveConfigurationDataReturn) -> Self {
        Self {
            decimals: ret.decimals,
            ltv: ret.ltv,
            liquidation_threshold: ret.liquidationThreshold,
            liquidation_bonus: ret.liquidationBonus,
            reserve_factor: ret.reserveFactor,
            usage_as_collateral_enabled: ret.usageAsCollateralEnabled,
            borrowing_enabled: ret.borrowingEnabled,
            stable_borrow_rate_enabled: ret.stableBorrowRateEnabled,
            is_active: ret.isActive,
            is_frozen: ret.isFrozen,
        }
    }
}

/// Borrow and supply caps of a reserve.
///
/// Caps are denominated in whole tokens without caring for decimals: a borrow
/// cap of 338_000_000 means 338M units of the underlying.
#[derive(Debug, Clone, Serialize)]
pub struct ReserveCaps {
    pub borrow_cap: U256,
    pub supply_cap: U256,
}

impl From<AavePoolDataProviderContract::getReserveCapsReturn> for ReserveCaps {
    fn from(ret: AavePoolDataProviderContract::getReserveCapsReturn) -> Self {
        Self {
            borrow_cap: ret.borrowCap,
            supply_cap: ret.supplyCap,
        }
    }
}

/// Aggregate balances, rates and indices of a reserve. Rates and indices are
/// in ray, the timestamp is seconds since epoch.
#[derive(Debug, Clone, Serialize)]
pub struct ReserveData {
    pub unbacked: U256,
    pub accrued_to_treasury_scaled: U256,
    pub total_a_token: U256,
    pub total_stable_debt: U256,
    pub total_variable_debt: U256,
    pub liquidity_rate: U256,
    pub variable_borrow_rate: U256,
    pub stable_borrow_rate: U256,
    pub average_stable_borrow_rate: U256,
    pub liquidity_index: U256,
    pub variable_borrow_index: U256,
    pub last_update_timestamp: u64,
}

impl From<AavePoolDataProviderContract::getReserveDataReturn> for ReserveData {
    fn from(ret: AavePoolDataProviderContract::getReserveDataReturn) -> Self {
        Self {
            unbacked: ret.unbacked,
            accrued_to_treasury_scaled: ret.accruedToTreasuryScaled,
            total_a_token: ret.totalAToken,
            total_stable_debt: ret.totalStableDebt,
            total_variable_debt: ret.totalVariableDebt,
            liquidity_rate: ret.liquidityRate,
            variable_borrow_rate: ret.variableBorrowRate,
            stable_borrow_rate: ret.stableBorrowRate,
            average_stable_borrow_rate: ret.averageStableBorrowRate,
            liquidity_index: ret.liquidityIndex,
            variable_borrow_index: ret.variableBorrowIndex,
            last_update_timestamp: ret.lastUpdateTimestamp.to::<u64>(),
        }
    }
}

/// Addresses of the three tokens minted against a reserve.
#[derive(Debug, Clone, Serialize)]
pub struct ReserveTokensAddresses {
    pub a_token_address: Address,
    pub stable_debt_token_address: Address,
    pub variable_debt_token_address: Address,
}

impl From<AavePoolDataProviderContract::getReserveTokensAddressesReturn>
    for ReserveTokensAddresses
{
    fn from(ret: AavePoolDataProviderContract::getReserveTokensAddressesReturn) -> Self {
        Self {
            a_token_address: ret.aTokenAddress,
            stable_debt_token_address: ret.stableDebtTokenAddress,
            variable_debt_token_address: ret.variableDebtTokenAddress,
        }
    }
}

/// A single user's position in a single reserve.
#[derive(Debug, Clone, Serialize)]
pub struct UserReserveData {
    pub current_a_token_balance: U256,
    pub current_stable_debt: U256,
    pub current_variable_debt: U256,
    pub principal_stable_debt: U256,
    pub scaled_variable_debt: U256,
    pub stable_borrow_rate: U256,
    pub liquidity_rate: U256,
    pub stable_rate_last_updated: u64,
    pub usage_as_collateral_enabled: bool,
}

impl From<AavePoolDataProviderContract::getUserReserveDataReturn> for UserReserveData {
    fn from(ret: AavePoolDataProviderContract::getUserReserveDataReturn) -> Self {
        Self {
            current_a_token_balance: ret.currentATokenBalance,
            current_stable_debt: ret.currentStableDebt,
            current_variable_debt: ret.currentVariableDebt,
            principal_stable_debt: ret.principalStableDebt,
            scaled_variable_debt: ret.scaledVariableDebt,
            stable_borrow_rate: ret.stableBorrowRate,
            liquidity_rate: ret.liquidityRate,
            stable_rate_last_updated: ret.stableRateLastUpdated.to::<u64>(),
            usage_as_collateral_enabled: ret.usageAsCollateralEnabled,
        }
    }
}

/// A user's aggregate account figures from the pool contract, in the market's
/// base currency (8 decimals) except the health factor (wad).
#[derive(Debug, Clone, Serialize)]
pub struct UserAccountData {
    pub total_collateral_base: U256,
    pub total_debt_base: U256,
    pub available_borrows_base: U256,
    pub current_liquidation_threshold: U256,
    pub ltv: U256,
    pub health_factor: U256,
}

impl From<AavePoolContract::getUserAccountDataReturn> for UserAccountData {
    fn from(ret: AavePoolContract::getUserAccountDataReturn) -> Self {
        Self {
            total_collateral_base: ret.totalCollateralBase,
            total_debt_base: ret.totalDebtBase,
            available_borrows_base: ret.availableBorrowsBase,
            current_liquidation_threshold: ret.currentLiquidationThreshold,
            ltv: ret.ltv,
            health_factor: ret.healthFactor,
        }
    }
}
