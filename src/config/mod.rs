//! Configuration Module - Typed Environment Record
//!
//! Loads and validates the app's configuration from environment
//! variables at startup. All contract addresses and chain parameters
//! are externalized here - nothing is hardcoded in consumers. The
//! record is constructed once, before any dependent subsystem
//! initializes, and is immutable for the process lifetime.

pub mod error;
pub mod loader;

pub use error::EnvError;

use serde::Serialize;
use url::Url;

use crate::domain::{Address, TokenSymbol};

/// Top-level validated environment record.
///
/// Either every field is present and well-formed, or construction
/// fails with an [`EnvError`]; there is no partially-valid state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppEnv {
  /// Build identity (version + commit).
  pub app: AppInfo,
  /// Chain identity, endpoints and chain-level contracts.
  pub chain: ChainEnv,
  /// Protocol contract addresses.
  pub contracts: ContractAddresses,
  /// WalletConnect project identifier.
  pub wallet_connect_project_id: String,
}

/// Build identity stamped into the deploy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppInfo {
  /// Application version (opaque, from APP_VERSION).
  pub version: String,
  /// Commit identifier of the deployed build (opaque, from COMMIT_HASH).
  pub commit_hash: String,
}

/// Chain identity and endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainEnv {
  /// Numeric chain id (e.g. 1 for mainnet).
  pub id: u64,
  /// Human-readable chain name.
  pub name: String,
  /// Native currency descriptor.
  pub currency: NativeCurrency,
  /// JSON-RPC endpoint.
  pub rpc_url: Url,
  /// Block explorer, if the chain has one.
  pub block_explorer: Option<Link>,
  /// ENS registry contract, if deployed on this chain.
  pub ens_registry: Option<ContractRef>,
  /// ENS universal resolver contract, if deployed on this chain.
  pub ens_resolver: Option<ContractRef>,
  /// Multicall contract, if deployed on this chain.
  pub multicall: Option<ContractRef>,
}

/// Native currency descriptor (symbol, display name, decimals).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NativeCurrency {
  /// Display name, e.g. "Ether".
  pub name: String,
  /// Ticker; must be one of the recognized [`TokenSymbol`]s.
  pub symbol: TokenSymbol,
  /// Decimal precision of the base unit (18 for ETH).
  pub decimals: u8,
}

/// Labelled external link (block explorer).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
  /// Display label, e.g. "Etherscan".
  pub name: String,
  /// Absolute URL.
  pub url: Url,
}

/// A deployed contract address plus the block it was created at.
///
/// The block number lets consumers bound event queries instead of
/// scanning from genesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContractRef {
  /// Contract address.
  pub address: Address,
  /// Block at which the contract was deployed.
  pub block_created: u64,
}

/// Protocol contract addresses loaded from the environment.
///
/// Every field is required and independently validated. Addresses are
/// ALWAYS in the environment - never hardcoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractAddresses {
  /// Active pool (holds collateral backing open troves).
  pub active_pool: Address,
  /// BOLD stablecoin token.
  pub bold_token: Address,
  /// Borrower operations entry point.
  pub borrower_operations: Address,
  /// Collateral surplus pool (claimable after liquidation).
  pub coll_surplus_pool: Address,
  /// Collateral token.
  pub coll_token: Address,
  /// Default pool (collateral from redistributed troves).
  pub default_pool: Address,
  /// Function caller helper.
  pub function_caller: Address,
  /// Gas compensation pool.
  pub gas_pool: Address,
  /// Hint helpers for sorted-list insert positions.
  pub hint_helpers: Address,
  /// Interest router.
  pub interest_router: Address,
  /// Price feed oracle.
  pub price_feed: Address,
  /// Sorted troves list.
  pub sorted_troves: Address,
  /// Stability pool.
  pub stability_pool: Address,
  /// Trove manager.
  pub trove_manager: Address,
}

/// Named roles for the protocol contracts.
///
/// Each role maps to exactly one environment variable and one field
/// of [`ContractAddresses`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ContractRole {
  ActivePool,
  BoldToken,
  BorrowerOperations,
  CollSurplusPool,
  CollToken,
  DefaultPool,
  FunctionCaller,
  GasPool,
  HintHelpers,
  InterestRouter,
  PriceFeed,
  SortedTroves,
  StabilityPool,
  TroveManager,
}

impl ContractRole {
  /// All roles, in environment variable order.
  pub const ALL: [Self; 14] = [
    Self::ActivePool,
    Self::BoldToken,
    Self::BorrowerOperations,
    Self::CollSurplusPool,
    Self::CollToken,
    Self::DefaultPool,
    Self::FunctionCaller,
    Self::GasPool,
    Self::HintHelpers,
    Self::InterestRouter,
    Self::PriceFeed,
    Self::SortedTroves,
    Self::StabilityPool,
    Self::TroveManager,
  ];

  /// The environment variable that carries this role's address.
  pub fn env_var(self) -> &'static str {
    match self {
      Self::ActivePool => "CONTRACT_ACTIVE_POOL",
      Self::BoldToken => "CONTRACT_BOLD_TOKEN",
      Self::BorrowerOperations => "CONTRACT_BORROWER_OPERATIONS",
      Self::CollSurplusPool => "CONTRACT_COLL_SURPLUS_POOL",
      Self::CollToken => "CONTRACT_COLL_TOKEN",
      Self::DefaultPool => "CONTRACT_DEFAULT_POOL",
      Self::FunctionCaller => "CONTRACT_FUNCTION_CALLER",
      Self::GasPool => "CONTRACT_GAS_POOL",
      Self::HintHelpers => "CONTRACT_HINT_HELPERS",
      Self::InterestRouter => "CONTRACT_INTEREST_ROUTER",
      Self::PriceFeed => "CONTRACT_PRICE_FEED",
      Self::SortedTroves => "CONTRACT_SORTED_TROVES",
      Self::StabilityPool => "CONTRACT_STABILITY_POOL",
      Self::TroveManager => "CONTRACT_TROVE_MANAGER",
    }
  }
}

impl std::fmt::Display for ContractRole {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let label = match self {
      Self::ActivePool => "active_pool",
      Self::BoldToken => "bold_token",
      Self::BorrowerOperations => "borrower_operations",
      Self::CollSurplusPool => "coll_surplus_pool",
      Self::CollToken => "coll_token",
      Self::DefaultPool => "default_pool",
      Self::FunctionCaller => "function_caller",
      Self::GasPool => "gas_pool",
      Self::HintHelpers => "hint_helpers",
      Self::InterestRouter => "interest_router",
      Self::PriceFeed => "price_feed",
      Self::SortedTroves => "sorted_troves",
      Self::StabilityPool => "stability_pool",
      Self::TroveManager => "trove_manager",
    };
    write!(f, "{label}")
  }
}

impl ContractAddresses {
  /// Look up the address for a named role.
  pub fn address(&self, role: ContractRole) -> Address {
    match role {
      ContractRole::ActivePool => self.active_pool,
      ContractRole::BoldToken => self.bold_token,
      ContractRole::BorrowerOperations => self.borrower_operations,
      ContractRole::CollSurplusPool => self.coll_surplus_pool,
      ContractRole::CollToken => self.coll_token,
      ContractRole::DefaultPool => self.default_pool,
      ContractRole::FunctionCaller => self.function_caller,
      ContractRole::GasPool => self.gas_pool,
      ContractRole::HintHelpers => self.hint_helpers,
      ContractRole::InterestRouter => self.interest_router,
      ContractRole::PriceFeed => self.price_feed,
      ContractRole::SortedTroves => self.sorted_troves,
      ContractRole::StabilityPool => self.stability_pool,
      ContractRole::TroveManager => self.trove_manager,
    }
  }

  /// Iterate over every (role, address) pair.
  pub fn iter(&self) -> impl Iterator<Item = (ContractRole, Address)> + '_ {
    ContractRole::ALL
      .into_iter()
      .map(move |role| (role, self.address(role)))
  }
}

impl AppEnv {
  /// Application version (opaque).
  pub fn version(&self) -> &str {
    &self.app.version
  }

  /// Commit identifier of the deployed build (opaque).
  pub fn commit_hash(&self) -> &str {
    &self.app.commit_hash
  }

  /// Numeric chain id.
  pub fn chain_id(&self) -> u64 {
    self.chain.id
  }

  /// Human-readable chain name.
  pub fn chain_name(&self) -> &str {
    &self.chain.name
  }

  /// Native currency descriptor.
  pub fn currency(&self) -> &NativeCurrency {
    &self.chain.currency
  }

  /// JSON-RPC endpoint.
  pub fn rpc_url(&self) -> &Url {
    &self.chain.rpc_url
  }

  /// WalletConnect project identifier.
  pub fn wallet_connect_project_id(&self) -> &str {
    &self.wallet_connect_project_id
  }

  /// Address of a named protocol contract.
  pub fn contract(&self, role: ContractRole) -> Address {
    self.contracts.address(role)
  }
}
