//! Environment Loader - Variable Lookup and Validation
//!
//! Translates the flat mapping of environment strings into the typed
//! [`AppEnv`] record. One validator per field kind (address, chain id,
//! URL, currency, link, address+block pair), composed over the named
//! variables. Validation is fail-fast: the first structural failure
//! aborts construction of the entire record.

use std::collections::HashMap;

use url::Url;

use crate::domain::{Address, TokenSymbol};

use super::error::EnvError;
use super::{
  AppEnv, AppInfo, ChainEnv, ContractAddresses, ContractRef, ContractRole, Link,
  NativeCurrency,
};

impl AppEnv {
  /// Load and validate the record from the process environment.
  ///
  /// # Errors
  /// Returns the first [`EnvError`] encountered: a missing required
  /// variable, or a present-but-malformed value. Callers are expected
  /// to abort startup on error; the environment is static for the
  /// process lifetime, so retrying cannot succeed.
  pub fn from_env() -> Result<Self, EnvError> {
    Self::build(|name| std::env::var(name).ok())
  }

  /// Build the record from an explicit name-to-value mapping.
  ///
  /// Used by tests and by hosts that stage configuration themselves.
  /// Construction is a pure function of the mapping: the same input
  /// always yields the same record or the same error.
  ///
  /// # Errors
  /// Same contract as [`AppEnv::from_env`].
  pub fn from_map(vars: &HashMap<String, String>) -> Result<Self, EnvError> {
    Self::build(|name| vars.get(name).cloned())
  }

  fn build(get: impl Fn(&str) -> Option<String>) -> Result<Self, EnvError> {
    let app = AppInfo {
      version: require_non_empty(&get, "APP_VERSION")?,
      commit_hash: require_non_empty(&get, "COMMIT_HASH")?,
    };

    let chain = ChainEnv {
      id: parse_chain_id(&require(&get, "CHAIN_ID")?)?,
      name: require_non_empty(&get, "CHAIN_NAME")?,
      currency: parse_currency("CHAIN_CURRENCY", &require(&get, "CHAIN_CURRENCY")?)?,
      rpc_url: parse_url("CHAIN_RPC_URL", &require(&get, "CHAIN_RPC_URL")?)?,
      block_explorer: optional(&get, "CHAIN_BLOCK_EXPLORER", parse_link)?,
      ens_registry: optional(&get, "CHAIN_CONTRACT_ENS_REGISTRY", parse_contract_ref)?,
      ens_resolver: optional(&get, "CHAIN_CONTRACT_ENS_RESOLVER", parse_contract_ref)?,
      multicall: optional(&get, "CHAIN_CONTRACT_MULTICALL", parse_contract_ref)?,
    };

    let contracts = ContractAddresses {
      active_pool: contract_address(&get, ContractRole::ActivePool)?,
      bold_token: contract_address(&get, ContractRole::BoldToken)?,
      borrower_operations: contract_address(&get, ContractRole::BorrowerOperations)?,
      coll_surplus_pool: contract_address(&get, ContractRole::CollSurplusPool)?,
      coll_token: contract_address(&get, ContractRole::CollToken)?,
      default_pool: contract_address(&get, ContractRole::DefaultPool)?,
      function_caller: contract_address(&get, ContractRole::FunctionCaller)?,
      gas_pool: contract_address(&get, ContractRole::GasPool)?,
      hint_helpers: contract_address(&get, ContractRole::HintHelpers)?,
      interest_router: contract_address(&get, ContractRole::InterestRouter)?,
      price_feed: contract_address(&get, ContractRole::PriceFeed)?,
      sorted_troves: contract_address(&get, ContractRole::SortedTroves)?,
      stability_pool: contract_address(&get, ContractRole::StabilityPool)?,
      trove_manager: contract_address(&get, ContractRole::TroveManager)?,
    };

    let wallet_connect_project_id =
      require_non_empty(&get, "WALLET_CONNECT_PROJECT_ID")?;

    Ok(Self {
      app,
      chain,
      contracts,
      wallet_connect_project_id,
    })
  }
}

/// Look up a required variable.
fn require(
  get: &impl Fn(&str) -> Option<String>,
  var: &'static str,
) -> Result<String, EnvError> {
  get(var).ok_or(EnvError::Missing(var))
}

/// Look up a required opaque string; present-but-empty is invalid.
fn require_non_empty(
  get: &impl Fn(&str) -> Option<String>,
  var: &'static str,
) -> Result<String, EnvError> {
  let value = require(get, var)?;
  if value.is_empty() {
    return Err(EnvError::Empty(var));
  }
  Ok(value)
}

/// Look up an optional variable and run its parser if present.
///
/// An absent variable yields `None`. A present value, even an empty
/// string, must parse in full; there is no silent fallback.
fn optional<T>(
  get: &impl Fn(&str) -> Option<String>,
  var: &'static str,
  parse: impl Fn(&'static str, &str) -> Result<T, EnvError>,
) -> Result<Option<T>, EnvError> {
  get(var).map(|raw| parse(var, &raw)).transpose()
}

/// Look up and validate one named contract address.
fn contract_address(
  get: &impl Fn(&str) -> Option<String>,
  role: ContractRole,
) -> Result<Address, EnvError> {
  let var = role.env_var();
  parse_address(var, &require(get, var)?)
}

/// Validate a `0x`-prefixed 40-hex-digit address.
///
/// The shape check runs before the byte-level parse so that every
/// rejection reports the same error regardless of how it fails.
fn parse_address(var: &'static str, raw: &str) -> Result<Address, EnvError> {
  let err = || EnvError::InvalidAddress {
    var,
    value: raw.to_string(),
  };

  let body = raw.strip_prefix("0x").ok_or_else(err)?;
  if body.len() != 40 || !body.bytes().all(|b| b.is_ascii_hexdigit()) {
    return Err(err());
  }

  raw.parse().map_err(|_| err())
}

/// Parse the chain id as a base-10 integer.
fn parse_chain_id(raw: &str) -> Result<u64, EnvError> {
  raw
    .parse()
    .map_err(|_| EnvError::InvalidChainId(raw.to_string()))
}

/// Validate an absolute URL.
fn parse_url(var: &'static str, raw: &str) -> Result<Url, EnvError> {
  Url::parse(raw).map_err(|_| EnvError::InvalidUrl {
    var,
    value: raw.to_string(),
  })
}

/// Decode a `Name|SYMBOL|decimals` currency descriptor.
///
/// The symbol must be one of the recognized [`TokenSymbol`]s; an
/// unknown ticker rejects the whole descriptor.
fn parse_currency(var: &'static str, raw: &str) -> Result<NativeCurrency, EnvError> {
  let err = || EnvError::InvalidCurrency {
    var,
    value: raw.to_string(),
  };

  let mut parts = raw.split('|');
  let (Some(name), Some(symbol), Some(decimals), None) =
    (parts.next(), parts.next(), parts.next(), parts.next())
  else {
    return Err(err());
  };

  if name.is_empty() {
    return Err(err());
  }
  let symbol = TokenSymbol::from_ticker(symbol).ok_or_else(err)?;
  let decimals = decimals.parse::<u8>().map_err(|_| err())?;

  Ok(NativeCurrency {
    name: name.to_string(),
    symbol,
    decimals,
  })
}

/// Decode a `Label|url` link.
fn parse_link(var: &'static str, raw: &str) -> Result<Link, EnvError> {
  let err = || EnvError::InvalidLink {
    var,
    value: raw.to_string(),
  };

  let Some((name, url)) = raw.split_once('|') else {
    return Err(err());
  };
  if name.is_empty() {
    return Err(err());
  }
  let url = Url::parse(url).map_err(|_| err())?;

  Ok(Link {
    name: name.to_string(),
    url,
  })
}

/// Decode an `address|block` contract reference.
///
/// Both halves must be valid; an address without a block number (or
/// the reverse) rejects the pair.
fn parse_contract_ref(var: &'static str, raw: &str) -> Result<ContractRef, EnvError> {
  let err = || EnvError::InvalidContractRef {
    var,
    value: raw.to_string(),
  };

  let Some((address, block)) = raw.split_once('|') else {
    return Err(err());
  };
  let address = parse_address(var, address).map_err(|_| err())?;
  let block_created = block.parse::<u64>().map_err(|_| err())?;

  Ok(ContractRef {
    address,
    block_created,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  const ADDR: &str = "0x24179cd81c9e782a4096035f7ec97fb8b783e007";

  #[test]
  fn test_parse_address_accepts_both_cases() {
    assert!(parse_address("VAR", ADDR).is_ok());
    assert!(parse_address("VAR", &ADDR.to_uppercase().replace("0X", "0x")).is_ok());
  }

  #[test]
  fn test_parse_address_preserves_bytes() {
    let parsed = parse_address("VAR", ADDR).unwrap();
    assert_eq!(parsed, ADDR.parse::<Address>().unwrap());
  }

  #[test]
  fn test_parse_address_rejects_bad_shapes() {
    // no prefix, short, long, non-hex, empty
    for bad in [
      "24179cd81c9e782a4096035f7ec97fb8b783e007",
      "0x24179cd81c9e782a4096035f7ec97fb8b783e0",
      "0x24179cd81c9e782a4096035f7ec97fb8b783e00700",
      "0x24179cd81c9e782a4096035f7ec97fb8b783e0zz",
      "",
      "0x",
    ] {
      let result = parse_address("CONTRACT_GAS_POOL", bad);
      assert_eq!(
        result,
        Err(EnvError::InvalidAddress {
          var: "CONTRACT_GAS_POOL",
          value: bad.to_string(),
        }),
        "expected rejection for {bad:?}"
      );
    }
  }

  #[test]
  fn test_parse_chain_id() {
    assert_eq!(parse_chain_id("1"), Ok(1));
    assert_eq!(parse_chain_id("42161"), Ok(42161));
    assert_eq!(
      parse_chain_id("abc"),
      Err(EnvError::InvalidChainId("abc".to_string()))
    );
    assert_eq!(
      parse_chain_id(""),
      Err(EnvError::InvalidChainId(String::new()))
    );
  }

  #[test]
  fn test_parse_url() {
    let url = parse_url("CHAIN_RPC_URL", "https://rpc.example.org").unwrap();
    assert_eq!(url.as_str(), "https://rpc.example.org/");
    assert!(parse_url("CHAIN_RPC_URL", "not-a-url").is_err());
    assert!(parse_url("CHAIN_RPC_URL", "").is_err());
  }

  #[test]
  fn test_parse_currency() {
    let currency = parse_currency("CHAIN_CURRENCY", "Ether|ETH|18").unwrap();
    assert_eq!(currency.name, "Ether");
    assert_eq!(currency.symbol, TokenSymbol::ETH);
    assert_eq!(currency.decimals, 18);
  }

  #[test]
  fn test_parse_currency_rejects_malformed() {
    for bad in [
      "Ether|ETH",          // missing decimals
      "Ether|ETH|18|extra", // trailing segment
      "Ether|DOGE|18",      // unrecognized symbol
      "Ether|eth|18",       // lowercase ticker
      "|ETH|18",            // empty name
      "Ether|ETH|1e8",      // non-numeric decimals
      "",
    ] {
      assert!(
        parse_currency("CHAIN_CURRENCY", bad).is_err(),
        "expected rejection for {bad:?}"
      );
    }
  }

  #[test]
  fn test_parse_link() {
    let link = parse_link("CHAIN_BLOCK_EXPLORER", "Etherscan|https://etherscan.io").unwrap();
    assert_eq!(link.name, "Etherscan");
    assert_eq!(link.url.as_str(), "https://etherscan.io/");

    assert!(parse_link("CHAIN_BLOCK_EXPLORER", "Etherscan").is_err());
    assert!(parse_link("CHAIN_BLOCK_EXPLORER", "Etherscan|not-a-url").is_err());
    assert!(parse_link("CHAIN_BLOCK_EXPLORER", "|https://etherscan.io").is_err());
  }

  #[test]
  fn test_parse_contract_ref() {
    let raw = format!("{ADDR}|14428183");
    let contract = parse_contract_ref("CHAIN_CONTRACT_MULTICALL", &raw).unwrap();
    assert_eq!(contract.address, ADDR.parse::<Address>().unwrap());
    assert_eq!(contract.block_created, 14428183);
  }

  #[test]
  fn test_parse_contract_ref_rejects_half_populated() {
    // address alone, block alone, bad address, bad block
    for bad in [
      ADDR.to_string(),
      "14428183".to_string(),
      "0x123|14428183".to_string(),
      format!("{ADDR}|"),
      format!("{ADDR}|-1"),
    ] {
      assert!(
        parse_contract_ref("CHAIN_CONTRACT_ENS_REGISTRY", &bad).is_err(),
        "expected rejection for {bad:?}"
      );
    }
  }

  #[test]
  fn test_require_missing_and_empty() {
    let get = |_: &str| -> Option<String> { None };
    assert_eq!(
      require(&get, "APP_VERSION"),
      Err(EnvError::Missing("APP_VERSION"))
    );

    let get_empty = |_: &str| -> Option<String> { Some(String::new()) };
    assert_eq!(
      require_non_empty(&get_empty, "APP_VERSION"),
      Err(EnvError::Empty("APP_VERSION"))
    );
  }
}
