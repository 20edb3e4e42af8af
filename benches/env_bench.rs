//! Environment Construction Benchmarks — Startup-Path Cost
//!
//! Benchmarks full-record validation from a complete mapping. The
//! loader runs once per process start, so this is about keeping an
//! eye on regressions rather than a hot path.
//!
//! Run with: cargo bench --bench env_bench

use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bold_app_env::config::{AppEnv, ContractRole};

/// Complete, well-formed mapping with every optional supplied.
fn full_env() -> HashMap<String, String> {
    let mut vars = HashMap::new();
    vars.insert("APP_VERSION".to_string(), "0.3.0".to_string());
    vars.insert("COMMIT_HASH".to_string(), "4f2a91c".to_string());
    vars.insert("CHAIN_ID".to_string(), "1".to_string());
    vars.insert("CHAIN_NAME".to_string(), "Ethereum".to_string());
    vars.insert("CHAIN_CURRENCY".to_string(), "Ether|ETH|18".to_string());
    vars.insert(
        "CHAIN_RPC_URL".to_string(),
        "https://rpc.example.org".to_string(),
    );
    vars.insert(
        "CHAIN_BLOCK_EXPLORER".to_string(),
        "Etherscan|https://etherscan.io".to_string(),
    );
    vars.insert(
        "CHAIN_CONTRACT_ENS_REGISTRY".to_string(),
        format!("0x{:040x}|9380380", 0xe25u64),
    );
    vars.insert(
        "CHAIN_CONTRACT_ENS_RESOLVER".to_string(),
        format!("0x{:040x}|16966585", 0xe26u64),
    );
    vars.insert(
        "CHAIN_CONTRACT_MULTICALL".to_string(),
        format!("0x{:040x}|14353601", 0xe27u64),
    );
    vars.insert(
        "WALLET_CONNECT_PROJECT_ID".to_string(),
        "wc-project-1234".to_string(),
    );
    for (n, role) in ContractRole::ALL.into_iter().enumerate() {
        vars.insert(role.env_var().to_string(), format!("0x{:040x}", 0xb0 + n));
    }
    vars
}

/// Benchmark full-record construction from a complete mapping.
fn bench_from_map(c: &mut Criterion) {
    let vars = full_env();

    c.bench_function("app_env_from_map_full", |b| {
        b.iter(|| {
            let env = AppEnv::from_map(black_box(&vars)).unwrap();
            black_box(env);
        });
    });
}

/// Benchmark the failure path: first invalid field aborts early.
fn bench_from_map_invalid(c: &mut Criterion) {
    let mut vars = full_env();
    vars.insert("CHAIN_ID".to_string(), "abc".to_string());

    c.bench_function("app_env_from_map_invalid_chain_id", |b| {
        b.iter(|| {
            let result = AppEnv::from_map(black_box(&vars));
            black_box(result.is_err());
        });
    });
}

criterion_group!(benches, bench_from_map, bench_from_map_invalid);
criterion_main!(benches);
