// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Process-level tests for the `feedscan` binary's setup failures
//!
//! None of these reach the network: each run fails before a provider is used.

use std::process::{Command, Output};

const WALLET: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";

fn feedscan(dir: &std::path::Path, args: &[&str], rpc_url: Option<&str>) -> Output {
    feedscan_with_log(dir, args, rpc_url, None)
}

fn feedscan_with_log(
    dir: &std::path::Path,
    args: &[&str],
    rpc_url: Option<&str>,
    rust_log: Option<&str>,
) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_feedscan"));
    command
        .args(args)
        .current_dir(dir)
        .env_remove("ETH_RPC_URL")
        .env_remove("RUST_LOG");
    if let Some(url) = rpc_url {
        command.env("ETH_RPC_URL", url);
    }
    if let Some(filter) = rust_log {
        command.env("RUST_LOG", filter);
    }
    command.output().expect("failed to run feedscan")
}

#[test]
fn missing_rpc_url_fails_without_report() {
    let dir = tempfile::tempdir().unwrap();
    let output = feedscan(dir.path(), &[WALLET], None);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ETH_RPC_URL"), "stderr: {stderr}");
}

#[test]
fn empty_rpc_url_counts_as_missing() {
    let dir = tempfile::tempdir().unwrap();
    let output = feedscan(dir.path(), &[WALLET], Some("   "));

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn rpc_url_is_read_from_dotenv_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".env"), "ETH_RPC_URL=not-a-url\n").unwrap();

    let output = feedscan(dir.path(), &[WALLET], None);

    // The URL was found, so the failure is the URL itself
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not-a-url"), "stderr: {stderr}");
}

#[test]
fn websocket_rpc_url_is_rejected_at_setup() {
    let dir = tempfile::tempdir().unwrap();
    let output = feedscan(dir.path(), &[WALLET], Some("wss://mainnet.example.invalid/ws"));

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'wss'"), "stderr: {stderr}");
}

#[test]
fn fatal_diagnostic_survives_silenced_logging() {
    for filter in ["off", "feedscan=off"] {
        let dir = tempfile::tempdir().unwrap();
        let output = feedscan_with_log(dir.path(), &[WALLET], None, Some(filter));

        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("ETH_RPC_URL"), "RUST_LOG={filter} stderr: {stderr}");
    }
}

#[test]
fn unreadable_asset_file_fails_without_report() {
    let dir = tempfile::tempdir().unwrap();
    let output = feedscan(
        dir.path(),
        &["--assets", "missing.json", WALLET],
        Some("http://127.0.0.1:8545"),
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    // The path and the underlying I/O error both reach the user
    assert!(stderr.contains("missing.json: "), "stderr: {stderr}");
}

#[test]
fn malformed_asset_file_fails_without_report() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("assets.json"), "{ not json").unwrap();

    let output = feedscan(
        dir.path(),
        &["--assets", "assets.json", WALLET],
        Some("http://127.0.0.1:8545"),
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_wallet_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = feedscan(dir.path(), &[], Some("http://127.0.0.1:8545"));

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn extra_argument_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = feedscan(dir.path(), &[WALLET, WALLET], Some("http://127.0.0.1:8545"));

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn malformed_wallet_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = feedscan(dir.path(), &["0x1234"], Some("http://127.0.0.1:8545"));

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
