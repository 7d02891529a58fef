//! End-to-end session flows under tokio's paused clock
//!
//! `start_paused` auto-advances the simulated delays, so the full swap /
//! mint / sign sequences run instantly while still exercising the real
//! sleep points.

use sovr_integration_tests::test_session;
use sovr_ledger::{LedgerError, LogKind, Scenario, SwapStatus, Token};
use sovr_console::SessionError;

#[tokio::test(start_paused = true)]
async fn mint_applies_example_scenario() {
    let mut session = test_session();

    session.mint("50000").await.unwrap();

    assert_eq!(session.user().usdc_balance, 200_000.0);
    assert_eq!(session.user().usd_sovr_balance, 170_000.0);

    let latest = session.feed().latest().unwrap();
    assert_eq!(latest.message, "Mint Confirmed");
    assert_eq!(latest.kind, LogKind::Success);
}

#[tokio::test(start_paused = true)]
async fn redeem_reverses_mint() {
    let mut session = test_session();

    session.mint("50000").await.unwrap();
    session.redeem("50000").await.unwrap();

    assert_eq!(session.user().usdc_balance, 250_000.0);
    assert_eq!(session.user().usd_sovr_balance, 120_000.0);
}

#[tokio::test(start_paused = true)]
async fn swap_confirms_and_records_history() {
    let mut session = test_session();

    let receipt = session.swap(Token::Usdc, "10000").await.unwrap();
    assert_eq!(receipt.from, Token::Usdc);
    assert_eq!(receipt.to, Token::UsdSovr);
    assert!(receipt.tx_hash.starts_with("0x"));

    assert_eq!(session.user().usdc_balance, 240_000.0);
    assert_eq!(session.user().usd_sovr_balance, 130_000.0);

    let record = session.history().latest().unwrap();
    assert_eq!(record.id, receipt.id);
    assert_eq!(record.amount, 10_000.0);
    assert_eq!(record.status, SwapStatus::Confirmed);

    let latest = session.feed().latest().unwrap();
    assert!(latest.message.starts_with("Swap Confirmed. Block #19432108. Hash: 0x"));
}

#[tokio::test(start_paused = true)]
async fn flipped_swap_moves_the_other_way() {
    let mut session = test_session();

    session.swap(Token::Usdc, "10000").await.unwrap();
    session.swap(Token::UsdSovr, "30000").await.unwrap();

    // Second swap debits usdSOVR and credits USDC.
    assert_eq!(session.user().usdc_balance, 270_000.0);
    assert_eq!(session.user().usd_sovr_balance, 100_000.0);
}

#[tokio::test(start_paused = true)]
async fn history_keeps_five_newest_first() {
    let mut session = test_session();

    for _ in 0..7 {
        session.swap(Token::Usdc, "100").await.unwrap();
    }

    assert_eq!(session.history().len(), 5);
    let ids: Vec<u64> = session.history().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![7, 6, 5, 4, 3]);
}

#[tokio::test(start_paused = true)]
async fn insufficient_swap_is_refused_without_trace() {
    let mut session = test_session();
    let feed_before = session.feed().len();

    let err = session.swap(Token::UsdSovr, "120001").await.unwrap_err();
    assert!(matches!(
        err,
        SessionError::Ledger(LedgerError::InsufficientBalance { token: Token::UsdSovr, .. })
    ));

    // No balances moved, nothing logged, nothing recorded.
    assert_eq!(session.user().usdc_balance, 250_000.0);
    assert_eq!(session.user().usd_sovr_balance, 120_000.0);
    assert_eq!(session.feed().len(), feed_before);
    assert!(session.history().is_empty());
}

#[tokio::test(start_paused = true)]
async fn signing_needs_wallet_then_yields_signature() {
    let mut session = test_session();

    assert!(matches!(
        session.sign_attestation("AUTH-1209").await,
        Err(SessionError::WalletNotConnected)
    ));

    let address = session.connect_wallet();
    assert_eq!(address.len(), 42);

    let signature = session.sign_attestation("AUTH-1209").await.unwrap();
    assert!(signature.starts_with("0x"));
    assert_eq!(signature.len(), 132);

    // The three signing steps were logged before the confirmation.
    let messages: Vec<&str> = session.feed().iter().map(|e| e.message.as_str()).collect();
    let hash_pos = messages
        .iter()
        .position(|m| *m == "Hashing EIP-712 Payload...")
        .unwrap();
    assert_eq!(messages[hash_pos + 1], "Communicating with Secure Enclave...");
    assert_eq!(messages[hash_pos + 2], "Finalizing ECDSA Signature...");
    assert!(messages[hash_pos + 3].starts_with("Attestation Complete. Signature: 0x"));
}

#[tokio::test(start_paused = true)]
async fn projection_reports_and_only_logs() {
    let mut session = test_session();

    let projection = session
        .run_projection(500_000.0, 2, Scenario::Normal)
        .await;
    assert_eq!(projection.stability_score, 90.0);
    assert!(projection.slippage_pct > 0.0);

    let cascade = session
        .run_projection(500_000.0, 10, Scenario::Cascade)
        .await;
    assert_eq!(cascade.stability_score, 40.0);

    // Shadow runs never touch the ledger.
    assert_eq!(session.user().usdc_balance, 250_000.0);
    assert_eq!(session.user().usd_sovr_balance, 120_000.0);
    assert!(session.history().is_empty());

    let latest = session.feed().latest().unwrap();
    assert_eq!(
        latest.message,
        "Shadow Projection: State mapping complete. See Stability Gauge for delta."
    );
}

#[tokio::test(start_paused = true)]
async fn feed_window_holds_last_fifty_across_operations() {
    let mut session = test_session();

    // Each wallet cycle appends two entries; 2 boot lines + 60 cycles.
    for _ in 0..30 {
        session.connect_wallet();
        session.disconnect_wallet();
    }

    assert_eq!(session.feed().len(), 50);
    // The boot lines were evicted; the window ends on the latest cycle.
    let first = session.feed().iter().next().unwrap();
    assert_ne!(first.message, "Initializing SOVR V2 Secure Environment...");
    assert_eq!(session.feed().latest().unwrap().message, "Wallet Disconnected");
}
