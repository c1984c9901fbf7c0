use crate::utils::*;
use alloy_primitives::U256;
use std::sync::Arc;
use swapdesk::{Phase, SwapSettings, ViewStateController, render::render};
use swapdesk_wallets::{NoWallet, WalletError, mock::MockWallet};

#[tokio::test]
async fn no_wallet_leaves_session_unset() {
    let controller =
        ViewStateController::new(Arc::new(NoWallet::default()), &SwapSettings::new(ROUTER));
    controller.initialize().await;

    assert_eq!(controller.account(), None);
    assert_eq!(controller.balance(), None);
    assert!(!controller.error().unwrap().is_empty());
}

#[tokio::test]
async fn unauthorized_wallet_is_an_error() {
    let controller =
        ViewStateController::new(Arc::new(MockWallet::unauthorized()), &SwapSettings::new(ROUTER));
    controller.initialize().await;

    assert_eq!(controller.account(), None);
    assert_eq!(controller.error().unwrap(), "User rejected the request.");
}

#[tokio::test]
async fn authorized_account_and_balance() {
    let balance = U256::from(5 * ETHER / 2);
    let controller = connected(Arc::new(market(balance, &Price::new(10_000)))).await;

    assert_eq!(controller.account(), Some(ALICE));
    assert_eq!(controller.balance().unwrap().to_string(), "2.5");
    assert_eq!(controller.error(), None);
}

#[tokio::test]
async fn exchange_rate_from_quote() {
    let controller = connected(Arc::new(market(U256::ZERO, &Price::new(32_000)))).await;
    fill(&controller, "1.0");
    controller.calculate_exchange_rate().await;

    assert_eq!(controller.exchange_rate().unwrap().to_string(), "3.2");
    assert_eq!(controller.phase(), Phase::Quoted);
    let form = controller.form();
    assert_eq!(form.token_in, T1);
    assert_eq!(form.token_out, T2);
    assert!(render(&controller.view()).contains("3.2"));
}

#[tokio::test]
async fn quoting_twice_is_stable() {
    let wallet = Arc::new(market(U256::ZERO, &Price::new(32_000)));
    let controller = connected(wallet.clone()).await;
    fill(&controller, "1.0");

    controller.calculate_exchange_rate().await;
    let first = controller.exchange_rate();
    controller.calculate_exchange_rate().await;

    assert_eq!(controller.exchange_rate(), first);
    assert_eq!(wallet.calls().len(), 2);
}

#[tokio::test]
async fn failed_quote_sets_error() {
    let controller = connected(Arc::new(market(U256::ZERO, &Price::new(32_000)))).await;
    controller.set_token_in("T1");
    controller.set_token_out("T2");
    controller.set_amount("1.0");
    controller.calculate_exchange_rate().await;

    assert_eq!(controller.exchange_rate(), None);
    assert_eq!(controller.phase(), Phase::Failed);
    assert_eq!(controller.error().unwrap(), r#"invalid input token address "T1""#);
}

#[tokio::test]
async fn successful_swap_resets_form() {
    let wallet = Arc::new(market(U256::from(ETHER), &Price::new(32_000)));
    let controller = connected(wallet.clone()).await;
    fill(&controller, "1.0");
    controller.calculate_exchange_rate().await;

    wallet.set_balance(U256::from(ETHER / 2));
    controller.swap().await;

    assert_eq!(controller.error(), None);
    assert_eq!(controller.phase(), Phase::Confirmed);
    let form = controller.form();
    assert!(form.token_in.is_empty());
    assert!(form.token_out.is_empty());
    assert_eq!(form.amount, "0");
    assert_eq!(controller.exchange_rate(), None);
    assert_eq!(controller.balance().unwrap().to_string(), "0.5");

    let swaps = sent_swaps(&wallet);
    assert_eq!(swaps.len(), 1);
    assert_eq!(swaps[0].amountIn, U256::from(ETHER));
    assert_eq!(swaps[0].to, ALICE);
}

#[tokio::test]
async fn failed_balance_refresh_after_swap_is_not_an_error() {
    let wallet = Arc::new(market(U256::from(ETHER), &Price::new(32_000)));
    let controller = connected(wallet.clone()).await;
    fill(&controller, "1.0");

    wallet.fail_balance(WalletError::Rpc("connection reset".to_string()));
    controller.swap().await;

    assert_eq!(controller.phase(), Phase::Confirmed);
    assert_eq!(controller.error(), None);
    assert_eq!(controller.balance().unwrap().to_string(), "1.0");
    assert_eq!(wallet.sent().len(), 1);
}

#[tokio::test]
async fn refresh_without_account_does_nothing() {
    let controller =
        ViewStateController::new(Arc::new(NoWallet::default()), &SwapSettings::new(ROUTER));
    controller.refresh_balance().await;

    assert_eq!(controller.balance(), None);
    assert_eq!(controller.error(), None);
    assert_eq!(controller.phase(), Phase::Idle);
}

#[tokio::test]
async fn reverted_swap_keeps_form() {
    let wallet = Arc::new(
        market(U256::ZERO, &Price::new(32_000)).with_send_handler(|_| {
            Err(WalletError::Reverted("INSUFFICIENT_OUTPUT_AMOUNT".to_string()))
        }),
    );
    let controller = connected(wallet.clone()).await;
    fill(&controller, "1.0");
    controller.calculate_exchange_rate().await;
    controller.swap().await;

    assert_eq!(controller.error().unwrap(), "INSUFFICIENT_OUTPUT_AMOUNT");
    assert_eq!(controller.phase(), Phase::Failed);
    let form = controller.form();
    assert_eq!(form.token_in, T1);
    assert_eq!(form.token_out, T2);
    assert_eq!(form.amount, "1.0");
    // the consumed quote is not restored
    assert_eq!(controller.exchange_rate(), None);
    assert!(wallet.sent().is_empty());
}

#[tokio::test]
async fn error_cleared_by_next_success() {
    let controller = connected(Arc::new(market(U256::ZERO, &Price::new(32_000)))).await;
    fill(&controller, "");
    controller.calculate_exchange_rate().await;
    assert_eq!(controller.error().unwrap(), "amount is empty");

    controller.set_amount("2");
    controller.calculate_exchange_rate().await;
    assert_eq!(controller.error(), None);
    assert_eq!(controller.exchange_rate().unwrap().to_string(), "6.4");
}

#[tokio::test]
async fn min_output_follows_displayed_quote() {
    let price = Price::new(32_000);
    let wallet = Arc::new(market(U256::ZERO, &price));
    let controller = connected(wallet.clone()).await;
    fill(&controller, "1.0");
    controller.calculate_exchange_rate().await;

    // within the default 0.5% tolerance
    price.set(31_968);
    let displayed = controller.exchange_rate().unwrap().raw();
    controller.swap().await;

    assert_eq!(controller.phase(), Phase::Confirmed);
    let swaps = sent_swaps(&wallet);
    assert_eq!(swaps[0].amountOutMin, displayed * U256::from(9_950) / U256::from(10_000));
}

#[tokio::test]
async fn price_move_beyond_tolerance_is_rejected() {
    let price = Price::new(32_000);
    let wallet = Arc::new(market(U256::ZERO, &price));
    let controller = connected(wallet.clone()).await;
    fill(&controller, "1.0");
    controller.calculate_exchange_rate().await;

    price.set(31_000);
    controller.swap().await;

    assert_eq!(controller.phase(), Phase::Failed);
    assert!(controller.error().unwrap().contains("slippage"));
    assert_eq!(controller.form().amount, "1.0");
    assert!(wallet.sent().is_empty());
}

#[tokio::test]
async fn quote_for_other_request_is_not_the_reference() {
    let price = Price::new(32_000);
    let wallet = Arc::new(market(U256::ZERO, &price));
    let controller = connected(wallet.clone()).await;
    fill(&controller, "1.0");
    controller.calculate_exchange_rate().await;

    controller.set_amount("2.0");
    controller.swap().await;

    assert_eq!(controller.phase(), Phase::Confirmed);
    let fresh = price.quote(U256::from(2 * ETHER));
    assert_eq!(sent_swaps(&wallet)[0].amountOutMin, fresh * U256::from(9_950) / U256::from(10_000));
}
