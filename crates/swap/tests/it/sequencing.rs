use crate::utils::*;
use alloy_primitives::U256;
use std::{sync::Arc, time::Duration};
use swapdesk::Phase;
use swapdesk_wallets::mock::MockWallet;

async fn wait_for_calls(wallet: &MockWallet, n: usize) {
    while wallet.calls().len() < n {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn stale_quote_is_discarded() {
    let wallet = Arc::new(
        market(U256::ZERO, &Price::new(32_000))
            .with_call_delays([Duration::from_millis(200), Duration::from_millis(10)]),
    );
    let controller = connected(wallet.clone()).await;
    fill(&controller, "1.0");

    let slow = tokio::spawn({
        let controller = controller.clone();
        async move { controller.calculate_exchange_rate().await }
    });
    wait_for_calls(&wallet, 1).await;

    controller.set_amount("2.0");
    controller.calculate_exchange_rate().await;
    assert_eq!(controller.exchange_rate().unwrap().to_string(), "6.4");

    slow.await.unwrap();
    assert_eq!(controller.exchange_rate().unwrap().to_string(), "6.4");
    assert_eq!(controller.phase(), Phase::Quoted);
}

#[tokio::test(start_paused = true)]
async fn newer_quote_wins_even_if_it_resolves_first() {
    let wallet = Arc::new(
        market(U256::ZERO, &Price::new(32_000))
            .with_call_delays([Duration::from_millis(10), Duration::from_millis(200)]),
    );
    let controller = connected(wallet.clone()).await;
    fill(&controller, "1.0");

    let first = tokio::spawn({
        let controller = controller.clone();
        async move { controller.calculate_exchange_rate().await }
    });
    wait_for_calls(&wallet, 1).await;

    controller.set_amount("2.0");
    let second = tokio::spawn({
        let controller = controller.clone();
        async move { controller.calculate_exchange_rate().await }
    });
    wait_for_calls(&wallet, 2).await;

    first.await.unwrap();
    // the first quote resolved while a newer one was outstanding
    assert_eq!(controller.exchange_rate(), None);
    assert_eq!(controller.phase(), Phase::Quoting);

    second.await.unwrap();
    assert_eq!(controller.exchange_rate().unwrap().to_string(), "6.4");
}

#[tokio::test(start_paused = true)]
async fn swap_invalidates_outstanding_quote() {
    let wallet = Arc::new(
        market(U256::ZERO, &Price::new(32_000))
            .with_call_delays([Duration::from_millis(200)]),
    );
    let controller = connected(wallet.clone()).await;
    fill(&controller, "1.0");

    let quote = tokio::spawn({
        let controller = controller.clone();
        async move { controller.calculate_exchange_rate().await }
    });
    wait_for_calls(&wallet, 1).await;

    controller.swap().await;
    assert_eq!(controller.phase(), Phase::Confirmed);

    quote.await.unwrap();
    assert_eq!(controller.exchange_rate(), None);
    assert_eq!(controller.phase(), Phase::Confirmed);
    assert_eq!(wallet.sent().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn quote_during_swap_keeps_submitting() {
    let wallet = Arc::new(
        market(U256::ZERO, &Price::new(32_000))
            .with_call_delays([Duration::from_millis(200)]),
    );
    let controller = connected(wallet.clone()).await;
    fill(&controller, "1.0");

    let swap = tokio::spawn({
        let controller = controller.clone();
        async move { controller.swap().await }
    });
    wait_for_calls(&wallet, 1).await;
    assert_eq!(controller.phase(), Phase::Submitting);

    controller.calculate_exchange_rate().await;
    assert_eq!(controller.exchange_rate().unwrap().to_string(), "3.2");
    assert_eq!(controller.phase(), Phase::Submitting);

    swap.await.unwrap();
    assert_eq!(controller.phase(), Phase::Confirmed);
    assert_eq!(wallet.sent().len(), 1);
}
