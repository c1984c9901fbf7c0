use crate::controller::{Phase, ViewState};
use std::fmt::Write;
use yansi::Paint;

/// Renders the view as terminal text.
pub fn render(view: &ViewState) -> String {
    let mut out = String::new();

    if let Some(err) = &view.error {
        let _ = writeln!(out, "{} {err}", "Error:".red().bold());
    }

    let _ = writeln!(out, "Token 1: {}", view.form.token_in);
    let _ = writeln!(out, "Token 2: {}", view.form.token_out);
    let _ = writeln!(out, "Amount: {}", view.form.amount);

    if let Some(rate) = view.exchange_rate().filter(|rate| !rate.is_zero()) {
        let _ = writeln!(out, "Exchange Rate: {}", rate.green());
    }

    match view.phase {
        Phase::Quoting => {
            let _ = writeln!(out, "{}", "Quoting...".dim());
        }
        Phase::Submitting => {
            let _ = writeln!(out, "{}", "Waiting for the swap to be confirmed...".dim());
        }
        Phase::Confirmed => {
            if let Some(receipt) = &view.last_swap {
                let _ = writeln!(
                    out,
                    "{} {} (minimum output {})",
                    "Swap confirmed:".green(),
                    receipt.tx_hash,
                    receipt.amount_out_min
                );
            }
        }
        Phase::Idle | Phase::Quoted | Phase::Failed => {}
    }

    match (view.session.account, view.session.balance()) {
        (Some(account), Some(balance)) => {
            let _ = writeln!(out, "Connected Account: {}", account.cyan());
            let _ = write!(out, "Balance: {balance} ETH");
        }
        _ => {
            let _ = write!(out, "Connected Account: {}", "none".dim());
        }
    }

    out
}
