//! # swapdesk
//!
//! A terminal client for an on-chain swap router: connects a wallet, shows the account balance,
//! quotes an exchange rate and submits swaps guarded by a minimum output.
//!
//! The [`ViewStateController`] drives everything. It is built from an explicit
//! [`WalletProvider`](swapdesk_wallets::WalletProvider), so the same code runs against a node
//! or a scripted wallet.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

// binary only
use dialoguer as _;
use tokio as _;

pub mod controller;
pub use controller::{Phase, ViewState, ViewStateController};

pub mod error;
pub use error::{RequestError, SwapError};

pub mod handler;
pub mod opts;

pub mod quote;
pub use quote::{QuoteClient, QuoteResult};

pub mod render;

pub mod request;
pub use request::{SwapForm, SwapRequest};

pub mod router;

pub mod session;
pub use session::{Session, WalletConnector};

pub mod settings;
pub use settings::SwapSettings;

pub mod slippage;
pub use slippage::Slippage;

pub mod submit;
pub use submit::{SwapReceipt, SwapSubmitter};

pub mod units;
pub use units::Amount;

pub mod utils;
