//! The swap router contract interface.

use crate::request::SwapRequest;
use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::{SolCall, sol};

sol! {
    interface ISwapRouter {
        function getAmountOut(uint256 amountIn, address tokenIn, address tokenOut) external view returns (uint256 amount);
        function swap(address tokenIn, address tokenOut, uint256 amountIn, uint256 amountOutMin, address to) external returns (uint256 amount);
    }
}

/// Calldata quoting `request`.
pub fn get_amount_out(request: &SwapRequest) -> Bytes {
    ISwapRouter::getAmountOutCall {
        amountIn: request.amount_in.raw(),
        tokenIn: request.token_in,
        tokenOut: request.token_out,
    }
    .abi_encode()
    .into()
}

/// Decodes the `getAmountOut` return data.
pub fn decode_amount_out(data: &[u8]) -> Result<U256, alloy_sol_types::Error> {
    ISwapRouter::getAmountOutCall::abi_decode_returns(data)
}

/// Calldata executing `request`, paying the output to `to`.
pub fn swap(request: &SwapRequest, amount_out_min: U256, to: Address) -> Bytes {
    ISwapRouter::swapCall {
        tokenIn: request.token_in,
        tokenOut: request.token_out,
        amountIn: request.amount_in.raw(),
        amountOutMin: amount_out_min,
        to,
    }
    .abi_encode()
    .into()
}
