//! Statically typed ERC-20 calldata decoding.
//!
//! The benchmark corpus is fully dynamic, so this fixed interface serves as a
//! sanity anchor: calldata produced by any conforming encoder must decode into
//! the matching [`Erc20Call`] variant through the `sol!`-generated types.

use crate::CodecError;
use alloy_primitives::{Address, U256};
use alloy_sol_types::{sol, SolInterface};

sol! {
    #[derive(Debug, PartialEq, Eq)]
    interface IERC20 {
        event Transfer(address indexed from, address indexed to, uint256 value);
        event Approval(address indexed owner, address indexed spender, uint256 value);

        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
        function transferFrom(address from, address to, uint256 amount) external returns (bool);
    }
}

/// A decoded ERC-20 function call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Erc20Call {
    TotalSupply,
    BalanceOf { account: Address },
    Transfer { to: Address, amount: U256 },
    Allowance { owner: Address, spender: Address },
    Approve { spender: Address, amount: U256 },
    TransferFrom { from: Address, to: Address, amount: U256 },
}

/// Decodes selector-prefixed calldata into an [`Erc20Call`].
pub fn decode_erc20_call(data: &[u8]) -> Result<Erc20Call, CodecError> {
    let call = match IERC20::IERC20Calls::abi_decode(data)? {
        IERC20::IERC20Calls::totalSupply(_) => Erc20Call::TotalSupply,
        IERC20::IERC20Calls::balanceOf(call) => Erc20Call::BalanceOf { account: call.account },
        IERC20::IERC20Calls::transfer(call) => {
            Erc20Call::Transfer { to: call.to, amount: call.amount }
        }
        IERC20::IERC20Calls::allowance(call) => {
            Erc20Call::Allowance { owner: call.owner, spender: call.spender }
        }
        IERC20::IERC20Calls::approve(call) => {
            Erc20Call::Approve { spender: call.spender, amount: call.amount }
        }
        IERC20::IERC20Calls::transferFrom(call) => {
            Erc20Call::TransferFrom { from: call.from, to: call.to, amount: call.amount }
        }
    };
    Ok(call)
}
