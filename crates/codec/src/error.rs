//! Errors surfaced by the codec adapters.

/// Possible errors when encoding or decoding through the codec adapters.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The `alloy-dyn-abi` codec rejected the payload.
    #[error(transparent)]
    DynAbi(#[from] alloy_dyn_abi::Error),
    /// A statically typed `sol!` decode failed.
    #[error(transparent)]
    SolTypes(#[from] alloy_sol_types::Error),
    /// The `ethabi` codec rejected the payload.
    #[error(transparent)]
    EthAbi(#[from] ethabi::Error),
    /// The value or type has no `ethabi` counterpart.
    #[error("unsupported type for ethabi conversion: {0}")]
    Unsupported(String),
}
