//! # abi-bench-codec
//!
//! Adapters for the two ABI codec implementations compared by the benchmark:
//! [`alloy_dyn_abi`] and [`ethabi`]. The generator's (types, values) pairs are
//! converted so both codecs consume identical inputs; `ethabi` acts as the
//! reference encoder, and both decode paths are exposed for timing and
//! cross-validation.
//!
//! No codec logic lives here: encoding and decoding are delegated entirely to
//! the two libraries through their public call contracts.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![warn(unreachable_pub)]

use alloy_dyn_abi::{DynSolType, DynSolValue};

mod convert;
pub use convert::{to_param_type, to_token};

mod erc20;
pub use erc20::{decode_erc20_call, Erc20Call, IERC20};

mod error;
pub use error::CodecError;

/// ABI-encodes a field list with the reference codec.
///
/// The resulting bytes are the head/tail sequence encoding of the fields in
/// order, which any ABI-compliant decoder must accept.
pub fn encode_fields(values: &[DynSolValue]) -> Result<Vec<u8>, CodecError> {
    let tokens = values.iter().map(to_token).collect::<Result<Vec<_>, _>>()?;
    Ok(ethabi::encode(&tokens))
}

/// Decodes a payload addressed by a single parsed signature.
///
/// A signature does not distinguish a lone tuple-typed field from a
/// multi-field object, so the payload is first decoded as a standalone value
/// and, failing that, as a parameter sequence.
pub fn decode_value(ty: &DynSolType, data: &[u8]) -> Result<DynSolValue, CodecError> {
    if let Ok(value) = ty.abi_decode(data) {
        return Ok(value);
    }
    Ok(ty.abi_decode_sequence(data)?)
}

/// Decodes a payload against an explicit field-type list.
///
/// Unlike [`decode_value`], the field list is unambiguous: a single field is
/// decoded as that field's type, several fields as a tuple sequence. Used
/// where decoded values are compared for equality.
pub fn decode_fields(types: &[DynSolType], data: &[u8]) -> Result<Vec<DynSolValue>, CodecError> {
    match types {
        [] => Ok(Vec::new()),
        [single] => Ok(vec![decode_value(single, data)?]),
        _ => {
            let ty = DynSolType::Tuple(types.to_vec());
            match ty.abi_decode_sequence(data)? {
                DynSolValue::Tuple(values) => Ok(values),
                _ => unreachable!("sequence decoding of a tuple type yields a tuple"),
            }
        }
    }
}
