//! Structural conversion from the `alloy-dyn-abi` data model into `ethabi`'s.
//!
//! Both codecs implement the same ABI, so the mapping is one-to-one for every
//! type the generator produces. Conversion is total over the standard type
//! grammar; anything without an `ethabi` counterpart is reported as
//! [`CodecError::Unsupported`] rather than silently mangled.

use crate::CodecError;
use alloy_dyn_abi::{DynSolType, DynSolValue};
use ethabi::{ParamType, Token};

/// Converts a parsed type descriptor into the equivalent [`ParamType`].
pub fn to_param_type(ty: &DynSolType) -> Result<ParamType, CodecError> {
    let converted = match ty {
        DynSolType::Address => ParamType::Address,
        DynSolType::Bool => ParamType::Bool,
        DynSolType::Int(size) => ParamType::Int(*size),
        DynSolType::Uint(size) => ParamType::Uint(*size),
        DynSolType::FixedBytes(size) => ParamType::FixedBytes(*size),
        DynSolType::Bytes => ParamType::Bytes,
        DynSolType::String => ParamType::String,
        DynSolType::Array(inner) => ParamType::Array(Box::new(to_param_type(inner)?)),
        DynSolType::FixedArray(inner, len) => {
            ParamType::FixedArray(Box::new(to_param_type(inner)?), *len)
        }
        DynSolType::Tuple(inner) => {
            ParamType::Tuple(inner.iter().map(to_param_type).collect::<Result<Vec<_>, _>>()?)
        }
        other => return Err(CodecError::Unsupported(other.sol_type_name().into_owned())),
    };
    Ok(converted)
}

/// Converts a value into the equivalent [`Token`].
///
/// Word-sized scalars are carried over through their big-endian byte
/// representation, so the bit patterns the two codecs see are identical.
pub fn to_token(value: &DynSolValue) -> Result<Token, CodecError> {
    let token = match value {
        DynSolValue::Address(addr) => Token::Address(addr.into_array().into()),
        DynSolValue::Bool(b) => Token::Bool(*b),
        DynSolValue::Int(x, _) => Token::Int(ethabi::Int::from_big_endian(&x.to_be_bytes::<32>())),
        DynSolValue::Uint(x, _) => {
            Token::Uint(ethabi::Uint::from_big_endian(&x.to_be_bytes::<32>()))
        }
        DynSolValue::FixedBytes(word, size) => Token::FixedBytes(word[..*size].to_vec()),
        DynSolValue::Bytes(bytes) => Token::Bytes(bytes.clone()),
        DynSolValue::String(s) => Token::String(s.clone()),
        DynSolValue::Array(values) => {
            Token::Array(values.iter().map(to_token).collect::<Result<Vec<_>, _>>()?)
        }
        DynSolValue::FixedArray(values) => {
            Token::FixedArray(values.iter().map(to_token).collect::<Result<Vec<_>, _>>()?)
        }
        DynSolValue::Tuple(values) => {
            Token::Tuple(values.iter().map(to_token).collect::<Result<Vec<_>, _>>()?)
        }
        other => {
            let name = other.sol_type_name().unwrap_or_default().into_owned();
            return Err(CodecError::Unsupported(name));
        }
    };
    Ok(token)
}
