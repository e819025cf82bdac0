//! # abi-bench-gen
//!
//! Random generator for matched pairs of an ABI type descriptor and a
//! conforming [`DynSolValue`], used to drive and cross-validate ABI codec
//! implementations against identical inputs.
//!
//! Type descriptors cover the full recursive ABI grammar: elementary types
//! (`uintN`, `bytesN`, `bytes`, `string`, `address`), fixed and dynamic
//! arrays, and tuples, arbitrarily nested. Generated structures are
//! statistically bounded in size and depth so batches stay benchmarkable.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![warn(unreachable_pub)]

#[macro_use]
extern crate tracing;

use alloy_dyn_abi::DynSolValue;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;

mod assemble;
pub use assemble::AbiGenerator;

mod expand;
pub use expand::{array_wrap, arrayify, expand_fields, maybe_array_wrap, tupleify};

mod sampler;
pub use sampler::{rand_bytes, rand_len, sample_elementary};

mod signature;
pub use signature::{render_signature, tuple_type};

/// A lazy producer of one concrete [`DynSolValue`].
///
/// Thunks are kept unevaluated until the whole object shape is finalized:
/// wrapping a field in an array re-invokes its thunk once per slot, and every
/// invocation draws fresh randomness from the passed source, so array elements
/// are independent samples rather than copies.
pub type ValueThunk = Box<dyn Fn(&mut dyn RngCore) -> DynSolValue>;

/// One top-level field of an ABI object under construction: a canonical type
/// descriptor paired with the thunk that produces its value.
pub struct Field {
    /// Canonical ABI type descriptor, e.g. `uint40` or `(uint8,address)[2]`.
    pub ty: String,
    /// Lazy producer of a value conforming to `ty`.
    pub thunk: ValueThunk,
}

impl Field {
    /// Creates a field from a type descriptor and its value thunk.
    pub fn new(ty: impl Into<String>, thunk: ValueThunk) -> Self {
        Self { ty: ty.into(), thunk }
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("ty", &self.ty).finish_non_exhaustive()
    }
}

/// A fully generated ABI object: type descriptors and concrete values in
/// calldata field order.
#[derive(Clone, Debug, PartialEq)]
pub struct AbiObject {
    /// Type descriptor of each top-level field.
    pub types: Vec<String>,
    /// Concrete value of each top-level field.
    pub values: Vec<DynSolValue>,
}

impl AbiObject {
    /// Renders the signature handed to codecs: a single field unwrapped,
    /// several fields as a tuple.
    pub fn signature(&self) -> String {
        render_signature(&self.types)
    }

    /// Number of top-level fields.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the object has no fields.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Tuning knobs for the generator.
///
/// The probability constants shape the output mix (mostly elementary fields,
/// occasionally nested compounds); they are not load-bearing beyond that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Cap on field counts and array arities.
    pub len_cap: usize,
    /// Length base for dynamic byte blobs and strings.
    pub blob_base: f64,
    /// Length cap for dynamic byte blobs and strings.
    pub blob_cap: usize,
    /// Arity base for array wraps; kept small so arrays stay short.
    pub array_base: f64,
    /// Probability that a freshly sampled elementary field is wrapped into an
    /// array of itself.
    pub array_wrap_prob: f64,
    /// Probability that an intricate-mode step appends a fresh elementary
    /// field instead of folding the trailing fields into a compound.
    pub fresh_field_prob: f64,
    /// Threshold deciding fixed vs dynamic arrays when a fold wraps; compared
    /// against the same draw that selected the fold branch.
    pub fixed_wrap_prob: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            len_cap: 8,
            blob_base: 16.0,
            blob_cap: 128,
            array_base: 2.0,
            array_wrap_prob: 0.2,
            fresh_field_prob: 0.9,
            fixed_wrap_prob: 0.95,
        }
    }
}
