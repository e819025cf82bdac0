//! Compound expansion: wrapping fields into arrays and tuples.

use crate::{
    sampler::{rand_len, sample_elementary},
    signature::tuple_type,
    Field, GeneratorConfig, ValueThunk,
};
use alloy_dyn_abi::DynSolValue;
use rand::{Rng, RngCore};

/// Turns a value thunk into an array thunk of arity `len`.
///
/// Each evaluation re-invokes the inner thunk `len` times, so the elements are
/// independent samples rather than `len` copies of one draw.
pub fn arrayify(thunk: ValueThunk, len: usize, fixed: bool) -> ValueThunk {
    Box::new(move |rng: &mut dyn RngCore| {
        let elems = (0..len).map(|_| thunk(&mut *rng)).collect();
        if fixed { DynSolValue::FixedArray(elems) } else { DynSolValue::Array(elems) }
    })
}

/// Combines a list of thunks into a tuple thunk that evaluates each inner
/// thunk once, in order.
pub fn tupleify(thunks: Vec<ValueThunk>) -> ValueThunk {
    Box::new(move |rng: &mut dyn RngCore| {
        DynSolValue::Tuple(thunks.iter().map(|thunk| thunk(&mut *rng)).collect())
    })
}

/// Wraps a field into an array of itself.
///
/// The arity is drawn from the length sampler with the small array base, so
/// arrays stay short. A fixed-size array embeds the arity in its descriptor
/// (`T[n]`); a dynamic array omits it (`T[]`).
pub fn array_wrap<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GeneratorConfig,
    field: Field,
    fixed: bool,
) -> Field {
    let len = rand_len(rng, config.array_base, config.len_cap);
    let ty = if fixed { format!("{}[{len}]", field.ty) } else { format!("{}[]", field.ty) };
    Field::new(ty, arrayify(field.thunk, len, fixed))
}

/// With probability `array_wrap_prob`, wraps the field into an array of
/// itself; the wrap is fixed-size when the same draw also fell below half the
/// threshold. Otherwise returns the field unchanged.
pub fn maybe_array_wrap<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GeneratorConfig,
    field: Field,
) -> Field {
    let r = rng.random::<f64>();
    if r < config.array_wrap_prob {
        array_wrap(rng, config, field, r < config.array_wrap_prob / 2.0)
    } else {
        field
    }
}

/// One step of intricate assembly against the accumulated field list.
///
/// Usually appends a fresh elementary field (itself optionally array-wrapped).
/// Occasionally, when fields already exist, folds a random trailing slice:
/// a single trailing field is array-wrapped in place; a longer slice is
/// combined into a tuple and then array-wrapped. The compound field replaces
/// the fields it consumed, so later steps can fold it again — this is how
/// arrays-of-tuples, tuples-of-arrays and deeper nesting arise.
pub fn expand_fields<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GeneratorConfig,
    mut fields: Vec<Field>,
) -> Vec<Field> {
    let r = rng.random::<f64>();
    if r < config.fresh_field_prob {
        let field = sample_elementary(rng, config);
        fields.push(maybe_array_wrap(rng, config, field));
    } else if !fields.is_empty() {
        // `r` is conditioned on the fold branch here, mirroring the wrap
        // threshold semantics of `maybe_array_wrap`.
        let fixed = r < config.fixed_wrap_prob;
        let k = rng.random_range(1..=fields.len());
        let folded = if k == 1 {
            let last = fields.pop().expect("at least one field");
            array_wrap(rng, config, last, fixed)
        } else {
            let tail = fields.split_off(fields.len() - k);
            let (types, thunks): (Vec<_>, Vec<_>) =
                tail.into_iter().map(|field| (field.ty, field.thunk)).unzip();
            array_wrap(rng, config, Field::new(tuple_type(&types), tupleify(thunks)), fixed)
        };
        fields.push(folded);
    }
    fields
}
