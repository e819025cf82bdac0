//! Elementary type and length sampling.

use crate::{Field, GeneratorConfig};
use alloy_dyn_abi::DynSolValue;
use alloy_primitives::{Address, B256, U256};
use rand::{seq::IndexedRandom, Rng, RngCore};

/// The elementary ABI kinds the generator draws from.
///
/// `int` and `bool` are deliberately absent: the codecs under comparison
/// disagree on signed-integer conveniences, and the benchmark corpus does not
/// need them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ElementaryKind {
    Uint,
    FixedBytes,
    Bytes,
    String,
    Address,
}

const ELEMENTARY: &[ElementaryKind] = &[
    ElementaryKind::Uint,
    ElementaryKind::FixedBytes,
    ElementaryKind::Bytes,
    ElementaryKind::String,
    ElementaryKind::Address,
];

/// Printable ASCII range used for `string` values.
const PRINTABLE: std::ops::RangeInclusive<u8> = 0x20..=0x7E;

/// Draws a bounded pseudo-random length.
///
/// `r` is uniform in (0, 1] and the result is `min(floor(base / r), cap)`: a
/// right-skewed distribution concentrated near `base` with a long tail
/// truncated at `cap`. For `base >= 1` the result is never 0, but callers
/// tolerate 0 anyway.
pub fn rand_len<R: Rng + ?Sized>(rng: &mut R, base: f64, cap: usize) -> usize {
    // `random::<f64>()` is in [0, 1); flip it so the divisor cannot be zero.
    let r = 1.0 - rng.random::<f64>();
    ((base / r) as usize).min(cap)
}

/// Draws `len` uniform bytes.
pub fn rand_bytes<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    rng.fill_bytes(&mut buf);
    buf
}

/// Samples one elementary type descriptor paired with a value thunk.
///
/// Size parameters (`uint` width, `bytesN` width) are fixed in the descriptor
/// up front; everything else, including blob lengths, is drawn inside the
/// thunk so each invocation yields an independent value.
pub fn sample_elementary<R: Rng + ?Sized>(rng: &mut R, config: &GeneratorConfig) -> Field {
    match *ELEMENTARY.choose(rng).expect("non-empty kind table") {
        ElementaryKind::Uint => {
            let bits = rng.random_range(1..=32usize) * 8;
            Field::new(
                format!("uint{bits}"),
                Box::new(move |rng: &mut dyn RngCore| {
                    // Fill only the low `bits / 8` bytes: uniform in [0, 2^bits).
                    let mut word = [0u8; 32];
                    rng.fill_bytes(&mut word[32 - bits / 8..]);
                    DynSolValue::Uint(U256::from_be_bytes(word), bits)
                }),
            )
        }
        ElementaryKind::FixedBytes => {
            let n = rng.random_range(1..=32usize);
            Field::new(
                format!("bytes{n}"),
                Box::new(move |rng: &mut dyn RngCore| {
                    let mut word = B256::ZERO;
                    rng.fill_bytes(&mut word[..n]);
                    DynSolValue::FixedBytes(word, n)
                }),
            )
        }
        ElementaryKind::Bytes => {
            let (base, cap) = (config.blob_base, config.blob_cap);
            Field::new(
                "bytes",
                Box::new(move |rng: &mut dyn RngCore| {
                    let len = rand_len(&mut *rng, base, cap);
                    DynSolValue::Bytes(rand_bytes(rng, len))
                }),
            )
        }
        ElementaryKind::String => {
            let (base, cap) = (config.blob_base, config.blob_cap);
            Field::new(
                "string",
                Box::new(move |rng: &mut dyn RngCore| {
                    let len = rand_len(&mut *rng, base, cap);
                    let s = (0..len).map(|_| rng.random_range(PRINTABLE) as char).collect();
                    DynSolValue::String(s)
                }),
            )
        }
        ElementaryKind::Address => Field::new(
            "address",
            Box::new(|rng: &mut dyn RngCore| {
                let mut bytes = [0u8; 20];
                rng.fill_bytes(&mut bytes);
                DynSolValue::Address(Address::from(bytes))
            }),
        ),
    }
}
