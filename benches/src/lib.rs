//! Corpus construction and timed decode loops shared by the CLI runner and
//! the criterion benches.
//!
//! A corpus is generated once up front so that the timed section contains
//! nothing but codec work: every example carries its payload pre-encoded and
//! its type descriptor pre-parsed for both codecs.

use abi_bench_codec::{decode_value, encode_fields, to_param_type};
use abi_bench_gen::AbiGenerator;
use alloy_dyn_abi::{DynSolType, DynSolValue};
use eyre::Result;
use std::{
    fmt,
    hint::black_box,
    time::{Duration, Instant},
};

/// Default number of examples per corpus.
pub const EXAMPLES: usize = 10_000;

/// Default size factor fed to the generator.
pub const SIZE_FACTOR: f64 = 3.0;

/// A single pre-encoded benchmark input.
pub struct Example {
    /// Rendered canonical signature of the field list.
    pub signature: String,
    /// Parsed descriptor for the `alloy-dyn-abi` decode path.
    pub sol_type: DynSolType,
    /// Converted descriptors for the `ethabi` decode path.
    pub param_types: Vec<ethabi::ParamType>,
    /// Reference-encoded payload, identical input for both codecs.
    pub encoded: Vec<u8>,
    /// The values the payload encodes.
    pub values: Vec<DynSolValue>,
}

/// Which generator entry point produces the corpus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Flat objects of independently sampled fields.
    Simple,
    /// Folded objects with nested tuple and array structure.
    Intricate,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple => f.write_str("simple"),
            Self::Intricate => f.write_str("intricate"),
        }
    }
}

/// Generates `count` examples and encodes each payload with the reference
/// codec.
pub fn build_corpus(mode: Mode, count: usize, seed: u64, size_factor: f64) -> Result<Vec<Example>> {
    let mut generator = AbiGenerator::from_seed(seed);
    let mut corpus = Vec::with_capacity(count);
    for _ in 0..count {
        let obj = match mode {
            Mode::Simple => generator.simple_object(size_factor),
            Mode::Intricate => generator.intricate_object(size_factor),
        };
        let parsed: Vec<DynSolType> = obj
            .types
            .iter()
            .map(|ty| ty.parse())
            .collect::<Result<_, _>>()?;
        // A one-field object decodes as that field; anything else as a tuple.
        let sol_type = match parsed.as_slice() {
            [single] => single.clone(),
            _ => DynSolType::Tuple(parsed.clone()),
        };
        let param_types =
            parsed.iter().map(to_param_type).collect::<Result<Vec<_>, _>>()?;
        let encoded = encode_fields(&obj.values)?;
        corpus.push(Example {
            signature: obj.signature(),
            sol_type,
            param_types,
            encoded,
            values: obj.values,
        });
    }
    Ok(corpus)
}

/// Decodes the whole corpus through `alloy-dyn-abi` and reports elapsed time.
pub fn run_dyn_abi(corpus: &[Example]) -> Result<Duration> {
    let start = Instant::now();
    for ex in corpus {
        black_box(decode_value(&ex.sol_type, &ex.encoded)?);
    }
    Ok(start.elapsed())
}

/// Decodes the whole corpus through `ethabi` and reports elapsed time.
pub fn run_ethabi(corpus: &[Example]) -> Result<Duration> {
    let start = Instant::now();
    for ex in corpus {
        black_box(ethabi::decode(&ex.param_types, &ex.encoded)?);
    }
    Ok(start.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corpus_is_reproducible_per_seed() {
        let a = build_corpus(Mode::Intricate, 32, 7, SIZE_FACTOR).unwrap();
        let b = build_corpus(Mode::Intricate, 32, 7, SIZE_FACTOR).unwrap();
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.signature, y.signature);
            assert_eq!(x.encoded, y.encoded);
        }
    }

    #[test]
    fn both_decode_paths_accept_every_example() {
        for mode in [Mode::Simple, Mode::Intricate] {
            let corpus = build_corpus(mode, 64, 99, SIZE_FACTOR).unwrap();
            run_dyn_abi(&corpus).unwrap();
            run_ethabi(&corpus).unwrap();
        }
    }
}
