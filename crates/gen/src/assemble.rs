//! Assembly of full top-level ABI objects.

use crate::{
    expand::{expand_fields, maybe_array_wrap},
    sampler::{rand_len, sample_elementary},
    AbiObject, Field, GeneratorConfig,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Drives the samplers and the compound expander to build full ABI objects.
///
/// The generator owns the random source; every draw consumes it sequentially,
/// so generation is a deterministic function of the seed. Parallel generation
/// requires one independently seeded generator per worker.
#[derive(Debug)]
pub struct AbiGenerator<R: Rng = StdRng> {
    rng: R,
    config: GeneratorConfig,
}

impl AbiGenerator {
    /// Creates a generator with the default configuration, seeded for
    /// reproducibility.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed), GeneratorConfig::default())
    }
}

impl<R: Rng> AbiGenerator<R> {
    /// Creates a generator from an explicit random source and configuration.
    pub fn new(rng: R, config: GeneratorConfig) -> Self {
        Self { rng, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Builds a flat object: a bounded number of independent top-level
    /// fields, each elementary or an array of one elementary type. Fields
    /// never interact, so no nesting beyond one array level arises.
    pub fn simple_object(&mut self, size_factor: f64) -> AbiObject {
        let len = rand_len(&mut self.rng, size_factor, self.config.len_cap);
        let mut fields = Vec::with_capacity(len);
        for _ in 0..len {
            let field = sample_elementary(&mut self.rng, &self.config);
            fields.push(maybe_array_wrap(&mut self.rng, &self.config, field));
        }
        self.finalize("simple", fields)
    }

    /// Builds a nested object by running a bounded number of expansion steps
    /// against the accumulated field list. Tuples produced by one step can be
    /// folded again by later steps, so tuples-of-arrays, arrays-of-tuples and
    /// multi-level nesting all arise from this single stochastic process.
    pub fn intricate_object(&mut self, size_factor: f64) -> AbiObject {
        let len = rand_len(&mut self.rng, size_factor, self.config.len_cap);
        let mut fields = Vec::new();
        for _ in 0..len {
            fields = expand_fields(&mut self.rng, &self.config, fields);
        }
        self.finalize("intricate", fields)
    }

    /// Evaluates every top-level thunk exactly once, in field order.
    fn finalize(&mut self, mode: &str, fields: Vec<Field>) -> AbiObject {
        let mut types = Vec::with_capacity(fields.len());
        let mut values = Vec::with_capacity(fields.len());
        for field in fields {
            types.push(field.ty);
            values.push((field.thunk)(&mut self.rng));
        }
        trace!(target: "abi_gen", mode, fields = types.len(), "assembled object");
        AbiObject { types, values }
    }
}
