//! Per-run context handed from the runner to the pipeline stages

use crate::config::ResolvedConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Context owned by one run.
///
/// Holds:
/// - the resolved configuration (never mutated after construction)
/// - the run's only random number generator, seeded from `config.seed`
///
/// Stages that need randomness borrow `rng` from here; nothing else in the
/// crate creates or seeds a generator.
pub struct RunContext {
    pub config: ResolvedConfig,
    pub rng: StdRng,
}

impl RunContext {
    pub fn new(config: ResolvedConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        debug!(seed = config.seed, "RNG seeded");
        Self { config, rng }
    }
}
