use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::include::common::config::{validate_cylinder_count, CylinderId, SimulationConfig};
use crate::include::common::error::Result;
use crate::scheduler::disk_scheduler::DiskScheduler;

/// Seeded source of uniformly random cylinder requests.
pub struct RequestGenerator {
    num_cylinders: i32,
    rng: StdRng,
}

impl RequestGenerator {
    pub fn new(num_cylinders: i32, seed: u64) -> Result<Self> {
        validate_cylinder_count(num_cylinders)?;
        Ok(RequestGenerator {
            num_cylinders,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    // Draws `count` requests in [0, num_cylinders - 1]; duplicates allowed.
    pub fn generate(&mut self, count: usize) -> Vec<CylinderId> {
        let upper = self.num_cylinders;
        (0..count).map(|_| self.rng.gen_range(0..upper)).collect()
    }

    /// Generates the batch described by `config` and wraps it in an engine.
    pub fn scheduler_for(config: &SimulationConfig) -> Result<DiskScheduler> {
        config.validate()?;
        let mut generator = RequestGenerator::new(config.num_cylinders, config.seed)?;
        let requests = generator.generate(config.num_requests);
        debug!(
            seed = config.seed,
            num_requests = requests.len(),
            "generated request batch"
        );
        DiskScheduler::new(config.num_cylinders, requests, config.initial_position)
    }
}
