use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::include::common::error::{Result, SchedulerError};

pub type CylinderId = i32;
pub type Movement = u64;

pub const DEFAULT_NUM_CYLINDERS: i32 = 5000;
pub const DEFAULT_NUM_REQUESTS: usize = 1000;
pub const DEFAULT_INITIAL_POSITION: CylinderId = 2500; // middle of the default disk
pub const DEFAULT_SEED: u64 = 42;

/// Parameters of one simulation run, as read by the demo binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub num_cylinders: i32,
    pub num_requests: usize,
    pub initial_position: CylinderId,
    // Request batches are a pure function of this seed.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            num_cylinders: DEFAULT_NUM_CYLINDERS,
            num_requests: DEFAULT_NUM_REQUESTS,
            initial_position: DEFAULT_INITIAL_POSITION,
            seed: DEFAULT_SEED,
        }
    }
}

impl SimulationConfig {
    pub fn load_from_disk(path: impl AsRef<Path>) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut json = String::new();
        file.read_to_string(&mut json)?;
        let config: SimulationConfig =
            serde_json::from_str(&json).map_err(|e| SchedulerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_cylinder_count(self.num_cylinders)?;
        validate_cylinder("initial position", self.initial_position, self.num_cylinders)
    }
}

pub fn validate_cylinder_count(cylinder_count: i32) -> Result<()> {
    if cylinder_count < 1 {
        return Err(SchedulerError::InvalidParameter(format!(
            "cylinder count must be at least 1, got {}",
            cylinder_count
        )));
    }
    Ok(())
}

pub fn validate_cylinder(what: &str, cylinder: CylinderId, cylinder_count: i32) -> Result<()> {
    if cylinder < 0 || cylinder >= cylinder_count {
        return Err(SchedulerError::cylinder_out_of_range(
            what,
            cylinder,
            cylinder_count,
        ));
    }
    Ok(())
}
