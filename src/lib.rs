//! Disk-head scheduling simulator.
//!
//! Computes total head movement and the position trace of FCFS, SCAN and
//! C-SCAN over a fixed batch of cylinder requests.

pub mod include;
pub mod report;
pub mod scheduler;
pub mod workload;

pub use include::common::config::{CylinderId, Movement, SimulationConfig};
pub use include::common::error::{Result, SchedulerError};
pub use include::scheduler::disk_scheduler::{
    DiskSchedulerTrait, Policy, ScheduleResult, Step, StepKind,
};
pub use report::summary::Summary;
pub use scheduler::disk_scheduler::DiskScheduler;
pub use workload::request_generator::RequestGenerator;
