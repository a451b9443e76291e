use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::include::common::config::{CylinderId, Movement};
use crate::include::common::error::SchedulerError;

/// Head scheduling policy. Ordering follows the order results are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Policy {
    /// First-come-first-served: batch order, no lookahead
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Elevator: outward sweep, then back toward cylinder 0
    #[serde(rename = "SCAN")]
    Scan,
    /// Circular SCAN: outward sweep, wrap to cylinder 0, sweep outward again
    #[serde(rename = "C-SCAN")]
    CScan,
}

impl Policy {
    pub const ALL: [Policy; 3] = [Policy::Fcfs, Policy::Scan, Policy::CScan];

    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Scan => "SCAN",
            Policy::CScan => "C-SCAN",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Policy {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FCFS" => Ok(Policy::Fcfs),
            "SCAN" => Ok(Policy::Scan),
            "C-SCAN" | "CSCAN" | "C_SCAN" => Ok(Policy::CScan),
            other => Err(SchedulerError::InvalidParameter(format!(
                "unknown policy '{}'",
                other
            ))),
        }
    }
}

/// Why the head visited a cylinder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepKind {
    Start,
    Serve,
    // C-SCAN only: travel to the last cylinder after the outward sweep
    SeekEnd,
    // C-SCAN only: jump from the last cylinder to cylinder 0
    Wrap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub cylinder: CylinderId,
    pub kind: StepKind,
}

/// Outcome of one policy run over the whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    pub total_movement: Movement,
    pub trace: Vec<Step>,
}

impl ScheduleResult {
    /// Every cylinder the head occupied, starting with the initial position.
    pub fn positions(&self) -> Vec<CylinderId> {
        self.trace.iter().map(|step| step.cylinder).collect()
    }

    /// Requests in the order they were served.
    pub fn served(&self) -> Vec<CylinderId> {
        self.trace
            .iter()
            .filter(|step| step.kind == StepKind::Serve)
            .map(|step| step.cylinder)
            .collect()
    }

    /// Number of head moves recorded after the start step.
    pub fn num_moves(&self) -> usize {
        self.trace.len().saturating_sub(1)
    }

    pub fn average_movement(&self) -> f64 {
        match self.num_moves() {
            0 => 0.0,
            moves => self.total_movement as f64 / moves as f64,
        }
    }
}

pub trait DiskSchedulerTrait {
    // Serve requests strictly in batch order.
    fn fcfs(&self) -> ScheduleResult;
    // Serve upward from the initial position, then reverse toward cylinder 0.
    fn scan(&self) -> ScheduleResult;
    // Serve upward, run to the last cylinder, wrap to 0 and serve upward again.
    fn c_scan(&self) -> ScheduleResult;

    fn run(&self, policy: Policy) -> ScheduleResult {
        match policy {
            Policy::Fcfs => self.fcfs(),
            Policy::Scan => self.scan(),
            Policy::CScan => self.c_scan(),
        }
    }

    // Each policy starts fresh from the same initial position.
    fn run_all(&self) -> BTreeMap<Policy, ScheduleResult> {
        Policy::ALL
            .iter()
            .map(|&policy| (policy, self.run(policy)))
            .collect()
    }
}
