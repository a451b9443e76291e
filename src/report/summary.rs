use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::include::common::config::Movement;
use crate::include::scheduler::disk_scheduler::{Policy, ScheduleResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyStats {
    pub policy: Policy,
    pub total_movement: Movement,
    pub average_movement: f64,
    // 100 for the best policy, lower for the rest
    pub efficiency: f64,
}

/// Side-by-side comparison of a set of policy runs over the same batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub policies: Vec<PolicyStats>,
    pub best: Policy,
    pub worst: Policy,
    pub difference: Movement,
    pub improvement: f64,
}

impl Summary {
    /// Returns `None` when there is nothing to compare.
    pub fn from_results(results: &BTreeMap<Policy, ScheduleResult>) -> Option<Self> {
        let mut entries = results.iter();
        let (&first, first_result) = entries.next()?;
        let (mut best, mut best_movement) = (first, first_result.total_movement);
        let (mut worst, mut worst_movement) = (first, first_result.total_movement);
        // Strict comparisons keep the earliest policy on ties.
        for (&policy, result) in entries {
            if result.total_movement < best_movement {
                best = policy;
                best_movement = result.total_movement;
            }
            if result.total_movement > worst_movement {
                worst = policy;
                worst_movement = result.total_movement;
            }
        }

        let policies = results
            .iter()
            .map(|(&policy, result)| PolicyStats {
                policy,
                total_movement: result.total_movement,
                average_movement: result.average_movement(),
                efficiency: efficiency(best_movement, result.total_movement),
            })
            .collect();

        let difference = worst_movement - best_movement;
        let improvement = if worst_movement == 0 {
            0.0
        } else {
            difference as f64 / worst_movement as f64 * 100.0
        };

        Some(Summary {
            policies,
            best,
            worst,
            difference,
            improvement,
        })
    }

    pub fn stats(&self, policy: Policy) -> Option<&PolicyStats> {
        self.policies.iter().find(|s| s.policy == policy)
    }

    pub fn best_movement(&self) -> Movement {
        self.stats(self.best).map_or(0, |s| s.total_movement)
    }

    pub fn worst_movement(&self) -> Movement {
        self.stats(self.worst).map_or(0, |s| s.total_movement)
    }
}

fn efficiency(best_movement: Movement, movement: Movement) -> f64 {
    if movement == 0 {
        return 100.0;
    }
    100.0 * best_movement as f64 / movement as f64
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(60);
        writeln!(f, "{}", rule)?;
        writeln!(f, "DISK SCHEDULING POLICY COMPARISON")?;
        writeln!(f, "{}", rule)?;
        for stats in &self.policies {
            writeln!(f, "{}:", stats.policy)?;
            writeln!(f, "  Total head movement:   {} cylinders", stats.total_movement)?;
            writeln!(f, "  Average per move:      {:.2} cylinders", stats.average_movement)?;
            writeln!(f, "  Relative efficiency:   {:.1}%", stats.efficiency)?;
        }
        writeln!(f, "{}", rule)?;
        writeln!(f, "Best policy:  {} ({} cylinders)", self.best, self.best_movement())?;
        writeln!(f, "Worst policy: {} ({} cylinders)", self.worst, self.worst_movement())?;
        writeln!(f, "Difference:   {} cylinders", self.difference)?;
        writeln!(f, "Improvement:  {:.1}%", self.improvement)?;
        write!(f, "{}", rule)
    }
}
