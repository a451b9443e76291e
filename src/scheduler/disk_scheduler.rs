use tracing::{debug, trace};

use crate::include::common::config::{validate_cylinder, validate_cylinder_count, CylinderId};
use crate::include::common::error::Result;
use crate::include::scheduler::disk_scheduler::{
    DiskSchedulerTrait, Policy, ScheduleResult, StepKind,
};
use crate::scheduler::head::HeadCursor;

/// Scheduling engine over a fixed, validated request batch.
///
/// The batch, cylinder count and initial position never change after
/// construction, so every policy run is independent and repeatable.
#[derive(Debug, Clone)]
pub struct DiskScheduler {
    cylinder_count: i32,
    requests: Vec<CylinderId>,
    initial_position: CylinderId,
}

impl DiskScheduler {
    pub fn new(
        cylinder_count: i32,
        requests: Vec<CylinderId>,
        initial_position: CylinderId,
    ) -> Result<Self> {
        validate_cylinder_count(cylinder_count)?;
        validate_cylinder("initial position", initial_position, cylinder_count)?;
        for &request in &requests {
            validate_cylinder("request", request, cylinder_count)?;
        }
        debug!(
            cylinder_count,
            num_requests = requests.len(),
            initial_position,
            "disk scheduler created"
        );
        Ok(Self {
            cylinder_count,
            requests,
            initial_position,
        })
    }

    pub fn cylinder_count(&self) -> i32 {
        self.cylinder_count
    }

    pub fn requests(&self) -> &[CylinderId] {
        &self.requests
    }

    pub fn num_requests(&self) -> usize {
        self.requests.len()
    }

    pub fn initial_position(&self) -> CylinderId {
        self.initial_position
    }

    fn last_cylinder(&self) -> CylinderId {
        self.cylinder_count - 1
    }

    // Sorted (left, right) around the initial position. A request equal to the
    // initial position goes right, so it is served on the outward sweep.
    fn partition(&self) -> (Vec<CylinderId>, Vec<CylinderId>) {
        let mut sorted = self.requests.clone();
        sorted.sort_unstable();
        let split = sorted.partition_point(|&r| r < self.initial_position);
        let right = sorted.split_off(split);
        (sorted, right)
    }

    fn head(&self) -> HeadCursor {
        HeadCursor::new(self.initial_position, self.requests.len())
    }

    fn finish(&self, policy: Policy, head: HeadCursor) -> ScheduleResult {
        let result = head.finish();
        debug!(
            %policy,
            total_movement = result.total_movement,
            steps = result.trace.len(),
            "policy run complete"
        );
        result
    }
}

impl DiskSchedulerTrait for DiskScheduler {
    fn fcfs(&self) -> ScheduleResult {
        let mut head = self.head();
        head.serve_all(self.requests.iter().copied());
        self.finish(Policy::Fcfs, head)
    }

    fn scan(&self) -> ScheduleResult {
        let (left, right) = self.partition();
        let mut head = self.head();
        // Only goes as far as the outermost pending request, never to the edge.
        head.serve_all(right);
        head.serve_all(left.into_iter().rev());
        self.finish(Policy::Scan, head)
    }

    fn c_scan(&self) -> ScheduleResult {
        let (left, right) = self.partition();
        let last = self.last_cylinder();
        let mut head = self.head();
        head.serve_all(right);

        // Runs to the edge even when the outward sweep had nothing to serve.
        if head.position() != last {
            trace!(from = head.position(), to = last, "c-scan seek to last cylinder");
            head.move_to(last, StepKind::SeekEnd);
        }

        if !left.is_empty() {
            trace!(from = head.position(), "c-scan wraparound to cylinder 0");
            head.move_to(0, StepKind::Wrap);
            head.serve_all(left);
        }
        self.finish(Policy::CScan, head)
    }
}
