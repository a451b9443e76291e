use crate::include::common::config::{CylinderId, Movement};
use crate::include::scheduler::disk_scheduler::{ScheduleResult, Step, StepKind};

/// Tracks the head through a single policy run and accounts for its movement.
pub struct HeadCursor {
    position: CylinderId,
    total_movement: Movement,
    trace: Vec<Step>,
}

impl HeadCursor {
    pub fn new(initial_position: CylinderId, expected_steps: usize) -> Self {
        let mut trace = Vec::with_capacity(expected_steps + 1);
        trace.push(Step {
            cylinder: initial_position,
            kind: StepKind::Start,
        });
        HeadCursor {
            position: initial_position,
            total_movement: 0,
            trace,
        }
    }

    pub fn position(&self) -> CylinderId {
        self.position
    }

    pub fn move_to(&mut self, cylinder: CylinderId, kind: StepKind) {
        self.total_movement += self.position.abs_diff(cylinder) as Movement;
        self.position = cylinder;
        self.trace.push(Step { cylinder, kind });
    }

    pub fn serve_all<I>(&mut self, requests: I)
    where
        I: IntoIterator<Item = CylinderId>,
    {
        for request in requests {
            self.move_to(request, StepKind::Serve);
        }
    }

    pub fn finish(self) -> ScheduleResult {
        ScheduleResult {
            total_movement: self.total_movement,
            trace: self.trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_is_absolute_distance() {
        let mut head = HeadCursor::new(100, 2);
        head.move_to(40, StepKind::Serve);
        head.move_to(70, StepKind::Serve);
        assert_eq!(head.position(), 70);
        let result = head.finish();
        assert_eq!(result.total_movement, 90);
        assert_eq!(result.positions(), vec![100, 40, 70]);
    }

    #[test]
    fn test_staying_in_place_costs_nothing() {
        let mut head = HeadCursor::new(5, 1);
        head.serve_all(vec![5, 5]);
        let result = head.finish();
        assert_eq!(result.total_movement, 0);
        assert_eq!(result.trace.len(), 3);
    }
}
