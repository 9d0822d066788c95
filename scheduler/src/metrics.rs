use crate::common_types::Timestamp;
use crate::process_manager::ProcessSet;

/// Timing metrics stamped on a PCB the moment it terminates.
///
/// All three derived values follow from the completion time:
/// turnaround is completion minus arrival, weighted turnaround divides
/// that by the service time, waiting subtracts the service time.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ProcessMetrics {
    pub completion_time: Timestamp,
    pub turnaround_time: usize,
    pub weighted_turnaround: f64,
    pub waiting_time: usize,
}

impl ProcessMetrics {
    pub(crate) fn at_completion(
        arrival_time: Timestamp,
        service_time: usize,
        completion_time: Timestamp,
    ) -> ProcessMetrics {
        debug_assert!(completion_time >= arrival_time + service_time);

        let turnaround_time = completion_time.get() - arrival_time.get();

        ProcessMetrics {
            completion_time,
            turnaround_time,
            weighted_turnaround: turnaround_time as f64 / service_time as f64,
            waiting_time: turnaround_time - service_time,
        }
    }
}

/// Arithmetic means over a fully terminated process set, reported next to
/// the per-process table.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct ScheduleStats {
    pub avg_turnaround: f64,
    pub avg_weighted_turnaround: f64,
    pub avg_waiting: f64,
}

impl ScheduleStats {
    /// Aggregate pass over the set, run once after the last termination.
    ///
    /// An empty set yields all-zero averages.
    pub fn compute(set: &ProcessSet) -> ScheduleStats {
        if set.is_empty() {
            return ScheduleStats::default();
        }

        let mut stats = ScheduleStats::default();
        for pcb in set.iter() {
            if let Some(metrics) = pcb.metrics() {
                stats.avg_turnaround += metrics.turnaround_time as f64;
                stats.avg_weighted_turnaround += metrics.weighted_turnaround;
                stats.avg_waiting += metrics.waiting_time as f64;
            }
        }

        let count = set.len() as f64;
        stats.avg_turnaround /= count;
        stats.avg_weighted_turnaround /= count;
        stats.avg_waiting /= count;

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_values_are_consistent() {
        let metrics =
            ProcessMetrics::at_completion(Timestamp::new(1), 6, Timestamp::new(9));

        assert_eq!(metrics.turnaround_time, 8);
        assert_eq!(metrics.waiting_time, 2);
        assert!((metrics.weighted_turnaround - 8.0 / 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn process_finishing_immediately_waits_zero() {
        let metrics =
            ProcessMetrics::at_completion(Timestamp::new(0), 3, Timestamp::new(3));

        assert_eq!(metrics.waiting_time, 0);
        assert!((metrics.weighted_turnaround - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_set_averages_to_zero() {
        let stats = ScheduleStats::compute(&ProcessSet::new());
        assert_eq!(stats, ScheduleStats::default());
    }
}
