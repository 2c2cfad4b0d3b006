//! Per-body position history
//!
//! The history is only ever read by the renderer. How much of it is kept
//! is controlled by a [`RetentionPolicy`]; the default keeps everything.

use std::collections::VecDeque;

use serde::Deserialize;

use super::states::NVec2;

/// How many past positions a trajectory holds on to
///
/// ```yaml
/// trajectory: { mode: unbounded }
/// trajectory: { mode: recent, capacity: 500 }
/// trajectory: { mode: decimated, every: 10 }
/// ```
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RetentionPolicy {
    /// Keep one point per step forever
    #[default]
    Unbounded,
    /// Ring buffer of the last `capacity` points
    Recent { capacity: usize },
    /// Keep the point of every `every`-th step, starting with the first
    Decimated { every: usize },
}

#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    points: VecDeque<NVec2>,
    policy: RetentionPolicy,
    steps: u64, // number of record() calls, retained or not
}

impl Trajectory {
    pub fn new(policy: RetentionPolicy) -> Self {
        // zero-sized windows degenerate to a single point / every step
        let policy = match policy {
            RetentionPolicy::Recent { capacity } => RetentionPolicy::Recent { capacity: capacity.max(1) },
            RetentionPolicy::Decimated { every } => RetentionPolicy::Decimated { every: every.max(1) },
            RetentionPolicy::Unbounded => RetentionPolicy::Unbounded,
        };

        Self {
            points: VecDeque::new(),
            policy,
            steps: 0,
        }
    }

    /// Append the position reached by one integration step
    pub fn record(&mut self, point: NVec2) {
        match self.policy {
            RetentionPolicy::Unbounded => self.points.push_back(point),
            RetentionPolicy::Recent { capacity } => {
                if self.points.len() == capacity {
                    self.points.pop_front();
                }
                self.points.push_back(point);
            }
            RetentionPolicy::Decimated { every } => {
                if self.steps % every as u64 == 0 {
                    self.points.push_back(point);
                }
            }
        }
        self.steps += 1;
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Retained points in chronological order
    pub fn iter(&self) -> impl Iterator<Item = &NVec2> + '_ {
        self.points.iter()
    }

    pub fn last(&self) -> Option<&NVec2> {
        self.points.back()
    }

    /// Total steps seen, including the ones the policy dropped
    pub fn recorded_steps(&self) -> u64 {
        self.steps
    }

    pub fn policy(&self) -> RetentionPolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(policy: RetentionPolicy, n: usize) -> Trajectory {
        let mut t = Trajectory::new(policy);
        for i in 0..n {
            t.record(NVec2::new(i as f64, 0.0));
        }
        t
    }

    #[test]
    fn unbounded_keeps_every_point_in_order() {
        let t = fill(RetentionPolicy::Unbounded, 10);
        assert_eq!(t.len(), 10);
        let xs: Vec<f64> = t.iter().map(|p| p.x).collect();
        assert_eq!(xs, (0..10).map(|i| i as f64).collect::<Vec<_>>());
    }

    #[test]
    fn recent_keeps_only_newest_points() {
        let t = fill(RetentionPolicy::Recent { capacity: 4 }, 10);
        assert_eq!(t.len(), 4);
        assert_eq!(t.iter().next().map(|p| p.x), Some(6.0));
        assert_eq!(t.last().map(|p| p.x), Some(9.0));
        assert_eq!(t.recorded_steps(), 10);
    }

    #[test]
    fn decimated_keeps_ceil_of_steps_over_every() {
        let t = fill(RetentionPolicy::Decimated { every: 3 }, 10);
        // steps 0, 3, 6, 9
        assert_eq!(t.len(), 4);
        let xs: Vec<f64> = t.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 3.0, 6.0, 9.0]);
    }

    #[test]
    fn zero_sized_policies_are_clamped() {
        let t = fill(RetentionPolicy::Recent { capacity: 0 }, 5);
        assert_eq!(t.len(), 1);
        let t = fill(RetentionPolicy::Decimated { every: 0 }, 5);
        assert_eq!(t.len(), 5);
    }
}
