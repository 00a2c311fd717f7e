use crate::catalog::Task;
use std::collections::BTreeSet;

/// Statistics derived from today's completion set. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed_count: usize,
    pub total: usize,
    pub is_fully_complete: bool,
    pub percent: u32,
}

impl Progress {
    /// Only ids present in `tasks` count; anything else in the set is ignored.
    pub fn compute(completed: &BTreeSet<String>, tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed_count = tasks
            .iter()
            .filter(|task| completed.contains(task.id))
            .count();

        Self {
            completed_count,
            total,
            is_fully_complete: total > 0 && completed_count == total,
            percent: percent_round_half_up(completed_count, total),
        }
    }
}

fn percent_round_half_up(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    // round(100 * part / whole) == floor((200 * part + whole) / (2 * whole))
    ((200 * part + whole) / (2 * whole)) as u32
}
