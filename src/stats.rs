use crate::timeline::Timeline;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub filled: usize,
    pub total: usize,
    pub percentage: f64,
}

/// Counts over the weeks currently in the grid, not the whole store.
pub fn progress(timeline: &Timeline) -> Progress {
    let total = timeline.total_weeks();
    let filled = timeline.weeks().filter(|week| week.filled).count();
    let percentage = if total == 0 {
        0.0
    } else {
        filled as f64 / total as f64 * 100.0
    };

    Progress {
        filled,
        total,
        percentage,
    }
}
