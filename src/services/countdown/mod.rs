mod breakdown;
mod calculator;

pub use breakdown::{ChronometerAnchor, CountdownBreakdown};
pub use calculator::{
    filter_active, latest_expired, nearest_deadline, nearest_task, remaining, ActiveTask,
    DeadlineSnapshot,
};
