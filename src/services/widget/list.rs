use std::time::Duration as StdDuration;

use chrono::{DateTime, Utc};

use super::models::{RowView, WidgetView};
use super::WidgetPresenter;
use crate::models::settings::WidgetLayout;
use crate::services::countdown::DeadlineSnapshot;

/// Scrollable list of active tasks with a live countdown each.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskListWidget;

impl TaskListWidget {
    pub(super) fn rows(
        snapshot: &DeadlineSnapshot<'_>,
        now: DateTime<Utc>,
        monotonic_now: StdDuration,
    ) -> Vec<RowView> {
        snapshot
            .active(now)
            .iter()
            .map(|task| RowView::for_task(task, now, monotonic_now))
            .collect()
    }
}

impl WidgetPresenter for TaskListWidget {
    fn layout(&self) -> WidgetLayout {
        WidgetLayout::TaskList
    }

    fn present(
        &self,
        snapshot: &DeadlineSnapshot<'_>,
        now: DateTime<Utc>,
        monotonic_now: StdDuration,
    ) -> WidgetView {
        WidgetView {
            layout: self.layout(),
            banner: None,
            rows: Self::rows(snapshot, now, monotonic_now),
        }
    }
}
