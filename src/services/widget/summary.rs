use std::time::Duration as StdDuration;

use chrono::{DateTime, Utc};

use super::list::TaskListWidget;
use super::models::{BannerView, RowView, WidgetView};
use super::WidgetPresenter;
use crate::models::settings::WidgetLayout;
use crate::services::countdown::DeadlineSnapshot;

/// Task list topped with a banner for the nearest deadline.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestSummaryWidget;

impl NearestSummaryWidget {
    fn banner(
        snapshot: &DeadlineSnapshot<'_>,
        now: DateTime<Utc>,
        monotonic_now: StdDuration,
    ) -> BannerView {
        if let Some(task) = snapshot.nearest(now) {
            return BannerView::Nearest(RowView::for_task(&task, now, monotonic_now));
        }

        match snapshot.latest_expired(now) {
            Some(task) => BannerView::Expired(RowView::for_task(&task, now, monotonic_now)),
            None => BannerView::Empty,
        }
    }
}

impl WidgetPresenter for NearestSummaryWidget {
    fn layout(&self) -> WidgetLayout {
        WidgetLayout::NearestSummary
    }

    fn present(
        &self,
        snapshot: &DeadlineSnapshot<'_>,
        now: DateTime<Utc>,
        monotonic_now: StdDuration,
    ) -> WidgetView {
        WidgetView {
            layout: self.layout(),
            banner: Some(Self::banner(snapshot, now, monotonic_now)),
            rows: TaskListWidget::rows(snapshot, now, monotonic_now),
        }
    }
}
