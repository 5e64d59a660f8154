//! Presentation adapters turning a task snapshot into widget views.
//!
//! Both layouts share the countdown calculator; the configured
//! [`WidgetLayout`] picks which adapter runs.

mod list;
mod models;
mod summary;

use std::time::Duration as StdDuration;

use chrono::{DateTime, Utc};

use crate::models::settings::WidgetLayout;
use crate::services::countdown::DeadlineSnapshot;

pub use list::TaskListWidget;
pub use models::{
    BannerView, RgbaColor, RowState, RowView, WidgetView, ACTIVE_ACCENT, EXPIRED_ACCENT,
    EXPIRED_LABEL,
};
pub use summary::NearestSummaryWidget;

pub trait WidgetPresenter {
    fn layout(&self) -> WidgetLayout;

    /// Build the view for one parsed snapshot as of wall-clock `now`,
    /// anchoring live timers at `monotonic_now`.
    fn present(
        &self,
        snapshot: &DeadlineSnapshot<'_>,
        now: DateTime<Utc>,
        monotonic_now: StdDuration,
    ) -> WidgetView;
}

pub fn presenter_for(layout: WidgetLayout) -> Box<dyn WidgetPresenter> {
    match layout {
        WidgetLayout::TaskList => Box::new(TaskListWidget),
        WidgetLayout::NearestSummary => Box::new(NearestSummaryWidget),
    }
}
