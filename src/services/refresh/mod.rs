//! One widget refresh: read the cache, present it, re-arm the alarm.

use chrono::{DateTime, Utc};

use crate::models::settings::{WidgetLayout, WidgetSettings};
use crate::services::cache::TaskSnapshotProvider;
use crate::services::countdown::DeadlineSnapshot;
use crate::services::scheduler::{ArmOutcome, RefreshScheduler};
use crate::services::widget::{presenter_for, WidgetPresenter, WidgetView};
use crate::utils::clock::MonotonicClock;

/// Result of a single refresh.
#[derive(Debug, Clone)]
pub struct RefreshOutcome {
    pub view: WidgetView,
    pub alarm: ArmOutcome,
}

/// Drives refreshes for one widget instance. The snapshot provider and
/// clock are passed in per call; the service only keeps its presenter and
/// the armed alarm.
pub struct WidgetRefreshService {
    presenter: Box<dyn WidgetPresenter>,
    scheduler: RefreshScheduler,
}

impl WidgetRefreshService {
    pub fn new(layout: WidgetLayout, scheduler: RefreshScheduler) -> Self {
        Self {
            presenter: presenter_for(layout),
            scheduler,
        }
    }

    pub fn from_settings(settings: &WidgetSettings) -> Self {
        Self::new(
            settings.layout,
            RefreshScheduler::with_interval_minutes(settings.refresh_interval_minutes),
        )
    }

    pub fn layout(&self) -> WidgetLayout {
        self.presenter.layout()
    }

    pub fn scheduler(&self) -> &RefreshScheduler {
        &self.scheduler
    }

    /// Run a refresh. A cache that cannot be read shows as an empty widget
    /// rather than failing.
    pub fn refresh(
        &mut self,
        provider: &dyn TaskSnapshotProvider,
        clock: &dyn MonotonicClock,
        now: DateTime<Utc>,
    ) -> RefreshOutcome {
        let tasks = match provider.snapshot() {
            Ok(tasks) => tasks,
            Err(err) => {
                log::error!("Failed to load task cache: {err}");
                let alarm = self.scheduler.rearm(&DeadlineSnapshot::parse(&[]), now);
                return RefreshOutcome {
                    view: WidgetView::empty(self.layout()),
                    alarm,
                };
            }
        };

        let snapshot = DeadlineSnapshot::parse(&tasks);
        let view = self.presenter.present(&snapshot, now, clock.elapsed());
        let alarm = self.scheduler.rearm(&snapshot, now);

        log::info!(
            "Refreshed {:?} widget: {} of {} tasks active",
            view.layout,
            view.count(),
            tasks.len()
        );

        RefreshOutcome { view, alarm }
    }
}
