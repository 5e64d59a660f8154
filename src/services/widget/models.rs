use std::time::Duration as StdDuration;

use chrono::{DateTime, Utc};

use crate::models::settings::WidgetLayout;
use crate::services::countdown::{ActiveTask, ChronometerAnchor, CountdownBreakdown};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RgbaColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Orange accent for running countdowns.
pub const ACTIVE_ACCENT: RgbaColor = RgbaColor::new(0xFF, 0x98, 0x00, 0xFF);
/// Red accent for deadlines that have passed.
pub const EXPIRED_ACCENT: RgbaColor = RgbaColor::new(0xF4, 0x43, 0x36, 0xFF);

pub const EXPIRED_LABEL: &str = "Expired";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowState {
    Active {
        days_label: Option<String>,
        hours_label: String,
        chronometer: ChronometerAnchor,
    },
    Expired,
}

impl RowState {
    pub fn accent(&self) -> RgbaColor {
        match self {
            RowState::Active { .. } => ACTIVE_ACCENT,
            RowState::Expired => EXPIRED_ACCENT,
        }
    }
}

/// One task line of the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub name: String,
    pub deadline: DateTime<Utc>,
    pub state: RowState,
}

impl RowView {
    /// Build a row for `task`, rendering it as expired once its deadline is
    /// no longer ahead of `now`.
    pub fn for_task(task: &ActiveTask<'_>, now: DateTime<Utc>, monotonic_now: StdDuration) -> Self {
        let state = if task.deadline > now {
            let breakdown = CountdownBreakdown::from_remaining(task.remaining(now));
            RowState::Active {
                days_label: breakdown.days_label(),
                hours_label: breakdown.hours_label(),
                chronometer: breakdown.anchor_at(monotonic_now),
            }
        } else {
            RowState::Expired
        };

        Self {
            name: task.name().to_string(),
            deadline: task.deadline,
            state,
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self.state, RowState::Expired)
    }

    /// Single-line rendering, e.g. `Pay rent  5d:12h:59:58`.
    pub fn render(&self, monotonic_now: StdDuration) -> String {
        match &self.state {
            RowState::Active {
                days_label,
                hours_label,
                chronometer,
            } => format!(
                "{}  {}{}{}",
                self.name,
                days_label.as_deref().unwrap_or(""),
                hours_label,
                chronometer.display_at(monotonic_now)
            ),
            RowState::Expired => format!("{}  {}", self.name, EXPIRED_LABEL),
        }
    }
}

/// Header shown by the summary layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BannerView {
    Nearest(RowView),
    /// Every pending task is past due; shows the most recent one.
    Expired(RowView),
    Empty,
}

impl BannerView {
    pub fn render(&self, monotonic_now: StdDuration) -> String {
        match self {
            BannerView::Nearest(row) => format!("Next up: {}", row.render(monotonic_now)),
            BannerView::Expired(row) => format!("Last due: {}", row.render(monotonic_now)),
            BannerView::Empty => "No upcoming deadlines".to_string(),
        }
    }
}

/// Everything a renderer needs for one refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetView {
    pub layout: WidgetLayout,
    pub banner: Option<BannerView>,
    pub rows: Vec<RowView>,
}

impl WidgetView {
    pub fn empty(layout: WidgetLayout) -> Self {
        let banner = match layout {
            WidgetLayout::TaskList => None,
            WidgetLayout::NearestSummary => Some(BannerView::Empty),
        };
        Self {
            layout,
            banner,
            rows: Vec::new(),
        }
    }

    pub fn count(&self) -> usize {
        self.rows.len()
    }

    /// Bounds-checked row lookup; renderers must treat `count()` as the
    /// only valid range.
    pub fn row_at(&self, position: usize) -> Option<&RowView> {
        self.rows.get(position)
    }

    pub fn render_lines(&self, monotonic_now: StdDuration) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        if let Some(banner) = &self.banner {
            lines.push(banner.render(monotonic_now));
        }
        if self.rows.is_empty() && self.banner.is_none() {
            lines.push("No upcoming deadlines".to_string());
        }
        lines.extend(self.rows.iter().map(|row| row.render(monotonic_now)));
        lines
    }
}
