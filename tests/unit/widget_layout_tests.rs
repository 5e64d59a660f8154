// Unit tests for the two widget layouts
// Both adapters must agree on the rows; only the banner differs

use std::time::Duration as StdDuration;

use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use test_case::test_case;

use deadline_dash::models::settings::WidgetLayout;
use deadline_dash::models::task::TaskRecord;
use deadline_dash::services::countdown::DeadlineSnapshot;
use deadline_dash::services::widget::{
    presenter_for, BannerView, RowState, WidgetView, ACTIVE_ACCENT,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap()
}

fn sample() -> Vec<TaskRecord> {
    vec![
        TaskRecord::new("Essay", "2026-01-15T00:45:10.000Z"),
        TaskRecord::new("Groceries", "2026-01-14T18:00:00.000Z"),
        TaskRecord::new("Taxes", "2026-04-15T00:00:00.000Z"),
        TaskRecord::new("Laundry", "2026-01-15T06:00:00.000Z").completed(),
    ]
}

fn present(layout: WidgetLayout, tasks: &[TaskRecord]) -> WidgetView {
    presenter_for(layout).present(&DeadlineSnapshot::parse(tasks), now(), StdDuration::ZERO)
}

#[test_case(WidgetLayout::TaskList ; "task list")]
#[test_case(WidgetLayout::NearestSummary ; "nearest summary")]
fn test_layouts_share_rows(layout: WidgetLayout) {
    let view = present(layout, &sample());
    let names: Vec<_> = view.rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, vec!["Essay", "Taxes"]);
    assert!(view.rows.iter().all(|row| row.state.accent() == ACTIVE_ACCENT));
}

#[test_case(WidgetLayout::TaskList, false ; "task list has no banner")]
#[test_case(WidgetLayout::NearestSummary, true ; "summary has banner")]
fn test_banner_presence(layout: WidgetLayout, has_banner: bool) {
    let view = present(layout, &sample());
    assert_eq!(view.banner.is_some(), has_banner);
}

#[test]
fn test_under_an_hour_hides_days() {
    let view = present(WidgetLayout::TaskList, &sample());
    match &view.rows[0].state {
        RowState::Active {
            days_label,
            hours_label,
            chronometer,
        } => {
            assert_eq!(days_label, &None);
            assert_eq!(hours_label, "00h:");
            assert_eq!(chronometer.display_at(StdDuration::ZERO), "45:10");
        }
        RowState::Expired => panic!("essay should be active"),
    }
}

#[test]
fn test_summary_banner_is_nearest_task() {
    let view = present(WidgetLayout::NearestSummary, &sample());
    match view.banner {
        Some(BannerView::Nearest(row)) => assert_eq!(row.name, "Essay"),
        other => panic!("unexpected banner {:?}", other),
    }
}

#[test]
fn test_summary_banner_empty_when_everything_completed() {
    let tasks = vec![TaskRecord::new("Laundry", "2026-01-10T06:00:00.000Z").completed()];
    let view = present(WidgetLayout::NearestSummary, &tasks);
    assert_eq!(view.banner, Some(BannerView::Empty));
    assert_eq!(
        view.render_lines(StdDuration::ZERO),
        vec!["No upcoming deadlines".to_string()]
    );
}

#[test_case(WidgetLayout::TaskList ; "task list")]
#[test_case(WidgetLayout::NearestSummary ; "nearest summary")]
fn test_empty_view_matches_empty_snapshot(layout: WidgetLayout) {
    assert_eq!(present(layout, &[]), WidgetView::empty(layout));
}
