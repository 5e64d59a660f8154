// Deadline Dash
// Renders the countdown widget from the host app's task cache

use std::path::PathBuf;
use std::thread;
use std::time::Duration as StdDuration;

use anyhow::{anyhow, Result};
use chrono::Utc;
use clap::Parser;

use deadline_dash::models::settings::WidgetLayout;
use deadline_dash::services::cache::SharedPrefsFile;
use deadline_dash::services::refresh::WidgetRefreshService;
use deadline_dash::services::settings::{resolve_cache_path, SettingsService};
use deadline_dash::utils::clock::{MonotonicClock, UptimeClock};

/// Longest sleep in watch mode, so the live timers are redrawn.
const TICK: StdDuration = StdDuration::from_secs(1);

#[derive(Parser)]
#[command(name = "deadline-dash", version, about = "Countdown widget for upcoming task deadlines")]
struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Shared preferences file holding the task cache
    #[arg(long)]
    cache: Option<PathBuf>,

    /// Widget layout: task-list or nearest-summary
    #[arg(long)]
    layout: Option<WidgetLayout>,

    /// Keep running, refreshing whenever the next deadline passes
    #[arg(long)]
    watch: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    let settings_service = match &cli.config {
        Some(path) => SettingsService::new(path),
        None => SettingsService::from_project_dirs(),
    };
    let mut settings = settings_service.get()?;
    if let Some(layout) = cli.layout {
        settings.layout = layout;
    }
    if let Some(cache) = cli.cache {
        settings.cache_path = Some(cache);
    }
    settings
        .validate()
        .map_err(|e| anyhow!("Invalid settings: {}", e))?;

    log::debug!("Settings loaded from {}", settings_service.path().display());

    let provider = SharedPrefsFile::new(resolve_cache_path(&settings), settings.tasks_key.clone());
    let clock = UptimeClock::new();
    let mut service = WidgetRefreshService::from_settings(&settings);
    log::info!(
        "Starting Deadline Dash ({:?} layout, cache {})",
        service.layout(),
        provider.path().display()
    );

    let mut outcome = service.refresh(&provider, &clock, Utc::now());
    print_view(&outcome.view.render_lines(clock.elapsed()));

    if !cli.watch {
        return Ok(());
    }

    loop {
        let wait = service
            .scheduler()
            .next_due_in(Utc::now())
            .map_or(TICK, |due| due.min(TICK));
        thread::sleep(wait);

        if service.scheduler().is_due(Utc::now()) {
            outcome = service.refresh(&provider, &clock, Utc::now());
        }
        print_view(&outcome.view.render_lines(clock.elapsed()));
    }
}

fn print_view(lines: &[String]) {
    println!("----");
    for line in lines {
        println!("{line}");
    }
}
