use anyhow::{Result, bail};
use clap::Args;
use owo_colors::OwoColorize;

use haru_core::event::{Repeat, RepeatType};
use haru_core::config::Options;
use haru_core::overlap::find_overlapping_events;
use haru_core::validation::{parse_date, parse_time, validate};

use crate::client::Client;
use crate::commands::new::{check_options, confirm_overlap};

#[derive(Args)]
pub struct EditArgs {
    /// Event id
    pub id: String,

    #[arg(long)]
    pub title: Option<String>,

    /// Date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Start time (HH:MM)
    #[arg(long)]
    pub start: Option<String>,

    /// End time (HH:MM)
    #[arg(long)]
    pub end: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    /// Event category
    #[arg(long)]
    pub category: Option<String>,

    /// Recurrence frequency (none, daily, weekly, monthly, yearly)
    #[arg(long)]
    pub repeat: Option<String>,

    /// Recurrence interval
    #[arg(long)]
    pub interval: Option<u32>,

    /// Recurrence end date (YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<String>,

    /// Minutes before start to alert
    #[arg(long)]
    pub notify: Option<i64>,

    /// Skip the overlap confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

pub async fn run(client: &Client, args: EditArgs) -> Result<()> {
    let options = Options::load()?;
    let events = client.list_events().await?;

    let Some(event) = events.iter().find(|e| e.id == args.id) else {
        bail!("Event not found: {}", args.id);
    };

    let mut form = event.to_form();
    if let Some(title) = args.title {
        form.title = title;
    }
    if let Some(date) = args.date.as_deref() {
        form.date = parse_date(date)?;
    }
    if let Some(start) = args.start.as_deref() {
        form.start_time = parse_time(start)?;
    }
    if let Some(end) = args.end.as_deref() {
        form.end_time = parse_time(end)?;
    }
    if let Some(description) = args.description {
        form.description = description;
    }
    if let Some(location) = args.location {
        form.location = location;
    }
    if let Some(category) = args.category {
        form.category = category;
    }
    if let Some(repeat) = args.repeat.as_deref() {
        let repeat_type: RepeatType = repeat.parse()?;
        form.repeat = if repeat_type == RepeatType::None {
            Repeat::none()
        } else {
            Repeat { repeat_type, ..form.repeat }
        };
    }
    if let Some(interval) = args.interval {
        form.repeat.interval = interval;
    }
    if let Some(until) = args.until.as_deref() {
        form.repeat.end_date = Some(parse_date(until)?);
    }
    if let Some(notify) = args.notify {
        form.notification_time = notify;
    }

    validate(&form)?;
    check_options(&form, &options)?;

    let overlapping = find_overlapping_events(&form, Some(&args.id), &events);
    if !confirm_overlap(&overlapping, args.yes)? {
        println!("Cancelled");
        return Ok(());
    }

    let updated = client.update_event(&args.id, &form).await?;
    println!("{}", format!("Updated: {} ({})", updated.title, updated.id).green());

    Ok(())
}
