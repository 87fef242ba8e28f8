use anyhow::Result;
use clap::Args;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use haru_core::config::Options;
use haru_core::event::{Event, EventForm, Repeat, RepeatType};
use haru_core::overlap::find_overlapping_events;
use haru_core::validation::{parse_date, parse_time, validate};

use crate::client::Client;
use crate::render::Render;

#[derive(Args)]
pub struct NewArgs {
    /// Event title
    #[arg(long)]
    pub title: String,

    /// Date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,

    /// Start time (HH:MM)
    #[arg(long)]
    pub start: String,

    /// End time (HH:MM)
    #[arg(long)]
    pub end: String,

    #[arg(long, default_value = "")]
    pub description: String,

    #[arg(long, default_value = "")]
    pub location: String,

    /// Event category
    #[arg(long, default_value = "업무")]
    pub category: String,

    /// Recurrence frequency (none, daily, weekly, monthly, yearly)
    #[arg(long, default_value = "none")]
    pub repeat: String,

    /// Recurrence interval
    #[arg(long, default_value_t = 1)]
    pub interval: u32,

    /// Recurrence end date (YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<String>,

    /// Minutes before start to alert
    #[arg(long, default_value_t = 10)]
    pub notify: i64,

    /// Skip the overlap confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

pub fn build_form(args: &NewArgs) -> Result<EventForm> {
    let repeat_type: RepeatType = args.repeat.parse()?;
    let repeat = if repeat_type == RepeatType::None {
        Repeat::none()
    } else {
        Repeat {
            repeat_type,
            interval: args.interval,
            end_date: args.until.as_deref().map(parse_date).transpose()?,
        }
    };

    Ok(EventForm {
        title: args.title.clone(),
        date: parse_date(&args.date)?,
        start_time: parse_time(&args.start)?,
        end_time: parse_time(&args.end)?,
        description: args.description.clone(),
        location: args.location.clone(),
        category: args.category.clone(),
        repeat,
        notification_time: args.notify,
    })
}

/// Category and notification offset come from closed, configured lists;
/// membership is checked here at the UI boundary, not in the core.
pub fn check_options(form: &EventForm, options: &Options) -> Result<()> {
    if !options.is_valid_category(&form.category) {
        anyhow::bail!(
            "Unknown category '{}'. Valid: {}",
            form.category,
            options.categories.join(", ")
        );
    }
    if !options.is_valid_notification(form.notification_time) {
        let valid: Vec<String> = options
            .notification_options
            .iter()
            .map(|o| o.value.to_string())
            .collect();
        anyhow::bail!(
            "Unknown notification offset '{}'. Valid: {}",
            form.notification_time,
            valid.join(", ")
        );
    }
    Ok(())
}

/// Print the colliding events and ask whether to save anyway.
pub fn confirm_overlap(overlapping: &[Event], assume_yes: bool) -> Result<bool> {
    if overlapping.is_empty() || assume_yes {
        return Ok(true);
    }

    println!("{}", "일정 겹침 경고: 다음 일정과 겹칩니다".yellow().bold());
    for event in overlapping {
        println!("  {} {}", event.date, event.render());
    }

    Ok(Confirm::new()
        .with_prompt("계속 진행하시겠습니까?")
        .default(false)
        .interact()?)
}

pub async fn run(client: &Client, args: NewArgs) -> Result<()> {
    let options = Options::load()?;
    let form = build_form(&args)?;
    validate(&form)?;
    check_options(&form, &options)?;

    let events = client.list_events().await?;
    let overlapping = find_overlapping_events(&form, None, &events);
    if !confirm_overlap(&overlapping, args.yes)? {
        println!("Cancelled");
        return Ok(());
    }

    let event = client.create_event(&form).await?;
    println!("{}", format!("Created: {} ({})", event.title, event.id).green());

    Ok(())
}
