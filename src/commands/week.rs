use anyhow::Result;
use chrono::Local;
use clap::Args;

use haru_core::query::{View, filtered_events};
use haru_core::validation::parse_date;

use crate::client::Client;
use crate::render;

#[derive(Args)]
pub struct WeekArgs {
    /// Reference date (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Case-insensitive search over title, description and location
    #[arg(short, long, default_value = "")]
    pub search: String,
}

pub async fn run(client: &Client, args: WeekArgs) -> Result<()> {
    let reference = match args.date.as_deref() {
        Some(s) => parse_date(s)?,
        None => Local::now().date_naive(),
    };

    let events = client.list_events().await?;
    let filtered = filtered_events(&events, &args.search, reference, View::Week);

    for line in render::week_lines(reference, &filtered) {
        println!("{}", line);
    }

    Ok(())
}
