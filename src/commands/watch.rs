use std::time::Duration;

use anyhow::Result;
use owo_colors::OwoColorize;

use haru_core::scheduler::Notifier;

use crate::client::Client;

const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Poll the server once a second and print an alert the first time each
/// event enters its notification window.
pub async fn run(client: &Client) -> Result<()> {
    let mut notifier = Notifier::new();
    let mut interval = tokio::time::interval(POLL_INTERVAL);

    loop {
        interval.tick().await;

        let events = match client.list_events().await {
            Ok(events) => events,
            Err(err) => {
                eprintln!("{}", format!("{:#}", err).red());
                continue;
            }
        };

        for alert in notifier.tick(&events) {
            println!("{} {}", "알림:".yellow().bold(), alert.message.yellow());
        }
    }
}
