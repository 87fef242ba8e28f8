use anyhow::Result;
use owo_colors::OwoColorize;

use crate::client::Client;

pub async fn run(client: &Client, id: &str) -> Result<()> {
    client.delete_event(id).await?;
    println!("{}", format!("Deleted: {}", id).green());
    Ok(())
}
