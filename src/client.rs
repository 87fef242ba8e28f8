//! HTTP client for the haru-server event API.
//!
//! Failures are surfaced verbatim to the caller; there is no retry, and
//! nothing is mutated locally on failure.

use anyhow::{Context, Result};
use serde::Deserialize;

use haru_core::{Event, EventForm};

pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct EventsResponse {
    events: Vec<Event>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

impl Client {
    pub fn new(base_url: String) -> Self {
        Client {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    async fn decode_error(resp: reqwest::Response) -> anyhow::Error {
        let status = resp.status();
        match resp.json::<ErrorResponse>().await {
            Ok(err) => anyhow::anyhow!("{}", err.error),
            Err(_) => anyhow::anyhow!("Server returned {}", status),
        }
    }

    /// GET /api/events
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        let resp = self
            .http
            .get(format!("{}/api/events", self.base_url))
            .send()
            .await
            .context("Failed to connect to haru-server")?;

        if !resp.status().is_success() {
            return Err(Self::decode_error(resp).await);
        }

        let body: EventsResponse = resp.json().await?;
        Ok(body.events)
    }

    /// POST /api/events
    pub async fn create_event(&self, form: &EventForm) -> Result<Event> {
        let resp = self
            .http
            .post(format!("{}/api/events", self.base_url))
            .json(form)
            .send()
            .await
            .context("Failed to connect to haru-server")?;

        if !resp.status().is_success() {
            return Err(Self::decode_error(resp).await);
        }

        Ok(resp.json().await?)
    }

    /// PUT /api/events/:id
    pub async fn update_event(&self, id: &str, form: &EventForm) -> Result<Event> {
        let resp = self
            .http
            .put(format!("{}/api/events/{}", self.base_url, id))
            .json(form)
            .send()
            .await
            .context("Failed to connect to haru-server")?;

        if !resp.status().is_success() {
            return Err(Self::decode_error(resp).await);
        }

        Ok(resp.json().await?)
    }

    /// DELETE /api/events/:id
    pub async fn delete_event(&self, id: &str) -> Result<()> {
        let resp = self
            .http
            .delete(format!("{}/api/events/{}", self.base_url, id))
            .send()
            .await
            .context("Failed to connect to haru-server")?;

        if !resp.status().is_success() {
            return Err(Self::decode_error(resp).await);
        }

        Ok(())
    }
}
