//! Remote view-event feed.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::views::{
    data::parse_view_timestamp, errors::ViewsServiceError, records::ViewEvent,
    service::ViewEventsSource,
};

/// Reads view events from an HTTP endpoint returning a JSON array.
#[derive(Debug, Clone)]
pub struct HttpViewFeed {
    url: String,
    http: Client,
}

impl HttpViewFeed {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http: Client::new(),
        }
    }

    /// Decode a feed body. Entries that are not objects are dropped; fields
    /// that cannot be read are left empty.
    pub(crate) fn parse_entries(entries: Vec<Value>) -> Vec<ViewEvent> {
        let total = entries.len();

        let events: Vec<ViewEvent> = entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value::<FeedEntry>(entry).ok())
            .map(ViewEvent::from)
            .collect();

        if events.len() < total {
            warn!(
                dropped = total - events.len(),
                "view feed contained entries that are not objects"
            );
        }

        events
    }
}

#[async_trait]
impl ViewEventsSource for HttpViewFeed {
    #[tracing::instrument(name = "views.feed.fetch_all", skip(self), fields(url = %self.url), err)]
    async fn fetch_all(&self) -> Result<Vec<ViewEvent>, ViewsServiceError> {
        let response = self.http.get(&self.url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(ViewsServiceError::UnexpectedResponse(format!(
                "feed request failed with status {status}: {text}"
            )));
        }

        let entries: Vec<Value> = response.json().await?;
        let events = Self::parse_entries(entries);

        debug!(returned = events.len(), "fetched view feed");

        Ok(events)
    }
}

#[derive(Debug, Deserialize)]
struct FeedEntry {
    #[serde(default, alias = "id")]
    subject: Option<Value>,

    #[serde(default, alias = "ip")]
    ip_address: Option<Value>,

    #[serde(default, alias = "date")]
    viewed_at: Option<Value>,
}

fn scalar_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(text) if !text.is_empty() => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

impl From<FeedEntry> for ViewEvent {
    fn from(entry: FeedEntry) -> Self {
        Self {
            subject: scalar_text(entry.subject),
            ip_address: scalar_text(entry.ip_address),
            viewed_at: scalar_text(entry.viewed_at).and_then(|text| parse_view_timestamp(&text)),
        }
    }
}
