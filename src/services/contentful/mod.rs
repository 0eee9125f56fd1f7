use crate::config::ContentfulConfig;
use crate::domain::Entry;
use crate::error::{BuildError, BuildResult};
use crate::services::{ContentQuery, ContentSource};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info};

pub mod model;

use self::model::{ApiError, EntryCollection};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Reads entries from the Contentful delivery (or preview) API.
pub struct ContentfulClient {
    client: Client,
    config: ContentfulConfig,
}

impl ContentfulClient {
    pub fn new(config: ContentfulConfig) -> BuildResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| BuildError::remote(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn entries_url(&self, query: &ContentQuery, skip: usize) -> BuildResult<Url> {
        let base = format!(
            "https://{}/spaces/{}/environments/{}/entries",
            self.config.host, self.config.space_id, self.config.environment
        );

        let mut params = vec![
            ("content_type", query.content_type.clone()),
            ("order", query.order.to_string()),
            ("limit", self.config.page_size.to_string()),
            ("skip", skip.to_string()),
            ("include", "1".to_string()),
        ];
        if let Some(locale) = &self.config.locale {
            params.push(("locale", locale.clone()));
        }

        Url::parse_with_params(&base, &params)
            .map_err(|e| BuildError::remote(format!("Invalid entries URL {base}: {e}")))
    }

    async fn fetch_page(&self, query: &ContentQuery, skip: usize) -> BuildResult<EntryCollection> {
        let url = self.entries_url(query, skip)?;
        debug!(%url, "requesting entries page");

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.config.access_token)
            .send()
            .await
            .map_err(|e| {
                BuildError::remote(format!("Request to {} failed: {e}", self.config.host))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BuildError::remote(describe_api_error(status.as_u16(), &body)));
        }

        response
            .json::<EntryCollection>()
            .await
            .map_err(|e| BuildError::remote(format!("Unreadable entries response: {e}")))
    }
}

#[async_trait]
impl ContentSource for ContentfulClient {
    async fn fetch_entries(&self, query: &ContentQuery) -> BuildResult<Vec<Entry>> {
        info!(
            space = %self.config.space_id,
            content_type = %query.content_type,
            order = %query.order,
            "fetching entries"
        );

        let fields = &self.config.fields;
        collect_pages(|skip| async move {
            let page = self.fetch_page(query, skip).await?;
            let total = page.total;
            Ok::<_, BuildError>((page.into_entries(fields), total))
        })
        .await
    }
}

/// Walks `skip` forward until every entry the API reported in `total` has
/// been received. `fetch` returns one page and the reported total.
pub async fn collect_pages<F, Fut>(mut fetch: F) -> BuildResult<Vec<Entry>>
where
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = BuildResult<(Vec<Entry>, usize)>>,
{
    let mut entries = Vec::new();

    loop {
        let (page, total) = fetch(entries.len()).await?;
        let received = page.len();
        entries.extend(page);

        // an empty page ends the walk even if `total` moved under us
        if received == 0 || entries.len() >= total {
            break;
        }
    }

    Ok(entries)
}

pub fn describe_api_error(status: u16, body: &str) -> String {
    match serde_json::from_str::<ApiError>(body) {
        Ok(ApiError {
            message: Some(message),
            sys,
        }) => match sys {
            Some(sys) => format!("HTTP {status} ({}): {message}", sys.id),
            None => format!("HTTP {status}: {message}"),
        },
        _ if body.trim().is_empty() => format!("HTTP {status}"),
        _ => format!("HTTP {status}: {}", body.trim()),
    }
}
