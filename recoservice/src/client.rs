use anyhow::{anyhow, bail, Context};
use reqwest::{StatusCode, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::RetryTransientMiddleware;
use reqwest_tracing::TracingMiddleware;

use crate::api::{RecoReply, UserId};

const MAX_RETRIES: u32 = 3;

pub struct RecoServiceClient {
    url: Url,
    client: ClientWithMiddleware,
}

impl RecoServiceClient {
    pub fn new(url: &str) -> anyhow::Result<Self> {
        let url = Url::parse(url).context("Invalid service url")?;
        if url.cannot_be_a_base() {
            bail!("Service url {} can not be used as a base", url)
        }
        let reqwest_client = reqwest::Client::builder()
            .build()
            .context("Failed to build reqwest client")?;
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(MAX_RETRIES);
        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self { url, client })
    }

    /// Appends percent-encoded path segments to the service url
    fn endpoint(&self, segments: &[&str]) -> anyhow::Result<Url> {
        let mut url = self.url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("Service url {} can not be used as a base", self.url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Calls GET /health endpoint
    pub async fn health(&self) -> anyhow::Result<String> {
        let response = self.client.get(self.endpoint(&["health"])?).send().await?;
        if !response.status().is_success() {
            bail!("Health check failed with status {}", response.status())
        }
        Ok(response.json().await?)
    }

    /// Calls GET /reco/{model_name}/{user_id} endpoint
    /// Returns recommendations, or the error entries if the model or user was not found
    /// and error in case of any other failure
    pub async fn get_reco(&self, model_name: &str, user_id: &UserId) -> anyhow::Result<RecoReply> {
        let user_id = user_id.to_string();
        let url = self.endpoint(&["reco", model_name, &user_id])?;
        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            Ok(RecoReply::NotFound(
                response
                    .json()
                    .await
                    .context("Failed to parse error response")?,
            ))
        } else if response.status().is_success() {
            Ok(RecoReply::Recommendations(
                response
                    .json()
                    .await
                    .context("Failed to parse recommendations")?,
            ))
        } else {
            let status = response.status();
            let error = response.text().await.unwrap_or_default();
            bail!("Failed to get recommendations ({}) {}", status, error)
        }
    }
}
