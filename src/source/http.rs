//! HTTP implementation of [`RowSource`] against the match service.
//!
//! Non-success statuses map to errors; the caller decides what a failed
//! fetch means for its view (page-level error for rows, contained
//! degradation for detail lookups). Nothing here retries.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::config::Config;
use crate::model::{BuyersResponse, DetailRecord, Grade, MatchDetailResponse, SellersResponse};
use crate::source::{EntityRef, MatchGroup, RowSource};

pub struct HttpRowSource {
    client: Client,
    base: Url,
}

impl HttpRowSource {
    pub fn new(cfg: &Config) -> Result<Self> {
        let base = Url::parse(&cfg.api_base)
            .map_err(|e| anyhow!("invalid api base {}: {}", cfg.api_base, e))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());
        Ok(Self { client, base })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|e| anyhow!("bad endpoint {}: {}", path, e))
    }

    fn detail_url(&self, entity: &EntityRef, group: MatchGroup, grade: Grade) -> Result<Url> {
        let mut url = self.endpoint("/api/dashboard/matches")?;
        {
            let mut q = url.query_pairs_mut();
            match entity {
                EntityRef::Seller { company_id } => {
                    q.append_pair("entity_id", company_id);
                    q.append_pair("entity_type", "seller");
                }
                EntityRef::Buyer { kind, buyer_id } => {
                    q.append_pair("entity_id", &buyer_id.to_string());
                    q.append_pair("entity_type", kind.as_str());
                }
            }
            q.append_pair("group", group.as_str());
            q.append_pair("grade", grade.as_str());
        }
        Ok(url)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T> {
        let resp = self.client.get(url.clone()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(anyhow!("{} returned {}", url.path(), status));
        }
        Ok(resp.json().await?)
    }
}

#[async_trait]
impl RowSource for HttpRowSource {
    async fn fetch_sellers(&self) -> Result<SellersResponse> {
        self.get_json(self.endpoint("/api/dashboard/sellers")?).await
    }

    async fn fetch_buyers(&self) -> Result<BuyersResponse> {
        self.get_json(self.endpoint("/api/dashboard/buyers")?).await
    }

    async fn fetch_match_detail(
        &self,
        entity: &EntityRef,
        group: MatchGroup,
        grade: Grade,
    ) -> Result<Vec<DetailRecord>> {
        let url = self.detail_url(entity, group, grade)?;
        let resp: MatchDetailResponse = self.get_json(url).await?;
        Ok(resp.items)
    }
}
