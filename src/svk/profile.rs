use reqwest::{Client, Url, header::CONTENT_TYPE};

use crate::{
    config::Config,
    error::FetchError,
    types::{ProfileBody, ProxyQuery},
};

#[derive(Debug, Clone)]
pub struct ProfileFetcher {
    http: Client,
    base_url: Url,
}

impl ProfileFetcher {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.upstream_timeout).build()?;

        Ok(ProfileFetcher {
            http,
            base_url: config.profile_url.clone(),
        })
    }

    /// Query values are percent-encoded; the caller's raw input never lands
    /// in the URL unescaped.
    pub fn profile_url(&self, query: &ProxyQuery) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("groupByType", "0")
            .append_pair("periodFrom", &query.period_from)
            .append_pair("periodTo", &query.period_to)
            .append_pair("networkAreaIdString", &query.network_area_id);
        url
    }

    /// Downloads the profile and returns the raw body bytes, whatever the
    /// downstream status or charset.
    pub async fn fetch(&self, query: &ProxyQuery) -> Result<ProfileBody, FetchError> {
        let res = self
            .http
            .get(self.profile_url(query))
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let content_type = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = res.bytes().await.map_err(FetchError::Body)?;

        Ok(ProfileBody { content_type, body })
    }
}
