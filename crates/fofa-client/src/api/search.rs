//! Search API endpoints.

use crate::client::Reply;
use crate::FofaClient;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use fofa_core::{FieldMapping, Record, Result, SearchResults};
use tracing::debug;

const SEARCH_PATH: &str = "/api/v1/search/all";

/// Search API endpoints
pub struct SearchApi<'a> {
    client: &'a FofaClient,
}

impl<'a> SearchApi<'a> {
    pub(crate) const fn new(client: &'a FofaClient) -> Self {
        Self { client }
    }

    /// Search FOFA with a query expression
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let records = client
    ///     .search()
    ///     .query(r#"domain="example.com""#)
    ///     .fields("ip,port")
    ///     .records()
    ///     .await?;
    /// ```
    #[must_use]
    pub fn query(&self, query: impl Into<String>) -> SearchRequestBuilder<'a> {
        SearchRequestBuilder::new(self.client, query.into())
    }
}

/// Builder for search requests
pub struct SearchRequestBuilder<'a> {
    client: &'a FofaClient,
    query: String,
    mapping: FieldMapping,
    page: u32,
}

impl<'a> SearchRequestBuilder<'a> {
    fn new(client: &'a FofaClient, query: String) -> Self {
        Self {
            client,
            query,
            mapping: FieldMapping::default(),
            page: 1,
        }
    }

    /// Set the page number; passed through as given
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Choose the columns to return, e.g. `"ip,port"`
    #[must_use]
    pub fn fields(mut self, fields: impl Into<FieldMapping>) -> Self {
        self.mapping = fields.into();
        self
    }

    /// The query expression as it will be sent in `qbase64`
    #[must_use]
    pub fn encoded_query(&self) -> String {
        STANDARD.encode(self.query.as_bytes())
    }

    /// Execute the search and return the reply body untouched
    pub async fn raw(self) -> Result<Vec<u8>> {
        self.fetch().await?.into_body()
    }

    /// Execute the search and parse the full reply
    pub async fn send(self) -> Result<SearchResults> {
        let reply = self.fetch().await?;
        let results = reply.parse(&self.mapping)?;
        debug!(size = results.size, records = results.len(), "search parsed");
        Ok(results)
    }

    /// Execute the search and return only the records
    pub async fn records(self) -> Result<Vec<Record>> {
        self.send().await.map(|results| results.records)
    }

    async fn fetch(&self) -> Result<Reply> {
        let qbase64 = self.encoded_query();
        let fields = self.mapping.to_query_value();
        let page = self.page.to_string();
        debug!(query = %self.query, page = %page, fields = %fields, "search request");

        let params = [
            ("qbase64", qbase64.as_str()),
            ("fields", fields.as_str()),
            ("page", page.as_str()),
        ];

        self.client.get(SEARCH_PATH, &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_is_base64_encoded() {
        let client = FofaClient::new("e", "k").unwrap();
        let request = client.search().query(r#"domain="example.com""#);
        assert_eq!(request.encoded_query(), "ZG9tYWluPSJleGFtcGxlLmNvbSI=");
    }

    #[test]
    fn test_defaults() {
        let client = FofaClient::new("e", "k").unwrap();
        let request = client.search().query("port=\"80\"");
        assert_eq!(request.page, 1);
        assert_eq!(request.mapping, FieldMapping::default());

        let request = request.page(3).fields("ip");
        assert_eq!(request.page, 3);
        assert_eq!(request.mapping.to_query_value(), "ip");
    }
}
