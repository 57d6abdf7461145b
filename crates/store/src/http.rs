//! HTTP implementation of [`RecordStore`].

use farmdesk_core::RecordId;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::{RecordStore, StoreError};
use crate::contract::{
    DeleteRequest, DeleteResponse, FetchParams, FetchResponse, GetParams, GetResponse,
    WriteRequest, WriteResponse,
};

/// Record store client over HTTP.
///
/// Holds a base URL and an optional bearer token; constructed once at the
/// composition root and shared behind an `Arc<dyn RecordStore>`.
pub struct HttpRecordStore {
    base_url: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl HttpRecordStore {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            token: None,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_token(base_url: String, token: String) -> Self {
        Self {
            base_url,
            token: Some(token),
            client: reqwest::Client::new(),
        }
    }

    async fn post_json<B, T>(&self, url: String, body: &B) -> Result<T, StoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut req = self.client.post(&url).json(body);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            tracing::warn!(%url, status = status.as_u16(), "store request rejected");
            return Err(StoreError::Api(status.as_u16(), text));
        }

        resp.json::<T>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    fn table_url(&self, table: &str, op: &str) -> String {
        format!("{}/api/v1/tables/{}/{}", self.base_url, table, op)
    }
}

#[async_trait::async_trait]
impl RecordStore for HttpRecordStore {
    async fn fetch_records(
        &self,
        table: &str,
        params: FetchParams,
    ) -> Result<FetchResponse, StoreError> {
        self.post_json(self.table_url(table, "fetch"), &params).await
    }

    async fn get_record_by_id(
        &self,
        table: &str,
        id: RecordId,
        params: GetParams,
    ) -> Result<GetResponse, StoreError> {
        let url = self.table_url(table, &format!("records/{id}"));
        self.post_json(url, &params).await
    }

    async fn create_records(
        &self,
        table: &str,
        request: WriteRequest,
    ) -> Result<WriteResponse, StoreError> {
        self.post_json(self.table_url(table, "create"), &request).await
    }

    async fn update_records(
        &self,
        table: &str,
        request: WriteRequest,
    ) -> Result<WriteResponse, StoreError> {
        self.post_json(self.table_url(table, "update"), &request).await
    }

    async fn delete_records(
        &self,
        table: &str,
        request: DeleteRequest,
    ) -> Result<DeleteResponse, StoreError> {
        self.post_json(self.table_url(table, "delete"), &request).await
    }
}
