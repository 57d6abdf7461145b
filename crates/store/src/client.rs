//! The `RecordStore` capability trait.

use farmdesk_core::RecordId;

use crate::contract::{
    DeleteRequest, DeleteResponse, FetchParams, FetchResponse, GetParams, GetResponse,
    WriteRequest, WriteResponse,
};

/// Transport-level failure talking to the store.
///
/// These are distinct from failure *envelopes*: a store that answers
/// `success: false` still produced a response, and interpreting that envelope
/// belongs to the access layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("network error: {0}")]
    Network(String),
    #[error("store error ({0}): {1}")]
    Api(u16, String),
    #[error("decode error: {0}")]
    Decode(String),
}

/// Request/response access to named tables of records.
///
/// Injected where needed; never constructed behind a global. The HTTP
/// implementation lives in [`crate::http`], tests use scripted doubles.
#[async_trait::async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch all records of a table with a field projection and optional sort.
    async fn fetch_records(
        &self,
        table: &str,
        params: FetchParams,
    ) -> Result<FetchResponse, StoreError>;

    /// Fetch a single record by identifier.
    async fn get_record_by_id(
        &self,
        table: &str,
        id: RecordId,
        params: GetParams,
    ) -> Result<GetResponse, StoreError>;

    /// Create a batch of records; per-record outcomes in the response.
    async fn create_records(
        &self,
        table: &str,
        request: WriteRequest,
    ) -> Result<WriteResponse, StoreError>;

    /// Update a batch of records; each record carries its own `Id`.
    async fn update_records(
        &self,
        table: &str,
        request: WriteRequest,
    ) -> Result<WriteResponse, StoreError>;

    /// Delete a batch of records by identifier.
    async fn delete_records(
        &self,
        table: &str,
        request: DeleteRequest,
    ) -> Result<DeleteResponse, StoreError>;
}
