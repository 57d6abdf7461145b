//! `farmdesk-store` — record store client.
//!
//! The remote record store is an external collaborator reached through a
//! request/response contract over named tables. This crate owns the wire
//! shapes of that contract, the `RecordStore` capability trait, and the HTTP
//! implementation used in production. The trait is the substitution seam:
//! tests inject scripted doubles instead of the HTTP client.

pub mod client;
pub mod contract;
pub mod http;

pub use client::{RecordStore, StoreError};
pub use contract::{
    DeleteRequest, DeleteResponse, DeleteResult, FetchParams, FetchResponse, FieldError,
    FieldSpec, GetParams, GetResponse, OrderBy, SortType, WireRecord, WriteRequest,
    WriteResponse, WriteResult,
};
pub use http::HttpRecordStore;
