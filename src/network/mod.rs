//! HTTP networking module
//!
//! Provides the GET-with-query-parameters transport used by the search client.

mod client;

pub use client::{ApiResponse, HttpClient, QueryParams};
