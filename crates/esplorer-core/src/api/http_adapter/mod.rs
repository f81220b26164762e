//! Esplora REST client over `reqwest`.
//!
//! Implements [`EsploraApi`](super::EsploraApi) with one shared HTTP
//! connection pool, plain GET requests and serde decoding.

mod client;
mod connection;
mod endpoint;
mod parsing;

pub use client::HttpEsploraClient;
