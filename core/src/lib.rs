//! Client core for the nearest-places service.
//!
//! # Overview
//! Builds the `GET /api/places/nearest` request, hands it to a [`Transport`],
//! and interprets the response. Request building and response parsing are
//! plain functions over [`HttpRequest`] / [`HttpResponse`] values, so they can
//! be exercised without a network.
//!
//! # Design
//! - `PlacesClient` is stateless; it holds only the base URL it was built with.
//! - The base URL comes from an explicit [`ClientConfig`]. Reading the
//!   environment happens once, in [`ClientConfig::from_env`], never per call.
//! - Failures are an [`ApiError`] value: a non-2xx status, an undecodable body,
//!   or a transport fault. Nothing is retried.
//! - The response body is returned as an opaque `serde_json::Value`; its shape
//!   belongs to the service.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::PlacesClient;
pub use config::{ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse};
pub use transport::{ReqwestTransport, Transport};
pub use types::{NearestQuery, DEFAULT_LIMIT};
