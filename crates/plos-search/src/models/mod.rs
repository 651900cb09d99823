//! Data models for PLOS search API entities.
//!
//! All models use `#[serde(default)]` for optional fields; names match the
//! API's snake_case document schema.

mod article;

pub use article::{Article, ResponseBody, SearchResponse};
