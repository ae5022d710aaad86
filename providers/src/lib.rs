//! Typed clients and view-model transforms for the third-party APIs the
//! dashboard aggregates. Everything here is plain async Rust with no DOM
//! dependencies, so the decoding and transform logic is testable natively.

pub mod books;
pub mod codeforces;
pub mod error;
pub mod fanout;
pub mod generation;
pub mod github;
pub mod news;
pub mod omdb;
pub mod pager;
pub mod query;
pub mod weather;
pub mod websearch;

pub use error::{ProviderError, error_hint};
pub use pager::ResultSet;
pub use query::QueryState;
