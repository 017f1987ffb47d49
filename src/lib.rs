//! Bangumi (bgm.tv) catalog API client library
//!
//! This library provides async access to the Bangumi calendar, subject,
//! comment and search endpoints, returning parsed JSON.
//!
//! # Examples
//!
//! ```rust,no_run
//! use bangumi_client::bangumi::{BangumiClient, Pagination, SearchOptions, create_http_client_with_timeout};
//! use bangumi_client::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let client = BangumiClient::new(create_http_client_with_timeout(30)?);
//!
//!     let subject = client.get_subject(42).await?;
//!     println!("{}", subject["name"]);
//!
//!     let results = client.search_subjects("frieren", &SearchOptions::default()).await?;
//!     println!("{} results", results["total"]);
//!
//!     let popular = client.get_popular_anime(Pagination::listing()).await?;
//!     println!("{popular}");
//!
//!     Ok(())
//! }
//! ```

pub mod bangumi;
pub mod config;
pub mod constants;
pub mod error;

// Re-export commonly used types for convenience
pub use bangumi::{BangumiClient, Host, Pagination, SearchOptions, SortOrder, SubjectType};
pub use config::Config;
pub use error::AppError;
