//! Path building utilities for API endpoints

use super::models::Pagination;

/// Builds the daily broadcast schedule path.
///
/// # Example
/// ```
/// use bangumi_client::bangumi::build_calendar_path;
///
/// assert_eq!(build_calendar_path(), "/calendar");
/// ```
pub fn build_calendar_path() -> String {
    "/calendar".to_string()
}

/// Builds the subject detail path. No query string is attached.
///
/// # Example
/// ```
/// use bangumi_client::bangumi::build_subject_path;
///
/// assert_eq!(build_subject_path(42), "/v0/subjects/42");
/// ```
pub fn build_subject_path(subject_id: u64) -> String {
    format!("/v0/subjects/{subject_id}")
}

/// Builds the subject comments path. Served by the secondary host.
///
/// # Example
/// ```
/// use bangumi_client::bangumi::{build_comments_path, Pagination};
///
/// let path = build_comments_path(42, Pagination::new(10, 5));
/// assert_eq!(path, "/p1/subjects/42/comments?limit=10&offset=5");
/// ```
pub fn build_comments_path(subject_id: u64, pagination: Pagination) -> String {
    format!(
        "/p1/subjects/{subject_id}/comments?{}",
        build_page_query(pagination)
    )
}

/// Builds the subject search path. Paging always travels in the URL, never in the body.
///
/// # Example
/// ```
/// use bangumi_client::bangumi::{build_search_path, Pagination};
///
/// let path = build_search_path(Pagination::default());
/// assert_eq!(path, "/v0/search/subjects?limit=20&offset=0");
/// ```
pub fn build_search_path(pagination: Pagination) -> String {
    format!("/v0/search/subjects?{}", build_page_query(pagination))
}

fn build_page_query(pagination: Pagination) -> String {
    format!("limit={}&offset={}", pagination.limit, pagination.offset)
}
