//! Query builders: one method per API operation
//!
//! Each operation picks a path, a host and an optional body, then hands the
//! call to the request layer. The body builders are plain functions so the
//! exact request can be checked without any I/O.

use chrono::NaiveDate;
use serde_json::Value;
use tracing::instrument;

use super::models::{
    Pagination, SearchFilter, SearchOptions, SearchSubjectsRequest, SortOrder, SubjectType,
};
use super::request::{BangumiClient, Host};
use super::season::{air_date_lower_bound, today_local};
use super::urls::{build_calendar_path, build_comments_path, build_search_path, build_subject_path};
use crate::constants::search::RANKED_ONLY;
use crate::error::AppError;

/// Builds the search body for a keyword search.
pub fn search_request(keyword: impl Into<String>, options: &SearchOptions) -> SearchSubjectsRequest {
    SearchSubjectsRequest {
        keyword: keyword.into(),
        sort: options.sort,
        filter: SearchFilter {
            subject_type: options.subject_types.clone(),
            ..Default::default()
        },
    }
}

/// Builds the popular anime body using the season window of `today`.
pub fn popular_anime_request_for_date(today: NaiveDate) -> SearchSubjectsRequest {
    SearchSubjectsRequest {
        keyword: String::new(),
        sort: SortOrder::Heat,
        filter: SearchFilter {
            subject_type: vec![SubjectType::Anime],
            air_date: Some(vec![air_date_lower_bound(today)]),
            rank: None,
        },
    }
}

/// Builds the popular anime body for the current local date.
pub fn popular_anime_request() -> SearchSubjectsRequest {
    popular_anime_request_for_date(today_local())
}

/// Builds the top rated anime body. Unranked entries are always excluded.
pub fn top_rated_anime_request() -> SearchSubjectsRequest {
    SearchSubjectsRequest {
        keyword: String::new(),
        sort: SortOrder::Score,
        filter: SearchFilter {
            subject_type: vec![SubjectType::Anime],
            air_date: None,
            rank: Some(vec![RANKED_ONLY.to_string()]),
        },
    }
}

impl BangumiClient {
    /// Daily broadcast schedule.
    /// GET /calendar
    pub async fn get_calendar(&self) -> Result<Value, AppError> {
        self.get(&build_calendar_path(), Host::Api).await
    }

    /// Subject details by ID.
    /// GET /v0/subjects/{subject_id}
    pub async fn get_subject(&self, subject_id: u64) -> Result<Value, AppError> {
        self.get(&build_subject_path(subject_id), Host::Api).await
    }

    /// Subject comments, served by the secondary host.
    /// GET /p1/subjects/{subject_id}/comments?limit=&offset=
    pub async fn get_comments(
        &self,
        subject_id: u64,
        pagination: Pagination,
    ) -> Result<Value, AppError> {
        self.get(&build_comments_path(subject_id, pagination), Host::Next)
            .await
    }

    /// Keyword search.
    /// POST /v0/search/subjects?limit=&offset=
    #[instrument(skip(self, options))]
    pub async fn search_subjects(
        &self,
        keyword: &str,
        options: &SearchOptions,
    ) -> Result<Value, AppError> {
        let body = search_request(keyword, options);
        self.post(&build_search_path(options.pagination), &body, Host::Api)
            .await
    }

    /// Anime sorted by heat, aired since the start of the previous quarter.
    pub async fn get_popular_anime(&self, pagination: Pagination) -> Result<Value, AppError> {
        let body = popular_anime_request();
        self.post(&build_search_path(pagination), &body, Host::Api)
            .await
    }

    /// Ranked anime sorted by score.
    pub async fn get_top_rated_anime(&self, pagination: Pagination) -> Result<Value, AppError> {
        let body = top_rated_anime_request();
        self.post(&build_search_path(pagination), &body, Host::Api)
            .await
    }
}
