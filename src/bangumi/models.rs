use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::constants::pagination::{DEFAULT_LIMIT, DEFAULT_OFFSET, LISTING_LIMIT};

/// Subject category codes used by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum SubjectType {
    Book = 1,
    #[default]
    Anime = 2,
    Music = 3,
    Game = 4,
    Real = 6,
}

impl SubjectType {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Book),
            2 => Some(Self::Anime),
            3 => Some(Self::Music),
            4 => Some(Self::Game),
            6 => Some(Self::Real),
            _ => None,
        }
    }
}

/// Result ordering for subject search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Match,
    Heat,
    Rank,
    Score,
}

/// Filter block of the search request body
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SearchFilter {
    #[serde(rename = "type")]
    pub subject_type: Vec<SubjectType>,
    /// Comparison strings such as `">=2024-01-01"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub air_date: Option<Vec<String>>,
    /// Comparison strings such as `">=1"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<Vec<String>>,
}

/// Request body for POST /v0/search/subjects
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchSubjectsRequest {
    pub keyword: String,
    pub sort: SortOrder,
    pub filter: SearchFilter,
}

/// Page window appended to the URL as `limit`/`offset` query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u32,
}

impl Pagination {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }

    /// Page window used by the popular and top rated listings
    pub fn listing() -> Self {
        Self::new(LISTING_LIMIT, DEFAULT_OFFSET)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, DEFAULT_OFFSET)
    }
}

/// Caller options for a keyword search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub sort: SortOrder,
    pub pagination: Pagination,
    pub subject_types: Vec<SubjectType>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            sort: SortOrder::Match,
            pagination: Pagination::default(),
            subject_types: vec![SubjectType::Anime],
        }
    }
}
