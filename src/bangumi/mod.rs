pub mod http_client;
pub mod models;
pub mod queries;
pub mod request;
pub mod season;
pub mod urls;

// Re-export the client surface
pub use http_client::create_http_client_with_timeout;
pub use models::{
    Pagination, SearchFilter, SearchOptions, SearchSubjectsRequest, SortOrder, SubjectType,
};
pub use queries::{
    popular_anime_request, popular_anime_request_for_date, search_request, top_rated_anime_request,
};
pub use request::{BangumiClient, Host};
pub use season::{current_season_window_start, season_window_start};
pub use urls::*;
