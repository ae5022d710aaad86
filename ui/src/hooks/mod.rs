pub mod use_problemset;
pub mod use_query_state;
pub mod use_search_navigate;
pub mod use_title;
pub mod use_tracked_fetch;

pub use use_problemset::{ProblemsetHandle, use_problemset};
pub use use_query_state::use_query_state;
pub use use_search_navigate::use_search_navigate;
pub use use_title::use_title;
pub use use_tracked_fetch::{FetchStatus, TrackedFetch, use_tracked_fetch};
