//! Query engine over a loaded catalog.

mod search;

pub use search::{rank_by_similarity, search_by_name, Match, Query};
