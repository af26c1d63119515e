//! API endpoint modules.

mod search;

pub use search::{SearchApi, SearchRequestBuilder};
