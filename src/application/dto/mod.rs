//! Application data transfer objects.

mod recipe_batch;

pub use recipe_batch::{PrefetchSummary, RecipeBatch};
