//! Catalog viewer core.
//!
//! Filtering and sorting are pure functions over the loaded records
//! (`compute_visible`); `Session` holds the loading state machine, the current
//! `FilterState`, the selection and the search debouncer, and tells the caller
//! when the visible list changed so it can re-render.

mod debounce;
mod filter;
mod load;
pub mod render;
mod session;
mod stats;

pub use debounce::SearchDebouncer;
pub use filter::{compute_visible, matches, sort_key_millis, visible_indices, FilterState, SortOrder, UnknownSortOrder};
pub use load::{load_dataset, DatasetSource};
pub use session::{Catalog, Session, ViewerState};
pub use stats::{results_message, CatalogStats};
