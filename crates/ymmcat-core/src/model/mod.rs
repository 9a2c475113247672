//! Catalog data model: plugin records, categories, dataset and override files.

mod category;
mod plugin;

pub use category::{Category, CategoryInfo, CATEGORY_ALL};
pub use plugin::{plugin_id, Dataset, ManualOverrides, Plugin};
