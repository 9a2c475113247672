pub mod config;
pub mod logging;

pub mod collect;
pub mod dataset;
pub mod github;
pub mod model;
pub mod viewer;
