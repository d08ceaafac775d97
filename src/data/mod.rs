//! Data module - CSV loading, parsing and the series store

mod loader;
mod parser;
mod store;

pub use loader::{DataLoader, LoaderError};
pub use parser::parse_readings;
pub use store::{SeriesStore, WindowSlice};
