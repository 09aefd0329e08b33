//! Data module - CSV loading and cell parsing

mod dataset;
mod loader;
mod processor;

pub use dataset::{Dataset, Record};
pub use loader::{DataLoader, LoaderError};
pub use processor::{DataProcessor, TimeSample, TrustRating};
