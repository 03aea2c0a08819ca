pub mod grouping_service;

pub use grouping_service::{chunked, Chunks, GroupingService};
