pub mod dataset;
pub mod summary;

pub use dataset::{DatasetAncillary, DatasetKind, DatasetMetadata, DatasetPayload};
pub use summary::{RunReport, SummaryRecord};
