//! Enrichment table engine: gene list normalisation, per-domain annotation
//! merge, column layout, table projection, CSV export and the document codec.

pub mod document;
pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use document::EnrichmentDocument;
pub use document::shared::{RefreshOutcome, RefreshTask, SharedDocument};
pub use error::{EnrichmentError, Result};
pub use pipeline::stage1_match::EnrichmentSource;
