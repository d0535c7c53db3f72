pub mod domain;
pub mod result;
pub mod table;
pub mod wrappers;

pub use domain::{Domain, DomainSelection};
pub use result::{DomainInfo, EnrichedGene, EnrichmentResult, EnrichmentValue, GeneDomain};
pub use table::{EnrichmentTable, TableCell, TableHeader, TableLink};
pub use wrappers::{DomainEntry, NodeDomains, ResolvedNode};
