use async_trait::async_trait;

use crate::error::Result;
use crate::model::{DomainSelection, EnrichmentResult, NodeDomains, ResolvedNode};
use crate::pipeline::stage2_aggregate::aggregate_results;

/// External collaborator that resolves genes to nodes and fetches per-node
/// domain envelopes. Errors are passed through the pipeline untouched.
#[async_trait]
pub trait EnrichmentSource: Send + Sync {
    async fn match_nodes(&self, genes: &[String], organism_id: &str) -> Result<Vec<ResolvedNode>>;

    /// Must return one entry per id, index aligned with `node_ids`.
    async fn fetch_domains(&self, node_ids: &[i64], organism_id: &str) -> Result<Vec<NodeDomains>>;
}

#[derive(Debug, Clone)]
pub struct Stage1Params<'a> {
    pub genes: &'a [String],
    pub tax_id: &'a str,
    pub domains: &'a DomainSelection,
}

/// Resolve, then fetch, then merge. Nothing is projected until both awaits finish.
pub async fn generate_enrichment_result(
    source: &dyn EnrichmentSource,
    params: &Stage1Params<'_>,
) -> Result<EnrichmentResult> {
    let nodes = source.match_nodes(params.genes, params.tax_id).await?;
    tracing::info!(
        requested = params.genes.len(),
        matched = nodes.len(),
        organism = params.tax_id,
        "gene nodes resolved"
    );

    let node_ids = nodes.iter().map(|n| n.node_id).collect::<Vec<_>>();
    let wrappers = if node_ids.is_empty() {
        Vec::new()
    } else {
        source.fetch_domains(&node_ids, params.tax_id).await?
    };

    Ok(aggregate_results(&nodes, &wrappers, params.domains, params.genes))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_match.rs"]
mod tests;
