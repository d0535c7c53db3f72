use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{NodeDomains, ResolvedNode};
use crate::pipeline::stage1_match::EnrichmentSource;

/// Offline stand-in for the graph service, read from a JSON file:
/// `{"nodes": [...], "domains": {"<node_id>": {...}}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixtureSource {
    #[serde(default)]
    pub nodes: Vec<ResolvedNode>,
    #[serde(default)]
    pub domains: BTreeMap<i64, NodeDomains>,
}

impl FixtureSource {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let text = tokio::fs::read_to_string(path).await?;
        let fixture = Self::from_json(&text)?;
        tracing::info!(
            path = %path.display(),
            nodes = fixture.nodes.len(),
            "fixture source loaded"
        );
        Ok(fixture)
    }
}

#[async_trait]
impl EnrichmentSource for FixtureSource {
    async fn match_nodes(&self, genes: &[String], _organism_id: &str) -> Result<Vec<ResolvedNode>> {
        let wanted: HashSet<&str> = genes.iter().map(|g| g.as_str()).collect();
        Ok(self
            .nodes
            .iter()
            .filter(|n| wanted.contains(n.synonym_name.as_str()))
            .cloned()
            .collect())
    }

    async fn fetch_domains(&self, node_ids: &[i64], _organism_id: &str) -> Result<Vec<NodeDomains>> {
        Ok(node_ids
            .iter()
            .map(|id| self.domains.get(id).cloned().unwrap_or_default())
            .collect())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/fixture.rs"]
mod tests;
