use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::domain::Domain;

pub const RESULT_VERSION: &str = "1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainInfo {
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentValue {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotated_text: Option<String>,
    pub link: String,
}

impl EnrichmentValue {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            annotated_text: None,
            link: link.into(),
        }
    }

    /// Annotated text wins when present; plain enrichment has none.
    pub fn display_text(&self) -> &str {
        self.annotated_text.as_deref().unwrap_or(&self.text)
    }
}

/// Label -> value for one domain of one gene.
pub type GeneDomain = BTreeMap<String, EnrichmentValue>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedGene {
    pub imported: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domains: Option<BTreeMap<Domain, GeneDomain>>,
}

impl EnrichedGene {
    pub fn unmatched(imported: impl Into<String>) -> Self {
        Self {
            imported: imported.into(),
            matched: None,
            full_name: None,
            link: None,
            domains: None,
        }
    }

    /// A gene without a `domains` key never resolved to a node.
    pub fn is_matched(&self) -> bool {
        self.domains.is_some()
    }

    pub fn value(&self, domain: Domain, label: &str) -> Option<&EnrichmentValue> {
        self.domains.as_ref()?.get(&domain)?.get(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentResult {
    /// Older saved results carry no version.
    #[serde(default = "default_version")]
    pub version: String,
    pub domain_info: BTreeMap<Domain, DomainInfo>,
    pub genes: Vec<EnrichedGene>,
}

impl EnrichmentResult {
    pub fn new(genes: Vec<EnrichedGene>) -> Self {
        Self {
            version: RESULT_VERSION.to_string(),
            domain_info: full_domain_info(),
            genes,
        }
    }

    pub fn matched_count(&self) -> usize {
        self.genes.iter().filter(|g| g.is_matched()).count()
    }

    pub fn unmatched(&self) -> impl Iterator<Item = &EnrichedGene> {
        self.genes.iter().filter(|g| !g.is_matched())
    }
}

fn default_version() -> String {
    RESULT_VERSION.to_string()
}

/// Label sets for all five domains, regardless of selection.
pub fn full_domain_info() -> BTreeMap<Domain, DomainInfo> {
    Domain::ALL
        .iter()
        .map(|&domain| {
            (
                domain,
                DomainInfo {
                    labels: domain.labels().iter().map(|l| l.to_string()).collect(),
                },
            )
        })
        .collect()
}
