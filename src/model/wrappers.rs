//! Shapes handed over by the node matcher and the domain fetch.

use serde::{Deserialize, Serialize};

/// A canonical gene node a user supplied name resolved to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedNode {
    pub node_id: i64,
    pub canonical_name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    /// The user supplied name (or synonym) that matched.
    pub synonym_name: String,
    #[serde(default)]
    pub link: String,
}

/// One domain's envelope for a node. `result == None` means the domain had no data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainEntry<T> {
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub result: Option<T>,
}

impl<T> DomainEntry<T> {
    pub fn matched(link: impl Into<String>, result: T) -> Self {
        Self {
            link: link.into(),
            result: Some(result),
        }
    }

    pub fn unmatched(link: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            result: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegulonResult {
    #[serde(default)]
    pub regulator_family: Option<String>,
    #[serde(default)]
    pub activated_by: Option<Vec<String>>,
    #[serde(default)]
    pub repressed_by: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UniprotResult {
    #[serde(default)]
    pub function: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StringResult {
    #[serde(default)]
    pub annotation: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoTerm {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BiocycResult {
    #[serde(default)]
    pub biocyc_id: Option<String>,
    #[serde(default)]
    pub pathways: Option<Vec<String>>,
}

/// All domain envelopes for one node. A missing envelope is legal and contributes nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeDomains {
    #[serde(default)]
    pub node_id: Option<i64>,
    #[serde(default)]
    pub regulon: Option<DomainEntry<RegulonResult>>,
    #[serde(default)]
    pub uniprot: Option<DomainEntry<UniprotResult>>,
    #[serde(default)]
    pub string: Option<DomainEntry<StringResult>>,
    #[serde(default)]
    pub go: Option<DomainEntry<Vec<GoTerm>>>,
    #[serde(default)]
    pub biocyc: Option<DomainEntry<BiocycResult>>,
}

impl NodeDomains {
    pub fn uniprot_result(&self) -> Option<&UniprotResult> {
        self.uniprot.as_ref().and_then(|e| e.result.as_ref())
    }

    pub fn biocyc_result(&self) -> Option<&BiocycResult> {
        self.biocyc.as_ref().and_then(|e| e.result.as_ref())
    }
}
