use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EnrichmentError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Domain {
    Regulon,
    UniProt,
    String,
    GO,
    Biocyc,
}

#[derive(Debug, Clone, Copy)]
pub struct DomainDef {
    pub domain: Domain,
    pub name: &'static str,
    pub header: &'static str,
    pub labels: &'static [&'static str],
    pub link_text: &'static str,
}

pub const REGULATOR_FAMILY: &str = "Regulator Family";
pub const ACTIVATED_BY: &str = "Activated By";
pub const REPRESSED_BY: &str = "Repressed By";
pub const FUNCTION: &str = "Function";
pub const ANNOTATION: &str = "Annotation";
pub const PATHWAYS: &str = "Pathways";

const REGULON_LABELS: &[&str] = &[REGULATOR_FAMILY, ACTIVATED_BY, REPRESSED_BY];
const UNIPROT_LABELS: &[&str] = &[FUNCTION];
const STRING_LABELS: &[&str] = &[ANNOTATION];
const GO_LABELS: &[&str] = &[ANNOTATION];
const BIOCYC_LABELS: &[&str] = &[PATHWAYS];

// Indexed by `Domain as usize`.
const DOMAIN_DEFS: [DomainDef; 5] = [
    DomainDef {
        domain: Domain::Regulon,
        name: "Regulon",
        header: "Regulon Data",
        labels: REGULON_LABELS,
        link_text: "Regulon Link",
    },
    DomainDef {
        domain: Domain::UniProt,
        name: "UniProt",
        header: "UniProt Function",
        labels: UNIPROT_LABELS,
        link_text: "UniProt Link",
    },
    DomainDef {
        domain: Domain::String,
        name: "String",
        header: "String Annotation",
        labels: STRING_LABELS,
        link_text: "String Link",
    },
    DomainDef {
        domain: Domain::GO,
        name: "GO",
        header: "GO Annotation",
        labels: GO_LABELS,
        link_text: "GO Link",
    },
    DomainDef {
        domain: Domain::Biocyc,
        name: "Biocyc",
        header: "Biocyc Pathways",
        labels: BIOCYC_LABELS,
        link_text: "Biocyc Link",
    },
];

impl Domain {
    /// Canonical order, also the default column order.
    pub const ALL: [Domain; 5] = [
        Domain::Regulon,
        Domain::UniProt,
        Domain::String,
        Domain::GO,
        Domain::Biocyc,
    ];

    pub fn def(self) -> &'static DomainDef {
        &DOMAIN_DEFS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.def().name
    }

    pub fn labels(self) -> &'static [&'static str] {
        self.def().labels
    }

    pub fn span(self) -> usize {
        self.def().labels.len()
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Domain {
    type Err = EnrichmentError;

    fn from_str(s: &str) -> Result<Self> {
        Domain::ALL
            .iter()
            .copied()
            .find(|d| d.name() == s)
            .ok_or_else(|| EnrichmentError::UnknownDomain(s.to_string()))
    }
}

/// Ordered, duplicate-free list of requested domains. Order is column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Domain>", into = "Vec<Domain>")]
pub struct DomainSelection {
    domains: Vec<Domain>,
}

impl DomainSelection {
    pub fn new(domains: Vec<Domain>) -> Result<Self> {
        for (idx, domain) in domains.iter().enumerate() {
            if domains[..idx].contains(domain) {
                return Err(EnrichmentError::DuplicateDomain(*domain));
            }
        }
        Ok(Self { domains })
    }

    pub fn empty() -> Self {
        Self {
            domains: Vec::new(),
        }
    }

    /// Strict parse of a comma-joined list; unknown names and repeats are errors.
    pub fn parse_list(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(Self::empty());
        }
        let domains = s
            .split(',')
            .map(|name| name.trim().parse::<Domain>())
            .collect::<Result<Vec<_>>>()?;
        Self::new(domains)
    }

    /// Lenient parse used for persisted data: unknown names and repeats are skipped.
    pub fn parse_lenient(s: &str) -> Self {
        let mut domains = Vec::new();
        for name in s.split(',') {
            if name.is_empty() {
                continue;
            }
            match name.parse::<Domain>() {
                Ok(domain) if domains.contains(&domain) => {
                    tracing::warn!(domain = name, "repeated domain in document; keeping first");
                }
                Ok(domain) => domains.push(domain),
                Err(_) => {
                    tracing::warn!(domain = name, "unknown domain in document; skipping");
                }
            }
        }
        Self { domains }
    }

    pub fn as_slice(&self) -> &[Domain] {
        &self.domains
    }

    pub fn iter(&self) -> impl Iterator<Item = Domain> + '_ {
        self.domains.iter().copied()
    }

    pub fn contains(&self, domain: Domain) -> bool {
        self.domains.contains(&domain)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn join(&self) -> String {
        self.domains
            .iter()
            .map(|d| d.name())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Default for DomainSelection {
    fn default() -> Self {
        Self {
            domains: Domain::ALL.to_vec(),
        }
    }
}

impl TryFrom<Vec<Domain>> for DomainSelection {
    type Error = EnrichmentError;

    fn try_from(value: Vec<Domain>) -> Result<Self> {
        Self::new(value)
    }
}

impl From<DomainSelection> for Vec<Domain> {
    fn from(value: DomainSelection) -> Self {
        value.domains
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/domain.rs"]
mod tests;
