use std::collections::{BTreeMap, HashMap, HashSet};

use crate::model::domain::{
    ACTIVATED_BY, ANNOTATION, FUNCTION, PATHWAYS, REGULATOR_FAMILY, REPRESSED_BY,
};
use crate::model::wrappers::GoTerm;
use crate::model::{
    Domain, DomainSelection, EnrichedGene, EnrichmentResult, EnrichmentValue, GeneDomain,
    NodeDomains, ResolvedNode,
};

pub const AMIGO_SEARCH_URL: &str = "http://amigo.geneontology.org/amigo/search/annotation?q=";
pub const ANNOTATION_NOT_AVAILABLE: &str = "annotation not available";
pub const GO_TERM_LIMIT: usize = 5;
const LIST_SEPARATOR: &str = "; ";

/// Merges resolved nodes and their domain envelopes into one enriched gene
/// per node (resolver order), followed by unresolved genes in input order.
pub fn aggregate_results(
    nodes: &[ResolvedNode],
    wrappers: &[NodeDomains],
    selection: &DomainSelection,
    import_genes: &[String],
) -> EnrichmentResult {
    if wrappers.len() != nodes.len() {
        tracing::warn!(
            nodes = nodes.len(),
            wrappers = wrappers.len(),
            "domain envelopes not aligned with nodes; missing envelopes treated as empty"
        );
    }

    let empty = NodeDomains::default();
    let mut genes: Vec<EnrichedGene> = Vec::with_capacity(nodes.len() + import_genes.len());
    let mut position: HashMap<String, usize> = HashMap::with_capacity(genes.capacity());

    for (idx, node) in nodes.iter().enumerate() {
        let wrapper = wrappers.get(idx).unwrap_or(&empty);
        let gene = EnrichedGene {
            imported: node.synonym_name.clone(),
            matched: Some(node.canonical_name.clone()),
            full_name: Some(node.full_name.clone().unwrap_or_default()),
            link: Some(node.link.clone()),
            domains: Some(merge_node_domains(selection, wrapper, node)),
        };
        match position.get(&node.synonym_name) {
            Some(&existing) => {
                tracing::warn!(
                    synonym = node.synonym_name.as_str(),
                    node_id = node.node_id,
                    "gene resolved to more than one node; keeping the last"
                );
                genes[existing] = gene;
            }
            None => {
                position.insert(node.synonym_name.clone(), genes.len());
                genes.push(gene);
            }
        }
    }

    let synonyms: HashSet<&str> = nodes.iter().map(|n| n.synonym_name.as_str()).collect();
    let mut unmatched = 0usize;
    for gene in import_genes {
        if synonyms.contains(gene.as_str()) || position.contains_key(gene) {
            continue;
        }
        position.insert(gene.clone(), genes.len());
        genes.push(EnrichedGene::unmatched(gene.clone()));
        unmatched += 1;
    }
    if unmatched > 0 {
        tracing::info!(unmatched, "genes without a matching node");
    }

    EnrichmentResult::new(genes)
}

/// Per-domain extraction for one node. Only selected domains with a
/// non-null result produce a key.
pub fn merge_node_domains(
    selection: &DomainSelection,
    wrapper: &NodeDomains,
    node: &ResolvedNode,
) -> BTreeMap<Domain, GeneDomain> {
    let mut out = BTreeMap::new();
    for domain in selection.iter() {
        let merged = match domain {
            Domain::Regulon => regulon_values(wrapper),
            Domain::UniProt => uniprot_values(wrapper),
            Domain::String => string_values(wrapper),
            Domain::GO => go_values(wrapper, node),
            Domain::Biocyc => biocyc_values(wrapper),
        };
        if let Some(values) = merged {
            out.insert(domain, values);
        }
    }
    out
}

fn regulon_values(wrapper: &NodeDomains) -> Option<GeneDomain> {
    let entry = wrapper.regulon.as_ref()?;
    let result = entry.result.as_ref()?;
    let family = result.regulator_family.clone().unwrap_or_default();
    let activated = join_list(result.activated_by.as_deref());
    let repressed = join_list(result.repressed_by.as_deref());

    let mut values = GeneDomain::new();
    values.insert(
        REGULATOR_FAMILY.to_string(),
        EnrichmentValue::new(family, entry.link.as_str()),
    );
    values.insert(
        ACTIVATED_BY.to_string(),
        EnrichmentValue::new(activated, entry.link.as_str()),
    );
    values.insert(
        REPRESSED_BY.to_string(),
        EnrichmentValue::new(repressed, entry.link.as_str()),
    );
    Some(values)
}

fn uniprot_values(wrapper: &NodeDomains) -> Option<GeneDomain> {
    let entry = wrapper.uniprot.as_ref()?;
    let result = entry.result.as_ref()?;
    let text = result.function.clone().unwrap_or_default();
    Some(single(FUNCTION, EnrichmentValue::new(text, entry.link.as_str())))
}

fn string_values(wrapper: &NodeDomains) -> Option<GeneDomain> {
    let entry = wrapper.string.as_ref()?;
    let result = entry.result.as_ref()?;
    let text = match result.annotation.as_deref() {
        Some(ANNOTATION_NOT_AVAILABLE) | None => String::new(),
        Some(annotation) => annotation.to_string(),
    };
    // Without a String id, link through the Biocyc id when there is one.
    let suffix = non_empty(result.id.as_deref()).or_else(|| {
        wrapper
            .biocyc_result()
            .and_then(|b| non_empty(b.biocyc_id.as_deref()))
    });
    let link = match suffix {
        Some(id) => format!("{}{}", entry.link, id),
        None => entry.link.clone(),
    };
    Some(single(ANNOTATION, EnrichmentValue::new(text, link)))
}

fn go_values(wrapper: &NodeDomains, node: &ResolvedNode) -> Option<GeneDomain> {
    let entry = wrapper.go.as_ref()?;
    let terms = entry.result.as_ref()?;
    let text = shorten_go_terms(terms);
    let link = match wrapper.uniprot_result() {
        Some(uniprot) => format!("{}{}", entry.link, uniprot.id.as_deref().unwrap_or("")),
        None => format!(
            "{}{}",
            AMIGO_SEARCH_URL,
            urlencoding::encode(&node.canonical_name)
        ),
    };
    Some(single(ANNOTATION, EnrichmentValue::new(text, link)))
}

fn biocyc_values(wrapper: &NodeDomains) -> Option<GeneDomain> {
    let entry = wrapper.biocyc.as_ref()?;
    let result = entry.result.as_ref()?;
    let text = join_list(result.pathways.as_deref());
    Some(single(PATHWAYS, EnrichmentValue::new(text, entry.link.as_str())))
}

/// First five term names joined by "; ", with "..." when more were dropped.
pub fn shorten_go_terms(terms: &[GoTerm]) -> String {
    let mut text = terms
        .iter()
        .take(GO_TERM_LIMIT)
        .map(|t| t.name.as_str())
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR);
    if terms.len() > GO_TERM_LIMIT {
        text.push_str("...");
    }
    text
}

fn join_list(values: Option<&[String]>) -> String {
    values.map(|v| v.join(LIST_SEPARATOR)).unwrap_or_default()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn single(label: &str, value: EnrichmentValue) -> GeneDomain {
    let mut values = GeneDomain::new();
    values.insert(label.to_string(), value);
    values
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_aggregate.rs"]
mod tests;
