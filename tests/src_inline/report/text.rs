use super::*;
use crate::model::{EnrichedGene, EnrichmentResult};

#[test]
fn test_summary_without_result() {
    let mut doc = EnrichmentDocument::new();
    doc.set_parameters(&["gyrA", "gyrA", "cysB"], "562", "Escherichia coli", None);
    let text = render_document_summary(&doc);

    assert!(text.contains("Organism: Escherichia coli (511145)"));
    assert!(text.contains("Domains: Regulon,UniProt,String,GO,Biocyc"));
    assert!(text.contains("Imported genes: 2"));
    assert!(text.contains("Duplicates: gyrA"));
    assert!(text.contains("No cached result; run enrich to generate one."));
}

#[test]
fn test_summary_with_result() {
    let mut doc = EnrichmentDocument::new();
    doc.set_parameters(&["a", "b"], "511145", "E. coli", None);
    let mut matched = EnrichedGene::unmatched("a");
    matched.domains = Some(Default::default());
    doc.replace_result(EnrichmentResult::new(vec![matched, EnrichedGene::unmatched("b")]));

    let text = render_document_summary(&doc);
    assert!(text.contains("Matched genes: 1 of 2"));
    assert!(text.contains("Match fraction: 0.500"));
    assert!(text.contains("No match found: b"));
}
