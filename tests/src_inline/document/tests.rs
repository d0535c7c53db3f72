use super::*;
use crate::error::EnrichmentError;
use crate::input::fixture::FixtureSource;
use crate::model::{Domain, EnrichedGene, ResolvedNode};

fn fixture() -> FixtureSource {
    FixtureSource {
        nodes: vec![ResolvedNode {
            node_id: 7,
            canonical_name: "gyrA".to_string(),
            full_name: Some("DNA gyrase subunit A".to_string()),
            synonym_name: "gyrA".to_string(),
            link: "https://ncbi/7".to_string(),
        }],
        ..FixtureSource::default()
    }
}

#[test]
fn test_set_parameters_normalizes() {
    let mut doc = EnrichmentDocument::new();
    doc.set_parameters(&[" abc", "ABC", "abc", ""], "83333", "E. coli", None);
    assert_eq!(doc.import_genes(), &["abc", "ABC"]);
    assert_eq!(doc.duplicate_genes(), &["abc"]);
    assert_eq!(doc.tax_id(), "511145");
    assert_eq!(doc.organism(), "E. coli");
    assert_eq!(doc.domains(), &DomainSelection::default());
    assert!(doc.result().is_none());
}

#[test]
fn test_save_load_round_trip() {
    let mut doc = EnrichmentDocument::new();
    let domains = DomainSelection::new(vec![Domain::GO, Domain::UniProt]).unwrap();
    doc.set_parameters(&["gyrA", "zzz"], "562", "E. coli", Some(domains.clone()));
    doc.replace_result(EnrichmentResult::new(vec![EnrichedGene::unmatched("zzz")]));

    let payload = doc.save().unwrap();
    assert!(payload.contains("gyrA,zzz/511145/E. coli/GO,UniProt"));

    let loaded = EnrichmentDocument::load(&payload, "session-1").unwrap();
    assert_eq!(loaded.file_id(), "session-1");
    assert_eq!(loaded.import_genes(), doc.import_genes());
    assert_eq!(loaded.domains(), &domains);
    assert_eq!(loaded.result(), doc.result());
    assert!(loaded.table().equals(&doc.table()));
}

#[test]
fn test_load_reresolves_alias_and_defaults_domains() {
    let doc = EnrichmentDocument::load("a,a,b/4932/yeast", "f").unwrap();
    assert_eq!(doc.tax_id(), "559292");
    assert_eq!(doc.import_genes(), &["a", "b"]);
    assert_eq!(doc.duplicate_genes(), &["a"]);
    assert_eq!(doc.domains().len(), 5);
}

#[test]
fn test_load_rejects_malformed() {
    let err = EnrichmentDocument::load("nothing", "f").unwrap_err();
    assert!(matches!(err, EnrichmentError::MalformedDocument(_)));
}

#[tokio::test]
async fn test_refresh_builds_result() {
    let mut doc = EnrichmentDocument::new();
    doc.set_parameters(&["gyrA", "zzz"], "511145", "E. coli", None);
    doc.refresh_data(&fixture()).await.unwrap();

    let result = doc.result().unwrap();
    assert_eq!(result.matched_count(), 1);
    let table = doc.table();
    assert_eq!(table.cells.len(), 2);
    assert_eq!(table.cells[0][2].text, "DNA gyrase subunit A");
    assert_eq!(table.cells[1][1].text, "No match found.");
}

#[tokio::test]
async fn test_load_with_source_fills_missing_result() {
    let doc = EnrichmentDocument::load_with_source("gyrA/511145/E. coli", "f", &fixture())
        .await
        .unwrap();
    assert_eq!(doc.result().unwrap().matched_count(), 1);

    let cached = EnrichmentResult::new(vec![EnrichedGene::unmatched("gyrA")]);
    let mut saved = EnrichmentDocument::new();
    saved.set_parameters(&["gyrA"], "511145", "E. coli", None);
    saved.replace_result(cached.clone());
    let payload = saved.save().unwrap();

    let doc = EnrichmentDocument::load_with_source(&payload, "f", &fixture())
        .await
        .unwrap();
    assert_eq!(doc.result(), Some(&cached));
}

#[tokio::test]
async fn test_reorder_updates_domains_and_table() {
    let mut doc = EnrichmentDocument::new();
    doc.set_parameters(
        &["gyrA"],
        "511145",
        "E. coli",
        Some(DomainSelection::new(vec![Domain::Regulon, Domain::GO]).unwrap()),
    );
    doc.refresh_data(&fixture()).await.unwrap();

    let table = doc.table();
    let order = DomainSelection::new(vec![Domain::GO, Domain::Regulon]).unwrap();
    let moved = doc.reorder(&table, order.clone());
    assert_eq!(doc.domains(), &order);
    assert!(moved.equals(&doc.table()));
    assert_eq!(moved.header[0][3].name, "GO Annotation");
}

#[test]
fn test_set_domains_persists_on_save() {
    let mut doc = EnrichmentDocument::load("a/1/x", "f").unwrap();
    doc.set_domains(DomainSelection::new(vec![Domain::Biocyc]).unwrap());
    let reloaded = EnrichmentDocument::load(&doc.save().unwrap(), "f").unwrap();
    assert_eq!(reloaded.domains().as_slice(), &[Domain::Biocyc]);
}
