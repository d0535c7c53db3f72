use super::*;
use crate::model::{Domain, DomainSelection, EnrichmentValue, GeneDomain};
use std::collections::BTreeMap;

fn matched_gene(name: &str, go_text: Option<&str>) -> EnrichedGene {
    let mut domains = BTreeMap::new();
    if let Some(text) = go_text {
        let mut values = GeneDomain::new();
        values.insert(
            "Annotation".to_string(),
            EnrichmentValue::new(text, format!("https://go/{name}")),
        );
        domains.insert(Domain::GO, values);
    }
    EnrichedGene {
        imported: name.to_string(),
        matched: Some(name.to_uppercase()),
        full_name: Some(format!("{name} protein")),
        link: Some(format!("https://ncbi/{name}")),
        domains: Some(domains),
    }
}

fn sample_result() -> EnrichmentResult {
    EnrichmentResult::new(vec![
        matched_gene("abc", Some("t1; t2")),
        EnrichedGene::unmatched("zzz"),
        matched_gene("def", None),
    ])
}

fn layout(domains: &[Domain]) -> ColumnLayout {
    ColumnLayout::new(&DomainSelection::new(domains.to_vec()).unwrap())
}

#[test]
fn test_rows_have_uniform_width() {
    let layout = layout(&[Domain::Regulon, Domain::GO]);
    let table = project_table(Some(&sample_result()), &layout);
    assert_eq!(table.width(), 7);
    assert!(table.cells.iter().all(|row| row.len() == 7));
    table.check_width().unwrap();
}

#[test]
fn test_matched_rows_first_then_no_match_rows() {
    let layout = layout(&[Domain::Regulon, Domain::GO]);
    let table = project_table(Some(&sample_result()), &layout);
    assert_eq!(table.cells.len(), 3);
    assert_eq!(table.cells[0][0].text, "abc");
    assert_eq!(table.cells[1][0].text, "def");

    let last = &table.cells[2];
    assert_eq!(last[0].text, "zzz");
    assert_eq!(last[1].text, NO_MATCH_TEXT);
    assert!(last.iter().all(|c| c.highlight));
    assert!(last[2..].iter().all(|c| c.text.is_empty()));
}

#[test]
fn test_matched_cells_carry_links() {
    let layout = layout(&[Domain::Regulon, Domain::GO]);
    let table = project_table(Some(&sample_result()), &layout);
    let row = &table.cells[0];
    assert_eq!(row[1].text, "ABC");
    let ncbi = row[2].single_link.as_ref().unwrap();
    assert_eq!(ncbi.link, "https://ncbi/abc");
    assert_eq!(ncbi.link_text, NCBI_LINK_TEXT);

    // Regulon absent: its three columns stay, empty.
    assert!(row[3..6].iter().all(|c| c.text.is_empty() && c.single_link.is_none()));

    assert_eq!(row[6].text, "t1; t2");
    let go = row[6].single_link.as_ref().unwrap();
    assert_eq!(go.link, "https://go/abc");
    assert_eq!(go.link_text, "GO Link");
    assert!(!row[6].highlight);
}

#[test]
fn test_annotated_text_preferred() {
    let mut gene = matched_gene("abc", Some("plain"));
    gene.domains
        .as_mut()
        .unwrap()
        .get_mut(&Domain::GO)
        .unwrap()
        .get_mut("Annotation")
        .unwrap()
        .annotated_text = Some("annotated".to_string());
    let result = EnrichmentResult::new(vec![gene]);
    let table = project_table(Some(&result), &layout(&[Domain::GO]));
    assert_eq!(table.cells[0][3].text, "annotated");
}

#[test]
fn test_no_result_projects_leading_columns_only() {
    let table = project_table(None, &layout(&[Domain::Regulon]));
    assert_eq!(table.header.len(), 1);
    assert_eq!(table.width(), LEADING_COLUMNS);
    assert!(table.cells.is_empty());
}

#[test]
fn test_reorder_and_back_is_identity() {
    let original = layout(&[Domain::Regulon, Domain::GO]);
    let swapped = layout(&[Domain::GO, Domain::Regulon]);
    let table = project_table(Some(&sample_result()), &original);

    let moved = reorder_table(&table, &original, &swapped);
    moved.check_width().unwrap();
    assert_eq!(moved.cells[0][3].text, "t1; t2");
    assert_eq!(moved.header, swapped.header_rows());

    let back = reorder_table(&moved, &swapped, &original);
    assert!(back.equals(&table));
}

#[test]
fn test_reorder_matches_fresh_projection() {
    let original = layout(&[Domain::GO]);
    let wider = layout(&[Domain::UniProt, Domain::GO]);
    let result = sample_result();
    let table = project_table(Some(&result), &original);

    let moved = reorder_table(&table, &original, &wider);
    let fresh = project_table(Some(&result), &wider);
    assert!(moved.equals(&fresh));
}
