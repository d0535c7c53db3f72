use super::*;

const FIXTURE: &str = r#"{
  "nodes": [
    {"node_id": 10, "canonical_name": "gyrA", "full_name": "DNA gyrase subunit A",
     "synonym_name": "gyrA", "link": "https://www.ncbi.nlm.nih.gov/gene/946614"},
    {"node_id": 11, "canonical_name": "cysB", "full_name": null,
     "synonym_name": "cysB", "link": "https://www.ncbi.nlm.nih.gov/gene/945827"}
  ],
  "domains": {
    "10": {
      "uniprot": {"link": "https://www.uniprot.org/uniprot/", "result": {"function": "Supercoiling", "id": "P0AES4"}},
      "regulon": {"link": "http://regulondb/", "result": null}
    }
  }
}"#;

#[tokio::test]
async fn test_match_nodes_filters_by_synonym_in_fixture_order() {
    let fixture = FixtureSource::from_json(FIXTURE).unwrap();
    let genes = vec!["cysB".to_string(), "nope".to_string(), "gyrA".to_string()];
    let nodes = fixture.match_nodes(&genes, "511145").await.unwrap();
    let names = nodes.iter().map(|n| n.synonym_name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["gyrA", "cysB"]);
    assert_eq!(nodes[1].full_name, None);
}

#[tokio::test]
async fn test_fetch_domains_index_aligned() {
    let fixture = FixtureSource::from_json(FIXTURE).unwrap();
    let wrappers = fixture.fetch_domains(&[11, 10], "511145").await.unwrap();
    assert_eq!(wrappers.len(), 2);
    assert_eq!(wrappers[0], NodeDomains::default());
    let uniprot = wrappers[1].uniprot_result().unwrap();
    assert_eq!(uniprot.id.as_deref(), Some("P0AES4"));
    assert_eq!(wrappers[1].regulon.as_ref().unwrap().result, None);
}

#[tokio::test]
async fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!(
        "kira_enrichtable_fixture_{}.json",
        std::process::id()
    ));
    std::fs::write(&path, FIXTURE).unwrap();
    let fixture = FixtureSource::load(&path).await.unwrap();
    assert_eq!(fixture.nodes.len(), 2);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_invalid_fixture_is_json_error() {
    let err = FixtureSource::from_json("{not json").unwrap_err();
    assert!(matches!(err, crate::error::EnrichmentError::Json(_)));
}
