use super::*;

#[test]
fn test_domain_defs_indexed_by_variant() {
    for domain in Domain::ALL {
        assert_eq!(domain.def().domain, domain);
    }
    assert_eq!(Domain::Regulon.span(), 3);
    assert_eq!(Domain::GO.span(), 1);
    assert_eq!(Domain::Biocyc.labels(), &["Pathways"]);
}

#[test]
fn test_domain_names_are_case_sensitive() {
    assert_eq!("UniProt".parse::<Domain>().unwrap(), Domain::UniProt);
    assert_eq!("GO".parse::<Domain>().unwrap(), Domain::GO);
    assert!("uniprot".parse::<Domain>().is_err());
    assert!("BioCyc".parse::<Domain>().is_err());
}

#[test]
fn test_default_selection_is_canonical_order() {
    let selection = DomainSelection::default();
    assert_eq!(selection.as_slice(), &Domain::ALL);
    assert_eq!(selection.join(), "Regulon,UniProt,String,GO,Biocyc");
}

#[test]
fn test_selection_rejects_duplicates() {
    let err = DomainSelection::new(vec![Domain::GO, Domain::Regulon, Domain::GO]).unwrap_err();
    assert!(matches!(err, EnrichmentError::DuplicateDomain(Domain::GO)));
    assert!(DomainSelection::parse_list("GO,GO").is_err());
    assert!(DomainSelection::parse_list("GO,KEGG").is_err());
}

#[test]
fn test_parse_list_keeps_order() {
    let selection = DomainSelection::parse_list("GO, Regulon").unwrap();
    assert_eq!(selection.as_slice(), &[Domain::GO, Domain::Regulon]);
    assert!(DomainSelection::parse_list("").unwrap().is_empty());
}

#[test]
fn test_parse_lenient_skips_unknown_and_repeats() {
    let selection = DomainSelection::parse_lenient("String,KEGG,,String,Biocyc");
    assert_eq!(selection.as_slice(), &[Domain::String, Domain::Biocyc]);
}

#[test]
fn test_selection_serde_round_trip() {
    let selection = DomainSelection::parse_list("Biocyc,Regulon").unwrap();
    let json = serde_json::to_string(&selection).unwrap();
    assert_eq!(json, r#"["Biocyc","Regulon"]"#);
    let back: DomainSelection = serde_json::from_str(&json).unwrap();
    assert_eq!(back, selection);
    assert!(serde_json::from_str::<DomainSelection>(r#"["GO","GO"]"#).is_err());
}
