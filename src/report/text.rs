use crate::document::EnrichmentDocument;
use crate::report::{format_f32_3, fraction};

pub fn render_document_summary(doc: &EnrichmentDocument) -> String {
    let mut out = String::new();

    out.push_str("Enrichment Table Summary\n");
    out.push_str("========================\n\n");

    out.push_str("1. Parameters\n");
    if !doc.file_id().is_empty() {
        out.push_str(&format!("File: {}\n", doc.file_id()));
    }
    out.push_str(&format!("Organism: {} ({})\n", doc.organism(), doc.tax_id()));
    let domains = if doc.domains().is_empty() {
        "(none)".to_string()
    } else {
        doc.domains().join()
    };
    out.push_str(&format!("Domains: {}\n\n", domains));

    out.push_str("2. Gene list\n");
    out.push_str(&format!("Imported genes: {}\n", doc.import_genes().len()));
    out.push_str(&format!("Duplicate entries: {}\n", doc.duplicate_genes().len()));
    if !doc.duplicate_genes().is_empty() {
        out.push_str(&format!("Duplicates: {}\n", doc.duplicate_genes().join(", ")));
    }
    out.push('\n');

    out.push_str("3. Matching\n");
    match doc.result() {
        Some(result) => {
            let total = result.genes.len();
            let matched = result.matched_count();
            out.push_str(&format!("Matched genes: {} of {}\n", matched, total));
            out.push_str(&format!(
                "Match fraction: {}\n",
                format_f32_3(fraction(matched, total))
            ));
            let unmatched = result
                .unmatched()
                .map(|g| g.imported.as_str())
                .collect::<Vec<_>>();
            if !unmatched.is_empty() {
                out.push_str(&format!("No match found: {}\n", unmatched.join(", ")));
            }
        }
        None => {
            out.push_str("No cached result; run enrich to generate one.\n");
        }
    }

    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
