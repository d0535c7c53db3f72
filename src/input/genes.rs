use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedGenes {
    pub unique: Vec<String>,
    pub duplicates: Vec<String>,
}

/// Trims entries, drops blanks, and splits the list into first occurrences
/// and repeats. Every repeat beyond the first occurrence is appended to
/// `duplicates`, so a gene seen three times shows up there twice.
/// Comparison is case-sensitive.
pub fn normalize_gene_list<S: AsRef<str>>(raw: &[S]) -> NormalizedGenes {
    let mut seen: HashSet<&str> = HashSet::with_capacity(raw.len());
    let mut out = NormalizedGenes::default();

    for entry in raw {
        let gene = entry.as_ref().trim();
        if gene.is_empty() {
            continue;
        }
        if seen.insert(gene) {
            out.unique.push(gene.to_string());
        } else {
            out.duplicates.push(gene.to_string());
        }
    }

    if !out.duplicates.is_empty() {
        tracing::debug!(
            unique = out.unique.len(),
            duplicates = out.duplicates.len(),
            "gene list contained repeated entries"
        );
    }

    out
}

/// Splits free text (one gene per line, CR/LF tolerated) into raw entries.
pub fn split_gene_text(text: &str) -> Vec<String> {
    text.lines().map(|line| line.to_string()).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/genes.rs"]
mod tests;
