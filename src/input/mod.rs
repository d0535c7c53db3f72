use std::io::Read;
use std::path::Path;

pub mod fixture;
pub mod genes;
pub mod organism;

use crate::error::Result;
use genes::split_gene_text;

/// Reads a raw gene list, one entry per line. `-` reads stdin.
pub fn read_gene_list(path: &Path) -> Result<Vec<String>> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    let genes = split_gene_text(&text);
    tracing::debug!(path = %path.display(), entries = genes.len(), "gene list read");
    Ok(genes)
}
