use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::document::EnrichmentDocument;
use crate::error::Result;
use crate::model::EnrichmentTable;
use crate::report::table_csv::render_table_csv;

#[derive(Debug, Clone, Default)]
pub struct ExportTargets {
    pub document: Option<PathBuf>,
    pub csv: Option<PathBuf>,
}

pub fn write_outputs(
    doc: &EnrichmentDocument,
    table: &EnrichmentTable,
    targets: &ExportTargets,
) -> Result<()> {
    table.check_width()?;

    if let Some(path) = &targets.document {
        write_text(path, &doc.save()?)?;
        tracing::info!(path = %path.display(), "enrichment document written");
    }

    if let Some(path) = &targets.csv {
        let csv = render_table_csv(&table.header, &table.cells)?;
        write_text(path, &csv)?;
        tracing::info!(
            path = %path.display(),
            rows = table.cells.len(),
            columns = table.width(),
            "enrichment table exported"
        );
    }

    Ok(())
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(content.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_export.rs"]
mod tests;
