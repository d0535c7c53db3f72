use std::sync::Arc;

pub mod codec;
pub mod shared;

use codec::{decode_document, encode_document};

use crate::error::Result;
use crate::input::genes::normalize_gene_list;
use crate::input::organism::resolve_organism_alias;
use crate::model::{DomainSelection, EnrichmentResult, EnrichmentTable};
use crate::pipeline::stage1_match::{EnrichmentSource, Stage1Params, generate_enrichment_result};
use crate::pipeline::stage3_layout::ColumnLayout;
use crate::pipeline::stage4_project::{project_table, reorder_table};

/// The persisted unit: parameters plus the cached result. The result is
/// only ever replaced as a whole.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichmentDocument {
    file_id: String,
    import_genes: Vec<String>,
    tax_id: String,
    organism: String,
    domains: DomainSelection,
    duplicate_genes: Vec<String>,
    result: Option<Arc<EnrichmentResult>>,
}

impl EnrichmentDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-derives the unique and duplicate gene lists and the canonical
    /// taxonomy id, then assigns everything at once.
    pub fn set_parameters<S: AsRef<str>>(
        &mut self,
        genes: &[S],
        tax_id: &str,
        organism: &str,
        domains: Option<DomainSelection>,
    ) {
        let normalized = normalize_gene_list(genes);
        let tax_id = resolve_organism_alias(tax_id);
        let domains = domains.unwrap_or_default();

        self.import_genes = normalized.unique;
        self.duplicate_genes = normalized.duplicates;
        self.tax_id = tax_id;
        self.organism = organism.to_string();
        self.domains = domains;
    }

    /// Decodes a saved payload. A missing result stays missing.
    pub fn load(payload: &str, file_id: &str) -> Result<Self> {
        let decoded = decode_document(payload)?;
        let mut doc = Self {
            file_id: file_id.to_string(),
            ..Self::default()
        };
        doc.set_parameters(
            &decoded.import_genes,
            &decoded.tax_id,
            &decoded.organism,
            decoded.domains,
        );
        doc.result = decoded.result.map(Arc::new);
        tracing::debug!(
            file_id,
            genes = doc.import_genes.len(),
            cached_result = doc.result.is_some(),
            "enrichment document loaded"
        );
        Ok(doc)
    }

    /// Like `load`, but regenerates the result when the payload had none.
    pub async fn load_with_source(
        payload: &str,
        file_id: &str,
        source: &dyn EnrichmentSource,
    ) -> Result<Self> {
        let mut doc = Self::load(payload, file_id)?;
        if doc.result.is_none() {
            doc.refresh_data(source).await?;
        }
        Ok(doc)
    }

    pub fn save(&self) -> Result<String> {
        encode_document(
            &self.import_genes,
            &self.tax_id,
            &self.organism,
            &self.domains,
            self.result.as_deref(),
        )
    }

    /// Runs the match/fetch/merge chain. On failure the previous result is kept.
    pub async fn refresh_data(&mut self, source: &dyn EnrichmentSource) -> Result<()> {
        let result = generate_enrichment_result(source, &self.stage1_params()).await?;
        self.replace_result(result);
        Ok(())
    }

    pub fn replace_result(&mut self, result: EnrichmentResult) {
        self.result = Some(Arc::new(result));
    }

    pub fn stage1_params(&self) -> Stage1Params<'_> {
        Stage1Params {
            genes: &self.import_genes,
            tax_id: &self.tax_id,
            domains: &self.domains,
        }
    }

    pub fn layout(&self) -> ColumnLayout {
        ColumnLayout::new(&self.domains)
    }

    pub fn table(&self) -> EnrichmentTable {
        project_table(self.result.as_deref(), &self.layout())
    }

    /// Changes the column order and remaps an already projected table to it.
    pub fn reorder(&mut self, table: &EnrichmentTable, domains: DomainSelection) -> EnrichmentTable {
        let old = self.layout();
        self.set_domains(domains);
        reorder_table(table, &old, &self.layout())
    }

    /// Column order persisted on the next save.
    pub fn set_domains(&mut self, domains: DomainSelection) {
        self.domains = domains;
    }

    pub fn file_id(&self) -> &str {
        &self.file_id
    }

    pub fn import_genes(&self) -> &[String] {
        &self.import_genes
    }

    pub fn duplicate_genes(&self) -> &[String] {
        &self.duplicate_genes
    }

    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    pub fn organism(&self) -> &str {
        &self.organism
    }

    pub fn domains(&self) -> &DomainSelection {
        &self.domains
    }

    pub fn result(&self) -> Option<&EnrichmentResult> {
        self.result.as_deref()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/document/tests.rs"]
mod tests;
