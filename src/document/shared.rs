use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::document::EnrichmentDocument;
use crate::error::{EnrichmentError, Result};
use crate::model::{DomainSelection, EnrichmentTable};
use crate::pipeline::stage1_match::{EnrichmentSource, Stage1Params, generate_enrichment_result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshOutcome {
    pub changed: bool,
    /// Parameters were changed while the refresh was in flight; the stored
    /// result was built from the earlier gene list, taxonomy id or domains.
    pub stale: bool,
}

impl RefreshOutcome {
    pub fn message(&self) -> &'static str {
        if self.changed {
            "Data refreshed."
        } else {
            "Data refreshed but there were no changes."
        }
    }
}

/// A document shared between concurrent refreshes. The async chain runs
/// without the lock held; the result is swapped in under one write, so
/// whichever refresh finishes last wins.
#[derive(Debug, Clone, Default)]
pub struct SharedDocument {
    inner: Arc<RwLock<EnrichmentDocument>>,
}

impl SharedDocument {
    pub fn new(document: EnrichmentDocument) -> Self {
        Self {
            inner: Arc::new(RwLock::new(document)),
        }
    }

    pub async fn snapshot(&self) -> EnrichmentDocument {
        self.inner.read().await.clone()
    }

    pub async fn table(&self) -> EnrichmentTable {
        self.inner.read().await.table()
    }

    pub async fn save(&self) -> Result<String> {
        self.inner.read().await.save()
    }

    pub async fn set_parameters(
        &self,
        genes: &[String],
        tax_id: &str,
        organism: &str,
        domains: Option<DomainSelection>,
    ) {
        self.inner
            .write()
            .await
            .set_parameters(genes, tax_id, organism, domains);
    }

    pub async fn refresh(&self, source: &dyn EnrichmentSource) -> Result<RefreshOutcome> {
        let (genes, tax_id, domains, before) = {
            let doc = self.inner.read().await;
            (
                doc.import_genes().to_vec(),
                doc.tax_id().to_string(),
                doc.domains().clone(),
                doc.table(),
            )
        };

        let params = Stage1Params {
            genes: &genes,
            tax_id: &tax_id,
            domains: &domains,
        };
        let result = generate_enrichment_result(source, &params).await?;

        let mut doc = self.inner.write().await;
        let stale = doc.import_genes() != genes.as_slice()
            || doc.tax_id() != tax_id
            || doc.domains() != &domains;
        if stale {
            tracing::warn!(
                genes = doc.import_genes().len(),
                refreshed_genes = genes.len(),
                "parameters changed during refresh; storing result for the earlier parameters"
            );
        }
        doc.replace_result(result);
        let outcome = RefreshOutcome {
            changed: !before.equals(&doc.table()),
            stale,
        };
        tracing::info!(changed = outcome.changed, stale, "{}", outcome.message());
        Ok(outcome)
    }

    /// Runs a refresh on its own task. The returned handle is the
    /// cancellation token for that one aggregation.
    pub fn spawn_refresh(&self, source: Arc<dyn EnrichmentSource>) -> RefreshTask {
        let doc = self.clone();
        let handle = tokio::spawn(async move { doc.refresh(source.as_ref()).await });
        RefreshTask { handle }
    }
}

#[derive(Debug)]
pub struct RefreshTask {
    handle: JoinHandle<Result<RefreshOutcome>>,
}

impl RefreshTask {
    /// Aborts the aggregation. A cancelled refresh never writes its result.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub async fn join(self) -> Result<RefreshOutcome> {
        match self.handle.await {
            Ok(outcome) => outcome,
            Err(err) if err.is_cancelled() => Err(EnrichmentError::Cancelled),
            Err(err) => std::panic::resume_unwind(err.into_panic()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/document/shared.rs"]
mod tests;
