use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{EnrichmentError, Result};
use crate::model::{DomainSelection, EnrichmentResult};

const SEGMENT_SEPARATOR: char = '/';
const LIST_SEPARATOR: char = ',';

/// On-disk envelope. Older files are a bare string equal to `data`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnrichmentData {
    pub data: String,
    #[serde(default)]
    pub result: Option<EnrichmentResult>,
    /// Deprecated; the file name does this job. Read, never written.
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Serialize)]
struct EnrichmentDataOut<'a> {
    data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'a EnrichmentResult>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecodedDocument {
    pub import_genes: Vec<String>,
    pub tax_id: String,
    pub organism: String,
    /// `None` when the data string has no domain segment.
    pub domains: Option<DomainSelection>,
    pub result: Option<EnrichmentResult>,
}

/// `genes/taxID/organism/domains`, genes and domains comma-joined.
pub fn encode_data_string(
    import_genes: &[String],
    tax_id: &str,
    organism: &str,
    domains: &DomainSelection,
) -> String {
    [
        import_genes.join(","),
        tax_id.to_string(),
        organism.to_string(),
        domains.join(),
    ]
    .join("/")
}

pub fn encode_document(
    import_genes: &[String],
    tax_id: &str,
    organism: &str,
    domains: &DomainSelection,
    result: Option<&EnrichmentResult>,
) -> Result<String> {
    let out = EnrichmentDataOut {
        data: encode_data_string(import_genes, tax_id, organism, domains),
        result,
    };
    Ok(serde_json::to_string(&out)?)
}

/// Payloads that are not JSON at all are the legacy bare `data` string.
/// Valid JSON that does not fit the envelope is an error, never legacy.
pub fn decode_document(payload: &str) -> Result<DecodedDocument> {
    let envelope = match serde_json::from_str::<Value>(payload) {
        Ok(value @ Value::Object(_)) => serde_json::from_value::<EnrichmentData>(value)?,
        Ok(Value::String(data)) => legacy_envelope(&data),
        Ok(other) => {
            return Err(EnrichmentError::MalformedDocument(format!(
                "expected a document object, found {other}"
            )));
        }
        Err(err) => {
            tracing::debug!(error = %err, "document is not JSON; reading legacy string");
            legacy_envelope(payload)
        }
    };

    if envelope.data.trim().is_empty() {
        return Err(EnrichmentError::MalformedDocument(
            "document has no data string".to_string(),
        ));
    }

    let segments = envelope.data.split(SEGMENT_SEPARATOR).collect::<Vec<_>>();
    if segments.len() < 3 {
        return Err(EnrichmentError::MalformedDocument(format!(
            "expected genes/taxID/organism, found {} segment(s)",
            segments.len()
        )));
    }
    if segments.len() > 4 {
        tracing::warn!(
            segments = segments.len(),
            "document data has extra segments; ignoring past the domain list"
        );
    }

    Ok(DecodedDocument {
        import_genes: segments[0]
            .split(LIST_SEPARATOR)
            .map(|g| g.to_string())
            .collect(),
        tax_id: segments[1].to_string(),
        organism: segments[2].to_string(),
        domains: segments.get(3).map(|s| DomainSelection::parse_lenient(s)),
        result: envelope.result,
    })
}

fn legacy_envelope(data: &str) -> EnrichmentData {
    EnrichmentData {
        data: data.trim().to_string(),
        result: None,
        name: None,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/document/codec.rs"]
mod tests;
