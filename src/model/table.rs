use serde::{Deserialize, Serialize};

use crate::error::{EnrichmentError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableHeader {
    pub name: String,
    pub span: usize,
}

impl TableHeader {
    pub fn new(name: impl Into<String>, span: usize) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }

    pub fn blank() -> Self {
        Self::new("", 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableLink {
    pub link: String,
    pub link_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_link: Option<TableLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_link: Option<Vec<TableLink>>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub highlight: bool,
}

impl TableCell {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn linked(text: impl Into<String>, link: impl Into<String>, link_text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            single_link: Some(TableLink {
                link: link.into(),
                link_text: link_text.into(),
            }),
            ..Self::default()
        }
    }

    pub fn highlighted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlight: true,
            ..Self::default()
        }
    }
}

/// Projected table: one or two header rows plus a grid of equally wide rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentTable {
    pub header: Vec<Vec<TableHeader>>,
    pub cells: Vec<Vec<TableCell>>,
}

impl EnrichmentTable {
    /// Total column count, the sum of spans on the first header row.
    pub fn width(&self) -> usize {
        self.header
            .first()
            .map(|row| row.iter().map(|h| h.span).sum())
            .unwrap_or(0)
    }

    /// Structural equality over headers and cells, used to tell whether a
    /// refresh changed anything.
    pub fn equals(&self, other: &EnrichmentTable) -> bool {
        self.header == other.header && self.cells == other.cells
    }

    /// Every header row and data row must span exactly `width()` columns.
    /// Data row indices are reported as `InvariantViolation`, header rows as
    /// `HeaderSpanMismatch`.
    pub fn check_width(&self) -> Result<()> {
        let expected = self.width();
        for (idx, row) in self.header.iter().enumerate().skip(1) {
            let actual: usize = row.iter().map(|h| h.span).sum();
            if actual != expected {
                return Err(EnrichmentError::HeaderSpanMismatch {
                    row: idx,
                    expected,
                    actual,
                });
            }
        }
        for (idx, row) in self.cells.iter().enumerate() {
            if row.len() != expected {
                return Err(EnrichmentError::InvariantViolation {
                    row: idx,
                    expected,
                    actual: row.len(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/table.rs"]
mod tests;
