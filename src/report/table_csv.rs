use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::{EnrichmentError, Result};
use crate::model::{TableCell, TableHeader};

/// Header rows flattened to one field per column: the name, then blanks for
/// the rest of its span.
pub fn flatten_header_row(row: &[TableHeader]) -> Vec<String> {
    let mut out = Vec::new();
    for header in row {
        out.push(header.name.clone());
        for _ in 1..header.span {
            out.push(String::new());
        }
    }
    out
}

/// Cell text followed by every link on its own line.
pub fn cell_field(cell: &TableCell) -> String {
    let mut field = cell.text.clone();
    if let Some(link) = &cell.single_link {
        field.push('\n');
        field.push_str(&link.link);
    }
    if let Some(links) = &cell.multi_link {
        for link in links {
            field.push('\n');
            field.push_str(&link.link);
        }
    }
    field
}

/// RFC 4180 quoting, `\n` terminated rows. Rows of unequal width are
/// rejected by the writer.
pub fn render_table_csv(header: &[Vec<TableHeader>], cells: &[Vec<TableCell>]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .double_quote(true)
        .from_writer(Vec::new());

    for row in header {
        writer.write_record(flatten_header_row(row))?;
    }
    for row in cells {
        writer.write_record(row.iter().map(cell_field))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| EnrichmentError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| EnrichmentError::MalformedDocument(e.to_string()))
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/table_csv.rs"]
mod tests;
