use crate::model::{EnrichedGene, EnrichmentResult, EnrichmentTable, TableCell, TableHeader};
use crate::pipeline::stage3_layout::{ColumnLayout, LEADING_COLUMNS, LEADING_HEADERS};

pub const NO_MATCH_TEXT: &str = "No match found.";
pub const NCBI_LINK_TEXT: &str = "NCBI Link";

/// Projects an enrichment result into a grid. Matched genes come first in
/// result order, then one highlighted row per unmatched gene. Every row is
/// exactly `layout.width()` cells wide.
pub fn project_table(result: Option<&EnrichmentResult>, layout: &ColumnLayout) -> EnrichmentTable {
    let Some(result) = result else {
        return EnrichmentTable {
            header: vec![
                LEADING_HEADERS
                    .iter()
                    .map(|name| TableHeader::new(*name, 1))
                    .collect(),
            ],
            cells: Vec::new(),
        };
    };

    let mut cells = Vec::with_capacity(result.genes.len());
    for gene in result.genes.iter().filter(|g| g.is_matched()) {
        cells.push(matched_row(gene, layout));
    }
    for gene in result.unmatched() {
        cells.push(unmatched_row(&gene.imported, layout.width()));
    }

    EnrichmentTable {
        header: layout.header_rows(),
        cells,
    }
}

fn matched_row(gene: &EnrichedGene, layout: &ColumnLayout) -> Vec<TableCell> {
    let mut row = Vec::with_capacity(layout.width());
    row.push(TableCell::text(gene.imported.as_str()));
    row.push(TableCell::text(gene.matched.clone().unwrap_or_default()));
    row.push(TableCell::linked(
        gene.full_name.clone().unwrap_or_default(),
        gene.link.clone().unwrap_or_default(),
        NCBI_LINK_TEXT,
    ));

    // A domain with no result still holds its columns, as empty cells.
    for slot in layout.slots() {
        let cell = match gene.value(slot.domain, slot.label) {
            Some(value) => TableCell::linked(
                value.display_text(),
                value.link.as_str(),
                slot.domain.def().link_text,
            ),
            None => TableCell::text(""),
        };
        row.push(cell);
    }
    row
}

fn unmatched_row(gene: &str, width: usize) -> Vec<TableCell> {
    let mut row = Vec::with_capacity(width);
    row.push(TableCell::highlighted(gene));
    row.push(TableCell::highlighted(NO_MATCH_TEXT));
    for _ in 2..width {
        row.push(TableCell::highlighted(""));
    }
    row
}

/// Moves already projected cells from `old` column positions to `new` ones
/// without going back to the domain envelopes. Columns new to the layout are
/// filled with empty cells carrying the row's highlight.
pub fn reorder_table(
    table: &EnrichmentTable,
    old: &ColumnLayout,
    new: &ColumnLayout,
) -> EnrichmentTable {
    let mapping = new.remap_from(old);
    let cells = table
        .cells
        .iter()
        .map(|row| {
            let highlight = row.first().is_some_and(|c| c.highlight);
            let filler = || TableCell {
                highlight,
                ..TableCell::default()
            };
            let mut out = Vec::with_capacity(new.width());
            for idx in 0..LEADING_COLUMNS {
                out.push(row.get(idx).cloned().unwrap_or_else(filler));
            }
            for source in &mapping {
                let cell = source
                    .and_then(|idx| row.get(idx).cloned())
                    .unwrap_or_else(filler);
                out.push(cell);
            }
            out
        })
        .collect();

    EnrichmentTable {
        header: new.header_rows(),
        cells,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_project.rs"]
mod tests;
