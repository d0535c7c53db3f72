use crate::model::{Domain, DomainSelection, TableHeader};

pub const LEADING_HEADERS: [&str; 3] = ["Imported", "Matched", "NCBI Gene Full Name"];
pub const LEADING_COLUMNS: usize = LEADING_HEADERS.len();

/// One data column owned by a domain. Multi-label domains own a contiguous run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSlot {
    pub domain: Domain,
    pub sub_index: usize,
    pub label: &'static str,
}

impl ColumnSlot {
    /// `Regulon`, `Regulon 2`, `Regulon 3` for a multi-label run; the domain name otherwise.
    pub fn name(&self) -> String {
        if self.sub_index == 0 {
            self.domain.name().to_string()
        } else {
            format!("{} {}", self.domain.name(), self.sub_index + 1)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    domains: DomainSelection,
    slots: Vec<ColumnSlot>,
}

impl ColumnLayout {
    pub fn new(domains: &DomainSelection) -> Self {
        let mut slots = Vec::new();
        for domain in domains.iter() {
            for (sub_index, label) in domain.labels().iter().copied().enumerate() {
                slots.push(ColumnSlot {
                    domain,
                    sub_index,
                    label,
                });
            }
        }
        Self {
            domains: domains.clone(),
            slots,
        }
    }

    pub fn domains(&self) -> &DomainSelection {
        &self.domains
    }

    /// Domain slots in display order, excluding the leading columns.
    pub fn slots(&self) -> &[ColumnSlot] {
        &self.slots
    }

    pub fn width(&self) -> usize {
        LEADING_COLUMNS + self.slots.len()
    }

    /// Absolute column index of a domain sub-column.
    pub fn column_index(&self, domain: Domain, sub_index: usize) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| s.domain == domain && s.sub_index == sub_index)
            .map(|idx| LEADING_COLUMNS + idx)
    }

    /// Row 0 always; row 1 only when a multi-label domain (Regulon) is selected.
    pub fn header_rows(&self) -> Vec<Vec<TableHeader>> {
        let mut row0 = LEADING_HEADERS
            .iter()
            .map(|name| TableHeader::new(*name, 1))
            .collect::<Vec<_>>();
        for domain in self.domains.iter() {
            row0.push(TableHeader::new(domain.def().header, domain.span()));
        }

        if !self.domains.contains(Domain::Regulon) {
            return vec![row0];
        }

        let mut row1 = (0..LEADING_COLUMNS)
            .map(|_| TableHeader::blank())
            .collect::<Vec<_>>();
        for domain in self.domains.iter() {
            if domain.span() > 1 {
                row1.extend(domain.labels().iter().map(|label| TableHeader::new(*label, 1)));
            } else {
                row1.push(TableHeader::blank());
            }
        }
        vec![row0, row1]
    }

    /// For each slot of `self`, the absolute column it occupied in `old`.
    pub fn remap_from(&self, old: &ColumnLayout) -> Vec<Option<usize>> {
        self.slots
            .iter()
            .map(|slot| old.column_index(slot.domain, slot.sub_index))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_layout.rs"]
mod tests;
