// Legacy or strain-level taxonomy ids that the graph stores under another id.
const ORGANISM_ALIASES: &[(&str, &str)] = &[
    ("562", "511145"),
    ("83333", "511145"),
    ("4932", "559292"),
];

/// Maps alternate taxonomy ids to the canonical id; identity otherwise.
/// Idempotent: no canonical id is itself an alias.
pub fn resolve_organism_alias(tax_id: &str) -> String {
    for (alias, canonical) in ORGANISM_ALIASES {
        if *alias == tax_id {
            tracing::debug!(from = tax_id, to = canonical, "organism alias resolved");
            return canonical.to_string();
        }
    }
    tax_id.to_string()
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/organism.rs"]
mod tests;
