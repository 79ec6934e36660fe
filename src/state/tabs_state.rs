// ============================================================================
// TABS STATE - which tab is active
// ============================================================================

/// Active tab: internal value, overridden by the parent's when controlled
pub fn resolve_active<'a>(controlled: Option<&'a str>, internal: &'a str) -> &'a str {
    controlled.unwrap_or(internal)
}

/// Initial internal value: the seed when given, else the first tab
pub fn initial_tab(default_value: Option<&str>, tab_values: &[&str]) -> String {
    default_value
        .filter(|v| !v.is_empty())
        .or_else(|| tab_values.first().copied())
        .unwrap_or_default()
        .to_string()
}
