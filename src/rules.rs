// Generated at compile time from kernel_module_rules.json
include!(concat!(env!("OUT_DIR"), "/kernel_module_rules.rs"));

/// The prefix rules in declared order, as `(prefix, icon)` pairs.
///
/// Narrower paths come before their parents, so a linear scan that stops at
/// the first hit picks the most specific icon.
pub fn rules() -> &'static [(&'static str, &'static str)] {
    PREFIX_RULES
}

/// Get the icon for a module path that already had `kernel/` stripped
pub fn match_rule(path: &str) -> Option<&'static str> {
    PREFIX_RULES
        .iter()
        .find(|(prefix, _)| path.starts_with(prefix))
        .map(|(_, icon)| *icon)
}

/// Whether any rule can produce this icon
pub fn is_known_icon(icon: &str) -> bool {
    KNOWN_ICONS.contains(icon)
}
