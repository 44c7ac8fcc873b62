//! Class name composition shared by every widget

/// Join a widget's base class with an optional caller override
pub fn merge_class(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}
