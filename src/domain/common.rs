/// Identifies records that expose a stable identifier issued upstream.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Provides access to a human-friendly record name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Lowercases and splits a label into whitespace separated keywords.
pub fn keywords(label: &str) -> Vec<String> {
    label
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
