//! Keyboard shortcuts to page sections

use std::collections::BTreeMap;

/// Whether a key event from an element with this tag name is ignored
/// (inputs, textareas and buttons keep their keys)
pub fn is_typing_target(tag_name: &str) -> bool {
    matches!(
        tag_name.to_ascii_lowercase().as_str(),
        "input" | "textarea" | "button"
    )
}

/// Key -> section id lookup
#[derive(Debug, Clone, Default)]
pub struct ShortcutMap {
    keys: BTreeMap<String, String>,
}

impl ShortcutMap {
    pub fn new(keys: &BTreeMap<String, String>) -> Self {
        Self {
            keys: keys
                .iter()
                .map(|(k, v)| (k.to_lowercase(), v.clone()))
                .collect(),
        }
    }

    /// Section id for a `KeyboardEvent.key`, case-insensitive
    pub fn section_for(&self, key: &str) -> Option<&str> {
        self.keys.get(&key.to_lowercase()).map(String::as_str)
    }

    /// One-line help text ("H - Hero | A - About")
    pub fn help_line(&self) -> String {
        self.keys
            .iter()
            .map(|(k, v)| format!("{} - {}", k.to_uppercase(), capitalize(v)))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SiteConfig;

    #[test]
    fn test_default_lookup() {
        let map = ShortcutMap::new(&SiteConfig::default().shortcuts);
        assert_eq!(map.section_for("h"), Some("hero"));
        assert_eq!(map.section_for("P"), Some("projects"));
        assert_eq!(map.section_for("x"), None);
        assert_eq!(map.section_for("ArrowUp"), None);
    }

    #[test]
    fn test_typing_targets() {
        assert!(is_typing_target("INPUT"));
        assert!(is_typing_target("textarea"));
        assert!(is_typing_target("BUTTON"));
        assert!(!is_typing_target("DIV"));
    }

    #[test]
    fn test_help_line() {
        let mut keys = BTreeMap::new();
        keys.insert("a".to_string(), "about".to_string());
        keys.insert("h".to_string(), "hero".to_string());
        assert_eq!(ShortcutMap::new(&keys).help_line(), "A - About | H - Hero");
    }
}
