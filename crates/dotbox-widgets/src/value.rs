//! The selection held by a combobox: one value, or an ordered set of values.

use serde::Serialize;

/// Current selection. The variant is fixed by the widget's `multiple` flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Selection {
    /// Single-select mode. `None` and `Some("")` both mean "nothing selected".
    Single(Option<String>),
    /// Multi-select mode. Ordered by selection time, never contains duplicates.
    Multiple(Vec<String>),
}

impl Selection {
    /// The empty selection for the given mode.
    pub fn empty(multiple: bool) -> Self {
        if multiple {
            Selection::Multiple(Vec::new())
        } else {
            Selection::Single(None)
        }
    }

    /// Build a multi selection, dropping repeated values (first one wins).
    pub fn multiple<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for v in values {
            let v = v.into();
            if !out.contains(&v) {
                out.push(v);
            }
        }
        Selection::Multiple(out)
    }

    /// Build a single selection.
    pub fn single(value: impl Into<String>) -> Self {
        Selection::Single(Some(value.into()))
    }

    /// Whether this is the multi-select variant.
    pub fn is_multiple(&self) -> bool {
        matches!(self, Selection::Multiple(_))
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        match self {
            Selection::Single(v) => v.as_deref().map_or(true, str::is_empty),
            Selection::Multiple(vs) => vs.is_empty(),
        }
    }

    /// Whether `value` is part of the selection. Compared by value.
    pub fn contains(&self, value: &str) -> bool {
        match self {
            Selection::Single(v) => v.as_deref() == Some(value),
            Selection::Multiple(vs) => vs.iter().any(|v| v == value),
        }
    }

    /// Selected values, in order. Empty when nothing is selected.
    pub fn values(&self) -> Vec<&str> {
        match self {
            Selection::Single(Some(v)) if !v.is_empty() => vec![v.as_str()],
            Selection::Single(_) => Vec::new(),
            Selection::Multiple(vs) => vs.iter().map(String::as_str).collect(),
        }
    }

    /// Convert to the other mode, keeping what can be kept:
    /// a single value becomes a one-element list, a list keeps its first value.
    pub fn into_mode(self, multiple: bool) -> Self {
        match (self, multiple) {
            (Selection::Single(v), true) => {
                Selection::multiple(v.into_iter().filter(|s| !s.is_empty()))
            }
            (Selection::Multiple(vs), false) => Selection::Single(vs.into_iter().next()),
            (same, _) => same,
        }
    }

    /// Multi mode: add `value` if absent. Returns whether anything changed.
    pub(crate) fn insert(&mut self, value: &str) -> bool {
        match self {
            Selection::Multiple(vs) if !vs.iter().any(|v| v == value) => {
                vs.push(value.to_string());
                true
            }
            _ => false,
        }
    }

    /// Multi mode: remove `value` if present. Returns whether anything changed.
    pub(crate) fn remove(&mut self, value: &str) -> bool {
        match self {
            Selection::Multiple(vs) => {
                let before = vs.len();
                vs.retain(|v| v != value);
                vs.len() != before
            }
            Selection::Single(_) => false,
        }
    }

    /// Multi mode: add `value` if absent, remove it otherwise.
    pub(crate) fn toggle(&mut self, value: &str) {
        if !self.remove(value) {
            self.insert(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_per_mode() {
        assert_eq!(Selection::empty(false), Selection::Single(None));
        assert_eq!(Selection::empty(true), Selection::Multiple(vec![]));
        assert!(Selection::empty(false).is_empty());
        assert!(Selection::empty(true).is_empty());
    }

    #[test]
    fn empty_string_counts_as_empty() {
        assert!(Selection::single("").is_empty());
        assert!(Selection::single("").values().is_empty());
        assert!(!Selection::single("a").is_empty());
    }

    #[test]
    fn multiple_dedups_preserving_first() {
        assert_eq!(
            Selection::multiple(["b", "a", "b"]),
            Selection::Multiple(vec!["b".into(), "a".into()])
        );
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut s = Selection::empty(true);
        s.toggle("a");
        s.toggle("b");
        assert_eq!(s.values(), vec!["a", "b"]);
        s.toggle("a");
        assert_eq!(s.values(), vec!["b"]);
    }

    #[test]
    fn insert_never_duplicates() {
        let mut s = Selection::multiple(["a"]);
        assert!(!s.insert("a"));
        assert!(s.insert("b"));
        assert_eq!(s.values(), vec!["a", "b"]);
    }

    #[test]
    fn single_ignores_set_operations() {
        let mut s = Selection::single("a");
        assert!(!s.insert("b"));
        assert!(!s.remove("a"));
        assert_eq!(s, Selection::single("a"));
    }

    #[test]
    fn contains_compares_by_value() {
        let owned = String::from("a");
        assert!(Selection::single("a").contains(&owned));
        assert!(Selection::multiple(["x", "a"]).contains("a"));
        assert!(!Selection::Single(None).contains(""));
    }

    #[test]
    fn mode_conversion() {
        assert_eq!(
            Selection::single("a").into_mode(true),
            Selection::multiple(["a"])
        );
        assert_eq!(Selection::single("").into_mode(true), Selection::empty(true));
        assert_eq!(
            Selection::multiple(["b", "c"]).into_mode(false),
            Selection::single("b")
        );
        assert_eq!(Selection::empty(true).into_mode(false), Selection::Single(None));
    }
}
