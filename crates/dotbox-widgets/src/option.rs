//! Selectable options and their normalization.
//!
//! Options arrive in two shapes: a bare scalar (`"Peru"`, `42`) that doubles
//! as value and label, or an explicit `{ value, label }` pair. Both are
//! coerced into [`OptionItem`] once, at the boundary, so the rest of the
//! widget never inspects the shape again.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One selectable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionItem {
    /// The value reported in selections.
    pub value: String,
    /// The text shown to the user and matched by search.
    pub label: String,
}

impl OptionItem {
    /// An option with distinct value and label.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Case-insensitive substring match of `needle` against the label.
    ///
    /// `needle` must already be lower-cased.
    pub(crate) fn label_contains(&self, needle: &str) -> bool {
        self.label.to_lowercase().contains(needle)
    }
}

impl From<&str> for OptionItem {
    fn from(s: &str) -> Self {
        Self::new(s, s)
    }
}

impl From<String> for OptionItem {
    fn from(s: String) -> Self {
        Self {
            label: s.clone(),
            value: s,
        }
    }
}

impl<V: Into<String>, L: Into<String>> From<(V, L)> for OptionItem {
    fn from((value, label): (V, L)) -> Self {
        Self::new(value, label)
    }
}

/// A scalar as it may appear in a configuration file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Text.
    Text(String),
    /// Whole number.
    Integer(i64),
    /// Floating point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Integer(n) => write!(f, "{n}"),
            Scalar::Float(x) => write!(f, "{x}"),
            Scalar::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<Scalar> for String {
    fn from(s: Scalar) -> Self {
        match s {
            Scalar::Text(s) => s,
            other => other.to_string(),
        }
    }
}

/// Wire shape of an option: a pair, or a bare scalar.
#[derive(Deserialize)]
#[serde(untagged)]
enum OptionSpec {
    Pair { value: Scalar, label: Option<Scalar> },
    Bare(Scalar),
}

impl From<OptionSpec> for OptionItem {
    fn from(spec: OptionSpec) -> Self {
        match spec {
            OptionSpec::Pair { value, label } => {
                let value = String::from(value);
                let label = label.map(String::from).unwrap_or_else(|| value.clone());
                Self { value, label }
            }
            OptionSpec::Bare(scalar) => Self::from(String::from(scalar)),
        }
    }
}

impl<'de> Deserialize<'de> for OptionItem {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        OptionSpec::deserialize(deserializer).map(OptionItem::from)
    }
}

/// First option carrying `value`, in list order.
pub fn find_by_value<'a>(options: &'a [OptionItem], value: &str) -> Option<&'a OptionItem> {
    options.iter().find(|o| o.value == value)
}

/// Label to show for `value`: the first matching option's label, or the raw
/// value when no option carries it.
pub fn label_for<'a>(options: &'a [OptionItem], value: &'a str) -> &'a str {
    find_by_value(options, value).map_or(value, |o| o.label.as_str())
}

/// Indices of the options whose label contains `query`, ignoring case.
/// An empty query matches everything.
pub fn filter_indices(options: &[OptionItem], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..options.len()).collect();
    }
    let needle = query.to_lowercase();
    options
        .iter()
        .enumerate()
        .filter(|(_, o)| o.label_contains(&needle))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        options: Vec<OptionItem>,
    }

    fn greek() -> Vec<OptionItem> {
        vec![
            OptionItem::new("a", "Alpha"),
            OptionItem::new("b", "Beta"),
            OptionItem::new("g", "Gamma"),
        ]
    }

    #[test]
    fn bare_string_is_value_and_label() {
        let item = OptionItem::from("Peru");
        assert_eq!(item.value, "Peru");
        assert_eq!(item.label, "Peru");
    }

    #[test]
    fn deserializes_mixed_shapes() {
        let holder: Holder = toml::from_str(
            r#"options = ["Peru", 7, { value = "ch", label = "Switzerland" }, { value = 3 }]"#,
        )
        .unwrap();
        assert_eq!(
            holder.options,
            vec![
                OptionItem::new("Peru", "Peru"),
                OptionItem::new("7", "7"),
                OptionItem::new("ch", "Switzerland"),
                OptionItem::new("3", "3"),
            ]
        );
    }

    #[test]
    fn label_lookup_falls_back_to_value() {
        let options = greek();
        assert_eq!(label_for(&options, "b"), "Beta");
        assert_eq!(label_for(&options, "zzz"), "zzz");
    }

    #[test]
    fn duplicate_values_resolve_to_first() {
        let options = vec![OptionItem::new("x", "First"), OptionItem::new("x", "Second")];
        assert_eq!(label_for(&options, "x"), "First");
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let options = greek();
        assert_eq!(filter_indices(&options, "A"), vec![0, 1, 2]);
        assert_eq!(filter_indices(&options, "mm"), vec![2]);
        assert_eq!(filter_indices(&options, "ALP"), vec![0]);
        assert!(filter_indices(&options, "omega").is_empty());
    }

    #[test]
    fn empty_query_matches_all() {
        assert_eq!(filter_indices(&greek(), ""), vec![0, 1, 2]);
    }

    #[test]
    fn filter_matches_label_not_value() {
        assert_eq!(filter_indices(&greek(), "g"), vec![2]);
        assert_eq!(filter_indices(&greek(), "b"), vec![1]);
    }

    #[test]
    fn filter_agrees_with_brute_force() {
        let options = vec![
            OptionItem::from("München"),
            OptionItem::from("MUNICH"),
            OptionItem::from("Zürich"),
            OptionItem::from(""),
        ];
        for query in ["", "m", "MU", "ü", "rich", "x", "ÜNCH"] {
            let expected: Vec<usize> = options
                .iter()
                .enumerate()
                .filter(|(_, o)| o.label.to_lowercase().contains(&query.to_lowercase()))
                .map(|(i, _)| i)
                .collect();
            assert_eq!(filter_indices(&options, query), expected, "query {query:?}");
        }
    }
}
