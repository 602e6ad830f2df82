use serde::{Deserialize, Serialize};

/// The scalar identifier of a [`SelectOption`], either textual or numeric.
///
/// Serializes as a bare JSON string or number. `Eq + Hash` so a consumer
/// can enforce uniqueness across an option list with a set.
#[derive(Debug, Eq, Hash, PartialEq, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Number(i64),
    String(String),
}

impl From<i64> for OptionValue {
    fn from(from: i64) -> Self {
        OptionValue::Number(from)
    }
}

impl From<String> for OptionValue {
    fn from(from: String) -> Self {
        OptionValue::String(from)
    }
}

impl From<&str> for OptionValue {
    fn from(from: &str) -> Self {
        OptionValue::String(from.to_owned())
    }
}

impl std::fmt::Display for OptionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionValue::Number(n) => write!(f, "{}", n),
            OptionValue::String(s) => f.write_str(s),
        }
    }
}

/// One selectable entry in the widget's list.
///
/// Options are built by the widget's caller and passed in as an immutable
/// list; list order is display order. Uniqueness of `value` within a list
/// is the consuming component's responsibility.
#[derive(Debug, Eq, PartialEq, Clone, Deserialize, Serialize)]
pub struct SelectOption {
    /// Identifier of this option. Must be unique within a given option list.
    pub value: OptionValue,

    /// The human-readable text shown for this option.
    pub label: String,

    /// Whether this option can be selected. Can be omitted; an absent flag
    /// means selectable. When `Some(true)` the consuming component must
    /// prevent selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

impl SelectOption {
    pub fn new(value: impl Into<OptionValue>, label: impl Into<String>) -> SelectOption {
        SelectOption {
            value: value.into(),
            label: label.into(),
            disabled: None,
        }
    }

    pub fn new_disabled(value: impl Into<OptionValue>, label: impl Into<String>) -> SelectOption {
        SelectOption {
            disabled: Some(true),
            ..SelectOption::new(value, label)
        }
    }

    /// Resolves the optional `disabled` flag: an omitted flag means the
    /// option is selectable.
    pub fn is_disabled(&self) -> bool {
        self.disabled.unwrap_or(false)
    }
}
