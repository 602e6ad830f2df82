use serde::{Deserialize, Serialize};

/// Explicit vertical offset hints for placing the dropdown menu.
///
/// Both fields are independent; a consumer may supply neither, either, or
/// both. Supplying both is likely contradictory and is left to the
/// rendering layer to resolve.
#[derive(Debug, Eq, PartialEq, Clone, Default, Deserialize, Serialize)]
pub struct Position {
    /// Offset expression from the top of the anchor, e.g. `"100%"` or `"2em"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,

    /// Offset expression from the bottom of the anchor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<String>,
}

impl Position {
    pub fn new(top: Option<String>, bottom: Option<String>) -> Position {
        Position { top, bottom }
    }

    /// `true` when neither hint is set and placement is entirely up to the
    /// rendering layer.
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.bottom.is_none()
    }
}
