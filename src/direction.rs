use serde::{Deserialize, Serialize};

/// Vertical expansion direction of a dropdown menu relative to its anchor.
///
/// `"up"` and `"down"` are the only legal wire values; anything else fails
/// deserialization.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    /// Menus expand downwards unless told otherwise.
    #[default]
    Down,
}

impl Direction {
    /// The opposite direction, for consumers that flip placement when the
    /// menu would not fit on the preferred side.
    pub fn flip(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::test_serialization;

    #[test]
    fn test_direction() {
        test_serialization(&vec![Direction::Up, Direction::Down], r#"["up","down"]"#);
    }

    #[test]
    fn test_direction_rejects_unknown_values() {
        assert!(serde_json::from_str::<Direction>(r#""left""#).is_err());
        assert!(serde_json::from_str::<Direction>(r#""Up""#).is_err());
        assert!(serde_json::from_str::<Direction>(r#""""#).is_err());
    }

    #[test]
    fn test_flip() {
        assert_eq!(Direction::Up.flip(), Direction::Down);
        assert_eq!(Direction::Down.flip(), Direction::Up);
        assert_eq!(Direction::default(), Direction::Down);
    }
}
