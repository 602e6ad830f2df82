/*!

Data types for a dropdown/multiselect widget.

This crate only declares the widget's data contract: the selectable
[`SelectOption`] entries, the [`Direction`] a menu expands in, and an
optional [`Position`] placement hint. Rendering, keyboard handling and
open/close state live in the consuming component.

All types round-trip through serde; the JSON forms are the wire contract.

*/
#![forbid(unsafe_code)]

mod direction;
pub use direction::*;

mod option;
pub use option::*;

mod position;
pub use position::*;

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    pub(crate) fn test_serialization<SER>(ms: &SER, expected: &str)
    where
        SER: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug,
    {
        let json_str = serde_json::to_string(ms).unwrap();
        assert_eq!(&json_str, expected);
        let deserialized: SER = serde_json::from_str(&json_str).unwrap();
        assert_eq!(&deserialized, ms);
    }

    pub(crate) fn test_deserialization<T>(json: &str, expected: &T)
    where
        T: for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug,
    {
        let value = serde_json::from_str::<T>(json).unwrap();
        assert_eq!(&value, expected);
    }
}
