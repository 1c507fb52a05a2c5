//! The cafe record and its insert payload.

use serde::{Deserialize, Serialize};

/// One cafe in the catalog.
///
/// Serializes as a flat JSON mapping of every column, which is exactly the
/// shape the HTTP layer returns under its `cafe` key. `coffee_price` is the
/// only optional field and the only one that is ever mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cafe {
    /// Primary key, assigned by the store on insert. Immutable.
    pub id: i64,

    /// Display name. Unique across all live records.
    pub name: String,

    /// Link to the cafe on a map service.
    pub map_url: String,

    /// Link to a photo of the cafe.
    pub img_url: String,

    /// Neighbourhood or district label, matched exactly by the search
    /// operation (case-sensitive).
    pub location: String,

    /// Free-form seat-count label, e.g. `"20-30"`.
    pub seats: String,

    /// Whether the cafe has a toilet.
    pub has_toilet: bool,

    /// Whether the cafe has wifi.
    pub has_wifi: bool,

    /// Whether the cafe has power sockets.
    pub has_sockets: bool,

    /// Whether taking calls is acceptable.
    pub can_take_calls: bool,

    /// Free-form price label for a coffee, e.g. `"£2.50"`.
    pub coffee_price: Option<String>,
}

/// The fields of a cafe record before it has been persisted.
///
/// Identical to [`Cafe`] minus the `id`, which the store assigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCafe {
    /// Display name. Must not collide with an existing record.
    pub name: String,
    /// Link to the cafe on a map service.
    pub map_url: String,
    /// Link to a photo of the cafe.
    pub img_url: String,
    /// Neighbourhood or district label.
    pub location: String,
    /// Free-form seat-count label.
    pub seats: String,
    /// Whether the cafe has a toilet.
    pub has_toilet: bool,
    /// Whether the cafe has wifi.
    pub has_wifi: bool,
    /// Whether the cafe has power sockets.
    pub has_sockets: bool,
    /// Whether taking calls is acceptable.
    pub can_take_calls: bool,
    /// Free-form price label for a coffee.
    pub coffee_price: Option<String>,
}

/// A flag value that could not be coerced to a boolean.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid flag value {value:?}: expected an integer such as \"1\" or \"0\"")]
pub struct FlagParseError {
    /// The raw value that failed to parse.
    pub value: String,
}

/// Coerce an integer-like string into a boolean flag.
///
/// Amenity fields arrive over HTTP forms as strings. The accepted inputs are
/// whatever parses as an integer: zero is `false`, anything else is `true`.
/// Non-integer input (`"yes"`, `""`, `"true"`) is an error, not a guess.
///
/// # Errors
///
/// Returns [`FlagParseError`] if `value` does not parse as an integer.
pub fn parse_flag(value: &str) -> Result<bool, FlagParseError> {
    value
        .trim()
        .parse::<i64>()
        .map(|n| n != 0)
        .map_err(|_| FlagParseError {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_one_is_true() {
        assert_eq!(parse_flag("1"), Ok(true));
    }

    #[test]
    fn flag_zero_is_false() {
        assert_eq!(parse_flag("0"), Ok(false));
    }

    #[test]
    fn flag_any_nonzero_integer_is_true() {
        assert_eq!(parse_flag("2"), Ok(true));
        assert_eq!(parse_flag("-1"), Ok(true));
    }

    #[test]
    fn flag_tolerates_surrounding_whitespace() {
        assert_eq!(parse_flag(" 1 "), Ok(true));
    }

    #[test]
    fn flag_rejects_non_integer_input() {
        let err = parse_flag("yes").unwrap_err();
        assert_eq!(err.value, "yes");
        assert!(parse_flag("").is_err());
        assert!(parse_flag("true").is_err());
    }

    #[test]
    fn cafe_serializes_flat() {
        let cafe = Cafe {
            id: 1,
            name: "Workshop".into(),
            map_url: "https://maps.example/workshop".into(),
            img_url: "https://img.example/workshop.jpg".into(),
            location: "Clerkenwell".into(),
            seats: "20-30".into(),
            has_toilet: true,
            has_wifi: true,
            has_sockets: false,
            can_take_calls: false,
            coffee_price: Some("£2.50".into()),
        };

        let value = serde_json::to_value(&cafe).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 11);
        assert_eq!(object["id"], 1);
        assert_eq!(object["has_wifi"], true);
        assert_eq!(object["coffee_price"], "£2.50");
    }

    #[test]
    fn absent_price_serializes_as_null() {
        let cafe = Cafe {
            id: 2,
            name: "Stateless".into(),
            map_url: "https://maps.example/stateless".into(),
            img_url: "https://img.example/stateless.jpg".into(),
            location: "Peckham".into(),
            seats: "0-10".into(),
            has_toilet: false,
            has_wifi: false,
            has_sockets: false,
            can_take_calls: false,
            coffee_price: None,
        };

        let value = serde_json::to_value(&cafe).unwrap();
        assert!(value["coffee_price"].is_null());
    }
}
