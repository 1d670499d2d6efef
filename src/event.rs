//! The domain event produced by the generator.

use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use fake::Fake;
use serde::{Deserialize, Serialize};

/// A single synthetic name record.
///
/// Immutable once created; serialized to a compact JSON object with exactly
/// the `first_name` and `last_name` fields before leaving the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameEvent {
    pub first_name: String,
    pub last_name: String,
}

impl NameEvent {
    /// Constructs an event with randomized first and last names.
    pub fn random() -> Self {
        Self {
            first_name: FirstName(EN).fake(),
            last_name: LastName(EN).fake(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_names_are_non_empty() {
        for _ in 0..100 {
            let event = NameEvent::random();
            assert!(!event.first_name.is_empty());
            assert!(!event.last_name.is_empty());
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let event = NameEvent {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        };

        let json = serde_json::to_string(&event).unwrap();
        let decoded: NameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, event);
    }

    #[test]
    fn test_wire_field_names() {
        let event = NameEvent {
            first_name: "Alan".to_string(),
            last_name: "Turing".to_string(),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"first_name":"Alan","last_name":"Turing"}"#);
    }
}
