use serde::Deserialize;

use crate::gift_catalog::{Gift, GiftCatalog, NO_WIN_GIFT_ID};

/// The backend is inconsistent about the `gift` field: depending on the
/// endpoint it is null, a single object, or an array holding zero or one
/// object. The polymorphism is parsed once here and never leaves this
/// module.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(untagged)]
pub enum RawGift {
    Many(Vec<Option<GiftPayload>>),
    One(GiftPayload),
    #[default]
    Absent,
    /// Anything else the backend might send (a bare string, a number).
    /// Treated the same as absent.
    Other(serde_json::Value),
}

/// A gift as it appears on the wire. Every field is optional because the
/// backend sometimes sends partial or empty objects in place of null.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GiftPayload {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub lucky_draw_system: Option<i64>,
}

impl RawGift {
    fn unwrap_payload(&self) -> Option<&GiftPayload> {
        match self {
            RawGift::Many(items) => items.first().and_then(|entry| entry.as_ref()),
            RawGift::One(payload) => Some(payload),
            RawGift::Absent | RawGift::Other(_) => None,
        }
    }
}

/// The normalized prize decision: a boolean, the won gift if any, and the
/// catalog index the wheel must rest on. Derived once per submission and
/// frozen for the rest of the reveal session.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinOutcome {
    pub has_prize: bool,
    pub gift: Option<Gift>,
    pub target_index: usize,
}

impl SpinOutcome {
    fn no_win() -> Self {
        Self {
            has_prize: false,
            gift: None,
            target_index: 0,
        }
    }
}

/// Collapses the raw server response into a [`SpinOutcome`].
///
/// Null, an empty array, `[null]`, an empty object and an object without
/// an id all mean "no prize" and rest on the no-win sector at index 0.
/// A gift id the catalog does not know degrades to "no prize" as well
/// instead of failing the reveal.
pub fn normalize(raw: &RawGift, catalog: &GiftCatalog) -> SpinOutcome {
    let payload = match raw.unwrap_payload() {
        Some(payload) => payload,
        None => return SpinOutcome::no_win(),
    };

    // A genuine win needs an identifier the backend actually set. The
    // no-win id itself never counts as a prize.
    let id = match payload.id {
        Some(id) if id != 0 && id != NO_WIN_GIFT_ID => id,
        _ => return SpinOutcome::no_win(),
    };

    match catalog.position_of(id) {
        Some(index) => SpinOutcome {
            has_prize: true,
            gift: Some(Gift {
                id,
                name: payload.name.clone().unwrap_or_default(),
                image: payload.image.clone().unwrap_or_default(),
                lucky_draw_system: payload.lucky_draw_system.unwrap_or_default(),
            }),
            target_index: index,
        },
        None => {
            log::warn!("gift id {id} is not on the wheel, treating as no win");
            SpinOutcome::no_win()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gift(id: i64, name: &str) -> Gift {
        Gift {
            id,
            name: name.to_string(),
            image: format!("/gifts/{id}.png"),
            lucky_draw_system: 1,
        }
    }

    fn catalog() -> GiftCatalog {
        GiftCatalog::with_sentinel(1, vec![gift(5, "Phone"), gift(9, "Cap")])
    }

    fn parse(json: &str) -> RawGift {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_absent_shapes_all_mean_no_prize() {
        for json in ["null", "[]", "[null]", "{}", "{\"name\":\"Phone\"}"] {
            let outcome = normalize(&parse(json), &catalog());
            assert!(!outcome.has_prize, "{json} should not win");
            assert_eq!(outcome.gift, None);
            assert_eq!(outcome.target_index, 0);
        }
    }

    #[test]
    fn test_unexpected_types_mean_no_prize() {
        for json in ["\"phone\"", "42", "true"] {
            let raw = parse(json);
            assert!(matches!(raw, RawGift::Other(_)), "{json}");
            let outcome = normalize(&raw, &catalog());
            assert!(!outcome.has_prize);
            assert_eq!(outcome.target_index, 0);
        }
    }

    #[test]
    fn test_single_object_win() {
        let raw = parse(r#"{"id":5,"name":"Phone","image":"/p.png","lucky_draw_system":1}"#);
        let outcome = normalize(&raw, &catalog());
        assert!(outcome.has_prize);
        assert_eq!(outcome.target_index, 1);
        let won = outcome.gift.unwrap();
        assert_eq!(won.id, 5);
        assert_eq!(won.name, "Phone");
    }

    #[test]
    fn test_array_wrapped_win_uses_first_element() {
        let raw = parse(r#"[{"id":9,"name":"Cap"}]"#);
        let outcome = normalize(&raw, &catalog());
        assert!(outcome.has_prize);
        assert_eq!(outcome.target_index, 2);
        assert_eq!(outcome.gift.unwrap().name, "Cap");
    }

    #[test]
    fn test_unknown_gift_id_degrades_to_no_win() {
        let raw = parse(r#"{"id":77,"name":"Mystery"}"#);
        let outcome = normalize(&raw, &catalog());
        assert!(!outcome.has_prize);
        assert_eq!(outcome.target_index, 0);
        assert_eq!(outcome.gift, None);
    }

    #[test]
    fn test_no_win_id_from_backend_is_not_a_prize() {
        let raw = parse(r#"{"id":-1,"name":"Better Luck"}"#);
        let outcome = normalize(&raw, &catalog());
        assert!(!outcome.has_prize);
        assert_eq!(outcome.target_index, 0);
    }

    #[test]
    fn test_missing_field_defaults_to_absent() {
        #[derive(Deserialize)]
        struct Envelope {
            #[serde(default)]
            gift: RawGift,
        }

        let envelope: Envelope = serde_json::from_str("{}").unwrap();
        assert_eq!(envelope.gift, RawGift::Absent);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let raw = parse(r#"[{"id":5,"name":"Phone"}]"#);
        let first = normalize(&raw, &catalog());
        let second = normalize(&raw, &catalog());
        assert_eq!(first, second);
    }
}
