//! Pieces shared by subscriptions and registrations.

use serde::{Deserialize, Serialize};

/// Plain HTTP endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Http {
    pub url: String,
}

impl Http {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// One element of an `entities` list: exactly one of the four fields is
/// normally set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySelector {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_pattern: Option<String>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_pattern: Option<String>,
}

/// Which field of [`EntitySelector`] `gen_entities` fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    Id,
    IdPattern,
    Type,
    TypePattern,
}

impl SelectorKind {
    /// Kind for the given combination of id/type and plain/pattern.
    pub fn from_flags(id: bool, pattern: bool) -> Self {
        match (id, pattern) {
            (true, false) => Self::Id,
            (true, true) => Self::IdPattern,
            (false, false) => Self::Type,
            (false, true) => Self::TypePattern,
        }
    }
}

impl EntitySelector {
    pub fn new(kind: SelectorKind, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match kind {
            SelectorKind::Id => Self {
                id: value,
                ..Default::default()
            },
            SelectorKind::IdPattern => Self {
                id_pattern: value,
                ..Default::default()
            },
            SelectorKind::Type => Self {
                type_name: value,
                ..Default::default()
            },
            SelectorKind::TypePattern => Self {
                type_pattern: value,
                ..Default::default()
            },
        }
    }
}

/// One selector per name, all of the same kind.
pub fn gen_entities<S: AsRef<str>>(names: &[S], kind: SelectorKind) -> Vec<EntitySelector> {
    names
        .iter()
        .map(|name| EntitySelector::new(kind, name.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_gen_entities() {
        let entities = gen_entities(&["Room1", "Room2"], SelectorKind::Id);
        assert_eq!(
            serde_json::to_value(&entities).unwrap(),
            json!([{"id": "Room1"}, {"id": "Room2"}])
        );

        let entities = gen_entities(&["Room.*"], SelectorKind::from_flags(false, true));
        assert_eq!(
            serde_json::to_value(&entities).unwrap(),
            json!([{"typePattern": "Room.*"}])
        );

        let empty: Vec<EntitySelector> = gen_entities::<&str>(&[], SelectorKind::Type);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_selector_kinds() {
        assert_eq!(SelectorKind::from_flags(true, false), SelectorKind::Id);
        assert_eq!(SelectorKind::from_flags(true, true), SelectorKind::IdPattern);
        assert_eq!(SelectorKind::from_flags(false, false), SelectorKind::Type);

        let selector = EntitySelector::new(SelectorKind::Type, "Room");
        assert_eq!(serde_json::to_value(&selector).unwrap(), json!({"type": "Room"}));
    }
}
