//! NGSI attribute data types.
//!
//! <https://quantumleap.readthedocs.io/en/latest/user/>

use crate::macros::string_enum;

string_enum! {
    /// Value of the `type` member of an NGSI attribute.
    pub enum AttributeType {
        Array => "Array",
        Boolean => "Boolean",
        DateTime => "DateTime",
        Integer => "Integer",
        GeoPoint => "geo:point",
        GeoJson => "geo:json",
        Number => "Number",
        Text => "Text",
        StructuredValue => "StructuredValue",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataModelError;

    #[test]
    fn test_attribute_type_tokens() {
        assert_eq!(AttributeType::GeoPoint.as_str(), "geo:point");
        assert_eq!("geo:json".parse::<AttributeType>().unwrap(), AttributeType::GeoJson);
        assert!(matches!(
            "Float".parse::<AttributeType>(),
            Err(DataModelError::UnknownToken { kind: "AttributeType", .. })
        ));
        assert_eq!(AttributeType::ALL.len(), 9);
    }

    #[test]
    fn test_attribute_type_serde() {
        let json = serde_json::to_string(&AttributeType::StructuredValue).unwrap();
        assert_eq!(json, "\"StructuredValue\"");
        let back: AttributeType = serde_json::from_str("\"Number\"").unwrap();
        assert_eq!(back, AttributeType::Number);
    }
}
