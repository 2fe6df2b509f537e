//! The closed set of types a setting may declare.

use uuid::Uuid;

/// Supported setting types.
///
/// This is a closed set: type tokens in `.setting` files are matched
/// case-sensitively against the lowercase names returned by
/// [`SettingType::as_str`], and anything else is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingType {
    String,
    Int,
    Bool,
    Guid,
    Long,
}

impl SettingType {
    /// All supported types, in documentation order.
    pub const ALL: [SettingType; 5] = [
        SettingType::String,
        SettingType::Int,
        SettingType::Bool,
        SettingType::Guid,
        SettingType::Long,
    ];

    /// The type token used in `.setting` files.
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingType::String => "string",
            SettingType::Int => "int",
            SettingType::Bool => "bool",
            SettingType::Guid => "guid",
            SettingType::Long => "long",
        }
    }

    /// Resolve a type token from a definition line.
    ///
    /// Matching is case-sensitive; `Int` or `STRING` are not accepted.
    pub fn resolve(token: &str) -> Option<SettingType> {
        match token {
            "string" => Some(SettingType::String),
            "int" => Some(SettingType::Int),
            "bool" => Some(SettingType::Bool),
            "guid" => Some(SettingType::Guid),
            "long" => Some(SettingType::Long),
            _ => None,
        }
    }

    /// Validate a raw default value against this type and return its
    /// canonical text form.
    ///
    /// Strings are taken verbatim and always succeed. Integers and booleans
    /// are parsed and re-rendered; guids are normalized to the hyphenated
    /// lowercase form. Returns `None` when the value does not parse.
    pub fn parse_default(&self, raw: &str) -> Option<String> {
        match self {
            SettingType::String => Some(raw.to_string()),
            SettingType::Int => raw.parse::<i32>().ok().map(|v| v.to_string()),
            SettingType::Bool => raw.parse::<bool>().ok().map(|v| v.to_string()),
            SettingType::Guid => Uuid::parse_str(raw).ok().map(|v| v.hyphenated().to_string()),
            SettingType::Long => raw.parse::<i64>().ok().map(|v| v.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_tokens() {
        assert_eq!(SettingType::resolve("string"), Some(SettingType::String));
        assert_eq!(SettingType::resolve("int"), Some(SettingType::Int));
        assert_eq!(SettingType::resolve("bool"), Some(SettingType::Bool));
        assert_eq!(SettingType::resolve("guid"), Some(SettingType::Guid));
        assert_eq!(SettingType::resolve("long"), Some(SettingType::Long));
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert_eq!(SettingType::resolve("String"), None);
        assert_eq!(SettingType::resolve("INT"), None);
        assert_eq!(SettingType::resolve("car"), None);
        assert_eq!(SettingType::resolve(""), None);
    }

    #[test]
    fn test_as_str_round_trips() {
        for ty in SettingType::ALL {
            assert_eq!(SettingType::resolve(ty.as_str()), Some(ty));
        }
    }

    #[test]
    fn test_parse_string_is_verbatim() {
        assert_eq!(
            SettingType::String.parse_default("hello world"),
            Some("hello world".to_string())
        );
        assert_eq!(SettingType::String.parse_default(""), Some(String::new()));
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(SettingType::Int.parse_default("42"), Some("42".to_string()));
        assert_eq!(SettingType::Int.parse_default("-1"), Some("-1".to_string()));
        assert_eq!(SettingType::Int.parse_default("+5"), Some("5".to_string()));
        assert_eq!(SettingType::Int.parse_default("4.2"), None);
        assert_eq!(SettingType::Int.parse_default("999999999999"), None);
    }

    #[test]
    fn test_parse_long() {
        assert_eq!(
            SettingType::Long.parse_default("999999999999"),
            Some("999999999999".to_string())
        );
        assert_eq!(SettingType::Long.parse_default("abc"), None);
    }

    #[test]
    fn test_parse_bool_exact_tokens_only() {
        assert_eq!(SettingType::Bool.parse_default("true"), Some("true".to_string()));
        assert_eq!(SettingType::Bool.parse_default("false"), Some("false".to_string()));
        assert_eq!(SettingType::Bool.parse_default("True"), None);
        assert_eq!(SettingType::Bool.parse_default("awsome"), None);
    }

    #[test]
    fn test_parse_guid_normalizes() {
        assert_eq!(
            SettingType::Guid.parse_default("158B4088-63D8-4E4E-93E0-2FF4D13D6764"),
            Some("158b4088-63d8-4e4e-93e0-2ff4d13d6764".to_string())
        );
        assert_eq!(SettingType::Guid.parse_default("not-a-guid"), None);
    }
}
