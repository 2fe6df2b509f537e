//! Mapping setting types to C# types and initializer literals.

use settgen_schema::SettingType;

/// Map a setting type to the C# type of the generated property.
pub fn csharp_type(ty: SettingType) -> &'static str {
    match ty {
        SettingType::String => "string",
        SettingType::Int => "int",
        SettingType::Bool => "bool",
        SettingType::Guid => "System.Guid",
        SettingType::Long => "long",
    }
}

/// Render a canonical default value as a C# initializer expression.
///
/// `value` must be the canonical text produced by
/// [`SettingType::parse_default`].
pub fn csharp_literal(ty: SettingType, value: &str) -> String {
    match ty {
        SettingType::String => format!("\"{}\"", escape_string(value)),
        SettingType::Int | SettingType::Bool => value.to_string(),
        SettingType::Guid => format!("new System.Guid(\"{}\")", value),
        SettingType::Long => format!("{}L", value),
    }
}

fn escape_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
