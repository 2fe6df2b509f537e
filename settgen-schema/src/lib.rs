//! Parsing and validation of `.setting` definition files.
//!
//! A `.setting` file declares one setting per non-blank line:
//!
//! ```text
//! name:type:defaultvalue
//! ```
//!
//! where `type` is one of `string`, `int`, `bool`, `guid`, `long`. Every
//! default value is validated at parse time, so malformed declarations fail
//! here rather than in the consuming build.

mod error;
mod parse;
mod types;

pub use error::{Error, Result, SourceContext};
pub use parse::{collect_files, parse_str, parse_str_with_filename, split_line};
pub use types::SettingType;

/// One validated setting declaration.
///
/// Declarations are immutable once constructed. Duplicate names are not
/// rejected; each definition line yields an independent declaration in
/// encounter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingDeclaration {
    /// Property name, taken verbatim from the definition line.
    pub name: String,
    /// Resolved setting type.
    pub ty: SettingType,
    /// Canonical text form of the validated default value.
    pub default_value: String,
}
