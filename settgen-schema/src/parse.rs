//! Line-oriented parsing of setting definition text.

use std::path::Path;

use crate::{Error, Result, SettingDeclaration, SourceContext, types::SettingType};

/// Split one definition line into (name, type token, default value).
///
/// The grammar requires exactly three colon-separated fields. Returns `None`
/// for any other shape; there is no escaping, so a default value cannot
/// contain a literal ':'.
pub fn split_line(line: &str) -> Option<(&str, &str, &str)> {
    let mut fields = line.split(':');
    let name = fields.next()?;
    let ty = fields.next()?;
    let value = fields.next()?;
    if fields.next().is_some() {
        return None;
    }
    Some((name, ty, value))
}

/// Parse settings from in-memory definition text.
pub fn parse_str(content: &str) -> Result<Vec<SettingDeclaration>> {
    parse_str_with_filename(content, "definition.setting")
}

/// Parse settings from definition text with a filename for error reporting.
///
/// Lines that are empty after trimming are skipped. Parsing stops at the
/// first invalid line; already-parsed declarations are discarded along with
/// the error.
pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<Vec<SettingDeclaration>> {
    let ctx = SourceContext::new(content, filename);
    let mut declarations = Vec::new();

    let mut offset = 0usize;
    for raw_line in content.split_inclusive('\n') {
        let line = raw_line.trim_end_matches(['\n', '\r']);
        let span = (offset, line.len());
        offset += raw_line.len();

        if line.trim().is_empty() {
            continue;
        }

        let (name, token, raw_value) =
            split_line(line).ok_or_else(|| ctx.line_format_error(span))?;
        let ty = SettingType::resolve(token)
            .ok_or_else(|| ctx.unsupported_type_error(token, span))?;
        let default_value = ty
            .parse_default(raw_value)
            .ok_or_else(|| ctx.invalid_value_error(ty, raw_value, span))?;

        declarations.push(SettingDeclaration {
            name: name.to_string(),
            ty,
            default_value,
        });
    }

    Ok(declarations)
}

/// Read and parse an ordered list of `.setting` files.
///
/// Files are read in the given order and their declarations appended first
/// to last, preserving encounter order across files. Duplicate names are
/// kept as independent declarations. Collection stops at the first
/// unreadable file or invalid line.
pub fn collect_files(
    paths: impl IntoIterator<Item = impl AsRef<Path>>,
) -> Result<Vec<SettingDeclaration>> {
    let mut declarations = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        declarations.extend(parse_str_with_filename(
            &content,
            &path.display().to_string(),
        )?);
    }
    Ok(declarations)
}
