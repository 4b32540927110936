//! Key/value line editing shared by xcconfig and properties files
//!
//! Only the value text is touched; key, separator, spacing, trailing
//! comments and line endings are written back as found.

use std::path::Path;

use regex::{Captures, Regex};

use relkit_core::error::{AdapterError, RelkitError, Result};

pub(crate) fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(AdapterError::FileNotFound(path.to_path_buf()).into());
    }
    std::fs::read_to_string(path).map_err(|e| AdapterError::Io(e).into())
}

pub(crate) fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|e| AdapterError::Io(e).into())
}

/// Line grammar of a key/value file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Syntax {
    /// `KEY = value`, optionally followed by a `// comment`
    Xcconfig,
    /// `key=value`, `key: value` or `key value`
    Properties,
}

impl Syntax {
    // Groups: 1 = key and separator, 2 = value, 3 = trailing blanks (and
    // comment), 4 = carriage return.
    fn key_regex(self, key: &str) -> Result<Regex> {
        let key = regex::escape(key);
        let pattern = match self {
            Syntax::Xcconfig => format!(
                r"(?m)^([ \t]*{}[ \t]*=[ \t]*)([^\r\n]*?)([ \t]*(?://[^\r\n]*)?)(\r?)$",
                key
            ),
            Syntax::Properties => format!(
                r"(?m)^([ \t]*{}(?:[ \t]*[=:][ \t]*|[ \t]+))([^\r\n]*?)([ \t]*)(\r?)$",
                key
            ),
        };
        Regex::new(&pattern)
            .map_err(|e| RelkitError::other(format!("invalid key '{}': {}", key, e)))
    }
}

/// Value of the first line assigning `key`
pub(crate) fn read_value(syntax: Syntax, content: &str, key: &str) -> Result<Option<String>> {
    let re = syntax.key_regex(key)?;
    Ok(re
        .captures(content)
        .and_then(|c| c.get(2))
        .map(|m| m.as_str().trim().to_string()))
}

/// Content with the first line assigning `key` set to `value`; `None` when
/// the key is absent.
pub(crate) fn replace_value(
    syntax: Syntax,
    content: &str,
    key: &str,
    value: &str,
) -> Result<Option<String>> {
    let re = syntax.key_regex(key)?;
    if !re.is_match(content) {
        return Ok(None);
    }

    let updated = re.replace(content, |caps: &Captures| {
        format!("{}{}{}{}", &caps[1], value, &caps[3], &caps[4])
    });
    Ok(Some(updated.into_owned()))
}

/// Read `key` from the file at `path`
pub(crate) fn read_key(syntax: Syntax, path: &Path, key: &str) -> Result<String> {
    let content = read_file(path)?;
    read_value(syntax, &content, key)?.ok_or_else(|| {
        AdapterError::KeyNotFound {
            key: key.to_string(),
            path: path.to_path_buf(),
        }
        .into()
    })
}

/// Set `key` in the file at `path`
pub(crate) fn write_key(syntax: Syntax, path: &Path, key: &str, value: &str) -> Result<()> {
    let content = read_file(path)?;
    let updated = replace_value(syntax, &content, key, value)?.ok_or_else(|| AdapterError::KeyNotFound {
        key: key.to_string(),
        path: path.to_path_buf(),
    })?;
    write_file(path, &updated)
}
