//! Name generation for duplicated documents.
//!
//! A copy of `about.txt` is called `about(1).txt`; a copy of that is
//! `about(2).txt`. Only a marker immediately before the extension counts, so
//! `report(2)final.txt` becomes `report(2)final(1).txt`.

use super::document_name::{MARKDOWN_EXTENSION, TEXT_EXTENSION};

/// Failure raised when a name cannot be duplicated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DuplicateNameError {
    /// The source name ends in neither `.md` nor `.txt`.
    #[error("{name} cannot be duplicated: name must end in .txt or .md")]
    MalformedSource {
        /// Offending source name.
        name: String,
    },
}

/// Derive the name of the next copy of `name`.
///
/// # Examples
/// ```
/// use cms::domain::duplicate_name;
///
/// assert_eq!(duplicate_name("about.txt").unwrap(), "about(1).txt");
/// assert_eq!(duplicate_name("about(1).txt").unwrap(), "about(2).txt");
/// assert_eq!(duplicate_name("notes.md").unwrap(), "notes(1).md");
/// ```
pub fn duplicate_name(name: &str) -> Result<String, DuplicateNameError> {
    let (stem, extension) =
        split_extension(name).ok_or_else(|| DuplicateNameError::MalformedSource {
            name: name.to_owned(),
        })?;
    let (base, next) = match trailing_marker(stem) {
        Some((base, current)) => match current.checked_add(1) {
            Some(next) => (base, next),
            None => (stem, 1),
        },
        None => (stem, 1),
    };
    Ok(format!("{base}({next}){extension}"))
}

fn split_extension(name: &str) -> Option<(&str, &'static str)> {
    name.strip_suffix(MARKDOWN_EXTENSION)
        .map(|stem| (stem, MARKDOWN_EXTENSION))
        .or_else(|| name.strip_suffix(TEXT_EXTENSION).map(|stem| (stem, TEXT_EXTENSION)))
}

/// Split `stem` into the text before a trailing `(<digits>)` marker and the
/// marker's value.
fn trailing_marker(stem: &str) -> Option<(&str, u64)> {
    let inner = stem.strip_suffix(')')?;
    let (base, digits) = inner.rsplit_once('(')?;
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    let value = digits.parse().ok()?;
    Some((base, value))
}
