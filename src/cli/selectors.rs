//! Resolves user references (`2`, a full UUID, or a UUID prefix) to ids.

use okz_domain::Identifiable;
use uuid::Uuid;

use crate::cli::core::CommandError;

const MIN_PREFIX_LEN: usize = 4;

/// Picks the id `reference` points at within `items`.
///
/// A number is a 1-based position in the listing. A full UUID is returned
/// as-is so lookups can report it as not found. Anything else must be a
/// unique id prefix of at least four characters.
pub fn resolve_reference<T: Identifiable>(
    items: &[T],
    reference: &str,
    label: &str,
) -> Result<Uuid, CommandError> {
    let reference = reference.trim();
    if let Ok(position) = reference.parse::<usize>() {
        return position
            .checked_sub(1)
            .and_then(|index| items.get(index))
            .map(Identifiable::id)
            .ok_or_else(|| {
                CommandError::InvalidArguments(format!(
                    "{label} #{position} does not exist (1..={})",
                    items.len()
                ))
            });
    }
    if let Ok(id) = Uuid::parse_str(reference) {
        return Ok(id);
    }

    let needle = reference.to_ascii_lowercase();
    let looks_like_id = needle.chars().all(|ch| ch.is_ascii_hexdigit() || ch == '-');
    if needle.len() < MIN_PREFIX_LEN || !looks_like_id {
        return Err(CommandError::InvalidArguments(format!(
            "`{reference}` is not a {label} number or id"
        )));
    }

    let mut matches = items
        .iter()
        .map(Identifiable::id)
        .filter(|id| id.to_string().starts_with(&needle));
    match (matches.next(), matches.next()) {
        (Some(id), None) => Ok(id),
        (None, _) => Err(CommandError::InvalidArguments(format!(
            "no {label} id starts with `{reference}`"
        ))),
        (Some(_), Some(_)) => Err(CommandError::InvalidArguments(format!(
            "`{reference}` matches more than one {label}; use a longer prefix"
        ))),
    }
}
