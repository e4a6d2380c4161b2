//! Classifiers for the mini-grammars embedded in single cells.

use mapforge_data::{ItemContent, SpawnEntry, SpawnPotentials};

use crate::CompileError;

/// Column offsets of the four (id, weight) spawn-potential cell pairs in the
/// spawner schema.
pub const POTENTIAL_COLUMNS: [(usize, usize); 4] = [(8, 10), (11, 13), (14, 16), (17, 19)];

/// Classify one item cell.
///
/// Three patterns are tried in order; an unmatched cell is a hard error for
/// the containing asset, never a silent drop:
/// 1. `artifact:<digits>`
/// 2. `preset:<anything>`
/// 3. `<namespace:>?<identifier>` with an optional `{...}` tag
///
/// A cell like `artifact:12x` fails pattern 1 on the digit check and falls
/// through to pattern 3, where `artifact` reads as a namespace. An empty
/// `{}` tag is normalized to no tag.
pub fn classify_item_content(cell: &str) -> Result<ItemContent, CompileError> {
    if let Some(rest) = cell.strip_prefix("artifact:") {
        if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(id) = rest.parse::<u32>() {
                return Ok(ItemContent::Artifact { id });
            }
        }
    }

    if let Some(rest) = cell.strip_prefix("preset:") {
        if !rest.is_empty() {
            return Ok(ItemContent::Preset { id: rest.to_string() });
        }
    }

    if let Some((id, tag)) = split_vanilla(cell) {
        return Ok(ItemContent::Vanilla { id, tag });
    }

    Err(CompileError::UnknownItem { cell: cell.to_string() })
}

/// Match `(<ns>:)?<ident>` followed by an optional braced tag. Returns the
/// id and the verbatim tag, with a literal `{}` normalized away.
fn split_vanilla(cell: &str) -> Option<(String, Option<String>)> {
    let (id, tag) = match cell.find('{') {
        Some(brace) => {
            let tag = &cell[brace..];
            if !tag.ends_with('}') {
                return None;
            }
            (&cell[..brace], Some(tag))
        },
        None => (cell, None),
    };

    let mut parts = id.split(':');
    let first = parts.next()?;
    let second = parts.next();
    if parts.next().is_some() {
        return None;
    }
    let ident_ok = |s: &str| {
        !s.is_empty()
            && s.bytes()
                .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.' | b'+'))
    };
    match second {
        Some(ident) if ident_ok(first) && ident_ok(ident) => {},
        None if ident_ok(first) => {},
        _ => return None,
    }

    let tag = tag.filter(|t| *t != "{}").map(str::to_string);
    Some((id.to_string(), tag))
}

/// Classify the spawn-potential cell pairs of one spawner row.
///
/// Pairs with an empty id are dropped. If every surviving pair leaves its
/// weight blank the result stays a homogeneous id list (the implicit weight
/// of 1 is never materialized); otherwise every entry materializes, with
/// weight defaulting to 1 only where individually missing. Returns `None`
/// when an id or weight cell is present but non-numeric, which rejects the
/// row.
pub fn classify_spawn_potentials(pairs: &[(&str, &str)]) -> Option<SpawnPotentials> {
    let present: Vec<(&str, &str)> = pairs
        .iter()
        .copied()
        .filter(|(id, _)| !id.is_empty())
        .collect();

    if present.iter().all(|(_, weight)| weight.is_empty()) {
        let mut ids = Vec::with_capacity(present.len());
        for (id, _) in &present {
            ids.push(id.parse::<u32>().ok()?);
        }
        return Some(SpawnPotentials::Homogeneous(ids));
    }

    let mut entries = Vec::with_capacity(present.len());
    for (id, weight) in &present {
        let id = id.parse::<u32>().ok()?;
        let weight = if weight.is_empty() {
            1
        } else {
            weight.parse::<u32>().ok()?
        };
        entries.push(SpawnEntry { id, weight });
    }
    Some(SpawnPotentials::Weighted(entries))
}
