//! Double-container slot splitter.
//!
//! A double chest flattens two 27-slot blocks into one 54-slot inventory.
//! Which physical block holds slots 0..27 depends on the first block's
//! facing and on where the second block sits relative to it along the axis
//! that facing implies.

use mapforge_data::{Facing, ItemStack, PhysicalContainer};

use crate::CompileError;

/// Split a flattened 54-slot item list between two physical containers.
///
/// Returns `(first, second)` item lists matching the order of the input
/// containers. The high half is re-indexed to 0..27. Errors when the first
/// container's facing is missing or not a horizontal cardinal.
pub fn split_double(
    first: &PhysicalContainer,
    second: &PhysicalContainer,
    items: &[ItemStack],
) -> Result<(Vec<ItemStack>, Vec<ItemStack>), CompileError> {
    let label = first.block.facing.as_deref().unwrap_or("");
    let facing = Facing::from_label(label).ok_or_else(|| CompileError::UnsupportedFacing {
        facing: label.to_string(),
    })?;

    let low: Vec<ItemStack> = items.iter().filter(|v| v.slot < 27).cloned().collect();
    let high: Vec<ItemStack> = items
        .iter()
        .filter(|v| (27u8..54).contains(&v.slot))
        .map(|v| {
            let mut v = v.clone();
            v.slot -= 27;
            v
        })
        .collect();

    let first_owns_low = match facing {
        Facing::North => first.position.x > second.position.x,
        Facing::South => first.position.x < second.position.x,
        Facing::West => first.position.z < second.position.z,
        Facing::East => first.position.z > second.position.z,
    };

    Ok(if first_owns_low { (low, high) } else { (high, low) })
}
