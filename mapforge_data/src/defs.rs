use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric identifier assigned to an asset within its kind.
pub type AssetId = u32;

/// Integer voxel coordinate in a world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vec3 {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

/// Composite key that deduplicates registrations: a dimension plus the
/// integer position of the asset. Equal inputs always and only produce
/// equal keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpatialKey {
    pub dimension: String,
    pub position: Vec3,
}

impl SpatialKey {
    pub fn new(dimension: impl Into<String>, position: Vec3) -> Self {
        Self {
            dimension: dimension.into(),
            position,
        }
    }
}

/// Asset kinds the compiler knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Island,
    Spawner,
    Teleporter,
    Container,
}

impl AssetKind {
    /// Lowercase name used for table files, output subtrees, and storage
    /// namespaces.
    pub fn name(self) -> &'static str {
        match self {
            AssetKind::Island => "island",
            AssetKind::Spawner => "spawner",
            AssetKind::Teleporter => "teleporter",
            AssetKind::Container => "container",
        }
    }

    /// Width of the zero-padded id used in output paths.
    pub fn id_width(self) -> usize {
        match self {
            AssetKind::Island => 2,
            AssetKind::Spawner | AssetKind::Teleporter | AssetKind::Container => 3,
        }
    }
}

/// One validated record of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetRecord {
    Island(IslandRecord),
    Spawner(SpawnerRecord),
    Teleporter(TeleporterRecord),
    Container(ContainerAsset),
}

impl AssetRecord {
    pub fn kind(&self) -> AssetKind {
        match self {
            AssetRecord::Island(_) => AssetKind::Island,
            AssetRecord::Spawner(_) => AssetKind::Spawner,
            AssetRecord::Teleporter(_) => AssetKind::Teleporter,
            AssetRecord::Container(_) => AssetKind::Container,
        }
    }

    pub fn id(&self) -> AssetId {
        match self {
            AssetRecord::Island(r) => r.id,
            AssetRecord::Spawner(r) => r.id,
            AssetRecord::Teleporter(r) => r.id,
            AssetRecord::Container(r) => r.asset_id,
        }
    }

    /// Spatial keys this record will claim in the duplicate-prevention
    /// registry. Containers claim one key per physical block.
    pub fn spatial_keys(&self) -> Vec<SpatialKey> {
        match self {
            AssetRecord::Island(r) => vec![SpatialKey::new(r.dimension.clone(), r.position)],
            AssetRecord::Spawner(r) => vec![SpatialKey::new(r.dimension.clone(), r.position)],
            AssetRecord::Teleporter(r) => vec![SpatialKey::new(r.dimension.clone(), r.position)],
            AssetRecord::Container(r) => r
                .containers
                .iter()
                .map(|c| SpatialKey::new(r.dimension.clone(), c.position))
                .collect(),
        }
    }
}

/// A floating island placement.
#[derive(Debug, Clone, PartialEq)]
pub struct IslandRecord {
    pub id: AssetId,
    pub dimension: String,
    pub position: Vec3,
    /// Decimal degrees; emitted with an explicit float suffix.
    pub rotation: f64,
    /// Resolved through the boss catalog; absent when the source cell was
    /// blank.
    pub boss_id: Option<u32>,
}

/// A mob spawner placement and its tuning values.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnerRecord {
    pub id: AssetId,
    pub dimension: String,
    pub position: Vec3,
    pub hp: u32,
    pub spawn_potentials: SpawnPotentials,
    pub spawn_count: u32,
    pub spawn_range: u32,
    pub delay: u32,
    pub min_spawn_delay: u32,
    pub max_spawn_delay: u32,
    pub max_nearby_entities: u32,
    pub required_player_range: u32,
}

/// Which mob ids a spawner may produce.
///
/// The shape is chosen at classification time: if no source entry carries an
/// explicit weight the list stays homogeneous, otherwise every entry
/// materializes with a weight. The two shapes use different literal syntaxes
/// in the emitted script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpawnPotentials {
    Homogeneous(Vec<u32>),
    Weighted(Vec<SpawnEntry>),
}

/// One weighted spawn candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnEntry {
    pub id: u32,
    pub weight: u32,
}

/// A teleporter placement.
#[derive(Debug, Clone, PartialEq)]
pub struct TeleporterRecord {
    pub id: AssetId,
    pub dimension: String,
    pub position: Vec3,
    pub group: String,
    pub activation_state: ActivationState,
    pub color: Option<TeleporterColor>,
}

/// Default activation state of a teleporter, decoded from a closed label
/// vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationState {
    Activate,
    VisibleDeactivate,
    InvisibleDeactivate,
}

impl ActivationState {
    pub fn as_str(self) -> &'static str {
        match self {
            ActivationState::Activate => "Activate",
            ActivationState::VisibleDeactivate => "VisibleDeactivate",
            ActivationState::InvisibleDeactivate => "InvisibleDeactivate",
        }
    }
}

/// Beacon color of a teleporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeleporterColor {
    White,
    Aqua,
}

impl TeleporterColor {
    pub fn as_str(self) -> &'static str {
        match self {
            TeleporterColor::White => "white",
            TeleporterColor::Aqua => "aqua",
        }
    }
}

/// Loot container asset: one logical inventory backed by one or two
/// physical blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerAsset {
    pub asset_id: AssetId,
    pub kind: ContainerKind,
    pub dimension: String,
    /// One or two physical blocks; any other count is a configuration
    /// error caught at emission time.
    pub containers: Vec<PhysicalContainer>,
    /// Raw loot-table cell for the Random kind; empty when blank.
    pub loot_table: String,
    /// Flattened item list over slots 0..54 for the Fixed kind.
    pub items: Vec<ItemStack>,
}

/// Whether a container's contents are fixed per slot or rolled from a loot
/// table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Fixed,
    Random,
}

/// One physical container block.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalContainer {
    pub id: u32,
    pub position: Vec3,
    pub block: BlockDescriptor,
}

/// Block identifier plus the optional state qualifiers carried by the
/// source table. Qualifier values are kept raw and lowercased only when
/// rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDescriptor {
    pub block_id: String,
    pub facing: Option<String>,
    pub waterlogged: Option<bool>,
    pub chest_type: Option<String>,
}

/// Horizontal orientation of a container block, used to decide inventory
/// slot ownership when one inventory spans two blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    North,
    South,
    East,
    West,
}

impl Facing {
    /// Decode a source-table facing cell. Anything other than the four
    /// horizontal cardinals (case-insensitive) is unsupported.
    pub fn from_label(label: &str) -> Option<Self> {
        if label.eq_ignore_ascii_case("north") {
            Some(Facing::North)
        } else if label.eq_ignore_ascii_case("south") {
            Some(Facing::South)
        } else if label.eq_ignore_ascii_case("east") {
            Some(Facing::East)
        } else if label.eq_ignore_ascii_case("west") {
            Some(Facing::West)
        } else {
            None
        }
    }
}

/// One inventory slot of a fixed container.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStack {
    /// 0..=53 across the logical inventory; re-indexed to 0..=26 after a
    /// double-container split.
    pub slot: u8,
    pub quantity: u32,
    pub content: ItemContent,
}

/// What occupies a slot, disambiguated by the prefix grammar of the source
/// cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemContent {
    /// Plain runtime item, with an optional structured-data tag passed
    /// through verbatim.
    Vanilla { id: String, tag: Option<String> },
    /// Item defined by a preset elsewhere in the datapack.
    Preset { id: String },
    /// Reference into the artifact catalog.
    Artifact { id: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spatial_key_is_pure_in_its_inputs() {
        let a = SpatialKey::new("overworld", Vec3::new(100, 64, -50));
        let b = SpatialKey::new("overworld", Vec3::new(100, 64, -50));
        assert_eq!(a, b);
        let c = SpatialKey::new("the_nether", Vec3::new(100, 64, -50));
        assert_ne!(a, c);
        let d = SpatialKey::new("overworld", Vec3::new(100, 64, 50));
        assert_ne!(a, d);
    }

    #[test]
    fn facing_labels_decode_case_insensitively() {
        assert_eq!(Facing::from_label("NORTH"), Some(Facing::North));
        assert_eq!(Facing::from_label("west"), Some(Facing::West));
        assert_eq!(Facing::from_label("UP"), None);
        assert_eq!(Facing::from_label(""), None);
    }
}
