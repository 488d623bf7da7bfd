use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Highest power level.
pub const MAX_POWER_LEVEL: u8 = 5;

/// Unique identifier for inventory items, weapons, and powers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    /// Generate a new random ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Something the character carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Unique identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// How many are carried.
    pub quantity: u32,
    /// Weight of a single unit.
    pub weight: f64,
    /// Free-text notes.
    pub description: String,
}

impl InventoryItem {
    /// Create an item with a fresh ID and no description.
    pub fn new(name: impl Into<String>, quantity: u32, weight: f64) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            quantity,
            weight,
            description: String::new(),
        }
    }
}

/// Loaded and maximum ammunition. `current` never exceeds `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawAmmo")]
pub struct Ammo {
    /// Rounds loaded.
    pub current: u32,
    /// Magazine size.
    pub max: u32,
}

impl Ammo {
    /// Create an ammo pair, clamping `current` down to `max`.
    pub fn new(current: u32, max: u32) -> Self {
        Self {
            current: current.min(max),
            max,
        }
    }

    /// A full magazine.
    pub fn full(max: u32) -> Self {
        Self::new(max, max)
    }
}

/// Unchecked wire form; loaded ammo goes through [`Ammo::new`].
#[derive(Deserialize)]
struct RawAmmo {
    current: u32,
    max: u32,
}

impl From<RawAmmo> for Ammo {
    fn from(raw: RawAmmo) -> Self {
        Self::new(raw.current, raw.max)
    }
}

impl fmt::Display for Ammo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}

/// How a weapon is used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponKind {
    /// Hand-to-hand.
    #[default]
    Melee,
    /// Bows, crossbows and similar.
    Ranged,
    /// Thrown by hand.
    Thrown,
    /// Guns.
    Firearm,
    /// Anything else.
    Other,
}

/// The kind of damage a weapon deals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    /// Generic physical harm.
    #[default]
    Physical,
    /// Bullets and shot.
    Ballistic,
    /// Blades.
    Slashing,
    /// Points and spikes.
    Piercing,
    /// Blunt force.
    Bludgeoning,
    /// Burns.
    Fire,
    /// Shock.
    Electric,
    /// Acids and toxins.
    Chemical,
    /// Harm to the mind.
    Mental,
    /// Anything else.
    Other,
}

/// A weapon with a damage formula in dice notation (e.g. `"2d6+3"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    /// Unique identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// How the weapon is used.
    pub kind: WeaponKind,
    /// Damage notation. Parsed at roll time, so it may be malformed.
    pub damage: String,
    /// Kind of damage dealt.
    pub damage_type: DamageType,
    /// Free-text range.
    pub range: String,
    /// Free-text special properties.
    pub properties: String,
    /// Ammunition, for weapons that use it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ammo: Option<Ammo>,
}

impl Weapon {
    /// Create a melee weapon with the given damage notation.
    pub fn new(name: impl Into<String>, damage: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            kind: WeaponKind::default(),
            damage: damage.into(),
            damage_type: DamageType::default(),
            range: String::new(),
            properties: String::new(),
            ammo: None,
        }
    }

    /// Attach an ammunition pair.
    pub fn with_ammo(mut self, ammo: Ammo) -> Self {
        self.ammo = Some(ammo);
        self
    }
}

/// The category of a power.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerKind {
    /// Used in a fight.
    Combat,
    /// Drawn from the occult.
    Occult,
    /// A trained technique.
    Technique,
    /// Aids allies.
    Support,
    /// Moves the user.
    Movement,
    /// Works on other people.
    Social,
    /// Reveals information.
    Knowledge,
    /// Takes a ritual to cast.
    Ritual,
    /// Anything else.
    #[default]
    Other,
}

/// A power or ability, activated by spending effort points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Power {
    /// Unique identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Power level, 0 to 5.
    #[serde(deserialize_with = "clamped_level")]
    pub level: u8,
    /// Category.
    pub kind: PowerKind,
    /// Time needed to activate.
    pub action_time: String,
    /// Free-text range.
    pub range: String,
    /// Prerequisites.
    pub requirements: String,
    /// How long the effect lasts.
    pub duration: String,
    /// Free-text description.
    pub description: String,
}

impl Power {
    /// Create a power at the given level (clamped to 0-5).
    pub fn new(name: impl Into<String>, level: u8, kind: PowerKind) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            level: level.min(MAX_POWER_LEVEL),
            kind,
            action_time: String::new(),
            range: String::new(),
            requirements: String::new(),
            duration: String::new(),
            description: String::new(),
        }
    }
}

/// Loaded levels go through the same cap as [`Power::new`].
fn clamped_level<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let level = u64::deserialize(deserializer)?;
    Ok(level.min(u64::from(MAX_POWER_LEVEL)) as u8)
}
