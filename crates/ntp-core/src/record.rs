use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::attribute::{Attribute, Attributes};
use crate::class::CharacterClass;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::exposure::TerrorExposure;
use crate::item::{InventoryItem, ItemId, Power, Weapon};
use crate::resource::{Health, Resource};
use crate::skill::Skills;

/// Everything written on a character sheet.
///
/// Derived maxima and `defense` are maintained by the rules engine; editing
/// them by hand is allowed but they are overwritten on the next recompute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    /// Character name.
    pub name: String,
    /// Chosen class.
    pub class: CharacterClass,
    /// Free-text origin.
    pub race: String,
    /// Character level.
    pub level: u32,
    /// Free-text background.
    pub background: String,
    /// Free-text alignment.
    pub alignment: String,
    /// Experience points.
    pub experience: u32,
    /// Terror exposure percentage.
    pub exposure: TerrorExposure,
    /// Primary attribute scores.
    pub attributes: Attributes,
    /// Skill proficiencies.
    pub skills: Skills,
    /// Carried items.
    pub inventory: Vec<InventoryItem>,
    /// Known powers.
    pub powers: Vec<Power>,
    /// Free-form notes.
    pub notes: String,
    /// Hit points.
    pub health: Health,
    /// Sanity points.
    pub sanity: Resource,
    /// Effort points, spent on powers.
    pub effort: Resource,
    /// Attributes the character is proficient in for saving throws.
    pub saving_throws: BTreeSet<Attribute>,
    /// Defense, `10 + strength`.
    pub defense: i32,
    /// Initiative modifier.
    pub initiative: i32,
    /// Movement speed.
    pub speed: u32,
    /// Carried weapons.
    pub weapons: Vec<Weapon>,
}

impl CharacterRecord {
    /// A fresh sheet with the starting values of a new character.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class: CharacterClass::Unset,
            race: String::new(),
            level: 1,
            background: String::new(),
            alignment: String::new(),
            experience: 0,
            exposure: TerrorExposure::default(),
            attributes: Attributes::default(),
            skills: Skills::default(),
            inventory: Vec::new(),
            powers: Vec::new(),
            notes: String::new(),
            health: Health::new(10),
            sanity: Resource::new(12),
            effort: Resource::new(2),
            saving_throws: BTreeSet::new(),
            defense: 10,
            initiative: 0,
            speed: 30,
            weapons: Vec::new(),
        }
    }

    /// Write the exposure dial, clamping into range.
    pub fn set_exposure(&mut self, percent: i32) -> Result<(), ValidationError> {
        let (exposure, error) = TerrorExposure::checked(percent);
        self.exposure = exposure;
        error.map_or(Ok(()), Err)
    }

    /// Look up a weapon by ID.
    pub fn weapon(&self, id: ItemId) -> Option<&Weapon> {
        self.weapons.iter().find(|w| w.id == id)
    }

    /// Look up a weapon by ID, mutably.
    pub fn weapon_mut(&mut self, id: ItemId) -> Option<&mut Weapon> {
        self.weapons.iter_mut().find(|w| w.id == id)
    }

    /// Find a weapon by name, case-insensitively.
    pub fn weapon_named(&self, name: &str) -> Option<&Weapon> {
        let lower = name.to_lowercase();
        self.weapons.iter().find(|w| w.name.to_lowercase() == lower)
    }

    /// Add an inventory item. Rejects blank names.
    pub fn add_item(&mut self, item: InventoryItem) -> CoreResult<ItemId> {
        require_name("item", &item.name)?;
        let id = item.id;
        self.inventory.push(item);
        Ok(id)
    }

    /// Remove an inventory item by ID.
    pub fn remove_item(&mut self, id: ItemId) -> CoreResult<InventoryItem> {
        take_by_id(&mut self.inventory, id, |i| i.id)
    }

    /// Add a weapon. Rejects blank names.
    pub fn add_weapon(&mut self, weapon: Weapon) -> CoreResult<ItemId> {
        require_name("weapon", &weapon.name)?;
        let id = weapon.id;
        self.weapons.push(weapon);
        Ok(id)
    }

    /// Remove a weapon by ID.
    pub fn remove_weapon(&mut self, id: ItemId) -> CoreResult<Weapon> {
        take_by_id(&mut self.weapons, id, |w| w.id)
    }

    /// Add a power. Rejects blank names.
    pub fn add_power(&mut self, power: Power) -> CoreResult<ItemId> {
        require_name("power", &power.name)?;
        let id = power.id;
        self.powers.push(power);
        Ok(id)
    }

    /// Remove a power by ID.
    pub fn remove_power(&mut self, id: ItemId) -> CoreResult<Power> {
        take_by_id(&mut self.powers, id, |p| p.id)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON. Out-of-range scores and exposure are clamped.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl Default for CharacterRecord {
    fn default() -> Self {
        Self::new("")
    }
}

fn require_name(kind: &'static str, name: &str) -> CoreResult<()> {
    if name.trim().is_empty() {
        Err(CoreError::EmptyName(kind))
    } else {
        Ok(())
    }
}

fn take_by_id<T>(list: &mut Vec<T>, id: ItemId, key: impl Fn(&T) -> ItemId) -> CoreResult<T> {
    let pos = list
        .iter()
        .position(|entry| key(entry) == id)
        .ok_or(CoreError::NotFound(id))?;
    Ok(list.remove(pos))
}
