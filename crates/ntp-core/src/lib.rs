//! Core types for the NTP character sheet: the character record and its parts.
//!
//! This crate defines the data model the rules engine works on. It holds no
//! rules beyond range clamping on writes; derived statistics, dice and checks
//! live in `ntp-mechanics`. A [`CharacterRecord`] can be constructed
//! programmatically or deserialized from JSON.

/// The five primary attributes and their clamped scores.
pub mod attribute;
/// Character classes.
pub mod class;
/// Error types used throughout the crate.
pub mod error;
/// Terror exposure (NTP) percentage and its tier.
pub mod exposure;
/// Inventory items, weapons, and powers.
pub mod item;
/// The character record that owns everything else.
pub mod record;
/// Health, sanity, and effort pools.
pub mod resource;
/// Skills, their governing attributes, and per-character proficiency.
pub mod skill;

/// Re-export attribute types.
pub use attribute::{Attribute, Attributes};
/// Re-export the class enum.
pub use class::CharacterClass;
/// Re-export error types.
pub use error::{CoreError, CoreResult, ValidationError};
/// Re-export the exposure type.
pub use exposure::TerrorExposure;
/// Re-export collection entry types.
pub use item::{Ammo, DamageType, InventoryItem, ItemId, Power, PowerKind, Weapon, WeaponKind};
/// Re-export the record.
pub use record::CharacterRecord;
/// Re-export resource pools.
pub use resource::{Health, Resource};
/// Re-export skill types.
pub use skill::{GoverningAttribute, Skill, SkillProficiency, Skills};
