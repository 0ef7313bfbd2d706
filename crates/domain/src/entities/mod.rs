//! NPC record schema.

mod attack;
mod entry;
mod npc;
mod spell;

pub use attack::{Attack, AttackRange, Weapon, WeaponAttack};
pub use entry::TextEntry;
pub use npc::{Attributes, Extra, Npc, Rank, Species, MAX_LEVEL, MIN_LEVEL};
pub use spell::Spell;
