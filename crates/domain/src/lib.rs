//! Fultimator domain layer.
//!
//! Core NPC record schema, identifiers, publish rules, and derived values.
//! This crate is pure: no I/O, no async, no ambient state. Everything here is
//! a function of its inputs so the app layer can be tested against it without
//! infrastructure.

extern crate self as fultimator_domain;

pub mod entities;
pub mod error;
pub mod ids;
pub mod publish;
pub mod value_objects;

mod derived;

pub use entities::{
    Attack, AttackRange, Attributes, Extra, Npc, Rank, Species, Spell, TextEntry, Weapon,
    WeaponAttack,
};
pub use error::DomainError;
pub use ids::{NpcId, UserId};
pub use publish::{publish_eligibility, PublishBlocker};

pub use derived::{skill_budget, DerivedStats, SkillBudget};
pub use value_objects::{check_odds, search_tokens, Affinity, AttributeName, CheckOdds, Die, Element};
