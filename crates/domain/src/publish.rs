//! Publish eligibility rules.
//!
//! A sheet can only enter the public compendium once it is complete enough to
//! be useful to other tables. The gate is evaluated in a fixed order and the
//! FIRST failing rule is returned, so the editor always shows one actionable
//! message at a time.

use thiserror::Error;

use crate::entities::Npc;

/// The first rule a draft fails, with its user-facing reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PublishBlocker {
    #[error("It must have a name in order to be published.")]
    MissingName,
    #[error("It must have a description in order to be published.")]
    MissingDescription,
    #[error("It must have traits in order to be published.")]
    MissingTraits,
    #[error("'Created By' needs to be filled in order to be published.")]
    MissingCreatedBy,
    #[error("Language needs to be set in order to be published.")]
    MissingLanguage,
    #[error("It must have at least one attack in order to be published.")]
    NoAttacks,
}

/// Evaluates the publish gate against a draft.
///
/// Rule order is part of the contract: name, description, traits, credit,
/// language, attacks.
pub fn publish_eligibility(npc: &Npc) -> Result<(), PublishBlocker> {
    if npc.name.is_empty() {
        return Err(PublishBlocker::MissingName);
    }
    if npc.description.is_empty() {
        return Err(PublishBlocker::MissingDescription);
    }
    if npc.traits.is_empty() {
        return Err(PublishBlocker::MissingTraits);
    }
    if npc.created_by.is_empty() {
        return Err(PublishBlocker::MissingCreatedBy);
    }
    if npc.language.is_empty() {
        return Err(PublishBlocker::MissingLanguage);
    }
    if npc.attacks.is_empty() && npc.weapon_attacks.is_empty() {
        return Err(PublishBlocker::NoAttacks);
    }
    Ok(())
}
