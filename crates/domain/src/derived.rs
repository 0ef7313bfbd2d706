//! Derived sheet values.
//!
//! Everything here is recomputed from the draft on every render; nothing is
//! persisted. Formulas follow the NPC creation rules: hit points scale with
//! might and level, mind points with will and level, initiative with the
//! physical dice, and elites/champions double their pools.

use crate::entities::{Npc, Rank};

/// Pools and combat values shown in the sheet header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedStats {
    pub hp: i32,
    pub mp: i32,
    pub init: i32,
}

impl DerivedStats {
    /// Compute the header values for a draft.
    pub fn of(npc: &Npc) -> Self {
        let level = i32::from(npc.level);
        let might = i32::from(npc.attributes.might.sides());
        let will = i32::from(npc.attributes.will.sides());
        let dex = i32::from(npc.attributes.dexterity.sides());
        let insight = i32::from(npc.attributes.insight.sides());

        let mut hp = might * 5 + level * 2 + npc.extra.hp;
        let mut mp = will * 5 + level + npc.extra.mp;
        match npc.rank {
            Rank::Soldier => {}
            Rank::Elite | Rank::Champion => {
                hp *= 2;
                mp *= 2;
            }
        }

        let init = (dex + insight) / 2 + npc.extra.init;

        Self { hp, mp, init }
    }
}

/// Skill points available to a sheet versus the points its picks cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillBudget {
    pub available: i32,
    pub spent: i32,
}

impl SkillBudget {
    pub fn remaining(&self) -> i32 {
        self.available - self.spent
    }

    pub fn overspent(&self) -> bool {
        self.spent > self.available
    }
}

/// Computes the skill point budget of a draft.
///
/// Available: 4 base, plus one per ten full levels. Spent: one per special
/// rule, one per attack dealing extra damage, one per 10 points of bonus
/// HP or MP, one per point of DEF/M.DEF, and one per purchased initiative,
/// accuracy, or magic bonus.
pub fn skill_budget(npc: &Npc) -> SkillBudget {
    let available = 4 + i32::from(npc.level) / 10;

    let extra_damage_picks = npc
        .attacks
        .iter()
        .filter(|a| a.extra_damage)
        .count()
        .saturating_add(npc.weapon_attacks.iter().filter(|w| w.extra_damage).count())
        as i32;

    let bonus_picks = npc.extra.hp / 10
        + npc.extra.mp / 10
        + npc.extra.def
        + npc.extra.m_def
        + i32::from(npc.extra.init > 0)
        + i32::from(npc.extra.precision > 0)
        + i32::from(npc.extra.magic > 0);

    let spent = npc.special.len() as i32 + extra_damage_picks + bonus_picks;

    SkillBudget { available, spent }
}
