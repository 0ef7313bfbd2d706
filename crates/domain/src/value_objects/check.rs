//! Check probability math.
//!
//! A check rolls two attribute dice and adds a flat modifier. The roll is a
//! critical success when both dice show the same face of 6 or higher, and a
//! fumble when both show 1. The outcome space is small enough to enumerate
//! exactly, so no sampling is involved.

use super::Die;

/// Exact odds for one two-die check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckOdds {
    /// P(total >= difficulty)
    pub hit: f64,
    /// P(both dice equal, face >= 6)
    pub critical: f64,
    /// P(both dice show 1)
    pub fumble: f64,
}

/// Enumerates every face pair of `first` and `second` and returns the exact
/// odds of beating `difficulty` with the given flat modifier.
pub fn check_odds(first: Die, second: Die, modifier: i32, difficulty: i32) -> CheckOdds {
    let a = i32::from(first.sides());
    let b = i32::from(second.sides());
    let outcomes = f64::from(a * b);

    let mut hits = 0u32;
    let mut criticals = 0u32;
    for x in 1..=a {
        for y in 1..=b {
            if x + y + modifier >= difficulty {
                hits += 1;
            }
            if x == y && x >= 6 {
                criticals += 1;
            }
        }
    }

    CheckOdds {
        hit: f64::from(hits) / outcomes,
        critical: f64::from(criticals) / outcomes,
        // Exactly one (1, 1) pair exists regardless of die sizes.
        fumble: 1.0 / outcomes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivial_difficulty_always_hits() {
        let odds = check_odds(Die::D6, Die::D6, 0, 2);
        assert_eq!(odds.hit, 1.0);
    }

    #[test]
    fn impossible_difficulty_never_hits() {
        let odds = check_odds(Die::D6, Die::D6, 0, 13);
        assert_eq!(odds.hit, 0.0);
    }

    #[test]
    fn two_d6_have_one_critical_pair() {
        // Only (6, 6) qualifies on a pair of d6.
        let odds = check_odds(Die::D6, Die::D6, 0, 7);
        assert!((odds.critical - 1.0 / 36.0).abs() < 1e-12);
        assert!((odds.fumble - 1.0 / 36.0).abs() < 1e-12);
    }

    #[test]
    fn larger_dice_add_critical_pairs() {
        // d10 + d10: (6,6) (7,7) (8,8) (9,9) (10,10)
        let odds = check_odds(Die::D10, Die::D10, 0, 7);
        assert!((odds.critical - 5.0 / 100.0).abs() < 1e-12);
    }

    #[test]
    fn mismatched_dice_cap_criticals_at_smaller_size() {
        // d6 + d12: (6, 6) only
        let odds = check_odds(Die::D6, Die::D12, 0, 7);
        assert!((odds.critical - 1.0 / 72.0).abs() < 1e-12);
    }

    #[test]
    fn modifier_shifts_hit_probability() {
        let without = check_odds(Die::D8, Die::D8, 0, 10);
        let with = check_odds(Die::D8, Die::D8, 3, 10);
        assert!(with.hit > without.hit);
    }

    #[test]
    fn seven_on_two_d6_is_the_classic_bell_peak() {
        // P(sum >= 7) on 2d6 is 21/36
        let odds = check_odds(Die::D6, Die::D6, 0, 7);
        assert!((odds.hit - 21.0 / 36.0).abs() < 1e-12);
    }
}
