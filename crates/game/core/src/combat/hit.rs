//! Hit chance calculation.

use crate::env::RngOracle;

/// Check if an attack hits.
///
/// # Formula
///
/// ```text
/// roll = uniform[1, attacker_dex + defender_dex]
/// hit  = roll > defender_dex
/// ```
///
/// The hit probability is therefore `attacker_dex / (attacker_dex + defender_dex)`.
pub fn check_hit<R: RngOracle + ?Sized>(
    attacker_dexterity: u32,
    defender_dexterity: u32,
    rng: &mut R,
) -> bool {
    let roll = rng.range(1, attacker_dexterity.saturating_add(defender_dexterity));
    roll > defender_dexterity
}

/// Exact hit probability for the given dexterities.
pub fn hit_probability(attacker_dexterity: u32, defender_dexterity: u32) -> f64 {
    let total = f64::from(attacker_dexterity) + f64::from(defender_dexterity);
    if total == 0.0 {
        return 0.0;
    }
    f64::from(attacker_dexterity) / total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, ScriptedRng};

    #[test]
    fn rolls_above_defender_dexterity_hit() {
        // attacker 3, defender 2: rolls 1..=5, hits on 3, 4, 5
        let mut rng = ScriptedRng::new(1..=5);
        let hits: Vec<bool> = (0..5).map(|_| check_hit(3, 2, &mut rng)).collect();
        assert_eq!(hits, vec![false, false, true, true, true]);
    }

    #[test]
    fn exhaustive_hit_count_equals_attacker_dexterity() {
        for attacker in 1..=6 {
            for defender in 1..=6 {
                let mut rng = ScriptedRng::new(1..=attacker + defender);
                let hits = (0..attacker + defender)
                    .filter(|_| check_hit(attacker, defender, &mut rng))
                    .count() as u32;
                assert_eq!(hits, attacker, "attacker {attacker} defender {defender}");
            }
        }
    }

    #[test]
    fn seeded_hit_rate_converges() {
        let mut rng = PcgRng::new(0xdead_beef);
        let trials = 200_000;
        for (attacker, defender) in [(1, 1), (3, 2), (1, 3), (4, 1)] {
            let hits = (0..trials)
                .filter(|_| check_hit(attacker, defender, &mut rng))
                .count();
            let observed = hits as f64 / trials as f64;
            let expected = hit_probability(attacker, defender);
            assert!(
                (observed - expected).abs() < 0.01,
                "dex {attacker} vs {defender}: observed {observed}, expected {expected}"
            );
        }
    }

    #[test]
    fn equal_dexterity_is_a_coin_flip() {
        assert_eq!(hit_probability(2, 2), 0.5);
        assert_eq!(hit_probability(0, 0), 0.0);
    }
}
