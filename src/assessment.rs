// assessment.rs
// The "analysis" is a random draw; image content never influences it.
use rand::Rng;
use crate::skin::{Assessment, Composition, Percent, SkinType};

pub const AGE_RANGE: std::ops::RangeInclusive<u8> = 20..=70;
const DAMAGE_TENTHS: std::ops::RangeInclusive<u16> = 0..=1000;
const PIMPLES_TENTHS: std::ops::RangeInclusive<u16> = 50..=400;
const DEAD_SKIN_TENTHS: std::ops::RangeInclusive<u16> = 50..=300;

fn percent<R: Rng + ?Sized>(rng: &mut R, range: std::ops::RangeInclusive<u16>) -> Percent {
    // Ranges above all sit inside 0..=1000.
    Percent::from_tenths(rng.gen_range(range)).unwrap_or(Percent::ZERO)
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Assessment {
    let skin_type = SkinType::ALL[rng.gen_range(0..SkinType::ALL.len())];
    let age = rng.gen_range(AGE_RANGE);
    let damage = percent(rng, DAMAGE_TENTHS);
    let pimples = percent(rng, PIMPLES_TENTHS);
    let dead_skin = percent(rng, DEAD_SKIN_TENTHS);
    // Pimples and dead skin top out at 70% together, so nothing is trimmed.
    let composition = Composition::clamped(pimples, dead_skin);
    let a = Assessment { skin_type, age, damage, composition };
    tracing::debug!(?a, "generated assessment");
    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    proptest! {
        #[test]
        fn generated_assessment_respects_bounds(seed in any::<u64>()) {
            let a = generate(&mut StdRng::seed_from_u64(seed));
            prop_assert!(AGE_RANGE.contains(&a.age));
            prop_assert!(a.damage <= Percent::FULL);
            let c = a.composition;
            prop_assert!((50..=400).contains(&c.pimples().tenths()));
            prop_assert!((50..=300).contains(&c.dead_skin().tenths()));
            prop_assert!((300..=900).contains(&c.normal().tenths()));
            let sum: u16 = c.parts().iter().map(|p| p.tenths()).sum();
            prop_assert_eq!(sum, 1000);
        }
    }

    #[test]
    fn same_seed_same_assessment() {
        let a = generate(&mut StdRng::seed_from_u64(7));
        let b = generate(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn every_skin_type_is_drawn() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 { seen.insert(generate(&mut rng).skin_type); }
        assert_eq!(seen.len(), SkinType::ALL.len());
    }
}
