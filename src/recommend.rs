// recommend.rs
// Turns an assessment into care steps, remedies and product picks by layering
// threshold-based additions on top of the per-skin-type base tables.
use crate::json_loader::{Catalog, ProductCategory, RecommendationEntry, RemedyEntry};
use crate::skin::{Assessment, Percent, SkinType};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepKind { Base, SunProtection, AntiAging { weekly: u8 }, Antioxidant, Repair }

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CareStep { pub kind: StepKind, pub entry: RecommendationEntry }

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemedyKind { Base, AgingToner, DamageRepair }

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Remedy { pub kind: RemedyKind, pub entry: RemedyEntry }

/// Damage (percent) from which the antioxidant step is added.
pub const ANTIOXIDANT_MIN_DAMAGE: u8 = 40;
/// Damage (percent) from which repair remedies and products are added.
pub const REPAIR_MIN_DAMAGE: u8 = 40;
/// The repair care step is added from this age, or from `REPAIR_STEP_MIN_DAMAGE`.
pub const REPAIR_STEP_MIN_AGE: u8 = 35;
pub const REPAIR_STEP_MIN_DAMAGE: u8 = 50;

pub fn wants_anti_aging(t: SkinType, age: u8) -> bool { age >= 25 && t != SkinType::Sensitive }

/// Retinol nights per week, by age band.
pub fn anti_aging_weekly(age: u8) -> u8 {
    match age { 0..=34 => 1, 35..=44 => 2, _ => 3 }
}

pub struct Recommender<'a> { catalog: &'a Catalog }

impl<'a> Recommender<'a> {
    pub fn new(catalog: &'a Catalog) -> Self { Self { catalog } }

    pub fn compose_care_steps(&self, t: SkinType, age: u8, damage: Percent) -> Vec<CareStep> {
        let care = &self.catalog.care;
        let mut out: Vec<CareStep> = care.base_for(t).iter()
            .map(|e| CareStep { kind: StepKind::Base, entry: e.clone() })
            .collect();
        out.push(CareStep { kind: StepKind::SunProtection, entry: care.sun_protection.clone() });
        if wants_anti_aging(t, age) {
            let weekly = anti_aging_weekly(age);
            let mut entry = care.anti_aging.clone();
            entry.how_to_use = entry.how_to_use.replace("{weekly}", &weekly.to_string());
            out.push(CareStep { kind: StepKind::AntiAging { weekly }, entry });
        }
        if damage.at_least(ANTIOXIDANT_MIN_DAMAGE) {
            out.push(CareStep { kind: StepKind::Antioxidant, entry: care.antioxidant.clone() });
        }
        if age >= REPAIR_STEP_MIN_AGE || damage.at_least(REPAIR_STEP_MIN_DAMAGE) {
            out.push(CareStep { kind: StepKind::Repair, entry: care.repair.clone() });
        }
        out
    }

    pub fn compose_remedies(&self, t: SkinType, age: u8, damage: Percent) -> Vec<Remedy> {
        let lib = &self.catalog.remedies;
        let mut out: Vec<Remedy> = lib.base_for(t).iter()
            .map(|e| Remedy { kind: RemedyKind::Base, entry: e.clone() })
            .collect();
        if age >= 35 {
            out.push(Remedy { kind: RemedyKind::AgingToner, entry: lib.aging_toner.clone() });
        }
        if damage.at_least(REPAIR_MIN_DAMAGE) {
            out.push(Remedy { kind: RemedyKind::DamageRepair, entry: lib.damage_repair.clone() });
        }
        out
    }

    /// Categories in display order. A later category replaces an earlier one
    /// with the same name in place.
    pub fn compose_products(&self, t: SkinType, age: u8, damage: Percent) -> Vec<ProductCategory> {
        let lib = &self.catalog.products;
        let mut out = lib.base_for(t).to_vec();
        upsert(&mut out, &lib.sunscreen);
        if wants_anti_aging(t, age) { upsert(&mut out, &lib.anti_aging); }
        if damage.at_least(REPAIR_MIN_DAMAGE) { upsert(&mut out, &lib.repair); }
        out
    }

    pub fn care_steps_for(&self, a: &Assessment) -> Vec<CareStep> { self.compose_care_steps(a.skin_type, a.age, a.damage) }
    pub fn remedies_for(&self, a: &Assessment) -> Vec<Remedy> { self.compose_remedies(a.skin_type, a.age, a.damage) }
    pub fn products_for(&self, a: &Assessment) -> Vec<ProductCategory> { self.compose_products(a.skin_type, a.age, a.damage) }
}

fn upsert(list: &mut Vec<ProductCategory>, cat: &ProductCategory) {
    match list.iter_mut().find(|c| c.name == cat.name) {
        Some(slot) => *slot = cat.clone(),
        None       => list.push(cat.clone()),
    }
}
