// skin.rs
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkinType { Oily, Dry, Combination, Normal, Sensitive }

impl SkinType {
    pub const ALL: [SkinType; 5] = [Self::Oily, Self::Dry, Self::Combination, Self::Normal, Self::Sensitive];

    /// Key used by the embedded recommendation tables.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Oily        => "Oily",
            Self::Dry         => "Dry",
            Self::Combination => "Combination",
            Self::Normal      => "Normal",
            Self::Sensitive   => "Sensitive",
        }
    }
}

impl fmt::Display for SkinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Percentage held as integer tenths (0..=1000) so that sums stay exact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percent(u16);

impl Percent {
    pub const ZERO: Percent = Percent(0);
    pub const FULL: Percent = Percent(1000);

    pub fn from_tenths(tenths: u16) -> Option<Self> { (tenths <= 1000).then_some(Self(tenths)) }
    pub fn tenths(self) -> u16 { self.0 }
    pub fn fraction(self) -> f32 { f32::from(self.0) / 1000.0 }
    /// True when the value is at or above `pct` whole percent.
    pub fn at_least(self, pct: u8) -> bool { self.0 >= u16::from(pct) * 10 }
    pub fn above(self, pct: u8) -> bool { self.0 > u16::from(pct) * 10 }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}.{}", self.0 / 10, self.0 % 10) }
}

/// Pimples / dead skin / normal skin. `normal` is always the remainder, so
/// the three parts add up to exactly 100%.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Composition { pimples: Percent, dead_skin: Percent, normal: Percent }

impl Composition {
    pub fn from_parts(pimples: Percent, dead_skin: Percent) -> Option<Self> {
        let rest = Percent::FULL.0.checked_sub(pimples.0)?.checked_sub(dead_skin.0)?;
        Some(Self { pimples, dead_skin, normal: Percent(rest) })
    }
    /// Like `from_parts`, but trims dead skin so the parts never overflow 100%.
    pub fn clamped(pimples: Percent, dead_skin: Percent) -> Self {
        let dead_skin = Percent(dead_skin.0.min(Percent::FULL.0 - pimples.0));
        Self { pimples, dead_skin, normal: Percent(Percent::FULL.0 - pimples.0 - dead_skin.0) }
    }
    pub fn pimples(&self)   -> Percent { self.pimples }
    pub fn dead_skin(&self) -> Percent { self.dead_skin }
    pub fn normal(&self)    -> Percent { self.normal }
    pub fn parts(&self) -> [Percent; 3] { [self.pimples, self.dead_skin, self.normal] }

    pub fn notes(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.pimples.above(30) {
            out.push("Your skin has a significant amount of pimples. Consider using salicylic acid or benzoyl peroxide treatments.");
        }
        if self.dead_skin.above(20) {
            out.push("Your skin has considerable dead skin buildup. Gentle exfoliation 2-3 times weekly is recommended.");
        }
        out
    }
}

/// One analysis result. Built once per "Analyze" and never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Assessment {
    pub skin_type:   SkinType,
    pub age:         u8,
    pub damage:      Percent,
    pub composition: Composition,
}

impl Assessment {
    pub fn damage_band(&self) -> DamageBand { DamageBand::from_percent(self.damage) }
    pub fn age_band(&self) -> AgeBand { AgeBand::from_age(self.age) }
}

// ── Bands ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DamageBand { Minimal, Mild, Moderate, Significant, Severe }

impl DamageBand {
    pub fn from_percent(p: Percent) -> Self {
        match p.tenths() {
            t if t < 200 => Self::Minimal,
            t if t < 400 => Self::Mild,
            t if t < 600 => Self::Moderate,
            t if t < 800 => Self::Significant,
            _            => Self::Severe,
        }
    }
    pub fn title(self) -> &'static str {
        match self {
            Self::Minimal     => "Minimal Damage",
            Self::Mild        => "Mild Damage",
            Self::Moderate    => "Moderate Damage",
            Self::Significant => "Significant Damage",
            Self::Severe      => "Severe Damage",
        }
    }
    pub fn advice(self) -> &'static str {
        match self {
            Self::Minimal     => "Your skin shows very little damage. Maintain your current routine with sun protection.",
            Self::Mild        => "Your skin has some early signs of damage. Focus on hydration and sun protection.",
            Self::Moderate    => "Your skin shows noticeable damage. Consider adding antioxidants and repair treatments.",
            Self::Significant => "Your skin has substantial damage. Focus on intensive repair and professional treatments.",
            Self::Severe      => "Your skin shows advanced damage. Consult a dermatologist for specialized care.",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgeBand { Prevention, EarlyAntiAging, AntiAging, IntensiveRepair, Mature }

impl AgeBand {
    pub fn from_age(age: u8) -> Self {
        match age {
            0..=24  => Self::Prevention,
            25..=34 => Self::EarlyAntiAging,
            35..=44 => Self::AntiAging,
            45..=54 => Self::IntensiveRepair,
            _       => Self::Mature,
        }
    }
    pub fn title(self) -> &'static str {
        match self {
            Self::Prevention      => "Prevention Focus",
            Self::EarlyAntiAging  => "Early Anti-Aging",
            Self::AntiAging       => "Anti-Aging Focus",
            Self::IntensiveRepair => "Intensive Repair",
            Self::Mature          => "Mature Skin Care",
        }
    }
    pub fn tips(self) -> [&'static str; 4] {
        match self {
            Self::Prevention      => ["Lightweight moisturizers", "Daily SPF", "Gentle exfoliation", "Oil control if needed"],
            Self::EarlyAntiAging  => ["Vitamin C serum", "Retinol 2-3x weekly", "Hydration focus", "Daily SPF"],
            Self::AntiAging       => ["Peptide products", "Increased retinol", "Hyaluronic acid", "Professional treatments"],
            Self::IntensiveRepair => ["Richer moisturizers", "Growth factors", "Collagen boosters", "Regular facials"],
            Self::Mature          => ["Barrier repair", "Ceramide products", "Gentle exfoliation", "Hormonal considerations"],
        }
    }
}
