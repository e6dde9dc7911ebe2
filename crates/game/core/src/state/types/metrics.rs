/// National development metrics, each nominally on a 0..=100 scale.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MetricKind {
    Harmony,
    Infrastructure,
    Agriculture,
    Education,
    Healthcare,
    Diplomacy,
}

impl MetricKind {
    pub const ALL: [MetricKind; 6] = [
        MetricKind::Harmony,
        MetricKind::Infrastructure,
        MetricKind::Agriculture,
        MetricKind::Education,
        MetricKind::Healthcare,
        MetricKind::Diplomacy,
    ];
}

/// Sectors the player can invest in. Each maps to one metric.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Sector {
    Agriculture,
    Infrastructure,
    Education,
    Healthcare,
    Diplomacy,
}

impl Sector {
    pub const ALL: [Sector; 5] = [
        Sector::Agriculture,
        Sector::Infrastructure,
        Sector::Education,
        Sector::Healthcare,
        Sector::Diplomacy,
    ];

    pub const fn metric(self) -> MetricKind {
        match self {
            Sector::Agriculture => MetricKind::Agriculture,
            Sector::Infrastructure => MetricKind::Infrastructure,
            Sector::Education => MetricKind::Education,
            Sector::Healthcare => MetricKind::Healthcare,
            Sector::Diplomacy => MetricKind::Diplomacy,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    /// Composite stability. At or below zero the nation collapses.
    pub harmony: f64,
    pub infrastructure: f64,
    pub agriculture: f64,
    pub education: f64,
    pub healthcare: f64,
    pub diplomacy: f64,
}

impl Metrics {
    pub fn get(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::Harmony => self.harmony,
            MetricKind::Infrastructure => self.infrastructure,
            MetricKind::Agriculture => self.agriculture,
            MetricKind::Education => self.education,
            MetricKind::Healthcare => self.healthcare,
            MetricKind::Diplomacy => self.diplomacy,
        }
    }

    pub fn get_mut(&mut self, kind: MetricKind) -> &mut f64 {
        match kind {
            MetricKind::Harmony => &mut self.harmony,
            MetricKind::Infrastructure => &mut self.infrastructure,
            MetricKind::Agriculture => &mut self.agriculture,
            MetricKind::Education => &mut self.education,
            MetricKind::Healthcare => &mut self.healthcare,
            MetricKind::Diplomacy => &mut self.diplomacy,
        }
    }

    /// Adds `delta` without clamping.
    pub fn adjust(&mut self, kind: MetricKind, delta: f64) {
        *self.get_mut(kind) += delta;
    }

    /// Clamps every metric except harmony into `[0, max]`.
    ///
    /// Harmony has its own clamp at the end of the harmony update.
    pub fn clamp_sectors(&mut self, max: f64) {
        for kind in MetricKind::ALL {
            if kind == MetricKind::Harmony {
                continue;
            }
            let value = self.get_mut(kind);
            *value = value.clamp(0.0, max);
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            harmony: 50.0,
            infrastructure: 10.0,
            agriculture: 10.0,
            education: 10.0,
            healthcare: 10.0,
            diplomacy: 10.0,
        }
    }
}
