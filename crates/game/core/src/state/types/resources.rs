/// Stockpiled resource kinds.
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
pub enum ResourceKind {
    Food,
    Wealth,
    Materials,
    Technology,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Food,
        ResourceKind::Wealth,
        ResourceKind::Materials,
        ResourceKind::Technology,
    ];
}

/// Resource stockpiles.
///
/// `wealth` here is the tradeable wealth good. The spendable treasury used
/// for investments and level rewards lives on
/// [`NationState::treasury`](crate::state::NationState::treasury).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resources {
    pub food: f64,
    pub wealth: f64,
    pub materials: f64,
    pub technology: f64,
}

impl Resources {
    pub const fn new(food: f64, wealth: f64, materials: f64, technology: f64) -> Self {
        Self {
            food,
            wealth,
            materials,
            technology,
        }
    }

    pub fn get(&self, kind: ResourceKind) -> f64 {
        match kind {
            ResourceKind::Food => self.food,
            ResourceKind::Wealth => self.wealth,
            ResourceKind::Materials => self.materials,
            ResourceKind::Technology => self.technology,
        }
    }

    pub fn get_mut(&mut self, kind: ResourceKind) -> &mut f64 {
        match kind {
            ResourceKind::Food => &mut self.food,
            ResourceKind::Wealth => &mut self.wealth,
            ResourceKind::Materials => &mut self.materials,
            ResourceKind::Technology => &mut self.technology,
        }
    }

    /// Adds `delta` without clamping.
    pub fn adjust(&mut self, kind: ResourceKind, delta: f64) {
        *self.get_mut(kind) += delta;
    }

    /// Clamps every stockpile into `[0, max]`.
    pub fn clamp_all(&mut self, max: f64) {
        for kind in ResourceKind::ALL {
            let value = self.get_mut(kind);
            *value = value.clamp(0.0, max);
        }
    }
}

impl Default for Resources {
    fn default() -> Self {
        Self::new(50.0, 100.0, 75.0, 10.0)
    }
}
