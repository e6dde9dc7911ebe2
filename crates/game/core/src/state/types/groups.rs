/// Population groups whose satisfaction drives harmony.
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
pub enum GroupKind {
    Farmers,
    Workers,
    Merchants,
    Scholars,
}

impl GroupKind {
    pub const ALL: [GroupKind; 4] = [
        GroupKind::Farmers,
        GroupKind::Workers,
        GroupKind::Merchants,
        GroupKind::Scholars,
    ];
}

/// A single population group.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    /// Contentment on a 0..=100 scale.
    pub satisfaction: f64,
    /// Weight in the harmony target. Only level transitions change it.
    pub influence: f64,
}

impl Group {
    pub const fn new(satisfaction: f64, influence: f64) -> Self {
        Self {
            satisfaction,
            influence,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Groups {
    pub farmers: Group,
    pub workers: Group,
    pub merchants: Group,
    pub scholars: Group,
}

impl Groups {
    pub fn get(&self, kind: GroupKind) -> &Group {
        match kind {
            GroupKind::Farmers => &self.farmers,
            GroupKind::Workers => &self.workers,
            GroupKind::Merchants => &self.merchants,
            GroupKind::Scholars => &self.scholars,
        }
    }

    pub fn get_mut(&mut self, kind: GroupKind) -> &mut Group {
        match kind {
            GroupKind::Farmers => &mut self.farmers,
            GroupKind::Workers => &mut self.workers,
            GroupKind::Merchants => &mut self.merchants,
            GroupKind::Scholars => &mut self.scholars,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (GroupKind, &Group)> {
        GroupKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    /// Adds `delta` to one group's satisfaction without clamping.
    pub fn adjust_satisfaction(&mut self, kind: GroupKind, delta: f64) {
        self.get_mut(kind).satisfaction += delta;
    }

    /// Adds `delta` to every group's satisfaction without clamping.
    pub fn adjust_all(&mut self, delta: f64) {
        for kind in GroupKind::ALL {
            self.adjust_satisfaction(kind, delta);
        }
    }

    /// Caps every satisfaction at `max`, leaving the lower side alone.
    pub fn cap_satisfaction(&mut self, max: f64) {
        for kind in GroupKind::ALL {
            let group = self.get_mut(kind);
            group.satisfaction = group.satisfaction.min(max);
        }
    }

    /// Clamps every satisfaction into `[0, max]`.
    pub fn clamp_satisfaction(&mut self, max: f64) {
        for kind in GroupKind::ALL {
            let group = self.get_mut(kind);
            group.satisfaction = group.satisfaction.clamp(0.0, max);
        }
    }

    /// Influence-weighted mean satisfaction.
    ///
    /// Returns `None` when total influence is zero.
    pub fn weighted_satisfaction(&self) -> Option<f64> {
        let (weighted, total) = self
            .iter()
            .fold((0.0, 0.0), |(weighted, total), (_, group)| {
                (
                    weighted + group.satisfaction * group.influence,
                    total + group.influence,
                )
            });

        (total > 0.0).then(|| weighted / total)
    }
}

impl Default for Groups {
    fn default() -> Self {
        Self {
            farmers: Group::new(50.0, 1.0),
            workers: Group::new(50.0, 1.0),
            merchants: Group::new(50.0, 1.0),
            scholars: Group::new(50.0, 0.5),
        }
    }
}
