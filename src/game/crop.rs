//! Crop kinds and per-tile crop observations.

use serde::{Deserialize, Serialize};

/// A plantable crop species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropKind {
    /// Corn.
    Corn,
    /// Grape.
    Grape,
    /// Potato.
    Potato,
    /// Jogan fruit.
    JoganFruit,
    /// Peanut.
    Peanut,
    /// Quadrotriticale.
    Quadrotriticale,
    /// Ducham fruit.
    DuchamFruit,
    /// Golden corn.
    GoldenCorn,
}

impl CropKind {
    /// Every crop kind, in declaration order.
    pub const ALL: [CropKind; 8] = [
        CropKind::Corn,
        CropKind::Grape,
        CropKind::Potato,
        CropKind::JoganFruit,
        CropKind::Peanut,
        CropKind::Quadrotriticale,
        CropKind::DuchamFruit,
        CropKind::GoldenCorn,
    ];

    /// Lowercase name used in logs and decision text.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CropKind::Corn => "corn",
            CropKind::Grape => "grape",
            CropKind::Potato => "potato",
            CropKind::JoganFruit => "jogan_fruit",
            CropKind::Peanut => "peanut",
            CropKind::Quadrotriticale => "quadrotriticale",
            CropKind::DuchamFruit => "ducham_fruit",
            CropKind::GoldenCorn => "golden_corn",
        }
    }
}

impl std::fmt::Display for CropKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What was last seen growing on a tile.
///
/// Two observations are equal only if kind, growth timer and value all
/// match. A crop whose value changed (fertility idol, pesticide) or that
/// ticked closer to maturity counts as a different observation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Crop {
    /// Crop species, `None` for an empty tile.
    #[serde(default)]
    pub kind: Option<CropKind>,
    /// Turns left until the crop is mature.
    #[serde(default)]
    pub growth_timer: u32,
    /// Sale value if harvested now.
    #[serde(default)]
    pub value: f64,
}

impl Crop {
    /// The empty observation.
    pub const NONE: Crop = Crop {
        kind: None,
        growth_timer: 0,
        value: 0.0,
    };

    /// Create an observation of a planted crop.
    #[must_use]
    pub const fn new(kind: CropKind, growth_timer: u32, value: f64) -> Self {
        Self {
            kind: Some(kind),
            growth_timer,
            value,
        }
    }

    /// Check if nothing is planted.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.kind.is_none()
    }

    /// Check if a crop is present and ready to harvest.
    #[must_use]
    pub const fn is_mature(&self) -> bool {
        self.kind.is_some() && self.growth_timer == 0
    }
}
