//! Bot configuration: policy thresholds, seed prices and game-start loadout.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::CropKind;

/// Item picked at game start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// No item.
    None,
    /// Speeds up growth around the player.
    RainTotem,
    /// Doubles crop value around the player.
    FertilityIdol,
    /// Reduces crop value around the opponent.
    Pesticide,
    /// Only the owner may harvest around it.
    Scarecrow,
    /// Sells harvests without visiting the market.
    DeliveryDrone,
    /// Extra movement for a few turns.
    #[default]
    CoffeeThermos,
}

/// Upgrade picked at game start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeKind {
    /// No upgrade.
    None,
    /// Larger movement budget.
    LongerLegs,
    /// Larger harvest radius.
    #[default]
    Scythe,
    /// Chance of double harvests.
    RabbitsFoot,
    /// Larger carrying capacity.
    Backpack,
    /// Larger plant radius.
    Spyglass,
    /// Faster movement on the first turns.
    MoonShoes,
    /// Cheaper seeds.
    LoyaltyCard,
    /// Even larger harvest radius.
    LongerScythe,
}

/// Item and upgrade announced to the server before the first turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Loadout {
    /// Chosen item.
    pub item: ItemKind,
    /// Chosen upgrade.
    pub upgrade: UpgradeKind,
}

/// Tunable policy for the decision selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Turns before this one are spent heading to the market.
    pub early_market_turns: u32,
    /// Turns after this one are spent heading to the market.
    pub late_market_turn: u32,
    /// Turns to stay put after planting.
    pub plant_cooldown: u32,
    /// Stop buying once money reaches this amount.
    pub money_ceiling: u32,
    /// Buy the fallback crop only when holding fewer seeds than this.
    pub low_seed_threshold: u32,
    /// Preferred crop to buy.
    pub premium_crop: CropKind,
    /// Cheap crop bought when the premium one is unaffordable.
    pub fallback_crop: CropKind,
    /// Ideal planting row at turn zero.
    pub ideal_row_start: u16,
    /// Turns between each one-row advance of the ideal row.
    pub ideal_row_period: u32,
    /// Seed price per crop kind.
    pub seed_prices: BTreeMap<CropKind, u32>,
    /// Item and upgrade for this game.
    pub loadout: Loadout,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            early_market_turns: 2,
            late_market_turn: 170,
            plant_cooldown: 3,
            money_ceiling: 5_000,
            low_seed_threshold: 5,
            premium_crop: CropKind::GoldenCorn,
            fallback_crop: CropKind::Corn,
            ideal_row_start: 3,
            ideal_row_period: 6,
            seed_prices: default_seed_prices(),
            loadout: Loadout::default(),
        }
    }
}

/// Seed prices of the standard crop catalog.
#[must_use]
pub fn default_seed_prices() -> BTreeMap<CropKind, u32> {
    BTreeMap::from([
        (CropKind::Corn, 5),
        (CropKind::Grape, 15),
        (CropKind::Potato, 20),
        (CropKind::JoganFruit, 20),
        (CropKind::Peanut, 5),
        (CropKind::Quadrotriticale, 10),
        (CropKind::DuchamFruit, 100),
        (CropKind::GoldenCorn, 500),
    ])
}

impl BotConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or fails
    /// [`BotConfig::validate`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can drive the selector.
    ///
    /// # Errors
    ///
    /// Returns an error if the ideal row never advances or a configured crop
    /// has no seed price.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ideal_row_period == 0 {
            return Err(ConfigError::Invalid(
                "ideal_row_period must be at least 1".to_string(),
            ));
        }
        for kind in [self.premium_crop, self.fallback_crop] {
            match self.seed_prices.get(&kind) {
                Some(&price) if price > 0 => {}
                _ => {
                    return Err(ConfigError::Invalid(format!(
                        "no positive seed price for {kind}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Seed price for `kind`, if known.
    #[must_use]
    pub fn seed_price(&self, kind: CropKind) -> Option<u32> {
        self.seed_prices.get(&kind).copied().filter(|&price| price > 0)
    }
}
