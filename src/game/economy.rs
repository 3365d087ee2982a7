use super::types::{Economy, StarSystem};
use std::collections::BTreeMap;

/// Base commodity prices in credits per tonne
pub const BASE_PRICES: [(&str, u64); 5] = [
    ("Food", 100),
    ("Ore", 200),
    ("Industrial Goods", 500),
    ("Medicine", 700),
    ("Luxury Goods", 1000),
];

fn scaled_prices(modifier: f64) -> BTreeMap<String, u64> {
    let modifier = modifier.max(0.0);
    BASE_PRICES
        .iter()
        .map(|(name, base)| (name.to_string(), (*base as f64 * modifier).round() as u64))
        .collect()
}

impl Economy {
    /// Unmodified prices, used when no star system is loaded
    pub fn base() -> Self {
        Self {
            system: None,
            prices: scaled_prices(1.0),
        }
    }

    /// Prices for the given system, scaled by its price modifier
    pub fn for_system(system: &StarSystem) -> Self {
        Self {
            system: Some(system.name.clone()),
            prices: scaled_prices(system.price_modifier),
        }
    }
}
