use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Commodity {
    pub name: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub name: String,
    pub model: String,
    /// Preferred overlay layout for this ship
    pub gui: Option<String>,
    /// Cargo hold size in tonnes
    pub cargo_capacity: u32,
    pub commodities: Vec<Commodity>,
}

impl Ship {
    pub fn cargo_used(&self) -> u32 {
        self.commodities.iter().map(|c| c.quantity).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub credits: u64,
    pub time: u64,
    /// Docked location, empty when the save has none
    pub location: String,
    pub ship: Option<Ship>,
}

/// Scripting variable value
#[derive(Debug, Clone, PartialEq)]
pub enum Var {
    Num(f64),
    Str(String),
    Bool(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mission {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: u32,
    pub name: String,
}

/// Owner of a hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookParent {
    Mission(u32),
    Event(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hook {
    pub id: u32,
    /// Trigger type the hook listens to ("load", "land", ...)
    pub kind: String,
    pub parent: HookParent,
    /// Script function to run
    pub func: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StarSystem {
    pub name: String,
    pub price_modifier: f64,
    pub planets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Economy {
    /// System the prices belong to, None for base prices
    pub system: Option<String>,
    /// Credits per tonne
    pub prices: BTreeMap<String, u64>,
}

/// Instrument overlay state
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub layout: String,
    pub cargo_used: u32,
    pub cargo_capacity: u32,
}
