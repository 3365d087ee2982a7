use roxmltree::Node;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Result of a call into a game subsystem
pub type SubsystemResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// Steps of a full load after teardown, in the order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadStage {
    Diffs,
    Factions,
    Player,
    Vars,
    Missions,
    Events,
    Hooks,
    Space,
    Economy,
    SanityCheck,
    Trigger,
    Land,
    Gui,
}

impl LoadStage {
    pub const ORDER: [LoadStage; 13] = [
        LoadStage::Diffs,
        LoadStage::Factions,
        LoadStage::Player,
        LoadStage::Vars,
        LoadStage::Missions,
        LoadStage::Events,
        LoadStage::Hooks,
        LoadStage::Space,
        LoadStage::Economy,
        LoadStage::SanityCheck,
        LoadStage::Trigger,
        LoadStage::Land,
        LoadStage::Gui,
    ];

    /// 1-based position in `ORDER`
    pub fn step(&self) -> usize {
        LoadStage::ORDER
            .iter()
            .position(|s| s == self)
            .map_or(0, |i| i + 1)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoadStage::Diffs => "universe diffs",
            LoadStage::Factions => "factions",
            LoadStage::Player => "player",
            LoadStage::Vars => "variables",
            LoadStage::Missions => "missions",
            LoadStage::Events => "events",
            LoadStage::Hooks => "hooks",
            LoadStage::Space => "space",
            LoadStage::Economy => "economy",
            LoadStage::SanityCheck => "event sanity check",
            LoadStage::Trigger => "load trigger",
            LoadStage::Land => "landing",
            LoadStage::Gui => "gui",
        }
    }
}

impl fmt::Display for LoadStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Script trigger points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTrigger {
    /// A saved game finished loading
    Load,
    /// The player landed somewhere
    Land,
}

impl EventTrigger {
    /// Hook type that listens to this trigger
    pub fn hook_type(&self) -> &'static str {
        match self {
            EventTrigger::Load => "load",
            EventTrigger::Land => "land",
        }
    }
}

/// Where the player is docked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location(String);

impl Location {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Structural problem found in loaded state. Reported, never rolled back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inconsistency {
    pub message: String,
}

impl Inconsistency {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for Inconsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of a successful load
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub path: PathBuf,
    pub location: Location,
    pub inconsistencies: Vec<Inconsistency>,
}

/// The game subsystems a load resets and repopulates.
///
/// Each `*_load` call receives the document root and finds its own section.
pub trait Subsystems {
    fn player_cleanup(&mut self);
    fn diff_clear(&mut self);
    fn var_cleanup(&mut self);
    fn missions_cleanup(&mut self);
    fn events_cleanup(&mut self);

    fn player_message(&mut self, msg: &str);

    fn diff_load(&mut self, root: Node<'_, '_>) -> SubsystemResult<()>;
    fn faction_load(&mut self, root: Node<'_, '_>) -> SubsystemResult<()>;
    /// Returns where the player is docked
    fn player_load(&mut self, root: Node<'_, '_>) -> SubsystemResult<Location>;
    fn var_load(&mut self, root: Node<'_, '_>) -> SubsystemResult<()>;
    fn missions_load_active(&mut self, root: Node<'_, '_>) -> SubsystemResult<()>;
    fn events_load_active(&mut self, root: Node<'_, '_>) -> SubsystemResult<()>;
    fn hook_load(&mut self, root: Node<'_, '_>) -> SubsystemResult<()>;
    fn space_load(&mut self, root: Node<'_, '_>) -> SubsystemResult<()>;

    fn economy_init(&mut self) -> SubsystemResult<()>;
    fn event_check_sanity(&self) -> Vec<Inconsistency>;
    fn events_trigger(&mut self, trigger: EventTrigger);
    fn land(&mut self, location: &Location) -> SubsystemResult<()>;

    /// Name of the instrument overlay layout to use
    fn gui_pick(&self) -> String;
    fn gui_load(&mut self, layout: &str) -> SubsystemResult<()>;
    /// Bring the cargo readout in line with the loaded ship
    fn gui_set_cargo(&mut self);
}
