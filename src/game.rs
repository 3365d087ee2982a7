//! In-memory game session rebuilt by a full load

mod economy;
mod sanity;
mod sections;
mod types;

pub use types::{Economy, Event, Hook, Mission, Overlay, Player, StarSystem, Var};

use crate::load::{EventTrigger, Inconsistency, Location, SubsystemResult, Subsystems};
use roxmltree::Node;
use std::collections::BTreeMap;

/// Default overlay layout when neither config nor ship picks one
pub const DEFAULT_GUI: &str = "default";

#[derive(Debug, Default)]
pub struct GameState {
    /// Forced overlay layout from settings
    pub gui_override: Option<String>,

    pub messages: Vec<String>,
    pub player: Option<Player>,
    /// Applied universe diffs, oldest first
    pub diffs: Vec<String>,
    pub factions: BTreeMap<String, f64>,
    pub vars: BTreeMap<String, Var>,
    pub missions: Vec<Mission>,
    pub events: Vec<Event>,
    pub hooks: Vec<Hook>,
    pub system: Option<StarSystem>,
    pub economy: Option<Economy>,
    pub landed: Option<String>,
    pub overlay: Option<Overlay>,
    /// Hook functions run by triggers, in order
    pub executed_hooks: Vec<String>,
}

impl GameState {
    pub fn new(gui_override: Option<String>) -> Self {
        Self {
            gui_override,
            ..Default::default()
        }
    }

    fn run_hooks(&mut self, kind: &str) {
        let funcs: Vec<String> = self
            .hooks
            .iter()
            .filter(|h| h.kind == kind)
            .map(|h| h.func.clone())
            .collect();
        for func in funcs {
            log::debug!("Running {} hook '{}'", kind, func);
            self.executed_hooks.push(func);
        }
    }
}

impl Subsystems for GameState {
    fn player_cleanup(&mut self) {
        self.player = None;
        self.messages.clear();
        self.landed = None;
        self.overlay = None;
        self.executed_hooks.clear();
    }

    fn diff_clear(&mut self) {
        self.diffs.clear();
    }

    fn var_cleanup(&mut self) {
        self.vars.clear();
    }

    fn missions_cleanup(&mut self) {
        self.missions.clear();
        self.hooks
            .retain(|h| !matches!(h.parent, types::HookParent::Mission(_)));
    }

    fn events_cleanup(&mut self) {
        self.events.clear();
        self.hooks
            .retain(|h| !matches!(h.parent, types::HookParent::Event(_)));
    }

    fn player_message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn diff_load(&mut self, root: Node<'_, '_>) -> SubsystemResult<()> {
        self.diffs = sections::parse_diffs(root);
        for diff in &self.diffs {
            log::debug!("Applied universe diff '{}'", diff);
        }
        Ok(())
    }

    fn faction_load(&mut self, root: Node<'_, '_>) -> SubsystemResult<()> {
        self.factions = sections::parse_factions(root)?;
        Ok(())
    }

    fn player_load(&mut self, root: Node<'_, '_>) -> SubsystemResult<Location> {
        let player = sections::parse_player(root)?;
        let location = Location::new(player.location.clone());
        self.player = Some(player);
        Ok(location)
    }

    fn var_load(&mut self, root: Node<'_, '_>) -> SubsystemResult<()> {
        self.vars = sections::parse_vars(root)?;
        Ok(())
    }

    fn missions_load_active(&mut self, root: Node<'_, '_>) -> SubsystemResult<()> {
        self.missions = sections::parse_missions(root)?;
        Ok(())
    }

    fn events_load_active(&mut self, root: Node<'_, '_>) -> SubsystemResult<()> {
        self.events = sections::parse_events(root)?;
        Ok(())
    }

    fn hook_load(&mut self, root: Node<'_, '_>) -> SubsystemResult<()> {
        self.hooks = sections::parse_hooks(root)?;
        Ok(())
    }

    fn space_load(&mut self, root: Node<'_, '_>) -> SubsystemResult<()> {
        self.system = sections::parse_space(root)?;
        Ok(())
    }

    fn economy_init(&mut self) -> SubsystemResult<()> {
        let economy = match &self.system {
            Some(system) => Economy::for_system(system),
            None => {
                log::debug!("No star system loaded, using base prices");
                Economy::base()
            }
        };
        self.economy = Some(economy);
        Ok(())
    }

    fn event_check_sanity(&self) -> Vec<Inconsistency> {
        sanity::check_events(&self.events, &self.missions, &self.hooks)
    }

    fn events_trigger(&mut self, trigger: EventTrigger) {
        self.run_hooks(trigger.hook_type());
    }

    fn land(&mut self, location: &Location) -> SubsystemResult<()> {
        if location.name().is_empty() {
            log::warn!("Player has no docked location, staying in space");
            self.landed = None;
            return Ok(());
        }
        if let Some(system) = &self.system
            && !system.planets.iter().any(|p| p == location.name())
        {
            log::warn!(
                "Landing at '{}', which is not in system '{}'",
                location,
                system.name
            );
        }
        self.landed = Some(location.name().to_string());
        self.events_trigger(EventTrigger::Land);
        Ok(())
    }

    fn gui_pick(&self) -> String {
        self.gui_override
            .clone()
            .or_else(|| {
                self.player
                    .as_ref()
                    .and_then(|p| p.ship.as_ref())
                    .and_then(|s| s.gui.clone())
            })
            .unwrap_or_else(|| DEFAULT_GUI.to_string())
    }

    fn gui_load(&mut self, layout: &str) -> SubsystemResult<()> {
        if layout.trim().is_empty() {
            return Err("empty overlay layout name".into());
        }
        self.overlay = Some(Overlay {
            layout: layout.to_string(),
            cargo_used: 0,
            cargo_capacity: 0,
        });
        Ok(())
    }

    fn gui_set_cargo(&mut self) {
        let ship = self.player.as_ref().and_then(|p| p.ship.as_ref());
        if let Some(overlay) = &mut self.overlay {
            overlay.cargo_used = ship.map(|s| s.cargo_used()).unwrap_or(0);
            overlay.cargo_capacity = ship.map(|s| s.cargo_capacity).unwrap_or(0);
        }
    }
}
