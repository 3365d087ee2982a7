// Ordered bootstrap of a saved game.
//
// Every stage hands a token to the stage that depends on it, so the call
// order below is also enforced by the signatures.

use super::{
    APPNAME, EventTrigger, Inconsistency, LoadError, LoadReport, LoadStage, Location,
    SubsystemResult, Subsystems, version,
};
use crate::nsave::SaveError;
use crate::nsave::operations::read_save_text;
use crate::nsave::pure::parse_document;
use roxmltree::Node;
use std::path::Path;

/// Universe diffs are installed
pub struct DiffsLoaded(());
/// Faction standings are installed
pub struct FactionsLoaded(());
/// Player is installed; carries the docking location for landing
pub struct PlayerLoaded {
    location: Location,
}
/// Variables, missions, events and hooks are installed
pub struct ScriptingLoaded(());
/// Space state is installed
pub struct SpaceLoaded(());
/// Economy is initialised
pub struct EconomyReady(());

fn stage<T>(stage: LoadStage, result: SubsystemResult<T>) -> Result<T, LoadError> {
    let value = result.map_err(|source| LoadError::Stage { stage, source })?;
    log_stage(stage);
    Ok(value)
}

fn log_stage(stage: LoadStage) {
    log::debug!(
        "Load stage {}/{} done: {}",
        stage.step(),
        LoadStage::ORDER.len(),
        stage
    );
}

/// Load the game stored at `path` into `game`.
///
/// Nothing is torn down unless the file exists and parses. Once teardown has
/// started a failing stage is reported but not rolled back.
pub fn load_game<S: Subsystems + ?Sized>(
    path: &Path,
    game: &mut S,
) -> Result<LoadReport, LoadError> {
    let result = load_game_inner(path, game);
    match &result {
        Ok(report) => {
            log::info!(
                "Loaded savegame '{}', landed at {}",
                path.display(),
                report.location
            );
        }
        Err(e) => log::warn!("Savegame '{}' invalid! {}", path.display(), e),
    }
    result
}

fn load_game_inner<S: Subsystems + ?Sized>(
    path: &Path,
    game: &mut S,
) -> Result<LoadReport, LoadError> {
    if !path.exists() {
        return Err(SaveError::NotFound(path.to_path_buf()).into());
    }

    let text = read_save_text(path)?;
    let doc = parse_document(&text, path)?;
    let root = doc.root_element();

    teardown(game);
    welcome(game);

    let diffs = load_diffs(game, root)?;
    let factions = load_factions(game, root, diffs)?;
    let player = load_player(game, root, factions)?;
    let scripting = load_scripting(game, root, &player)?;
    let space = load_space(game, root, scripting)?;
    let economy = init_economy(game, space)?;
    let inconsistencies = check_sanity(game, &economy);
    fire_load_trigger(game, economy);
    let location = land_player(game, player)?;
    load_overlay(game, &location)?;

    Ok(LoadReport {
        path: path.to_path_buf(),
        location,
        inconsistencies,
    })
}

/// Reset all live session state before anything new is installed
pub fn teardown<S: Subsystems + ?Sized>(game: &mut S) {
    game.player_cleanup();
    game.diff_clear();
    game.var_cleanup();
    game.missions_cleanup();
    game.events_cleanup();
}

fn welcome<S: Subsystems + ?Sized>(game: &mut S) {
    game.player_message(&format!("Welcome to {}!", APPNAME));
    game.player_message(&format!(" v{}", version()));
}

/// Diffs go first: they can change factions
pub fn load_diffs<S: Subsystems + ?Sized>(
    game: &mut S,
    root: Node<'_, '_>,
) -> Result<DiffsLoaded, LoadError> {
    stage(LoadStage::Diffs, game.diff_load(root))?;
    Ok(DiffsLoaded(()))
}

/// Factions go before the player so standing messages are right
pub fn load_factions<S: Subsystems + ?Sized>(
    game: &mut S,
    root: Node<'_, '_>,
    _diffs: DiffsLoaded,
) -> Result<FactionsLoaded, LoadError> {
    stage(LoadStage::Factions, game.faction_load(root))?;
    Ok(FactionsLoaded(()))
}

pub fn load_player<S: Subsystems + ?Sized>(
    game: &mut S,
    root: Node<'_, '_>,
    _factions: FactionsLoaded,
) -> Result<PlayerLoaded, LoadError> {
    let location = stage(LoadStage::Player, game.player_load(root))?;
    Ok(PlayerLoaded { location })
}

/// Variables, then missions, events and finally the hooks they registered
pub fn load_scripting<S: Subsystems + ?Sized>(
    game: &mut S,
    root: Node<'_, '_>,
    _player: &PlayerLoaded,
) -> Result<ScriptingLoaded, LoadError> {
    stage(LoadStage::Vars, game.var_load(root))?;
    stage(LoadStage::Missions, game.missions_load_active(root))?;
    stage(LoadStage::Events, game.events_load_active(root))?;
    stage(LoadStage::Hooks, game.hook_load(root))?;
    Ok(ScriptingLoaded(()))
}

pub fn load_space<S: Subsystems + ?Sized>(
    game: &mut S,
    root: Node<'_, '_>,
    _scripting: ScriptingLoaded,
) -> Result<SpaceLoaded, LoadError> {
    stage(LoadStage::Space, game.space_load(root))?;
    Ok(SpaceLoaded(()))
}

pub fn init_economy<S: Subsystems + ?Sized>(
    game: &mut S,
    _space: SpaceLoaded,
) -> Result<EconomyReady, LoadError> {
    stage(LoadStage::Economy, game.economy_init())?;
    Ok(EconomyReady(()))
}

/// Report event state inconsistencies; they do not fail the load
pub fn check_sanity<S: Subsystems + ?Sized>(
    game: &S,
    _economy: &EconomyReady,
) -> Vec<Inconsistency> {
    let found = game.event_check_sanity();
    for inconsistency in &found {
        log::warn!("Event sanity check: {}", inconsistency);
    }
    log_stage(LoadStage::SanityCheck);
    found
}

/// Run load hooks once everything is in place
pub fn fire_load_trigger<S: Subsystems + ?Sized>(game: &mut S, _economy: EconomyReady) {
    game.events_trigger(EventTrigger::Load);
    log_stage(LoadStage::Trigger);
}

pub fn land_player<S: Subsystems + ?Sized>(
    game: &mut S,
    player: PlayerLoaded,
) -> Result<Location, LoadError> {
    stage(LoadStage::Land, game.land(&player.location))?;
    Ok(player.location)
}

/// Pick and load the instrument overlay, then fix its cargo readout
pub fn load_overlay<S: Subsystems + ?Sized>(
    game: &mut S,
    _landed: &Location,
) -> Result<(), LoadError> {
    let layout = game.gui_pick();
    stage(LoadStage::Gui, game.gui_load(&layout))?;
    game.gui_set_cargo();
    Ok(())
}
