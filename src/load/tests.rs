// Load pipeline tests with a recording game

#[cfg(test)]
mod tests {
    use crate::load::{
        EventTrigger, Inconsistency, LoadError, LoadStage, Location, SubsystemResult, Subsystems,
        load_game,
    };
    use roxmltree::Node;
    use std::cell::RefCell;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Records every call; can be told to fail one stage
    #[derive(Default)]
    struct Recorder {
        player_cleaned: bool,
        diffs_cleared: bool,
        vars_cleaned: bool,
        missions_cleaned: bool,
        events_cleaned: bool,
        messages: Vec<String>,
        stages: RefCell<Vec<LoadStage>>,
        triggers: Vec<EventTrigger>,
        landed: Option<Location>,
        gui: Option<String>,
        cargo_fixed: bool,
        fail_at: Option<LoadStage>,
        inconsistencies: Vec<Inconsistency>,
        /// Cleanup flags as observed when the first stage ran
        cleaned_before_first_stage: bool,
    }

    impl Recorder {
        fn any_cleanup(&self) -> bool {
            self.player_cleaned
                || self.diffs_cleared
                || self.vars_cleaned
                || self.missions_cleaned
                || self.events_cleaned
        }

        fn all_cleanup(&self) -> bool {
            self.player_cleaned
                && self.diffs_cleared
                && self.vars_cleaned
                && self.missions_cleaned
                && self.events_cleaned
        }

        fn record(&mut self, stage: LoadStage) -> SubsystemResult<()> {
            if self.stages.borrow().is_empty() {
                self.cleaned_before_first_stage = self.all_cleanup();
            }
            self.stages.borrow_mut().push(stage);
            if self.fail_at == Some(stage) {
                return Err(format!("{} exploded", stage).into());
            }
            Ok(())
        }
    }

    impl Subsystems for Recorder {
        fn player_cleanup(&mut self) {
            self.player_cleaned = true;
        }
        fn diff_clear(&mut self) {
            self.diffs_cleared = true;
        }
        fn var_cleanup(&mut self) {
            self.vars_cleaned = true;
        }
        fn missions_cleanup(&mut self) {
            self.missions_cleaned = true;
        }
        fn events_cleanup(&mut self) {
            self.events_cleaned = true;
        }
        fn player_message(&mut self, msg: &str) {
            self.messages.push(msg.to_string());
        }
        fn diff_load(&mut self, _root: Node<'_, '_>) -> SubsystemResult<()> {
            self.record(LoadStage::Diffs)
        }
        fn faction_load(&mut self, _root: Node<'_, '_>) -> SubsystemResult<()> {
            self.record(LoadStage::Factions)
        }
        fn player_load(&mut self, root: Node<'_, '_>) -> SubsystemResult<Location> {
            self.record(LoadStage::Player)?;
            let location = root
                .children()
                .find(|n| n.has_tag_name("player"))
                .and_then(|p| p.children().find(|n| n.has_tag_name("location")))
                .and_then(|n| n.text())
                .unwrap_or("Nowhere");
            Ok(Location::new(location))
        }
        fn var_load(&mut self, _root: Node<'_, '_>) -> SubsystemResult<()> {
            self.record(LoadStage::Vars)
        }
        fn missions_load_active(&mut self, _root: Node<'_, '_>) -> SubsystemResult<()> {
            self.record(LoadStage::Missions)
        }
        fn events_load_active(&mut self, _root: Node<'_, '_>) -> SubsystemResult<()> {
            self.record(LoadStage::Events)
        }
        fn hook_load(&mut self, _root: Node<'_, '_>) -> SubsystemResult<()> {
            self.record(LoadStage::Hooks)
        }
        fn space_load(&mut self, _root: Node<'_, '_>) -> SubsystemResult<()> {
            self.record(LoadStage::Space)
        }
        fn economy_init(&mut self) -> SubsystemResult<()> {
            self.record(LoadStage::Economy)
        }
        fn event_check_sanity(&self) -> Vec<Inconsistency> {
            self.stages.borrow_mut().push(LoadStage::SanityCheck);
            self.inconsistencies.clone()
        }
        fn events_trigger(&mut self, trigger: EventTrigger) {
            self.stages.borrow_mut().push(LoadStage::Trigger);
            self.triggers.push(trigger);
        }
        fn land(&mut self, location: &Location) -> SubsystemResult<()> {
            self.record(LoadStage::Land)?;
            self.landed = Some(location.clone());
            Ok(())
        }
        fn gui_pick(&self) -> String {
            "default".to_string()
        }
        fn gui_load(&mut self, layout: &str) -> SubsystemResult<()> {
            self.record(LoadStage::Gui)?;
            self.gui = Some(layout.to_string());
            Ok(())
        }
        fn gui_set_cargo(&mut self) {
            self.cargo_fixed = true;
        }
    }

    const MINIMAL: &str = "<naev_save><version/><player/></naev_save>";

    fn write_save(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("test.ns");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_file_touches_nothing() {
        let dir = TempDir::new().unwrap();
        let mut game = Recorder::default();

        let err = load_game(&dir.path().join("gone.ns"), &mut game).unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.user_message(), "Savegame file seems to have been deleted.");
        assert!(!game.any_cleanup());
        assert!(game.stages.borrow().is_empty());
        assert!(game.messages.is_empty());
    }

    #[test]
    fn unparsable_file_touches_nothing() {
        let dir = TempDir::new().unwrap();
        let path = write_save(&dir, "<naev_save><player>");
        let mut game = Recorder::default();

        let err = load_game(&path, &mut game).unwrap_err();

        assert!(matches!(err, LoadError::Save(_)));
        assert!(!err.is_not_found());
        assert!(!game.any_cleanup());
        assert!(game.stages.borrow().is_empty());
    }

    #[test]
    fn missing_root_touches_nothing() {
        let dir = TempDir::new().unwrap();
        let path = write_save(&dir, r#"<?xml version="1.0"?>"#);
        let mut game = Recorder::default();

        assert!(load_game(&path, &mut game).is_err());
        assert!(!game.any_cleanup());
    }

    #[test]
    fn minimal_document_runs_every_stage_in_order() {
        let dir = TempDir::new().unwrap();
        let path = write_save(&dir, MINIMAL);
        let mut game = Recorder::default();

        let report = load_game(&path, &mut game).unwrap();

        assert!(game.all_cleanup());
        assert!(game.cleaned_before_first_stage);
        assert_eq!(*game.stages.borrow(), LoadStage::ORDER.to_vec());
        assert_eq!(game.triggers, vec![EventTrigger::Load]);
        assert_eq!(game.gui.as_deref(), Some("default"));
        assert!(game.cargo_fixed);
        assert_eq!(report.path, path);
        assert!(report.inconsistencies.is_empty());
    }

    #[test]
    fn welcome_message_comes_first() {
        let dir = TempDir::new().unwrap();
        let path = write_save(&dir, MINIMAL);
        let mut game = Recorder::default();

        load_game(&path, &mut game).unwrap();

        assert_eq!(game.messages.len(), 2);
        assert!(game.messages[0].starts_with("Welcome to"));
        assert!(game.messages[1].contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn lands_where_player_stage_says() {
        let dir = TempDir::new().unwrap();
        let path = write_save(
            &dir,
            "<naev_save><player name=\"Nova\"><location>Darkshed</location></player></naev_save>",
        );
        let mut game = Recorder::default();

        let report = load_game(&path, &mut game).unwrap();

        assert_eq!(report.location, Location::new("Darkshed"));
        assert_eq!(game.landed, Some(Location::new("Darkshed")));
    }

    #[test]
    fn stage_failure_stops_pipeline_without_rollback() {
        let dir = TempDir::new().unwrap();
        let path = write_save(&dir, MINIMAL);
        let mut game = Recorder {
            fail_at: Some(LoadStage::Missions),
            ..Default::default()
        };

        let err = load_game(&path, &mut game).unwrap_err();

        match err {
            LoadError::Stage { stage, .. } => assert_eq!(stage, LoadStage::Missions),
            other => panic!("unexpected error: {other}"),
        }
        assert!(game.all_cleanup());
        assert_eq!(
            *game.stages.borrow(),
            vec![
                LoadStage::Diffs,
                LoadStage::Factions,
                LoadStage::Player,
                LoadStage::Vars,
                LoadStage::Missions,
            ]
        );
        assert!(game.triggers.is_empty());
        assert!(game.landed.is_none());
    }

    #[test]
    fn inconsistencies_are_reported_not_fatal() {
        let dir = TempDir::new().unwrap();
        let path = write_save(&dir, MINIMAL);
        let mut game = Recorder {
            inconsistencies: vec![Inconsistency::new("event 3 listed twice")],
            ..Default::default()
        };

        let report = load_game(&path, &mut game).unwrap();

        assert_eq!(report.inconsistencies.len(), 1);
        assert_eq!(report.inconsistencies[0].to_string(), "event 3 listed twice");
        assert!(game.landed.is_some());
        assert!(game.cargo_fixed);
    }

    #[test]
    fn failed_stage_is_reported_as_failed() {
        let dir = TempDir::new().unwrap();
        let path = write_save(&dir, MINIMAL);
        let mut game = Recorder {
            fail_at: Some(LoadStage::Economy),
            ..Default::default()
        };

        let err = load_game(&path, &mut game).unwrap_err();

        assert_eq!(err.to_string(), "loading economy failed: economy exploded");
        assert!(err.user_message().starts_with("Savegame invalid!"));
        assert_eq!(game.stages.borrow().last(), Some(&LoadStage::Economy));
        assert!(!game.stages.borrow().contains(&LoadStage::SanityCheck));
    }

    #[test]
    fn stage_steps_follow_order() {
        for (i, stage) in LoadStage::ORDER.iter().enumerate() {
            assert_eq!(stage.step(), i + 1);
        }
        assert_eq!(LoadStage::Diffs.step(), 1);
        assert_eq!(LoadStage::Gui.step(), LoadStage::ORDER.len());
    }
}
