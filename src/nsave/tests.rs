// Save index tests against real directories

#[cfg(test)]
mod tests {
    use crate::nsave::operations::load_summary;
    use crate::nsave::{SaveError, refresh_index, remove_save};
    use std::collections::BTreeSet;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn save_xml(name: &str, credits: u64) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<naev_save>
 <version><naev>0.5.0</naev><data>0.5.0</data></version>
 <player name="{name}">
  <credits>{credits}</credits>
  <time>100</time>
  <location>Darkshed</location>
  <ship name="Starfall" model="Llama"/>
 </player>
</naev_save>"#
        )
    }

    fn write(dir: &Path, file: &str, contents: &str) -> PathBuf {
        let path = dir.join(file);
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn path_set(dir: &Path) -> BTreeSet<PathBuf> {
        refresh_index(dir)
            .paths()
            .into_iter()
            .map(Path::to_path_buf)
            .collect()
    }

    #[test]
    fn valid_corrupt_and_foreign_files() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.ns", &save_xml("Nova", 500));
        write(dir.path(), "b.ns", "<naev_save><player name=\"Broken\">");
        write(dir.path(), "c.txt", &save_xml("Text", 1));

        let index = refresh_index(dir.path());
        assert_eq!(index.len(), 1);
        let save = index.get(0).unwrap();
        assert_eq!(save.name.as_deref(), Some("Nova"));
        assert_eq!(save.credits, 500);
    }

    #[test]
    fn non_matching_files_never_indexed() {
        let dir = TempDir::new().unwrap();
        for i in 0..3 {
            write(dir.path(), &format!("save{i}.ns"), &save_xml("Nova", i));
        }
        write(dir.path(), "notes.txt", &save_xml("Nope", 0));
        write(dir.path(), "backup.ns.bak", &save_xml("Nope", 0));
        write(dir.path(), ".ns", &save_xml("Nope", 0));

        let index = refresh_index(dir.path());
        assert_eq!(index.len(), 3);
        assert!(index.iter().all(|s| s.name.as_deref() == Some("Nova")));
    }

    #[test]
    fn missing_root_is_skipped_and_scan_continues() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.ns", r#"<?xml version="1.0"?>"#);
        write(dir.path(), "b.ns", "");
        write(dir.path(), "c.ns", &save_xml("Nova", 1));

        let index = refresh_index(dir.path());
        assert_eq!(index.len(), 1);
        assert_eq!(index.get(0).unwrap().path, dir.path().join("c.ns"));
    }

    #[test]
    fn missing_ship_still_indexed() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "a.ns",
            r#"<naev_save><player name="Nova"><credits>5</credits></player></naev_save>"#,
        );

        let index = refresh_index(dir.path());
        assert_eq!(index.len(), 1);
        let save = index.get(0).unwrap();
        assert_eq!(save.ship_name, None);
        assert_eq!(save.ship_model, None);
    }

    #[test]
    fn directory_with_save_extension_is_skipped() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("folder.ns")).unwrap();
        write(dir.path(), "a.ns", &save_xml("Nova", 1));

        let index = refresh_index(dir.path());
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn missing_directory_gives_empty_index() {
        let dir = TempDir::new().unwrap();
        let index = refresh_index(&dir.path().join("nowhere"));
        assert!(index.is_empty());
    }

    #[test]
    fn refresh_is_repeatable() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "b.ns", &save_xml("B", 2));
        write(dir.path(), "a.ns", &save_xml("A", 1));
        write(dir.path(), "c.ns", &save_xml("C", 3));

        let first = refresh_index(dir.path());
        let second = refresh_index(dir.path());
        assert_eq!(first.len(), second.len());
        assert_eq!(first.paths(), second.paths());
        // Sorted by file name
        let names: Vec<_> = first.iter().map(|s| s.display()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn delete_removes_exactly_one() {
        let dir = TempDir::new().unwrap();
        let a = write(dir.path(), "a.ns", &save_xml("A", 1));
        write(dir.path(), "b.ns", &save_xml("B", 2));
        write(dir.path(), "c.ns", &save_xml("C", 3));

        let before = path_set(dir.path());
        remove_save(&a).unwrap();
        let after = path_set(dir.path());

        assert_eq!(after.len(), before.len() - 1);
        assert!(!after.contains(&a));
        assert!(after.is_subset(&before));
    }

    #[test]
    fn delete_tolerates_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(remove_save(&dir.path().join("gone.ns")).is_ok());
    }

    #[test]
    fn load_summary_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_summary(&dir.path().join("gone.ns")).unwrap_err();
        assert!(matches!(err, SaveError::NotFound(_)));
        assert!(err.is_not_found());
    }
}
