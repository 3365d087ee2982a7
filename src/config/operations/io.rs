use crate::config::types::NsaveConfig;
use crate::paths::PATH_DATA;

use std::error::Error;
use std::fs::File;
use std::io::BufReader;

pub fn load_cfg() -> NsaveConfig {
    let path = PATH_DATA.join("settings.json");

    if let Ok(file) = File::open(&path) {
        match serde_json::from_reader::<_, NsaveConfig>(BufReader::new(file)) {
            Ok(config) => return config,
            Err(e) => log::warn!(
                "Ignoring invalid settings in {}: {}",
                path.display(),
                e
            ),
        }
    }

    // Return default settings if file doesn't exist or has error
    NsaveConfig::default()
}

pub fn save_cfg(config: &NsaveConfig) -> Result<(), Box<dyn Error>> {
    std::fs::create_dir_all(&*PATH_DATA)?;
    let path = PATH_DATA.join("settings.json");
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}
