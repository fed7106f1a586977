//! Edge case and error scenario tests

use emojihits_config::{Config, ConfigError, ConfigManager, PathOverrides, CONFIG_FILE_NAME};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_config(contents: &str) -> Result<(TempDir, ConfigManager), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
    fs::write(&config_path, contents)?;
    let manager = ConfigManager::with_file(config_path);
    Ok((temp_dir, manager))
}

#[test]
fn test_corrupted_config_is_error() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = write_config("this is not valid TOML {{{")?;

    let result = manager.load();
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));

    Ok(())
}

#[test]
fn test_wrong_type_is_error() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = write_config("log_level = \"loud\"\n")?;
    assert!(manager.load().is_err());

    let (_temp_dir, manager) = write_config("[paths]\ncsv = 12\n")?;
    assert!(manager.load().is_err());

    Ok(())
}

#[test]
fn test_empty_path_override_only_warns() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = write_config("[paths]\njson = \"\"\n")?;

    let config = manager.load()?;
    assert!(config.validate().is_err());

    Ok(())
}

#[test]
fn test_partial_file_keeps_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = write_config("[paths]\n")?;

    let config = manager.load()?;
    assert_eq!(config, Config::default());

    Ok(())
}

#[test]
fn test_special_characters_in_paths() {
    let mut config = Config::default();
    config.paths.audio_dir = Some(PathBuf::from("/path/with spaces/Áudio"));
    config.paths.emoji_dir = Some(PathBuf::from("/path/with-dashes/絵文字"));

    assert!(config.validate().is_ok());
    let paths = config.resolve_paths(Path::new("/game"), &PathOverrides::default());
    assert_eq!(paths.audio_dir, PathBuf::from("/path/with spaces/Áudio"));
}

#[test]
fn test_discover_without_any_file_loads_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let manager = ConfigManager::discover(temp_dir.path());

    // A user-level config on the machine running the tests may exist
    if manager.config_path() == temp_dir.path().join(CONFIG_FILE_NAME) {
        assert_eq!(manager.load()?, Config::default());
    }

    Ok(())
}

#[test]
#[cfg(unix)]
fn test_unreadable_config_file() -> Result<(), Box<dyn std::error::Error>> {
    use std::os::unix::fs::PermissionsExt;

    let (_temp_dir, manager) = write_config("log_level = \"info\"\n")?;
    fs::set_permissions(manager.config_path(), fs::Permissions::from_mode(0o000))?;

    // Root can read the file regardless of its mode
    if fs::read_to_string(manager.config_path()).is_err() {
        assert!(matches!(
            manager.load(),
            Err(ConfigError::ReadError { .. })
        ));
    }

    fs::set_permissions(manager.config_path(), fs::Permissions::from_mode(0o644))?;
    Ok(())
}
