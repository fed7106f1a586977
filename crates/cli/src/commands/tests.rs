use super::*;
use crate::build_cli;
use std::fs;
use tempfile::TempDir;

fn matches_from(args: &[&str]) -> ArgMatches {
    let mut argv = vec!["emojihits-sync"];
    argv.extend_from_slice(args);
    build_cli()
        .try_get_matches_from(argv)
        .expect("arguments should parse")
}

fn setup_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let files = temp_dir.path().join("Assets/StreamingAssets/Files");
    fs::create_dir_all(&files).unwrap();
    fs::write(
        temp_dir.path().join("Assets/StreamingAssets/musicas.csv"),
        "sun,Bright “day”,Sun Song,Ana\n",
    )
    .unwrap();
    fs::write(files.join("sampleMP3ToDefault.mp3"), b"mp3").unwrap();
    fs::write(files.join("samplePNGToDefault.png"), b"png").unwrap();
    temp_dir
}

#[test]
fn test_cli_definition_is_valid() {
    build_cli().debug_assert();
}

#[test]
fn test_root_defaults_to_current_dir() {
    let matches = matches_from(&[]);
    assert_eq!(project_root(&matches), PathBuf::from("."));
}

#[test]
fn test_path_flags_become_overrides() {
    let matches = matches_from(&[
        "--csv",
        "songs.csv",
        "--audio-dir",
        "out/Audio",
        "--emoji-dir",
        "out/Emojis",
    ]);

    let overrides = cli_overrides(&matches);
    assert_eq!(overrides.csv, Some(PathBuf::from("songs.csv")));
    assert_eq!(overrides.audio_dir, Some(PathBuf::from("out/Audio")));
    assert_eq!(overrides.emoji_dir, Some(PathBuf::from("out/Emojis")));
    assert_eq!(overrides.json, None);
    assert_eq!(overrides.mp3, None);
}

#[test]
fn test_sync_config_maps_every_path() {
    let paths = SyncPaths::conventional(Path::new("/game"));
    let config = sync_config(paths.clone());

    assert_eq!(config.csv_path, paths.csv);
    assert_eq!(config.database_path, paths.json);
    assert_eq!(config.sample_mp3, paths.mp3);
    assert_eq!(config.sample_png, paths.png);
    assert_eq!(config.audio_dir, paths.audio_dir);
    assert_eq!(config.emoji_dir, paths.emoji_dir);
}

#[test]
fn test_missing_explicit_config_is_error() {
    let project = setup_project();
    let missing = project.path().join("nope.toml");
    let matches = matches_from(&["--config", missing.to_str().unwrap()]);

    assert!(load_config(&matches, project.path()).is_err());
}

#[test]
fn test_sync_with_default_layout() {
    let project = setup_project();
    let root = project.path().to_str().unwrap();
    let matches = matches_from(&["--root", root]);

    let config = load_config(&matches, project.path()).unwrap();
    let report = sync(&matches, &project_root(&matches), &config).unwrap();

    assert_eq!(
        report,
        SyncReport {
            added: 1,
            mp3_copied: 1,
            png_copied: 1,
        }
    );
    let files = project.path().join("Assets/StreamingAssets/Files");
    assert!(files.join("Data/music_database.json").exists());
    assert!(files.join("Audio/sun.mp3").exists());
    assert!(files.join("Emojis/sun.png").exists());

    let again = sync(&matches, &project_root(&matches), &config).unwrap();
    assert_eq!(again, SyncReport::default());
}

#[test]
fn test_sync_honours_config_file_paths() {
    let project = setup_project();
    fs::write(
        project.path().join("emojihits-sync.toml"),
        "[paths]\njson = \"out/db.json\"\n",
    )
    .unwrap();
    let matches = matches_from(&["--root", project.path().to_str().unwrap()]);

    let config = load_config(&matches, project.path()).unwrap();
    sync(&matches, project.path(), &config).unwrap();

    assert!(project.path().join("out/db.json").exists());
}

#[test]
fn test_sync_error_has_context() {
    let project = setup_project();
    fs::remove_file(project.path().join("Assets/StreamingAssets/musicas.csv")).unwrap();
    let matches = matches_from(&["--root", project.path().to_str().unwrap()]);

    let config = Config::default();
    let err = sync(&matches, project.path(), &config).unwrap_err();
    assert!(err.to_string().contains("Failed to sync"));
}
