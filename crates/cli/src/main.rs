// FILE: crates/cli/src/main.rs

use anyhow::{Context, Result};
use clap::{value_parser, Arg, Command};
use std::path::PathBuf;

mod commands;

fn path_arg(
    id: &'static str,
    long: &'static str,
    value_name: &'static str,
    help: &'static str,
) -> Arg {
    Arg::new(id)
        .long(long)
        .value_name(value_name)
        .help(help)
        .value_parser(value_parser!(PathBuf))
}

fn build_cli() -> Command {
    Command::new("emojihits-sync")
        .version("0.1.0")
        .author("EmojiHits Team")
        .about("Sync musicas.csv into music_database.json and stage placeholder media")
        .arg(
            Arg::new("root")
                .short('r')
                .long("root")
                .value_name("DIR")
                .help("Game project root used to derive default paths")
                .default_value(".")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Config file (default: <root>/emojihits-sync.toml, then the user config dir)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(path_arg("csv", "csv", "FILE", "Path to musicas.csv"))
        .arg(path_arg("json", "json", "FILE", "Path to music_database.json"))
        .arg(path_arg("mp3", "mp3", "FILE", "Sample MP3 to duplicate"))
        .arg(path_arg("png", "png", "FILE", "Sample PNG to duplicate"))
        .arg(path_arg("audio_dir", "audio-dir", "DIR", "Destination directory for MP3 files"))
        .arg(path_arg("emoji_dir", "emoji-dir", "DIR", "Destination directory for emoji PNGs"))
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    let root = commands::project_root(&matches);
    let config = commands::load_config(&matches, &root).context("Failed to load config")?;

    // RUST_LOG, when set, takes precedence over the configured level
    env_logger::Builder::new()
        .filter_level(config.log_level.to_filter())
        .parse_env(env_logger::Env::default())
        .init();

    let report = commands::sync(&matches, &root, &config)?;
    commands::print_report(&report);
    Ok(())
}
