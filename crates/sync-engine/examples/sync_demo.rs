// crates/sync-engine/examples/sync_demo.rs
//! Demonstration of a sync run against a throwaway project layout

use emojihits_sync_engine::{SyncConfig, SyncEngine};
use std::fs;

fn main() {
    println!("EmojiHits Sync Engine Demo");
    println!("==========================\n");

    let temp_dir = tempfile::TempDir::new().unwrap();
    let files = temp_dir.path().join("Files");
    fs::create_dir_all(&files).unwrap();
    fs::write(files.join("sampleMP3ToDefault.mp3"), b"mp3").unwrap();
    fs::write(files.join("samplePNGToDefault.png"), b"png").unwrap();
    fs::write(
        temp_dir.path().join("musicas.csv"),
        "sun,Bright “day”,Sun Song,Ana\nmoon,Quiet night\nsun,Duplicate,Ignored,Nobody\n",
    )
    .unwrap();

    let config = SyncConfig {
        csv_path: temp_dir.path().join("musicas.csv"),
        database_path: files.join("Data").join("music_database.json"),
        sample_mp3: files.join("sampleMP3ToDefault.mp3"),
        sample_png: files.join("samplePNGToDefault.png"),
        audio_dir: files.join("Audio"),
        emoji_dir: files.join("Emojis"),
    };
    let engine = SyncEngine::new(config.clone());

    println!("1. First run");
    println!("------------");
    println!("{}\n", engine.run().unwrap());

    println!("2. Second run (nothing new)");
    println!("---------------------------");
    println!("{}\n", engine.run().unwrap());

    println!("3. Resulting database");
    println!("---------------------");
    println!("{}", fs::read_to_string(&config.database_path).unwrap());
}
