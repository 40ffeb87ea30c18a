//! DSR Level-Editor: Headless-Replay.
//!
//! Spielt ein aufgezeichnetes Eingabe-Skript gegen eine frische Editor-Session
//! ab und gibt den Endzustand als JSON aus.

use anyhow::Context;
use dsr_level_editor::app::replay::{replay, ReplayScript};
use dsr_level_editor::EditorOptions;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("DSR Level-Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    let path = std::env::args()
        .nth(1)
        .context("Aufruf: DSR-Level-Editor <skript.json>")?;
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Skript {} nicht lesbar", path))?;
    let script = ReplayScript::from_json(&text)?;

    // Optionen aus TOML laden (oder Standardwerte)
    let options = EditorOptions::load_from_file(&EditorOptions::config_path());

    let report = replay(&script, options)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
