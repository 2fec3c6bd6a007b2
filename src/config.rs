/// External configuration loader.
///
/// Reads `config.toml` from the executable's directory (or CWD).
/// Falls back to sensible defaults if the file is missing or incomplete.

use serde::Deserialize;
use std::path::PathBuf;

// ── Public Config Struct ──

#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Building layout file read at startup.
    pub buildings_file: PathBuf,
    /// End-of-game stats are appended here.
    pub stats_file: PathBuf,
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    files: TomlFiles,
}

#[derive(Deserialize, Debug)]
struct TomlFiles {
    #[serde(default = "default_buildings")]
    buildings: String,
    #[serde(default = "default_stats")]
    stats: String,
}

fn default_buildings() -> String {
    "buildings.txt".into()
}

fn default_stats() -> String {
    "outcome.txt".into()
}

impl Default for TomlFiles {
    fn default() -> Self {
        TomlFiles {
            buildings: default_buildings(),
            stats: default_stats(),
        }
    }
}

// ── Loading ──

impl GameConfig {
    /// Load config from `config.toml`.
    /// Search order: (1) exe directory, (2) current working directory.
    /// Missing file or missing keys gracefully fall back to defaults.
    pub fn load() -> Self {
        let search_dirs = candidate_dirs();
        let toml_cfg = load_toml(&search_dirs);

        GameConfig {
            buildings_file: resolve(&toml_cfg.files.buildings, &search_dirs),
            stats_file: PathBuf::from(&toml_cfg.files.stats),
        }
    }
}

/// An absolute path stands; a relative one is searched for in the
/// candidate dirs and falls back to CWD-relative if not found yet.
fn resolve(path: &str, search_dirs: &[PathBuf]) -> PathBuf {
    let raw = PathBuf::from(path);
    if raw.is_absolute() {
        return raw;
    }
    search_dirs
        .iter()
        .map(|d| d.join(path))
        .find(|p| p.is_file())
        .unwrap_or(raw)
}

/// Candidate directories to search: exe dir + CWD (deduplicated).
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    if let Ok(exe) = std::env::current_exe() {
        // Resolve symlinks so a linked binary still finds data relative
        // to the real location.
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.iter().any(|d| d == &cwd) {
            dirs.push(cwd);
        }
    }

    if dirs.is_empty() {
        dirs.push(PathBuf::from("."));
    }

    dirs
}

/// Search for config.toml in candidate directories.
fn load_toml(search_dirs: &[PathBuf]) -> TomlConfig {
    for dir in search_dirs {
        let path = dir.join("config.toml");
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(text) => match toml::from_str::<TomlConfig>(&text) {
                    Ok(cfg) => return cfg,
                    Err(e) => {
                        eprintln!("Warning: config.toml parse error: {e}");
                        eprintln!("Using default settings.");
                        return TomlConfig::default();
                    }
                },
                Err(e) => {
                    eprintln!("Warning: could not read {}: {e}", path.display());
                }
            }
        }
    }
    TomlConfig::default()
}
