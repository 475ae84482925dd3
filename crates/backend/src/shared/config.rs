use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub sheets: SheetsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory with the built frontend, served as fallback
    pub static_dir: String,
}

/// Where the listing lives. Credentials are not part of the file, they come
/// from the environment (see [`crate::shared::google::credentials`]).
#[derive(Debug, Deserialize, Clone)]
pub struct SheetsConfig {
    pub spreadsheet_id: String,
    pub tools_range: String,
    pub subjects_range: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_api_base() -> String {
    "https://sheets.googleapis.com".to_string()
}

fn default_token_uri() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
static_dir = "dist"

[sheets]
spreadsheet_id = "1ePvAJldz0LboCtMLtBsrgWPCb4cPb5qaPY8l_OXYxSM"
tools_range = "Blad1!A2:H"
subjects_range = "Blad2!A2:A"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.sheets.spreadsheet_id.trim().is_empty() {
        anyhow::bail!("sheets.spreadsheet_id must not be empty");
    }
    Ok(config)
}

/// Resolve the static directory relative to the executable directory
pub fn get_static_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.server.static_dir);

    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(dir);
            if resolved.exists() {
                return resolved;
            }
        }
    }

    PathBuf::from(&config.server.static_dir)
}
