use serde::{Deserialize, Serialize};
use tictactoe_engine::FirstPlayerMode;

pub const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

const MAX_MOVE_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    Human,
    Computer,
    Random,
}

impl From<FirstPlayer> for FirstPlayerMode {
    fn from(value: FirstPlayer) -> Self {
        match value {
            FirstPlayer::Human => FirstPlayerMode::Human,
            FirstPlayer::Computer => FirstPlayerMode::Computer,
            FirstPlayer::Random => FirstPlayerMode::Random,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub first_player: FirstPlayer,
    pub colored_output: bool,
    #[serde(default)]
    pub computer_move_delay_ms: u64,
}

impl Config {
    pub fn validate(&self) -> Result<(), String> {
        if self.computer_move_delay_ms > MAX_MOVE_DELAY_MS {
            return Err(format!(
                "computer_move_delay_ms ({}) cannot exceed {}",
                self.computer_move_delay_ms, MAX_MOVE_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            first_player: FirstPlayer::Human,
            colored_output: true,
            computer_move_delay_ms: 400,
        }
    }
}

pub fn load_config(path: Option<&str>) -> Result<Config, String> {
    let path = path.unwrap_or(CONFIG_FILE_NAME);

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => return Err(format!("Failed to read config file {}: {}", path, e)),
    };

    let config: Config = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to deserialize config: {}", e))?;

    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    Ok(config)
}
