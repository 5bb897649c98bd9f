//! Environment-driven configuration.
//!
//! Secrets and identifiers come from the environment, optionally seeded
//! from a `.env` file; batch sizes have deployment defaults.

use std::env;
use std::path::PathBuf;

use teloxide::types::ChatId;
use thiserror::Error;

const DEFAULT_PROGRESS_FILE: &str = "progress.txt";
const DEFAULT_WORDS_PER_RUN: usize = 3;
const DEFAULT_QUESTIONS_PER_WORD: usize = 3;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),
    #[error("environment variable {name} has an invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub sheets_api_key: String,
    pub sheet_id: String,
    pub sheet_tab: Option<String>,
    pub chat_ids: Vec<ChatId>,
    pub progress_file: PathBuf,
    pub words_per_run: usize,
    pub questions_per_word: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bot_token: required("TELEGRAM_BOT_TOKEN")?,
            sheets_api_key: required("SHEETS_API_KEY")?,
            sheet_id: required("SHEET_ID")?,
            sheet_tab: env::var("SHEET_TAB").ok().filter(|tab| !tab.is_empty()),
            chat_ids: parse_chat_ids(&required("CHAT_IDS")?)?,
            progress_file: env::var("PROGRESS_FILE")
                .unwrap_or_else(|_| DEFAULT_PROGRESS_FILE.to_string())
                .into(),
            words_per_run: parse_count("WORDS_PER_RUN", DEFAULT_WORDS_PER_RUN)?,
            questions_per_word: parse_count("QUESTIONS_PER_WORD", DEFAULT_QUESTIONS_PER_WORD)?,
        })
    }

    /// A1 range covering the word columns, scoped to the configured
    /// worksheet when one is named.
    pub fn sheet_range(&self) -> String {
        match &self.sheet_tab {
            Some(tab) => format!("'{tab}'!A:Z"),
            None => "A:Z".to_string(),
        }
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

/// Parses a comma-separated list of chat ids. Negative ids are groups and
/// channels, so the full signed range is accepted.
fn parse_chat_ids(raw: &str) -> Result<Vec<ChatId>, ConfigError> {
    let mut chat_ids = Vec::new();
    for part in raw.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let id = part.parse::<i64>().map_err(|_| ConfigError::Invalid {
            name: "CHAT_IDS",
            value: part.to_string(),
        })?;
        chat_ids.push(ChatId(id));
    }
    if chat_ids.is_empty() {
        return Err(ConfigError::Missing("CHAT_IDS"));
    }
    Ok(chat_ids)
}

fn parse_count(name: &'static str, default: usize) -> Result<usize, ConfigError> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(value) => match value.trim().parse::<usize>() {
            Ok(count) if count > 0 => Ok(count),
            _ => Err(ConfigError::Invalid { name, value }),
        },
    }
}
