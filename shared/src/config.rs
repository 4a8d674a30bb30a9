//! Configuration management for Lambda functions.

use std::env;

use crate::{Error, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database host
    pub db_host: String,
    /// Database name
    pub db_name: String,
    /// ARN of the secret containing database credentials
    pub db_secret_arn: String,
    /// ARN of the secret containing the Gemini API key
    pub gemini_secret_arn: String,
    /// Gemini model identifier
    pub gemini_model: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            db_host: require("DB_HOST")?,
            db_name: env::var("DB_NAME").unwrap_or_else(|_| "personality_quiz".to_string()),
            db_secret_arn: require("DB_SECRET_ARN")?,
            gemini_secret_arn: require("GEMINI_SECRET_ARN")?,
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
        })
    }
}

fn require(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("{} not set", name)))
}
