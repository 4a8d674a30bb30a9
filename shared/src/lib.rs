//! Shared library for the Personality Quiz Lambda functions.
//!
//! This crate holds the quiz business logic (validation, prompt templates,
//! completion parsing, persistence) and the infrastructure used by the API
//! binaries.

pub mod config;
pub mod db;
pub mod error;
pub mod gemini;
pub mod http;
pub mod models;
pub mod prompt;
pub mod sanitize;
pub mod scenario;
pub mod secrets;
pub mod store;
pub mod theme;

pub use config::Config;
pub use error::{Error, Result};
pub use gemini::GeminiClient;
pub use models::{AnalyzeRequest, GenerateRequest, PersonalityMode, SaveResponseRequest, SavedResponse};
pub use scenario::{ParseError, ParsedScenario};
pub use secrets::{get_database_credentials, get_secret, DatabaseCredentials};
pub use store::ResponseStore;
