//! Error types for the E2E suite

use thiserror::Error;

#[derive(Error, Debug)]
pub enum E2eError {
    #[error("HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("retry loop ended without a response or an error")]
    RetryLoopExhausted,

    #[error("{service} is not available. Expected URL: {url}")]
    ServiceUnavailable { service: String, url: String },

    #[error("Playwright not found. Install with: npx playwright install")]
    PlaywrightNotFound,

    #[error("Playwright error: {0}")]
    Playwright(String),

    #[error("Step failed: {step} - {reason}")]
    StepFailed { step: String, reason: String },

    #[error("Test data error: {0}")]
    TestData(String),

    #[error("Missing result key in browser output: {0}")]
    MissingResult(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type E2eResult<T> = Result<T, E2eError>;
