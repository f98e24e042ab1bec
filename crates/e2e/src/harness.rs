//! Per-test harness wiring
//!
//! Browser tests share one environment: configuration read once, a readiness
//! gate that runs a single time per test binary, the API client for fixtures,
//! and the test-data templates. `Harness::init()` is the first call of every
//! browser test.

use serde_json::{Map, Value};
use std::sync::Once;
use tokio::sync::OnceCell;
use tracing_subscriber::EnvFilter;

use crate::api::ApiClient;
use crate::browser::{BrowserConfig, Playwright, Session};
use crate::config::Config;
use crate::data::TestData;
use crate::error::{E2eError, E2eResult};
use crate::readiness::ensure_services_ready;
use crate::types::ArticlePreview;

static TRACING: Once = Once::new();

/// Outcome of the one-shot readiness gate, shared across tests in a binary.
/// Failure keeps the service name and URL so every test reports the same
/// actionable error.
static READINESS: OnceCell<Result<(), (String, String)>> = OnceCell::const_new();

pub struct Harness {
    pub config: Config,
    pub api: ApiClient,
    pub data: TestData,
    playwright: Playwright,
}

impl Harness {
    /// Initialize the suite environment.
    ///
    /// Fails if a dependent service never becomes ready or Playwright is not
    /// installed; both errors name what is missing.
    pub async fn init() -> E2eResult<Self> {
        TRACING.call_once(|| {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .with_test_writer()
                .try_init()
                .ok();
        });

        let config = Config::from_env();

        let gate = READINESS
            .get_or_init(|| async {
                ensure_services_ready(&config).await.map_err(|e| match e {
                    E2eError::ServiceUnavailable { service, url } => (service, url),
                    other => ("Service".to_string(), other.to_string()),
                })
            })
            .await;
        if let Err((service, url)) = gate {
            return Err(E2eError::ServiceUnavailable {
                service: service.clone(),
                url: url.clone(),
            });
        }

        let api = ApiClient::new(&config.api_url).with_retries(config.api_retries);
        let data = TestData::load()?;
        let playwright = Playwright::new(BrowserConfig::from_config(&config))?;

        Ok(Self {
            config,
            api,
            data,
            playwright,
        })
    }

    /// A fresh anonymous browser session.
    pub fn session(&self) -> Session {
        self.playwright.session()
    }

    /// A fresh browser session signed in as the owner of `token`.
    pub fn session_with_token(&self, token: &str) -> Session {
        self.playwright.session_with_token(token)
    }
}

/// Pull a list of article previews out of a session's extracted results.
pub fn article_previews(results: &Map<String, Value>, key: &str) -> E2eResult<Vec<ArticlePreview>> {
    let value = results
        .get(key)
        .ok_or_else(|| E2eError::MissingResult(key.to_string()))?;
    Ok(serde_json::from_value(value.clone())?)
}
