//! Playwright session execution
//!
//! A [`Session`] accumulates typed steps and runs them as one generated
//! Playwright script through `node`. Running a whole flow in a single script
//! keeps browser state (login token, current page) alive across steps.
//!
//! The script reports back on stdout through a single `E2E_RESULT:`-prefixed
//! JSON line carrying a success flag, the failing step name if any, and the
//! values extracted along the way.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

use crate::config::Config;
use crate::error::{E2eError, E2eResult};
use crate::step::{js_quote, Step};

const RESULT_MARKER: &str = "E2E_RESULT:";

/// Browser engine to launch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Browser {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl Browser {
    fn as_str(self) -> &'static str {
        match self {
            Browser::Chromium => "chromium",
            Browser::Firefox => "firefox",
            Browser::Webkit => "webkit",
        }
    }
}

/// Playwright launcher configuration
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    pub base_url: String,
    pub browser: Browser,
    pub headless: bool,
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub action_timeout: Duration,
}

impl BrowserConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            base_url: config.base_url.clone(),
            browser: Browser::default(),
            headless: config.headless,
            viewport_width: config.viewport_width,
            viewport_height: config.viewport_height,
            action_timeout: config.action_timeout,
        }
    }
}

/// Entry point for browser sessions
#[derive(Debug, Clone)]
pub struct Playwright {
    config: BrowserConfig,
}

impl Playwright {
    /// Create a launcher, verifying the Playwright CLI is installed.
    pub fn new(config: BrowserConfig) -> E2eResult<Self> {
        Self::check_installed()?;
        Ok(Self { config })
    }

    fn check_installed() -> E2eResult<()> {
        let status = std::process::Command::new("npx")
            .args(["playwright", "--version"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) if status.success() => Ok(()),
            _ => Err(E2eError::PlaywrightNotFound),
        }
    }

    /// Start an empty session.
    pub fn session(&self) -> Session {
        Session {
            config: self.config.clone(),
            steps: Vec::new(),
        }
    }

    /// Start a session authenticated as the owner of `token`.
    ///
    /// The frontend reads its auth token from localStorage, so the session
    /// opens the home page, writes the token, and reloads before the first
    /// real step runs.
    pub fn session_with_token(&self, token: &str) -> Session {
        let mut session = self.session();
        session.push(Step::Goto {
            path: "/".to_string(),
        });
        session.push(Step::SetLocalStorage {
            key: "token".to_string(),
            value: token.to_string(),
        });
        session.push(Step::Reload);
        session
    }
}

/// One browser flow, executed as a single Playwright script
#[derive(Debug, Clone)]
pub struct Session {
    config: BrowserConfig,
    steps: Vec<Step>,
}

/// The JSON line the generated script prints before exiting
#[derive(Debug, Deserialize)]
struct ScriptOutcome {
    success: bool,
    #[serde(default)]
    step: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    results: Option<Map<String, Value>>,
}

impl Session {
    /// Append a step to the flow.
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Append several steps to the flow.
    pub fn extend(&mut self, steps: impl IntoIterator<Item = Step>) {
        self.steps.extend(steps);
    }

    /// Assemble the Playwright script for the accumulated steps.
    pub fn build_script(&self) -> String {
        let timeout_ms = self.config.action_timeout.as_millis() as u64;
        let mut script = format!(
            r#"const {{ chromium, firefox, webkit }} = require('playwright');

(async () => {{
  const browser = await {browser}.launch({{ headless: {headless} }});
  const context = await browser.newContext({{
    viewport: {{ width: {width}, height: {height} }}
  }});
  const page = await context.newPage();
  const baseUrl = {base_url};
  const results = {{}};
  let currentStep = '';

  try {{
"#,
            browser = self.config.browser.as_str(),
            headless = self.config.headless,
            width = self.config.viewport_width,
            height = self.config.viewport_height,
            base_url = js_quote(&self.config.base_url),
        );

        for (i, step) in self.steps.iter().enumerate() {
            script.push_str(&format!(
                "\n    // Step {}: {}\n    currentStep = {};\n",
                i + 1,
                step.name(),
                js_quote(&step.name())
            ));
            script.push_str(&step.to_js(timeout_ms));
            script.push('\n');
        }

        script.push_str(&format!(
            r#"
    console.log('{marker}' + JSON.stringify({{ success: true, results }}));
  }} catch (error) {{
    console.log('{marker}' + JSON.stringify({{ success: false, step: currentStep, error: error.message }}));
    process.exitCode = 1;
  }} finally {{
    await browser.close();
  }}
}})();
"#,
            marker = RESULT_MARKER,
        ));

        script
    }

    /// Run the flow. Returns the values extracted by the steps.
    pub async fn run(self) -> E2eResult<Map<String, Value>> {
        let script = self.build_script();

        let temp_dir = tempfile::tempdir()?;
        let script_path = temp_dir.path().join("session.js");
        std::fs::write(&script_path, &script)?;

        debug!("Running Playwright session: {}", script_path.display());

        let output = Command::new("node")
            .arg(&script_path)
            .current_dir(temp_dir.path())
            .output()
            .await?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let outcome = match stdout
            .lines()
            .rev()
            .find_map(|line| line.strip_prefix(RESULT_MARKER))
        {
            Some(json) => serde_json::from_str::<ScriptOutcome>(json)?,
            None => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                return Err(E2eError::Playwright(format!(
                    "session produced no result:\nstdout: {stdout}\nstderr: {stderr}"
                )));
            }
        };

        if !outcome.success {
            return Err(E2eError::StepFailed {
                step: outcome.step.unwrap_or_else(|| "unknown".to_string()),
                reason: outcome.error.unwrap_or_else(|| "unknown error".to_string()),
            });
        }

        Ok(outcome.results.unwrap_or_default())
    }
}
