//! Conduit E2E Test Suite
//!
//! Browser-based end-to-end tests for a Conduit-style blogging platform.
//! Rust owns the test logic; Playwright (run through `node`) owns the
//! browser.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    E2E Suite (Rust)                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Harness                                                    │
//! │    ├── Config::from_env()                                   │
//! │    ├── ensure_services_ready()   (once per test binary)     │
//! │    ├── ApiClient                 (fixtures over REST)       │
//! │    └── TestData                  (YAML templates + suffix)  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Session (one Playwright script per flow)                   │
//! │    ├── pages::* append Step values                          │
//! │    ├── build_script() -> Playwright JS                      │
//! │    └── run() -> extracted results (JSON)                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod browser;
pub mod config;
pub mod data;
pub mod error;
pub mod harness;
pub mod pages;
pub mod readiness;
pub mod step;
pub mod types;

pub use api::ApiClient;
pub use browser::{Playwright, Session};
pub use config::Config;
pub use data::TestData;
pub use error::{E2eError, E2eResult};
pub use harness::Harness;
pub use readiness::{ensure_services_ready, wait_until_ready};
pub use types::{Article, ArticlePreview, User};
