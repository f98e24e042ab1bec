//! Test data templates
//!
//! Scenario-keyed user and article templates live in
//! `testdata/test-data.yml`. Every lookup returns a freshly uniquified copy:
//! a 12-character random suffix is appended to the identifying fields so
//! parallel test workers never collide on usernames, emails, or titles.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{E2eError, E2eResult};
use crate::types::{Article, User};

/// Parsed test-data file
#[derive(Debug, Clone, Deserialize)]
pub struct TestData {
    users: HashMap<String, User>,
    articles: HashMap<String, Article>,
}

impl TestData {
    /// Load the suite's data file from `testdata/test-data.yml`.
    pub fn load() -> E2eResult<Self> {
        Self::from_file(&default_data_path())
    }

    /// Parse a data file at an explicit path.
    pub fn from_file(path: &Path) -> E2eResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse test data from a YAML string.
    pub fn from_yaml(yaml: &str) -> E2eResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// A uniquified copy of the user template under `key`.
    pub fn user(&self, key: &str) -> E2eResult<User> {
        let template = self
            .users
            .get(key)
            .ok_or_else(|| E2eError::TestData(format!("no user template named '{key}'")))?;
        let id = unique_id();
        Ok(User {
            username: format!("{}_{id}", template.username),
            email: uniquify_email(&template.email, &id),
            password: format!("{}_{id}", template.password),
        })
    }

    /// A uniquified copy of the article template under `key`.
    pub fn article(&self, key: &str) -> E2eResult<Article> {
        let template = self
            .articles
            .get(key)
            .ok_or_else(|| E2eError::TestData(format!("no article template named '{key}'")))?;
        let id = unique_id();
        Ok(Article {
            title: format!("{}_{id}", template.title),
            description: format!("{}_{id}", template.description),
            body: format!("{}_{id}", template.body),
            tags: template.tags.clone(),
            slug: None,
        })
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join("test-data.yml")
}

/// 12 hex characters of a fresh UUIDv4
fn unique_id() -> String {
    let mut id = uuid::Uuid::new_v4().simple().to_string();
    id.truncate(12);
    id
}

/// Splice the suffix into the local part: `alice@example.com` becomes
/// `alice_<id>@example.com`. Addresses without an `@` get a plain suffix.
fn uniquify_email(email: &str, id: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => format!("{local}_{id}@{domain}"),
        None => format!("{email}_{id}"),
    }
}
