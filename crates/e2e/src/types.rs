//! Value types shared between the API client, test data, and page objects

use serde::{Deserialize, Serialize};

/// A test user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// A publishable article
///
/// `slug` is assigned server-side and is absent until the article has been
/// created and echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub description: String,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// An article as rendered in a feed or profile listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticlePreview {
    pub title: String,
    pub description: String,
    pub author: String,
    pub favorites_count: u32,
}
