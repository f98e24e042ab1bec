//! Article editor and article view

use crate::browser::Session;
use crate::step::{Locator, Step, WaitState};
use crate::types::Article;

pub struct ArticlePage;

impl ArticlePage {
    pub const EDITOR_URL: &'static str = "/#/editor";

    pub fn title_input() -> Locator {
        Locator::placeholder("Article Title")
    }

    pub fn description_input() -> Locator {
        Locator::placeholder("What's this article about?")
    }

    pub fn body_input() -> Locator {
        Locator::placeholder("Write your article (in markdown)")
    }

    pub fn tag_input() -> Locator {
        Locator::placeholder("Enter tags")
    }

    pub fn submit_button() -> Locator {
        Locator::role("button", "Publish Article")
    }

    pub fn comment_input() -> Locator {
        Locator::placeholder("Write a comment...")
    }

    pub fn comment_submit_button() -> Locator {
        Locator::role("button", "Post Comment")
    }

    pub fn comment_body() -> Locator {
        Locator::css(".card-text")
    }

    pub fn comment_card() -> Locator {
        Locator::css(".card")
    }

    pub fn success_message() -> Locator {
        Locator::css(".success-messages")
    }

    pub fn edit_button() -> Locator {
        Locator::role("button", "Edit Article").first()
    }

    pub fn delete_button() -> Locator {
        Locator::role("button", "Delete Article").first()
    }

    /// Author a new article through the editor.
    ///
    /// Tags are entered one by one; the frontend materializes a tag on the
    /// input's change event.
    pub fn create_article(session: &mut Session, article: &Article) {
        session.extend([
            Step::Goto {
                path: Self::EDITOR_URL.to_string(),
            },
            Step::WaitFor {
                locator: Self::submit_button(),
                state: WaitState::Visible,
            },
            Step::Fill {
                locator: Self::title_input(),
                value: article.title.clone(),
            },
            Step::Fill {
                locator: Self::description_input(),
                value: article.description.clone(),
            },
            Step::Fill {
                locator: Self::body_input(),
                value: article.body.clone(),
            },
        ]);
        for tag in &article.tags {
            session.extend([
                Step::Fill {
                    locator: Self::tag_input(),
                    value: tag.clone(),
                },
                Step::DispatchEvent {
                    locator: Self::tag_input(),
                    event: "change".to_string(),
                },
            ]);
        }
        session.extend([
            Step::WaitFor {
                locator: Self::submit_button(),
                state: WaitState::Visible,
            },
            Step::Click {
                locator: Self::submit_button(),
                force: false,
            },
            Step::WaitFor {
                locator: Self::success_message(),
                state: WaitState::Visible,
            },
        ]);
    }

    /// Open an article's page by its server-assigned slug.
    pub fn open_by_slug(session: &mut Session, slug: &str) {
        session.extend([
            Step::Goto {
                path: format!("/#/article/{slug}"),
            },
            Step::WaitFor {
                locator: Self::comment_input(),
                state: WaitState::Visible,
            },
        ]);
    }

    /// Post a comment and wait until it shows up, checking the API answered
    /// with 201 on the way.
    pub fn add_comment(session: &mut Session, comment: &str) {
        session.extend([
            Step::Fill {
                locator: Self::comment_input(),
                value: comment.to_string(),
            },
            Step::ExpectValue {
                locator: Self::comment_input(),
                value: comment.to_string(),
            },
            Step::ClickExpectingResponse {
                locator: Self::comment_submit_button(),
                url_contains: "/comments".to_string(),
                method: "POST".to_string(),
                status: 201,
            },
            Step::WaitFor {
                locator: Self::comment_body().with_text(comment),
                state: WaitState::Visible,
            },
        ]);
    }

    /// Delete the comment containing `comment` and wait for its card to leave
    /// the DOM.
    pub fn delete_comment(session: &mut Session, comment: &str) {
        let card = Self::comment_card().with_text(comment);
        session.extend([
            Step::WaitFor {
                locator: card.clone(),
                state: WaitState::Visible,
            },
            Step::Click {
                locator: card.clone().descendant(".mod-options .ion-trash-a"),
                force: true,
            },
            Step::WaitFor {
                locator: card,
                state: WaitState::Detached,
            },
        ]);
    }

    /// Enter edit mode from the article view; the form comes pre-filled.
    pub fn click_edit(session: &mut Session) {
        session.extend([
            Step::Click {
                locator: Self::edit_button(),
                force: false,
            },
            Step::WaitFor {
                locator: Self::title_input(),
                state: WaitState::Visible,
            },
            Step::ExpectNonEmptyValue {
                locator: Self::title_input(),
            },
        ]);
    }

    /// Replace title, description, and body, then republish.
    pub fn update_article(session: &mut Session, article: &Article) {
        session.extend([
            Step::Fill {
                locator: Self::title_input(),
                value: article.title.clone(),
            },
            Step::ExpectValue {
                locator: Self::title_input(),
                value: article.title.clone(),
            },
            Step::Fill {
                locator: Self::description_input(),
                value: article.description.clone(),
            },
            Step::ExpectValue {
                locator: Self::description_input(),
                value: article.description.clone(),
            },
            Step::Fill {
                locator: Self::body_input(),
                value: article.body.clone(),
            },
            Step::ExpectValue {
                locator: Self::body_input(),
                value: article.body.clone(),
            },
            Step::Click {
                locator: Self::submit_button(),
                force: true,
            },
            Step::WaitFor {
                locator: Self::success_message(),
                state: WaitState::Visible,
            },
        ]);
    }

    /// Delete the open article; the frontend redirects to the home route.
    pub fn delete_article(session: &mut Session) {
        session.extend([
            Step::Click {
                locator: Self::delete_button(),
                force: false,
            },
            Step::WaitForUrl {
                pattern: "#/$".to_string(),
            },
        ]);
    }
}
