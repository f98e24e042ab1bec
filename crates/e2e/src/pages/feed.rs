//! Feed page (the logged-in home view)

use crate::browser::Session;
use crate::step::{Locator, Step, WaitState};

pub struct FeedPage;

impl FeedPage {
    pub const URL: &'static str = "/#/";

    pub fn new_article_link() -> Locator {
        Locator::role("link", "New Article")
    }

    pub fn feed_toggle() -> Locator {
        Locator::css(".feed-toggle")
    }

    pub fn my_feed_tab() -> Locator {
        Locator::css(".nav-link").with_text("My Feed")
    }

    pub fn article_previews() -> Locator {
        Locator::css(".article-preview")
    }

    pub fn loading_indicator() -> Locator {
        Locator::text("Loading articles...")
    }

    pub fn navigate(session: &mut Session) {
        session.push(Step::Goto {
            path: Self::URL.to_string(),
        });
    }

    /// Expect the view only a signed-in user gets.
    pub fn expect_signed_in(session: &mut Session) {
        session.push(Step::WaitFor {
            locator: Self::new_article_link(),
            state: WaitState::Visible,
        });
    }

    /// Switch to the My Feed tab.
    pub fn open_my_feed(session: &mut Session) {
        session.extend([
            Step::WaitFor {
                locator: Self::feed_toggle(),
                state: WaitState::Visible,
            },
            Step::Click {
                locator: Self::my_feed_tab(),
                force: false,
            },
        ]);
    }

    /// Collect the previews currently shown, storing them under `result_key`.
    pub fn extract_articles(session: &mut Session, result_key: &str) {
        session.extend([
            Step::WaitFor {
                locator: Self::loading_indicator(),
                state: WaitState::Hidden,
            },
            Step::ExtractArticles {
                locator: Self::article_previews(),
                result_key: result_key.to_string(),
            },
        ]);
    }
}
