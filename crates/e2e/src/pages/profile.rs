//! Profile page

use crate::browser::Session;
use crate::step::{Locator, Step, WaitState};

pub struct ProfilePage;

impl ProfilePage {
    pub const OWN_URL: &'static str = "/#/my-profile";

    pub fn article_previews() -> Locator {
        Locator::css(".article-preview")
    }

    pub fn article_titles() -> Locator {
        Locator::css(".preview-link h1")
    }

    /// Previews that have finished loading
    pub fn articles_loaded() -> Locator {
        Locator::css(".article-preview:not(:has-text(\"Loading\"))")
    }

    pub fn follow_button() -> Locator {
        Locator::role("button", "Follow")
    }

    pub fn unfollow_button() -> Locator {
        Locator::role("button", "Unfollow")
    }

    pub fn user_info() -> Locator {
        Locator::css(".user-info")
    }

    /// Open the signed-in user's own profile.
    pub fn navigate(session: &mut Session) {
        session.push(Step::Goto {
            path: Self::OWN_URL.to_string(),
        });
        Self::wait_loaded(session);
    }

    /// Open another user's profile.
    pub fn navigate_to_user(session: &mut Session, username: &str) {
        session.push(Step::Goto {
            path: format!("/#/profile/{username}"),
        });
        Self::wait_loaded(session);
    }

    fn wait_loaded(session: &mut Session) {
        session.push(Step::WaitFor {
            locator: Self::user_info(),
            state: WaitState::Visible,
        });
    }

    /// Follow the profile's owner and wait for the button to flip.
    pub fn follow_user(session: &mut Session) {
        session.extend([
            Step::Click {
                locator: Self::follow_button(),
                force: false,
            },
            Step::WaitFor {
                locator: Self::unfollow_button(),
                state: WaitState::Visible,
            },
        ]);
    }

    /// Wait until an article with this title is listed.
    pub fn wait_for_article_titled(session: &mut Session, title: &str) {
        session.push(Step::WaitFor {
            locator: Self::article_titles().with_text(title),
            state: WaitState::Visible,
        });
    }

    /// Collect the profile's previews, storing them under `result_key`.
    pub fn extract_articles(session: &mut Session, result_key: &str) {
        session.extend([
            Step::WaitFor {
                locator: Self::articles_loaded(),
                state: WaitState::Visible,
            },
            Step::ExtractArticles {
                locator: Self::article_previews(),
                result_key: result_key.to_string(),
            },
        ]);
    }
}
