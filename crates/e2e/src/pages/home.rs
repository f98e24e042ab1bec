//! Home page

use crate::browser::Session;
use crate::step::{Locator, Step, WaitState};

pub struct HomePage;

impl HomePage {
    pub const URL: &'static str = "/";

    pub fn sign_up_link() -> Locator {
        Locator::role("link", "Sign up")
    }

    pub fn navigate(session: &mut Session) {
        session.push(Step::Goto {
            path: Self::URL.to_string(),
        });
    }

    /// Open the home page and follow the sign-up link.
    pub fn click_sign_up_link(session: &mut Session) {
        Self::navigate(session);
        session.push(Step::WaitFor {
            locator: Self::sign_up_link(),
            state: WaitState::Visible,
        });
        session.push(Step::Click {
            locator: Self::sign_up_link(),
            force: false,
        });
    }
}
