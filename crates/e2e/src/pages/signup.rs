//! Signup page

use crate::browser::Session;
use crate::step::{Locator, Step, WaitState};
use crate::types::User;

pub struct SignupPage;

impl SignupPage {
    pub const URL: &'static str = "/register";

    pub fn username_input() -> Locator {
        Locator::placeholder("Username")
    }

    pub fn email_input() -> Locator {
        Locator::placeholder("Email")
    }

    pub fn password_input() -> Locator {
        Locator::placeholder("Password")
    }

    pub fn submit_button() -> Locator {
        Locator::role("button", "Sign up")
    }

    pub fn success_message() -> Locator {
        Locator::css(".success-messages")
    }

    pub fn navigate(session: &mut Session) {
        session.push(Step::Goto {
            path: Self::URL.to_string(),
        });
    }

    /// Fill the form and submit, waiting for the success banner.
    pub fn signup(session: &mut Session, user: &User) {
        session.extend([
            Step::WaitFor {
                locator: Self::submit_button(),
                state: WaitState::Visible,
            },
            Step::Fill {
                locator: Self::username_input(),
                value: user.username.clone(),
            },
            Step::Fill {
                locator: Self::email_input(),
                value: user.email.clone(),
            },
            Step::Fill {
                locator: Self::password_input(),
                value: user.password.clone(),
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
}
