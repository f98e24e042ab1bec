//! Signin page

use crate::browser::Session;
use crate::step::{Locator, Step, WaitState};

pub struct SigninPage;

impl SigninPage {
    pub const URL: &'static str = "/#/login";

    pub fn email_input() -> Locator {
        Locator::placeholder("Email")
    }

    pub fn password_input() -> Locator {
        Locator::placeholder("Password")
    }

    pub fn submit_button() -> Locator {
        Locator::role("button", "Sign in")
    }

    pub fn error_message() -> Locator {
        Locator::css(".error-messages").first()
    }

    pub fn navigate(session: &mut Session) {
        session.push(Step::Goto {
            path: Self::URL.to_string(),
        });
    }

    /// Fill the form and submit. Whether that lands on the feed or shows the
    /// error banner is up to the test to assert.
    pub fn signin(session: &mut Session, email: &str, password: &str) {
        session.extend([
            Step::WaitFor {
                locator: Self::submit_button(),
                state: WaitState::Visible,
            },
            Step::Fill {
                locator: Self::email_input(),
                value: email.to_string(),
            },
            Step::Fill {
                locator: Self::password_input(),
                value: password.to_string(),
            },
            Step::Click {
                locator: Self::submit_button(),
                force: true,
            },
        ]);
    }

    /// Expect the invalid-credentials banner.
    pub fn expect_error(session: &mut Session) {
        session.push(Step::WaitFor {
            locator: Self::error_message(),
            state: WaitState::Visible,
        });
    }
}
