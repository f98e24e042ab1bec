//! Signup flow
//!
//! Requires live frontend/backend services and a Playwright install.
//! Run with: cargo test -- --ignored

use conduit_e2e::pages::{HomePage, SignupPage};
use conduit_e2e::{E2eResult, Harness};

#[tokio::test]
#[ignore]
async fn signs_up_successfully_through_the_ui() -> E2eResult<()> {
    let harness = Harness::init().await?;
    let user = harness.data.user("sign_up")?;

    let mut session = harness.session();
    HomePage::click_sign_up_link(&mut session);
    SignupPage::signup(&mut session, &user);
    session.run().await?;

    Ok(())
}
