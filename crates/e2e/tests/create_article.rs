//! Create-article flow
//!
//! Requires live frontend/backend services and a Playwright install.
//! Run with: cargo test -- --ignored

use conduit_e2e::harness::article_previews;
use conduit_e2e::pages::{ArticlePage, ProfilePage};
use conduit_e2e::{ArticlePreview, E2eResult, Harness};

#[tokio::test]
#[ignore]
async fn creates_an_article_through_the_editor() -> E2eResult<()> {
    let harness = Harness::init().await?;
    let user = harness.data.user("create_article")?;
    let article = harness.data.article("create_article")?;

    harness.api.register_user(&user).await?;
    let token = harness
        .api
        .get_auth_token(&user.email, &user.password)
        .await?;

    let mut session = harness.session_with_token(&token);
    ArticlePage::create_article(&mut session, &article);
    ProfilePage::navigate(&mut session);
    ProfilePage::extract_articles(&mut session, "profile");
    let results = session.run().await?;

    let previews = article_previews(&results, "profile")?;
    assert!(
        previews.contains(&ArticlePreview {
            title: article.title.clone(),
            description: article.description.clone(),
            author: user.username.clone(),
            favorites_count: 0,
        }),
        "expected {:?} on the profile, found {previews:?}",
        article.title
    );

    Ok(())
}
