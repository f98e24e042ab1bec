//! Page objects
//!
//! Each page owns its route and locators and appends step sequences to a
//! [`Session`](crate::browser::Session). Flows mirror what a user does in the
//! frontend; assertions about extracted data live in the tests.

pub mod article;
pub mod feed;
pub mod home;
pub mod profile;
pub mod signin;
pub mod signup;

pub use article::ArticlePage;
pub use feed::FeedPage;
pub use home::HomePage;
pub use profile::ProfilePage;
pub use signin::SigninPage;
pub use signup::SignupPage;
