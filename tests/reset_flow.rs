//! "Forgot password" behavior against an in-memory page.

mod support;

use anyhow::Result;
use login_page::common::AppError;
use login_page::features::password_reset::{
    PasswordResetController, ResetOutcome,
    controller::{RESET_LINK_FAILED, RESET_LINK_SENT},
    types::PasswordResetRequest,
};
use support::{FakePage, FakeResetApi};

fn controller(
    page: &FakePage,
    api: &FakeResetApi,
) -> Result<PasswordResetController<FakePage, FakeResetApi>> {
    let elements = page.resolve()?;
    Ok(PasswordResetController::new(
        elements.reset,
        api.clone(),
        "csrftoken",
    ))
}

#[test]
fn link_reveals_the_reset_form() -> Result<()> {
    let page = FakePage::default();
    let reset = controller(&page, &FakeResetApi::answering(true))?;
    assert!(!page.reset_container.visible());

    reset.reveal();

    assert!(page.reset_container.visible());
    Ok(())
}

#[tokio::test]
async fn successful_request_confirms_and_sends_csrf_token() -> Result<()> {
    let page = FakePage::default();
    let api = FakeResetApi::answering(true);
    let reset = controller(&page, &api)?;
    page.cookies.set("a=1; csrftoken=XYZ; b=2");
    page.reset_email.set("a@b.com");

    assert_eq!(reset.submit().await, ResetOutcome::Sent);

    assert_eq!(page.reset_message.text(), RESET_LINK_SENT);
    assert_eq!(
        api.calls(),
        vec![(
            PasswordResetRequest {
                email: "a@b.com".to_string()
            },
            Some("XYZ".to_string())
        )]
    );
    Ok(())
}

#[tokio::test]
async fn refused_request_reports_failure() -> Result<()> {
    let page = FakePage::default();
    let reset = controller(&page, &FakeResetApi::answering(false))?;
    page.reset_email.set("a@b.com");

    assert_eq!(reset.submit().await, ResetOutcome::Failed);
    assert_eq!(page.reset_message.text(), RESET_LINK_FAILED);
    Ok(())
}

#[tokio::test]
async fn transport_error_is_shown_verbatim() -> Result<()> {
    let page = FakePage::default();
    let reset = controller(
        &page,
        &FakeResetApi::failing(AppError::Timeout(
            "Request timed out. Please try again.".to_string(),
        )),
    )?;
    page.reset_email.set("a@b.com");

    assert_eq!(reset.submit().await, ResetOutcome::Errored);
    assert_eq!(
        page.reset_message.text(),
        "Error: Timeout: Request timed out. Please try again."
    );
    Ok(())
}

#[tokio::test]
async fn missing_csrf_cookie_sends_no_token() -> Result<()> {
    let page = FakePage::default();
    let api = FakeResetApi::answering(true);
    let reset = controller(&page, &api)?;
    page.cookies.set("sessionid=abc");
    page.reset_email.set("a@b.com");

    reset.submit().await;

    let calls = api.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1, None);
    Ok(())
}

#[tokio::test]
async fn email_is_sent_as_typed() -> Result<()> {
    let page = FakePage::default();
    let api = FakeResetApi::answering(true);
    let reset = controller(&page, &api)?;
    page.reset_email.set(" a@b.com ");

    reset.submit().await;

    assert_eq!(api.calls()[0].0.email, " a@b.com ");
    Ok(())
}
