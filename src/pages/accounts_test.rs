use super::*;
use crate::test_helpers::{MockBackend, RecordingPrompt};

async fn loaded(backend: &MockBackend) -> AccountsPage<'_, MockBackend> {
    let mut page = AccountsPage::new(backend);
    page.load().await;
    backend.clear_calls();
    page
}

#[tokio::test]
async fn load_fetches_accounts_and_platforms() {
    let backend = MockBackend::new();
    let mut page = AccountsPage::new(&backend);
    page.load().await;

    assert!(!page.state.loading);
    assert_eq!(page.state.accounts.len(), backend.accounts.lock().unwrap().len());
    assert_eq!(page.state.platforms.len(), backend.platforms.len());
    assert_eq!(backend.count("list_accounts"), 1);
    assert_eq!(backend.count("list_guides"), 1);
}

#[tokio::test]
async fn rendered_rows_match_listed_accounts() {
    let backend = MockBackend::new();
    let page = loaded(&backend).await;
    assert_eq!(page.render().lines().count(), page.state.accounts.len());
}

#[tokio::test]
async fn failed_half_of_load_keeps_prior_state() {
    let backend = MockBackend::new();
    let mut page = loaded(&backend).await;
    let before = page.state.accounts.clone();

    backend.fail("list_guides");
    backend.accounts.lock().unwrap().clear();
    page.load().await;

    assert_eq!(page.state.accounts, before);
    assert!(!page.state.loading);
}

#[tokio::test]
async fn failed_first_load_renders_empty_state() {
    let backend = MockBackend::new();
    backend.fail("list_accounts");
    let mut page = AccountsPage::new(&backend);
    page.load().await;

    assert!(!page.state.loading);
    assert!(page.render().starts_with(EMPTY_MESSAGE));
}

#[tokio::test]
async fn delete_cancelled_sends_nothing() {
    let backend = MockBackend::new();
    let mut page = loaded(&backend).await;
    let prompt = RecordingPrompt::answering(false);

    let outcome = page.delete(1, &prompt).await;

    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(prompt.confirm_count(), 1);
    assert_eq!(backend.count("delete_account"), 0);
    assert_eq!(backend.count("list_accounts"), 0);
}

#[tokio::test]
async fn delete_confirmed_deletes_and_reloads_once() {
    let backend = MockBackend::new();
    let mut page = loaded(&backend).await;
    let prompt = RecordingPrompt::answering(true);

    let outcome = page.delete(1, &prompt).await;

    assert_eq!(outcome, Outcome::Applied(()));
    assert_eq!(prompt.confirm_count(), 1);
    assert_eq!(backend.calls(), vec!["delete_account:1", "list_accounts", "list_guides"]);
    assert!(page.state.accounts.iter().all(|a| a.id != 1));
}

#[tokio::test]
async fn delete_failure_alerts_without_reload() {
    let backend = MockBackend::new();
    backend.fail("delete_account");
    let mut page = loaded(&backend).await;
    let prompt = RecordingPrompt::answering(true);

    let outcome = page.delete(1, &prompt).await;

    assert!(matches!(outcome, Outcome::Failed(_)));
    assert_eq!(prompt.alerts(), vec![DELETE_FAILED]);
    assert_eq!(backend.count("list_accounts"), 0);
}

#[tokio::test]
async fn verify_reloads_once_and_reflects_backend_state() {
    let backend = MockBackend::new();
    let mut page = loaded(&backend).await;
    let prompt = RecordingPrompt::answering(true);

    let outcome = page.verify(2, &prompt).await;

    let Outcome::Applied(response) = outcome else {
        panic!("expected verification");
    };
    assert!(response.success);
    assert_eq!(prompt.confirm_count(), 0);
    assert_eq!(backend.count("list_accounts"), 1);
    assert!(page.state.accounts.iter().find(|a| a.id == 2).unwrap().is_verified);
}

#[tokio::test]
async fn create_sends_form_and_reloads_once() {
    let backend = MockBackend::new();
    let mut page = loaded(&backend).await;
    let prompt = RecordingPrompt::answering(true);
    let form = AccountForm {
        platform_id: "claude_free".to_owned(),
        api_key: "sk-ant-secret".to_owned(),
        account_identifier: "  ".to_owned(),
    };

    let outcome = page.create(&form, &prompt).await;

    let Outcome::Applied(created) = outcome else {
        panic!("expected account");
    };
    assert_eq!(created.account_identifier, None);
    assert_eq!(backend.count("create_account"), 1);
    assert_eq!(backend.count("list_accounts"), 1);
    assert_eq!(page.state.accounts.len(), 3);
}

#[tokio::test]
async fn create_failure_alerts() {
    let backend = MockBackend::new();
    backend.fail("create_account");
    let mut page = loaded(&backend).await;
    let prompt = RecordingPrompt::answering(true);

    let outcome = page.create(&AccountForm::default(), &prompt).await;

    assert!(matches!(outcome, Outcome::Failed(_)));
    assert_eq!(prompt.alerts(), vec![CREATE_FAILED]);
    assert_eq!(backend.count("list_accounts"), 0);
}
