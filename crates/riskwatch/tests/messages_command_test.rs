use std::sync::Arc;

use riskwatch::commands::login::LoginCommand;
use riskwatch::commands::logout::LogoutCommand;
use riskwatch::commands::messages::MessagesCommand;
use riskwatch::commands::token::TokenCommand;
use riskwatch::commands::{Command, CommandContext};
use riskwatch_core::auth::{FileTokenStorage, MemoryTokenStorage, TokenStorageKind};
use riskwatch_core::config::Settings;

fn settings(api_url: String) -> Settings {
    Settings {
        api_url,
        page_size: 20,
        token_storage: TokenStorageKind::File,
    }
}

fn empty_context(api_url: String) -> CommandContext {
    CommandContext::with_token_storage(settings(api_url), Arc::new(MemoryTokenStorage::default()))
}

fn unused_local_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

#[tokio::test]
async fn failed_fetch_exits_with_state_error() {
    let command = MessagesCommand {
        context: empty_context(unused_local_url()),
        filters: vec!["country=DE".parse().unwrap()],
        json: true,
        token: Some("tok".to_string()),
    };

    let err = command.execute().await.unwrap_err();
    assert!(
        err.to_string().starts_with("Error: Network error"),
        "unexpected error: {err}"
    );
}

#[tokio::test]
async fn messages_without_token_asks_for_login() {
    let command = MessagesCommand {
        context: empty_context(unused_local_url()),
        filters: vec![],
        json: false,
        token: None,
    };

    let err = command.execute().await.unwrap_err();
    assert!(err.to_string().contains("riskwatch login"), "{err}");
}

#[tokio::test]
async fn token_command_reports_missing_token() {
    let command = TokenCommand {
        context: empty_context(unused_local_url()),
        reveal: false,
    };

    assert!(command.execute().await.is_err());
}

#[tokio::test]
async fn login_survives_into_later_commands() {
    let temp_dir = tempfile::tempdir().unwrap();
    // Each command opens the directory afresh, the way separate invocations do.
    let context = || {
        CommandContext::with_token_storage(
            settings(unused_local_url()),
            Arc::new(FileTokenStorage::new(temp_dir.path())),
        )
    };

    LoginCommand {
        context: context(),
        token: Some("abc".to_string()),
    }
    .execute()
    .await
    .unwrap();

    TokenCommand {
        context: context(),
        reveal: false,
    }
    .execute()
    .await
    .unwrap();

    LogoutCommand { context: context() }.execute().await.unwrap();

    assert!(
        TokenCommand {
            context: context(),
            reveal: false,
        }
        .execute()
        .await
        .is_err()
    );
}

#[tokio::test]
async fn blank_login_is_rejected() {
    let command = LoginCommand {
        context: empty_context(unused_local_url()),
        token: Some("   ".to_string()),
    };

    assert!(command.execute().await.is_err());
}

#[test]
fn invalid_api_url_is_a_configuration_error() {
    assert!(settings("not a url".to_string()).client().is_err());
}
