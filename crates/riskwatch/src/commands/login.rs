use super::{Command, CommandContext};
use crate::error::Error;
use async_trait::async_trait;
use eyre::Result;
use std::io::Write;
use tracing::info;
use zeroize::Zeroize;

pub struct LoginCommand {
    pub context: CommandContext,
    pub token: Option<String>,
}

#[async_trait]
impl Command for LoginCommand {
    async fn execute(&self) -> Result<()> {
        self.login().await.map_err(Into::into)
    }
}

impl LoginCommand {
    async fn login(&self) -> std::result::Result<(), Error> {
        let mut token = match &self.token {
            Some(token) => token.clone(),
            None => rpassword::prompt_password("Access token: ")?,
        };

        if token.trim().is_empty() {
            token.zeroize();
            return Err(Error::EmptyToken);
        }

        let store = self.context.token_store()?;
        let result = store.store_access_token(&token).await;
        token.zeroize();
        result?;

        info!(storage = %self.context.settings.token_storage, "access token stored");
        writeln!(
            std::io::stdout(),
            "Access token stored ({}).",
            self.context.settings.token_storage
        )?;
        Ok(())
    }
}
