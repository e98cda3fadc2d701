use super::{Command, CommandContext};
use crate::error::Error;
use async_trait::async_trait;
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use eyre::Result;
use riskwatch_core::app::domain::{FilterParams, IndicatorMessagesState};
use riskwatch_core::app::{Store, fetch_indicator_messages};
use std::io::Write;
use tracing::debug;

pub struct MessagesCommand {
    pub context: CommandContext,
    pub filters: Vec<FilterParams>,
    pub json: bool,
    pub token: Option<String>,
}

#[async_trait]
impl Command for MessagesCommand {
    async fn execute(&self) -> Result<()> {
        self.run().await.map_err(Into::into)
    }
}

impl MessagesCommand {
    async fn run(&self) -> std::result::Result<(), Error> {
        let token = self.resolve_token().await?;
        let client = self.context.settings.client()?;
        let store = Store::new();

        // Without --filter the store keeps no filter set at all.
        let filters = (!self.filters.is_empty()).then(|| self.filters.clone());
        debug!(endpoint = %client.endpoint(), "fetching indicator messages");
        fetch_indicator_messages(&store, &client, &token, filters).await;

        let state = store.state();
        let mut stdout = std::io::stdout();
        if self.json {
            writeln!(stdout, "{}", serde_json::to_string_pretty(&state)?)?;
        } else {
            writeln!(stdout, "{}", render_summary(&state))?;
        }

        match state.error {
            Some(error) => Err(Error::FetchFailed(error)),
            None => Ok(()),
        }
    }

    async fn resolve_token(&self) -> std::result::Result<String, Error> {
        if let Some(token) = &self.token {
            return Ok(token.clone());
        }
        self.context
            .token_store()?
            .get_stored_access_token()
            .await?
            .ok_or(Error::MissingToken)
    }
}

/// Human-readable rendering of the final fetch state.
pub fn render_summary(state: &IndicatorMessagesState) -> String {
    let mut out = String::new();

    if let Some(filters) = state.filters.as_ref().filter(|f| !f.is_empty()) {
        let rendered: Vec<String> = filters
            .iter()
            .map(|f| format!("{}={}", f.name, f.value))
            .collect();
        out.push_str(&format!("Filters: {}\n", rendered.join(", ")));
    }

    match &state.messages {
        None => out.push_str("No messages loaded."),
        Some(messages) if messages.is_empty() => out.push_str("No indicator messages."),
        Some(messages) => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec![
                    "ID", "Type", "Name", "Subject", "Source", "Risk", "Created",
                ]);

            for message in messages {
                let risk = message
                    .risk_score()
                    .map_or_else(|| "-".to_string(), |score| format!("{score:.1}"));
                table.add_row(vec![
                    message.id.to_string(),
                    message.message_type().to_string(),
                    message.name().to_string(),
                    message.subject().to_string(),
                    message.source().to_string(),
                    risk,
                    message.created_at().to_string(),
                ]);
            }
            out.push_str(&table.to_string());
        }
    }

    out
}
