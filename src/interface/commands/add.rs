//! # Add Steak Command
//!
//! Handles `!addsteak <description>`. Only moderators and the channel owner may use it.

use crate::application::parsing::rest_after_first_space;
use crate::domain::traits::{ChatProvider, SteakStore};
use crate::domain::types::IncomingMessage;
use crate::strings::{logs, messages};
use anyhow::Result;

pub async fn handle_add(
    store: &dyn SteakStore,
    chat: &impl ChatProvider,
    msg: &IncomingMessage,
    prefix: &str,
) -> Result<()> {
    if !msg.author.can_manage(&msg.channel) {
        chat.send_message(&messages::add_steak_denied(&msg.author.name))
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        return Ok(());
    }

    let Some(steak) = rest_after_first_space(&msg.text) else {
        chat.send_message(&messages::add_steak_usage(prefix))
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        return Ok(());
    };

    store.append(steak).await?;
    tracing::info!("{}", logs::steak_added(&chat.channel(), &msg.author.name, steak));

    chat.send_message(&messages::steak_added(steak))
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}
