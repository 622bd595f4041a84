//! Action handlers: UpdateAction dispatch and background task spawning

use restyle_remote::{LayoutServiceClient, RemoteError};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning a background task
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    client: Option<LayoutServiceClient>,
) {
    match action {
        UpdateAction::RequestRemoteInstruction { prompt } => {
            tokio::spawn(async move {
                let result = match client {
                    Some(client) => client.request_instruction(&prompt).await,
                    None => Err(RemoteError::Network(
                        "layout service client not configured".to_string(),
                    )),
                };

                if let Err(e) = &result {
                    debug!("Remote request failed ({}): {}", e.kind(), e);
                }

                if msg_tx
                    .send(Message::RemoteInstructionReceived { prompt, result })
                    .await
                    .is_err()
                {
                    warn!("Message channel closed before remote result was delivered");
                }
            });
        }
    }
}
