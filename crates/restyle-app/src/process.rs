//! Message processing
//!
//! Runs the TEA update loop for one message, following up messages and
//! dispatching actions.

use restyle_remote::LayoutServiceClient;
use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    client: Option<&LayoutServiceClient>,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), client.cloned());
        }

        msg = result.message;
    }
}
