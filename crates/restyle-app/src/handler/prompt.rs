//! Prompt resolution handlers

use restyle_remote::RemoteError;
use tracing::debug;

use crate::pipeline::{self, Resolution};
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Resolve a prompt against the current state
pub(crate) fn handle_prompt(state: &mut AppState, prompt: &str) -> UpdateResult {
    match pipeline::resolve_prompt(prompt, state.remote_available) {
        Resolution::Reset => {
            state.reset_style();
            UpdateResult::none()
        }
        Resolution::Apply {
            instruction,
            source,
        } => {
            state.apply_instruction(&instruction, source);
            UpdateResult::none()
        }
        Resolution::Remote { prompt } => {
            state.begin_remote_request(&prompt);
            UpdateResult::action(UpdateAction::RequestRemoteInstruction { prompt })
        }
        Resolution::Discard(reason) => {
            state.record_discard(reason);
            UpdateResult::none()
        }
    }
}

/// Apply a finished remote request to whatever the state is now
pub(crate) fn handle_remote_result(
    state: &mut AppState,
    prompt: &str,
    result: Result<String, RemoteError>,
) -> UpdateResult {
    state.finish_remote_request();
    debug!("Remote result for {:?} received", prompt);

    match pipeline::resolve_remote_response(result) {
        Ok(instruction) => {
            state.apply_instruction(&instruction, pipeline::InstructionSource::Remote)
        }
        Err(reason) => state.record_discard(reason),
    }
    UpdateResult::none()
}
