pub mod state;

use connecthub_api::GamificationApi;

use crate::state::{Action, AppState};

pub type Error = anyhow::Error;

#[derive(Clone, Debug)]
pub struct Data {
    pub api: GamificationApi,
}

/// Per-invocation handle given to every command handler.
pub struct Context<'a> {
    data: &'a Data,
    state: &'a mut AppState,
    replies: Vec<String>,
}

impl<'a> Context<'a> {
    pub fn new(data: &'a Data, state: &'a mut AppState) -> Self {
        Self {
            data,
            state,
            replies: Vec::new(),
        }
    }

    pub fn data(&self) -> &'a Data {
        self.data
    }

    pub fn state(&self) -> &AppState {
        &*self.state
    }

    /// Route a state change through the reducer.
    pub fn apply(&mut self, action: Action) {
        self.state.reduce(action);
    }

    /// Queue text for the terminal.
    pub fn say(&mut self, text: impl Into<String>) {
        self.replies.push(text.into());
    }

    pub fn into_replies(self) -> Vec<String> {
        self.replies
    }
}
