//! Keystroke handling: the modal dispatcher plus the prompt and incremental
//! search it drives.
//!
//! Everything here is synchronous. Functions that need more input than the
//! key they were handed (prompts, search) pull it from [`Io::keys`] and
//! repaint through [`Io::render`] between keys.

pub mod dispatcher;
pub mod io_ops;
pub mod prompt;
pub mod search;

pub use dispatcher::{DispatchResult, dispatch};
pub use prompt::{PromptFlow, PromptNotify, prompt};
pub use search::{SearchDirection, SearchState};

use core_events::KeySource;
use core_model::Render;

/// Injected key source and paint hook.
pub struct Io<'a> {
    pub keys: &'a mut dyn KeySource,
    pub render: &'a mut dyn Render,
}

impl<'a> Io<'a> {
    pub fn new(keys: &'a mut dyn KeySource, render: &'a mut dyn Render) -> Self {
        Self { keys, render }
    }
}
