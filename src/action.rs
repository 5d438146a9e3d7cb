use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyModifiers};

#[derive(Debug)]
pub enum Action {
    Input { code: KeyCode, modifiers: KeyModifiers },
    LibraryLoaded(Result<Vec<String>, String>),
    RecommendationReady(Result<String, String>),
    ConfigSaved(Result<PathBuf, String>),
    PromptImported(Result<String, String>),
}
