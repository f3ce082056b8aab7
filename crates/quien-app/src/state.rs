// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

/// Search-widget state. One instance per widget; everything resets only
/// when the instance is dropped.
///
/// `raw_query` echoes the input field verbatim, `applied_query` is the
/// debounced value the suggestion filter runs against, and `chosen_name`
/// is empty until the user picks a suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WidgetState {
    pub raw_query: String,
    pub applied_query: String,
    pub chosen_name: String,
    // Identifies the most recently scheduled delayed apply. A timer that
    // fires with an older token lost the race and is discarded.
    apply_token: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetCommand {
    /// The input field changed; carries the full new text, whitespace intact.
    QueryEdited(String),
    /// The user picked a suggestion by name.
    SuggestionChosen(String),
    /// A debounce timer fired. Delivered by the runtime, never synchronously
    /// from within the edit that scheduled it.
    ApplyQuery { token: u64, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// The runtime must start a quiet-window timer that dispatches
    /// `ApplyQuery` with this token and value when it elapses.
    ApplyScheduled { token: u64, value: String },
    SelectionCleared,
    SelectionMade(String),
    QueryApplied(String),
}

impl WidgetState {
    pub fn dispatch(&mut self, command: WidgetCommand) -> Vec<WidgetEvent> {
        match command {
            WidgetCommand::QueryEdited(text) => self.edit_query(text),
            WidgetCommand::SuggestionChosen(name) => {
                self.raw_query = name.clone();
                self.chosen_name = name.clone();
                vec![WidgetEvent::SelectionMade(name)]
            }
            WidgetCommand::ApplyQuery { token, value } => {
                if token != self.apply_token {
                    // Superseded by a later edit.
                    return vec![];
                }
                self.applied_query = value.clone();
                vec![WidgetEvent::QueryApplied(value)]
            }
        }
    }

    fn edit_query(&mut self, text: String) -> Vec<WidgetEvent> {
        // Whitespace typed into an empty field stays a no-op.
        if self.raw_query.is_empty() && text.trim().is_empty() {
            return vec![];
        }

        self.raw_query = text.clone();

        if text.trim() == self.applied_query {
            return vec![];
        }

        self.apply_token = self.apply_token.wrapping_add(1);
        let mut events = vec![WidgetEvent::ApplyScheduled {
            token: self.apply_token,
            // The untrimmed text is what gets applied; trimming only
            // decides whether to schedule at all.
            value: text,
        }];
        if !self.chosen_name.is_empty() {
            self.chosen_name.clear();
            events.push(WidgetEvent::SelectionCleared);
        }
        events
    }
}
