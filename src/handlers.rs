// Oblique Gate - Request Handlers
// Copyright 2026 Joseph Stone - All Rights Reserved
//
// start_oblique_thinking plus the empty prompts/resources listings.
// Stateless: tables, mode and RNG are all read-only.

use crate::config::{OutputMode, ServerConfig};
use crate::deck::{CARDS, THINKING_TEXTS};
use crate::error::Result;
use crate::format::format;
use crate::select::{choose, IndexSource, ThreadRngSource, NO_CARD, NO_THINKING};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Pair of tables a draw is made from
#[derive(Debug, Clone, Copy)]
pub struct Deck {
    pub cards: &'static [&'static str],
    pub thinking: &'static [&'static str],
}

impl Deck {
    pub fn new(cards: &'static [&'static str], thinking: &'static [&'static str]) -> Self {
        Self { cards, thinking }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new(CARDS, THINKING_TEXTS)
    }
}

/// tools/call arguments for start_oblique_thinking. The tool takes none.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvokeRequest {}

/// prompts/list params (cursor etc. ignored)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPromptsRequest {}

/// resources/list params (cursor etc. ignored)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListResourcesRequest {}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvokeResponse {
    pub result: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PromptList {
    pub prompts: Vec<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResourceList {
    pub resources: Vec<Value>,
}

/// Everything a request needs, fixed at startup
pub struct Handlers {
    config: ServerConfig,
    deck: Deck,
    source: Box<dyn IndexSource>,
}

impl Handlers {
    /// Production wiring: built-in tables, thread RNG
    pub fn new(config: ServerConfig) -> Self {
        Self::with_parts(config, Deck::default(), Box::new(ThreadRngSource))
    }

    pub fn with_parts(config: ServerConfig, deck: Deck, source: Box<dyn IndexSource>) -> Self {
        Self { config, deck, source }
    }

    pub fn mode(&self) -> OutputMode {
        self.config.mode
    }

    pub fn handle_invoke(&self, _request: &InvokeRequest) -> Result<InvokeResponse> {
        log::info!("Handling start_oblique_thinking request (mode: {})", self.config.mode);

        let thinking = choose(self.deck.thinking, NO_THINKING, self.source.as_ref())?;
        let card = choose(self.deck.cards, NO_CARD, self.source.as_ref())?;
        let result = format(self.config.mode, card, thinking);

        let snippet: String = result.chars().take(100).collect();
        log::info!("Generated result: {:?}...", snippet);

        Ok(InvokeResponse { result })
    }

    pub fn handle_list_prompts(&self, _request: &ListPromptsRequest) -> PromptList {
        log::info!("Handling list_prompts request (returning empty list)");
        PromptList::default()
    }

    pub fn handle_list_resources(&self, _request: &ListResourcesRequest) -> ResourceList {
        log::info!("Handling list_resources request (returning empty list)");
        ResourceList::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ObliqueError;
    use crate::select::FixedIndex;

    fn handlers(mode: OutputMode, deck: Deck) -> Handlers {
        Handlers::with_parts(ServerConfig::new(mode), deck, Box::new(FixedIndex(0)))
    }

    fn xy() -> Deck {
        Deck::new(&["X"], &["Y"])
    }

    #[test]
    fn full_mode_single_entry_tables() {
        let h = handlers(OutputMode::Full, xy());
        let resp = h.handle_invoke(&InvokeRequest::default()).unwrap();
        assert_eq!(resp.result, "Now Y\n<thinking>\nX");
    }

    #[test]
    fn card_only_single_entry_tables() {
        let h = handlers(OutputMode::CardOnly, xy());
        let resp = h.handle_invoke(&InvokeRequest::default()).unwrap();
        assert_eq!(resp.result, "\n<thinking>\nX");
    }

    #[test]
    fn text_only_single_entry_tables() {
        let h = handlers(OutputMode::TextOnly, xy());
        let resp = h.handle_invoke(&InvokeRequest::default()).unwrap();
        assert_eq!(resp.result, "Now Y\n<thinking>\n");
    }

    #[test]
    fn empty_tables_use_fallbacks() {
        let h = handlers(OutputMode::Full, Deck::new(&[], &[]));
        let resp = h.handle_invoke(&InvokeRequest::default()).unwrap();
        assert_eq!(resp.result, "Now Thinking...\n<thinking>\nNo card available.");
    }

    #[test]
    fn bad_source_surfaces_as_error() {
        let h = Handlers::with_parts(ServerConfig::default(), xy(), Box::new(FixedIndex(9)));
        let err = h.handle_invoke(&InvokeRequest::default()).unwrap_err();
        assert!(matches!(err, ObliqueError::IndexOutOfRange { index: 9, len: 1 }));
    }

    #[test]
    fn response_envelope_has_single_result_field() {
        for mode in [OutputMode::Full, OutputMode::CardOnly, OutputMode::TextOnly] {
            let h = Handlers::new(ServerConfig::new(mode));
            let resp = h.handle_invoke(&InvokeRequest::default()).unwrap();
            let value = serde_json::to_value(&resp).unwrap();
            let obj = value.as_object().unwrap();
            assert_eq!(obj.len(), 1);
            assert!(obj["result"].is_string());
        }
    }

    #[test]
    fn default_deck_draws_from_builtin_tables() {
        let h = Handlers::new(ServerConfig::default());
        let resp = h.handle_invoke(&InvokeRequest::default()).unwrap();
        let (head, card) = resp.result.split_once("\n<thinking>\n").unwrap();
        let thinking = head.strip_prefix("Now ").unwrap();
        assert!(CARDS.contains(&card));
        assert!(THINKING_TEXTS.contains(&thinking));
    }

    #[test]
    fn listings_are_always_empty() {
        for mode in [OutputMode::Full, OutputMode::CardOnly, OutputMode::TextOnly] {
            let h = handlers(mode, Deck::default());
            assert!(h.handle_list_prompts(&ListPromptsRequest::default()).prompts.is_empty());
            assert!(h.handle_list_resources(&ListResourcesRequest::default()).resources.is_empty());
        }
        let json = serde_json::to_value(PromptList::default()).unwrap();
        assert_eq!(json, serde_json::json!({ "prompts": [] }));
        let json = serde_json::to_value(ResourceList::default()).unwrap();
        assert_eq!(json, serde_json::json!({ "resources": [] }));
    }

    #[test]
    fn requests_ignore_unknown_fields() {
        let req: InvokeRequest = serde_json::from_value(serde_json::json!({"anything": 1})).unwrap();
        let h = handlers(OutputMode::Full, xy());
        assert!(h.handle_invoke(&req).is_ok());
        let _: ListPromptsRequest = serde_json::from_value(serde_json::json!({"cursor": "abc"})).unwrap();
    }
}
