//! Detail screen controller: one instance per selected character id.
//!
//! Selecting a different id disposes the old controller and creates a new
//! one; controllers are never retargeted in place.

use tracing::{info, instrument, warn};
use url::Url;

use crate::capabilities::HttpResult;
use crate::character::{Character, Normalizer};
use crate::config::CatalogConfig;
use crate::envelope::decode_entries;
use crate::request::{RequestSlot, RequestTicket, Settlement, Transport};
use crate::view::{DetailView, ViewState};

#[derive(Debug)]
pub struct DetailController {
    id: String,
    url: Url,
    normalizer: Normalizer,
    slot: RequestSlot,
    state: ViewState<Character>,
}

impl DetailController {
    pub fn new(config: &CatalogConfig, id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            url: config.detail_url(&id),
            id,
            normalizer: config.normalizer(),
            slot: RequestSlot::new(),
            state: ViewState::Loading,
        }
    }

    #[instrument(skip_all, fields(id = %self.id))]
    pub fn load<T: Transport + ?Sized>(&mut self, transport: &T) -> RequestTicket {
        self.state = ViewState::Loading;
        self.slot.issue(transport, &self.url)
    }

    /// Applies a transport completion. Returns `false` when it belonged to a
    /// cancelled request and nothing changed.
    #[instrument(skip(self, result), fields(id = %self.id))]
    pub fn complete(&mut self, ticket: RequestTicket, result: HttpResult) -> bool {
        let outcome = match self.slot.settle(ticket, result) {
            Settlement::Cancelled => return false,
            Settlement::Current(outcome) => outcome,
        };

        self.state = match outcome.and_then(|response| decode_entries(&response)) {
            Ok(entries) => match entries.first() {
                Some(raw) if raw.is_object() => {
                    let mut character = self.normalizer.normalize(raw, None);
                    if character.id.is_empty() {
                        character.id.clone_from(&self.id);
                    }
                    info!("character loaded");
                    ViewState::Ready(character)
                }
                _ => {
                    info!("no character matches id");
                    ViewState::Empty
                }
            },
            Err(e) => {
                warn!(error = %e, "character fetch failed");
                ViewState::Error {
                    message: e.to_string(),
                }
            }
        };
        true
    }

    pub fn dispose<T: Transport + ?Sized>(mut self, transport: &T) {
        self.slot.cancel(transport);
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &ViewState<Character> {
        &self.state
    }

    pub fn view(&self) -> DetailView {
        DetailView {
            id: self.id.clone(),
            state: self.state.clone(),
        }
    }
}
