//! List screen controller: loads one bounded page of characters.

use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::capabilities::HttpResult;
use crate::character::{Character, Normalizer};
use crate::config::CatalogConfig;
use crate::envelope::decode_entries;
use crate::request::{RequestSlot, RequestTicket, Settlement, Transport};
use crate::view::{ListView, ViewState};

#[derive(Debug)]
pub struct ListController {
    url: Url,
    page_limit: usize,
    normalizer: Normalizer,
    slot: RequestSlot,
    state: ViewState<Vec<Character>>,
    refreshing: bool,
}

impl ListController {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            url: config.list_url(),
            page_limit: config.page_limit as usize,
            normalizer: config.normalizer(),
            slot: RequestSlot::new(),
            state: ViewState::Loading,
            refreshing: false,
        }
    }

    /// Initial load and user retry. Nothing is shown until the result lands.
    #[instrument(skip_all, fields(url = %self.url))]
    pub fn load<T: Transport + ?Sized>(&mut self, transport: &T) -> RequestTicket {
        self.state = ViewState::Loading;
        self.refreshing = false;
        self.slot.issue(transport, &self.url)
    }

    /// Pull-to-refresh. The current state stays visible until the new
    /// result lands. Ignored while the initial load is still in flight.
    #[instrument(skip_all, fields(url = %self.url))]
    pub fn refresh<T: Transport + ?Sized>(&mut self, transport: &T) -> Option<RequestTicket> {
        if self.state.is_loading() {
            debug!("refresh ignored during initial load");
            return None;
        }

        self.refreshing = true;
        Some(self.slot.issue(transport, &self.url))
    }

    /// Applies a transport completion. Returns `false` when it belonged to a
    /// cancelled request and nothing changed.
    #[instrument(skip(self, result))]
    pub fn complete(&mut self, ticket: RequestTicket, result: HttpResult) -> bool {
        let outcome = match self.slot.settle(ticket, result) {
            Settlement::Cancelled => return false,
            Settlement::Current(outcome) => outcome,
        };

        self.refreshing = false;
        self.state = match outcome.and_then(|response| decode_entries(&response)) {
            Ok(entries) => {
                let records: Vec<Character> = entries
                    .iter()
                    .take(self.page_limit)
                    .enumerate()
                    .map(|(index, raw)| self.normalizer.normalize(raw, Some(index)))
                    .collect();

                info!(count = records.len(), "character list loaded");
                if records.is_empty() {
                    ViewState::Empty
                } else {
                    ViewState::Ready(records)
                }
            }
            Err(e) => {
                warn!(error = %e, "character list fetch failed");
                ViewState::Error {
                    message: e.to_string(),
                }
            }
        };
        true
    }

    /// Tears the controller down, cancelling any in-flight request.
    pub fn dispose<T: Transport + ?Sized>(mut self, transport: &T) {
        self.slot.cancel(transport);
    }

    pub fn state(&self) -> &ViewState<Vec<Character>> {
        &self.state
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn view(&self) -> ListView {
        ListView {
            state: self.state.clone(),
            is_refreshing: self.refreshing,
        }
    }
}
