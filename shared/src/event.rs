use serde::{Deserialize, Serialize};

use crate::capabilities::HttpResult;
use crate::config::CatalogConfig;
use crate::request::RequestTicket;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Event {
    Configure(CatalogConfig),

    // List screen
    ListOpened,
    ListRetry,
    ListRefreshed,
    ListClosed,

    // Detail screen
    CharacterSelected { id: String },
    DetailRetry,
    DetailClosed,

    // Transport completions
    ListFetched {
        ticket: RequestTicket,
        result: HttpResult,
    },
    DetailFetched {
        ticket: RequestTicket,
        result: HttpResult,
    },
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::Configure(_) => "configure",
            Event::ListOpened => "list_opened",
            Event::ListRetry => "list_retry",
            Event::ListRefreshed => "list_refreshed",
            Event::ListClosed => "list_closed",
            Event::CharacterSelected { .. } => "character_selected",
            Event::DetailRetry => "detail_retry",
            Event::DetailClosed => "detail_closed",
            Event::ListFetched { .. } => "list_fetched",
            Event::DetailFetched { .. } => "detail_fetched",
        }
    }

    pub fn is_user_initiated(&self) -> bool {
        !matches!(
            self,
            Event::Configure(_) | Event::ListFetched { .. } | Event::DetailFetched { .. }
        )
    }

    pub fn list_fetched(ticket: RequestTicket, result: HttpResult) -> Self {
        Event::ListFetched { ticket, result }
    }

    pub fn detail_fetched(ticket: RequestTicket, result: HttpResult) -> Self {
        Event::DetailFetched { ticket, result }
    }
}
