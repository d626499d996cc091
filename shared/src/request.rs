//! Request lifecycle: one live request per logical fetch.
//!
//! A [`RequestSlot`] hands out a fresh [`RequestTicket`] for every request it
//! issues and remembers only the newest one. Issuing again (or cancelling)
//! retires the previous ticket and asks the transport to abort it. Whatever
//! the transport later reports for a retired ticket settles as
//! [`Settlement::Cancelled`], so supersession is authoritative here even when
//! the transport could not actually abort the socket.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;
use uuid::Uuid;

use crate::capabilities::{HttpResponse, HttpResult};
use crate::error::FetchError;

/// Identity captured when a request is issued.
///
/// Tickets are globally unique, so a ticket from a disposed controller can
/// never be mistaken for one issued by its replacement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestTicket(Uuid);

impl RequestTicket {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for RequestTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where requests actually go. The app binds this to the fetch capability;
/// tests bind it to a recorder.
pub trait Transport {
    fn send(&self, ticket: RequestTicket, url: &Url);
    fn abort(&self, ticket: RequestTicket);
}

/// How a transport completion relates to the slot that issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    /// The live request finished; the payload is a usable 2xx response or a
    /// failure that should be shown.
    Current(Result<HttpResponse, FetchError>),
    /// Superseded, disposed, or aborted by the transport. Never shown.
    Cancelled,
}

#[derive(Debug, Default)]
pub struct RequestSlot {
    live: Option<RequestTicket>,
}

impl RequestSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels any live request, then sends `url` under a new ticket.
    pub fn issue<T: Transport + ?Sized>(&mut self, transport: &T, url: &Url) -> RequestTicket {
        self.cancel(transport);

        let ticket = RequestTicket::generate();
        self.live = Some(ticket);
        transport.send(ticket, url);
        ticket
    }

    pub fn cancel<T: Transport + ?Sized>(&mut self, transport: &T) -> Option<RequestTicket> {
        let retired = self.live.take()?;
        debug!(ticket = %retired, "cancelling in-flight request");
        transport.abort(retired);
        Some(retired)
    }

    pub fn live(&self) -> Option<RequestTicket> {
        self.live
    }

    pub fn is_live(&self, ticket: RequestTicket) -> bool {
        self.live == Some(ticket)
    }

    /// Classifies a completion. The slot is idle afterwards if `ticket` was
    /// the live one.
    pub fn settle(&mut self, ticket: RequestTicket, result: HttpResult) -> Settlement {
        if !self.is_live(ticket) {
            debug!(%ticket, "dropping completion for superseded request");
            return Settlement::Cancelled;
        }
        self.live = None;

        match result {
            Err(e) if e.is_cancelled() => Settlement::Cancelled,
            Err(e) => Settlement::Current(Err(e.into())),
            Ok(response) if !response.is_success() => {
                Settlement::Current(Err(FetchError::Status {
                    status: response.status(),
                }))
            }
            Ok(response) => Settlement::Current(Ok(response)),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        Send(RequestTicket, Url),
        Abort(RequestTicket),
    }

    #[derive(Default)]
    pub struct RecordingTransport {
        calls: RefCell<Vec<Call>>,
    }

    impl RecordingTransport {
        pub fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        pub fn sent(&self) -> Vec<(RequestTicket, Url)> {
            self.calls
                .borrow()
                .iter()
                .filter_map(|call| match call {
                    Call::Send(ticket, url) => Some((*ticket, url.clone())),
                    Call::Abort(_) => None,
                })
                .collect()
        }

        pub fn aborted(&self) -> Vec<RequestTicket> {
            self.calls
                .borrow()
                .iter()
                .filter_map(|call| match call {
                    Call::Abort(ticket) => Some(*ticket),
                    Call::Send(..) => None,
                })
                .collect()
        }
    }

    impl Transport for RecordingTransport {
        fn send(&self, ticket: RequestTicket, url: &Url) {
            self.calls.borrow_mut().push(Call::Send(ticket, url.clone()));
        }

        fn abort(&self, ticket: RequestTicket) {
            self.calls.borrow_mut().push(Call::Abort(ticket));
        }
    }

    pub fn json_response(status: u16, body: serde_json::Value) -> HttpResult {
        Ok(HttpResponse::new(status, serde_json::to_vec(&body).unwrap()))
    }
}
