//! Catalog fetch capability.
//!
//! The shell performs the actual HTTP GET. Every call is stamped with the
//! [`RequestTicket`] it was issued under so that completions can be matched
//! against the request that is still live, and so the shell can be told to
//! abort a superseded call.

use crux_core::capability::{CapabilityContext, Operation};
use crux_core::macros::Capability;
use serde::{Deserialize, Serialize};
use url::Url;

use super::http::HttpResult;
use crate::event::Event;
use crate::request::{RequestTicket, Transport};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum FetchOperation {
    Get { ticket: RequestTicket, url: Url },
    Abort { ticket: RequestTicket },
}

impl Operation for FetchOperation {
    type Output = HttpResult;
}

#[derive(Capability)]
pub struct Fetch<Ev> {
    context: CapabilityContext<FetchOperation, Ev>,
}

impl<Ev> Fetch<Ev>
where
    Ev: 'static,
{
    pub fn new(context: CapabilityContext<FetchOperation, Ev>) -> Self {
        Self { context }
    }

    pub fn get<F>(&self, ticket: RequestTicket, url: Url, make_event: F)
    where
        F: FnOnce(HttpResult) -> Ev + Send + 'static,
    {
        let context = self.context.clone();
        self.context.spawn(async move {
            let result = context
                .request_from_shell(FetchOperation::Get { ticket, url })
                .await;
            context.update_app(make_event(result));
        });
    }

    /// Best effort: the shell may already have finished the call.
    pub fn abort(&self, ticket: RequestTicket) {
        let context = self.context.clone();
        self.context.spawn(async move {
            context.notify_shell(FetchOperation::Abort { ticket }).await;
        });
    }
}

/// Binds the fetch capability to the event that a completion is routed back
/// through, so each controller's responses land on its own handler.
pub struct RoutedFetch<'a> {
    fetch: &'a Fetch<Event>,
    route: fn(RequestTicket, HttpResult) -> Event,
}

impl<'a> RoutedFetch<'a> {
    pub fn new(fetch: &'a Fetch<Event>, route: fn(RequestTicket, HttpResult) -> Event) -> Self {
        Self { fetch, route }
    }
}

impl Transport for RoutedFetch<'_> {
    fn send(&self, ticket: RequestTicket, url: &Url) {
        let route = self.route;
        self.fetch
            .get(ticket, url.clone(), move |result| route(ticket, result));
    }

    fn abort(&self, ticket: RequestTicket) {
        self.fetch.abort(ticket);
    }
}
