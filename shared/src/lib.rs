// lib.rs - character catalog core

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod capabilities;
pub mod character;
pub mod config;
pub mod detail;
pub mod envelope;
pub mod error;
pub mod event;
pub mod list;
pub mod model;
pub mod request;
pub mod view;

pub use app::App;
pub use capabilities::{Capabilities, Effect, FetchOperation, HttpError, HttpResponse, HttpResult};
pub use character::{normalize, Character, Normalizer};
pub use config::{CatalogConfig, DEFAULT_BASE_URL, DEFAULT_PAGE_LIMIT};
pub use error::{ConfigError, FetchError};
pub use event::Event;
pub use model::Model;
pub use request::{RequestSlot, RequestTicket, Settlement, Transport};
pub use view::{DetailView, ListView, ViewModel, ViewState};

pub mod app {
    use tracing::{debug, info, warn};

    use super::*;
    use crate::capabilities::RoutedFetch;
    use crate::detail::DetailController;
    use crate::list::ListController;

    #[derive(Default)]
    pub struct App;

    impl App {
        fn list_transport(caps: &Capabilities) -> RoutedFetch<'_> {
            RoutedFetch::new(&caps.fetch, Event::list_fetched)
        }

        fn detail_transport(caps: &Capabilities) -> RoutedFetch<'_> {
            RoutedFetch::new(&caps.fetch, Event::detail_fetched)
        }

        fn configure(config: CatalogConfig, model: &mut Model) -> bool {
            match config.validate() {
                Ok(()) => {
                    info!(base_url = %config.base_url, page_limit = config.page_limit, "catalog configured");
                    model.config = config;
                }
                Err(e) => {
                    warn!(error = %e, "rejected catalog configuration");
                }
            }
            false
        }

        fn open_list(model: &mut Model, caps: &Capabilities) -> bool {
            let transport = Self::list_transport(caps);
            if let Some(previous) = model.list.take() {
                previous.dispose(&transport);
            }

            let mut list = ListController::new(&model.config);
            list.load(&transport);
            model.list = Some(list);
            true
        }

        fn select_character(id: String, model: &mut Model, caps: &Capabilities) -> bool {
            let transport = Self::detail_transport(caps);
            if let Some(previous) = model.detail.take() {
                previous.dispose(&transport);
            }

            let mut detail = DetailController::new(&model.config, id);
            detail.load(&transport);
            model.detail = Some(detail);
            true
        }
    }

    impl crux_core::App for App {
        type Event = Event;
        type Model = Model;
        type ViewModel = ViewModel;
        type Capabilities = Capabilities;

        fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
            let event_name = event.name();
            if event.is_user_initiated() {
                info!(event = event_name, "user action");
            } else {
                debug!(event = event_name, "event");
            }

            let changed = match event {
                Event::Configure(config) => Self::configure(config, model),

                Event::ListOpened => Self::open_list(model, caps),

                Event::ListRetry => match model.list.as_mut() {
                    Some(list) => {
                        list.load(&Self::list_transport(caps));
                        true
                    }
                    None => Self::open_list(model, caps),
                },

                Event::ListRefreshed => model
                    .list
                    .as_mut()
                    .and_then(|list| list.refresh(&Self::list_transport(caps)))
                    .is_some(),

                Event::ListClosed => match model.list.take() {
                    Some(list) => {
                        list.dispose(&Self::list_transport(caps));
                        true
                    }
                    None => false,
                },

                Event::CharacterSelected { id } => Self::select_character(id, model, caps),

                Event::DetailRetry => match model.detail.as_mut() {
                    Some(detail) => {
                        detail.load(&Self::detail_transport(caps));
                        true
                    }
                    None => {
                        warn!("detail retry without an active detail screen");
                        false
                    }
                },

                Event::DetailClosed => match model.detail.take() {
                    Some(detail) => {
                        detail.dispose(&Self::detail_transport(caps));
                        true
                    }
                    None => false,
                },

                Event::ListFetched { ticket, result } => model
                    .list
                    .as_mut()
                    .is_some_and(|list| list.complete(ticket, result)),

                Event::DetailFetched { ticket, result } => model
                    .detail
                    .as_mut()
                    .is_some_and(|detail| detail.complete(ticket, result)),
            };

            if changed {
                caps.render.render();
            }
        }

        fn view(&self, model: &Model) -> ViewModel {
            ViewModel {
                list: model.list.as_ref().map(ListController::view),
                detail: model.detail.as_ref().map(DetailController::view),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_intents_are_distinguished_from_completions() {
        assert!(Event::ListOpened.is_user_initiated());
        assert!(Event::CharacterSelected { id: "1".into() }.is_user_initiated());
        assert!(!Event::list_fetched(RequestTicket::generate(), Err(HttpError::Cancelled))
            .is_user_initiated());
        assert!(!Event::Configure(CatalogConfig::default()).is_user_initiated());
    }

    #[test]
    fn event_names_are_stable() {
        assert_eq!(Event::ListRefreshed.name(), "list_refreshed");
        assert_eq!(
            Event::detail_fetched(RequestTicket::generate(), Err(HttpError::Cancelled)).name(),
            "detail_fetched"
        );
    }
}
