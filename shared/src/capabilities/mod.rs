mod fetch;
mod http;

pub use self::fetch::{Fetch, FetchOperation, RoutedFetch};
pub use self::http::{validate_url, HttpError, HttpResponse, HttpResult};

// Crux's built-in Render capability covers view updates as-is.
pub use crux_core::render::Render;

use crate::event::Event;
use crate::App;

#[derive(crux_core::macros::Effect)]
pub struct Capabilities {
    pub fetch: Fetch<Event>,
    pub render: Render<Event>,
}
