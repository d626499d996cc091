#![allow(dead_code)]

use catalog_shared::{Effect, FetchOperation, HttpResponse, HttpResult, RequestTicket};
use serde_json::Value;
use url::Url;

pub fn fetch_operations(effects: &[Effect]) -> Vec<FetchOperation> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Fetch(request) => Some(request.operation.clone()),
            _ => None,
        })
        .collect()
}

pub fn gets(effects: &[Effect]) -> Vec<(RequestTicket, Url)> {
    fetch_operations(effects)
        .into_iter()
        .filter_map(|op| match op {
            FetchOperation::Get { ticket, url } => Some((ticket, url)),
            FetchOperation::Abort { .. } => None,
        })
        .collect()
}

pub fn aborts(effects: &[Effect]) -> Vec<RequestTicket> {
    fetch_operations(effects)
        .into_iter()
        .filter_map(|op| match op {
            FetchOperation::Abort { ticket } => Some(ticket),
            FetchOperation::Get { .. } => None,
        })
        .collect()
}

pub fn renders(effects: &[Effect]) -> bool {
    effects.iter().any(|e| matches!(e, Effect::Render(_)))
}

pub fn json_ok(body: Value) -> HttpResult {
    Ok(HttpResponse::new(200, serde_json::to_vec(&body).unwrap()))
}

pub fn status(code: u16) -> HttpResult {
    Ok(HttpResponse::new(code, Vec::new()))
}
