//! REST API helpers for the module registry endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None` since fetching is only
//! meaningful in the browser; the first paint renders the empty cache.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of errors: a failed list fetch
//! reads as an empty directory and a failed by-name fetch reads as 404.
//! That is the whole error surface the pages need.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Module;
#[cfg(feature = "hydrate")]
use super::types::ModulesResponse;

#[cfg(any(test, feature = "hydrate"))]
fn module_endpoint(name: &str) -> String {
    // Names are slugs today, but the param comes off the URL; encoding
    // keeps a stray separator from rewriting the path.
    format!(
        "/api/modules/{}",
        crate::util::query_string::percent_encode(name)
    )
}

/// Fetch every published module from `GET /api/modules`.
/// Returns `None` on any transport, status, or decode failure.
pub async fn fetch_modules() -> Option<Vec<Module>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/modules")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let body = resp.json::<ModulesResponse>().await.ok()?;
        Some(body.modules)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch a single module from `GET /api/modules/{name}`.
/// Returns `None` when the record does not exist or the request fails.
pub async fn fetch_module(name: &str) -> Option<Module> {
    #[cfg(feature = "hydrate")]
    {
        let url = module_endpoint(name);
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Module>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}
