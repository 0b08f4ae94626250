//! Request builders for the breed endpoints.
//!
//! Requests are plain [`http::Request`] values so they can be inspected before anything is sent.

use http::{header::ACCEPT, Method, Request};

use crate::{ApiConfig, BreedTarget, Result, API_KEY_HEADER};

/// `GET {base}/breeds/{target}`
pub fn breed_request(config: &ApiConfig, target: &BreedTarget) -> Result<Request<()>> {
    get(config, &format!("breeds/{}", target.path_segment()))
}

/// `GET {base}/breeds`
pub fn list_request(config: &ApiConfig) -> Result<Request<()>> {
    get(config, "breeds")
}

fn get(config: &ApiConfig, path: &str) -> Result<Request<()>> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(format!("{}/{path}", config.base_url()))
        .header(ACCEPT, "application/json")
        .header(API_KEY_HEADER, config.api_key())
        .body(())?;

    Ok(request)
}
