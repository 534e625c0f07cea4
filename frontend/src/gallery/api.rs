use crate::models::{CatalogResponse, Video};
use gloo_net::http::Request;

pub const LOAD_ERROR_MESSAGE: &str = "Failed to load videos. Please check the API endpoint.";

pub async fn load_catalog(url: &str) -> Result<Vec<Video>, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        response
            .json::<CatalogResponse>()
            .await
            .map(|catalog| catalog.videos)
            .map_err(|e| format!("JSON parse error: {}", e))
    } else {
        Err(format!("HTTP error: {}", response.status()))
    }
}
