use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoSource {
    pub url: String,
    #[serde(default)]
    pub quality: Option<String>,
    pub codec: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Video {
    pub slug: String,
    pub title: String,
    pub duration_seconds: u64,
    pub fps: u32,
    pub size_bytes: u64,
    pub thumbnail: Thumbnail,
    #[serde(default)]
    pub sources: Vec<VideoSource>,
}

impl Video {
    /// The first listed source is the one the player streams.
    pub fn primary_source(&self) -> Option<&VideoSource> {
        self.sources.first()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CatalogResponse {
    pub videos: Vec<Video>,
}
