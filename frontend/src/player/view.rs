use crate::models::Video;
use crate::utils::{format_duration, format_file_size, format_fps};

pub const STATUS_READY: &str = "Ready";
pub const STATUS_LOADED: &str = "Loaded";
pub const DEFAULT_QUALITY: &str = "1080p";
pub const EMBED_PLACEHOLDER: &str = "<!-- Select a video to generate embed code -->";
/// Copying is refused while the embed block still shows its placeholder.
pub const EMBED_PLACEHOLDER_MARKER: &str = "Select a video";

/// Every value the stream section shows, derived from a single video.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerView {
    pub status: String,
    pub quality: String,
    pub codec: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub embed_code: String,
    pub duration: String,
    pub size: String,
    pub fps: String,
}

impl PlayerView {
    pub fn empty() -> Self {
        Self {
            status: STATUS_READY.to_string(),
            quality: "-".to_string(),
            codec: "-".to_string(),
            video_url: String::new(),
            thumbnail_url: String::new(),
            embed_code: EMBED_PLACEHOLDER.to_string(),
            duration: "-".to_string(),
            size: "-".to_string(),
            fps: "-".to_string(),
        }
    }

    /// `None` when the video has nothing to stream.
    pub fn from_video(video: &Video) -> Option<Self> {
        let source = video.primary_source()?;
        let thumbnail_url = video.thumbnail.url.clone();

        Some(Self {
            status: STATUS_LOADED.to_string(),
            quality: source
                .quality
                .clone()
                .filter(|q| !q.is_empty())
                .unwrap_or_else(|| DEFAULT_QUALITY.to_string()),
            codec: source.codec.to_uppercase(),
            embed_code: embed_code(&source.url, &thumbnail_url),
            video_url: source.url.clone(),
            thumbnail_url,
            duration: format_duration(video.duration_seconds),
            size: format_file_size(video.size_bytes),
            fps: format_fps(video.fps),
        })
    }

    pub fn is_loaded(&self) -> bool {
        !self.video_url.is_empty()
    }
}

pub fn embed_code(video_url: &str, thumbnail_url: &str) -> String {
    format!(
        r#"<video
  width="1080"
  height="1920"
  controls
  poster="{thumbnail_url}"
>
  <source src="{video_url}" type="video/mp4">
</video>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::video;

    #[test]
    fn embed_keeps_both_urls_verbatim() {
        let code = embed_code("https://x/v.mp4", "https://x/t.jpg");
        assert!(code.contains(r#"poster="https://x/t.jpg""#));
        assert!(code.contains(r#"<source src="https://x/v.mp4" type="video/mp4">"#));
        assert!(code.starts_with("<video"));
        assert!(code.ends_with("</video>"));
    }

    #[test]
    fn view_is_derived_from_primary_source() {
        let view = PlayerView::from_video(&video("a-dance")).unwrap();
        assert_eq!(view.status, "Loaded");
        assert_eq!(view.quality, "720p");
        assert_eq!(view.codec, "H264");
        assert_eq!(view.video_url, "https://cdn.example/a-dance.mp4");
        assert_eq!(view.thumbnail_url, "https://cdn.example/a-dance.jpg");
        assert_eq!(
            view.embed_code,
            embed_code(&view.video_url, &view.thumbnail_url)
        );
        assert_eq!(view.duration, "8s");
        assert_eq!(view.size, "2.5 MB");
        assert_eq!(view.fps, "30 FPS");
        assert!(view.is_loaded());
    }

    #[test]
    fn missing_quality_falls_back_to_1080p() {
        let mut v = video("b-jump");
        v.sources[0].quality = None;
        assert_eq!(PlayerView::from_video(&v).unwrap().quality, "1080p");
    }

    #[test]
    fn no_sources_means_no_view() {
        let mut v = video("b-jump");
        v.sources.clear();
        assert!(PlayerView::from_video(&v).is_none());
    }

    #[test]
    fn second_selection_shares_nothing_with_first() {
        let first = PlayerView::from_video(&video("a-dance")).unwrap();
        let mut other = video("b-jump");
        other.fps = 60;
        other.sources[0].codec = "vp9".to_string();
        let second = PlayerView::from_video(&other).unwrap();

        assert_ne!(first, second);
        assert_eq!(second.codec, "VP9");
        assert_eq!(second.fps, "60 FPS");
        assert!(!second.embed_code.contains("a-dance"));
        assert!(!second.video_url.contains("a-dance"));
    }

    #[test]
    fn empty_view_shows_placeholder() {
        let view = PlayerView::empty();
        assert!(!view.is_loaded());
        assert!(view.embed_code.contains(EMBED_PLACEHOLDER_MARKER));
        assert_eq!(view.status, "Ready");
    }
}
