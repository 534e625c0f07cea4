use crate::env_variable_utils::ALL_CATEGORIES;
use crate::models::Video;
use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed(String),
}

pub enum SessionAction {
    CatalogLoaded(Vec<Video>),
    CatalogFailed(String),
    Filter(String),
    Select(String),
}

/// All page state for one visit: the catalog, the active category and the
/// video loaded into the player.
#[derive(Debug, Clone, PartialEq)]
pub struct GallerySession {
    pub catalog: Vec<Video>,
    pub filter: String,
    pub selected: Option<String>,
    /// Bumped on every successful selection, including re-selecting the same slug.
    pub selection_seq: u64,
    pub load_state: LoadState,
}

impl Default for GallerySession {
    fn default() -> Self {
        Self {
            catalog: Vec::new(),
            filter: ALL_CATEGORIES.to_string(),
            selected: None,
            selection_seq: 0,
            load_state: LoadState::Loading,
        }
    }
}

impl GallerySession {
    pub fn find(&self, slug: &str) -> Option<&Video> {
        self.catalog.iter().find(|v| v.slug == slug)
    }

    pub fn selected_video(&self) -> Option<&Video> {
        self.selected.as_deref().and_then(|slug| self.find(slug))
    }

    pub fn visible_videos(&self) -> Vec<Video> {
        filter_videos(&self.catalog, &self.filter)
    }
}

/// Loose category match: a video belongs to a category when its slug contains it.
pub fn filter_videos(catalog: &[Video], category: &str) -> Vec<Video> {
    if category == ALL_CATEGORIES {
        catalog.to_vec()
    } else {
        catalog
            .iter()
            .filter(|v| v.slug.contains(category))
            .cloned()
            .collect()
    }
}

impl Reducible for GallerySession {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::CatalogLoaded(videos) => {
                let mut next = (*self).clone();
                // A reload may drop the selected entry
                if let Some(slug) = &next.selected {
                    if !videos.iter().any(|v| &v.slug == slug) {
                        next.selected = None;
                    }
                }
                next.catalog = videos;
                next.load_state = LoadState::Loaded;
                next.into()
            }
            SessionAction::CatalogFailed(error) => {
                let mut next = (*self).clone();
                next.catalog.clear();
                next.selected = None;
                next.load_state = LoadState::Failed(error);
                next.into()
            }
            SessionAction::Filter(category) => {
                if self.filter == category {
                    return self;
                }
                let mut next = (*self).clone();
                next.filter = category;
                next.into()
            }
            SessionAction::Select(slug) => {
                if slug.is_empty() {
                    return self;
                }
                let Some(video) = self.find(&slug) else {
                    log::debug!("Ignoring selection of unknown video '{}'", slug);
                    return self;
                };
                if video.primary_source().is_none() {
                    log::warn!("Video '{}' has no playable source", slug);
                    return self;
                }
                let mut next = (*self).clone();
                next.selected = Some(slug);
                next.selection_seq += 1;
                next.into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::video;

    fn loaded(slugs: &[&str]) -> Rc<GallerySession> {
        let videos = slugs.iter().map(|s| video(s)).collect();
        Rc::new(GallerySession::default()).reduce(SessionAction::CatalogLoaded(videos))
    }

    fn slugs(videos: &[Video]) -> Vec<&str> {
        videos.iter().map(|v| v.slug.as_str()).collect()
    }

    #[test]
    fn starts_loading_with_all_filter() {
        let session = GallerySession::default();
        assert_eq!(session.load_state, LoadState::Loading);
        assert_eq!(session.filter, "all");
        assert!(session.selected.is_none());
    }

    #[test]
    fn filter_matches_slug_substring() {
        let session = loaded(&["a-dance", "b-jump"]).reduce(SessionAction::Filter("dance".into()));
        assert_eq!(slugs(&session.visible_videos()), vec!["a-dance"]);
    }

    #[test]
    fn filter_all_restores_full_catalog_in_order() {
        let session = loaded(&["c-walk", "a-dance", "b-jump", "d-dance"])
            .reduce(SessionAction::Filter("dance".into()));
        assert_eq!(slugs(&session.visible_videos()), vec!["a-dance", "d-dance"]);

        let session = session.reduce(SessionAction::Filter("all".into()));
        assert_eq!(
            slugs(&session.visible_videos()),
            vec!["c-walk", "a-dance", "b-jump", "d-dance"]
        );
        assert_eq!(slugs(&session.catalog), vec!["c-walk", "a-dance", "b-jump", "d-dance"]);
    }

    #[test]
    fn filter_never_touches_catalog() {
        let before = loaded(&["a-dance", "b-jump"]);
        let after = before.clone().reduce(SessionAction::Filter("nothing".into()));
        assert!(after.visible_videos().is_empty());
        assert_eq!(after.catalog, before.catalog);
    }

    #[test]
    fn selecting_unknown_slug_changes_nothing() {
        let session = loaded(&["a-dance"]).reduce(SessionAction::Select("a-dance".into()));
        let after = session.clone().reduce(SessionAction::Select("missing".into()));
        assert!(Rc::ptr_eq(&session, &after));
        assert_eq!(after.selected.as_deref(), Some("a-dance"));
        assert_eq!(after.selection_seq, 1);
    }

    #[test]
    fn selecting_empty_slug_is_ignored() {
        let session = loaded(&["a-dance"]);
        let after = session.clone().reduce(SessionAction::Select(String::new()));
        assert!(Rc::ptr_eq(&session, &after));
    }

    #[test]
    fn selection_needs_a_playable_source() {
        let mut silent = video("silent");
        silent.sources.clear();
        let session =
            Rc::new(GallerySession::default()).reduce(SessionAction::CatalogLoaded(vec![silent]));
        let after = session.reduce(SessionAction::Select("silent".into()));
        assert!(after.selected.is_none());
    }

    #[test]
    fn reselecting_bumps_sequence() {
        let session = loaded(&["a-dance"])
            .reduce(SessionAction::Select("a-dance".into()))
            .reduce(SessionAction::Select("a-dance".into()));
        assert_eq!(session.selection_seq, 2);
    }

    #[test]
    fn selection_survives_filtering() {
        let session = loaded(&["a-dance", "b-jump"])
            .reduce(SessionAction::Select("b-jump".into()))
            .reduce(SessionAction::Filter("dance".into()));
        assert_eq!(session.selected_video().map(|v| v.slug.as_str()), Some("b-jump"));
    }

    #[test]
    fn failed_load_leaves_catalog_empty() {
        let session = Rc::new(GallerySession::default())
            .reduce(SessionAction::CatalogFailed("Network error: offline".into()));
        assert_eq!(
            session.load_state,
            LoadState::Failed("Network error: offline".into())
        );
        assert!(session.catalog.is_empty());

        let session = session
            .reduce(SessionAction::Filter("dance".into()))
            .reduce(SessionAction::Select("a-dance".into()));
        assert!(session.visible_videos().is_empty());
        assert!(session.selected.is_none());
    }

    #[test]
    fn reload_clears_vanished_selection() {
        let session = loaded(&["a-dance", "b-jump"])
            .reduce(SessionAction::Select("b-jump".into()))
            .reduce(SessionAction::CatalogLoaded(vec![video("a-dance")]));
        assert!(session.selected.is_none());

        let session = session
            .reduce(SessionAction::Select("a-dance".into()))
            .reduce(SessionAction::CatalogLoaded(vec![video("a-dance"), video("c-run")]));
        assert_eq!(session.selected.as_deref(), Some("a-dance"));
    }
}
