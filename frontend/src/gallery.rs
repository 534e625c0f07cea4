use crate::chrome::fade_in::FadeInSection;
use crate::chrome::header::Header;
use crate::chrome::scroll::scroll_into_view;
use crate::chrome::tabs::{integration_tabs, Tabs};
use crate::env_variable_utils::{get_app_name, CATALOG_URL, CATEGORIES};
use crate::gallery::api::load_catalog;
use crate::gallery::components::{CategoryBar, VideoGrid};
use crate::gallery::session::{GallerySession, SessionAction};
use crate::player::components::{StreamPlayer, VideoSelector};
use crate::player::view::PlayerView;
use yew::prelude::*;

pub mod api;
pub mod components;
pub mod session;

pub const STREAM_SECTION_ID: &str = "stream";

#[function_component(GalleryPage)]
pub fn gallery_page() -> Html {
    let session = use_reducer(GallerySession::default);

    // Load the catalog once on mount
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            let url = CATALOG_URL.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match load_catalog(&url).await {
                    Ok(videos) => {
                        log::info!("Loaded {} videos from {}", videos.len(), url);
                        session.dispatch(SessionAction::CatalogLoaded(videos));
                    }
                    Err(e) => {
                        log::error!("Error loading videos: {}", e);
                        session.dispatch(SessionAction::CatalogFailed(e));
                    }
                }
            });
            || ()
        });
    }

    // Bring the player into view after every selection
    use_effect_with(session.selection_seq, |seq| {
        if *seq > 0 {
            scroll_into_view(STREAM_SECTION_ID);
        }
        || ()
    });

    let on_filter = {
        let session = session.clone();
        Callback::from(move |category: String| session.dispatch(SessionAction::Filter(category)))
    };

    let on_select = {
        let session = session.clone();
        Callback::from(move |slug: String| session.dispatch(SessionAction::Select(slug)))
    };

    let player_view = session
        .selected_video()
        .and_then(PlayerView::from_video)
        .unwrap_or_else(PlayerView::empty);
    let tabs = use_memo((), |_| integration_tabs(&CATALOG_URL));

    html! {
        <>
            <Header app_name={get_app_name()} />
            <main class="main">
                <FadeInSection id="gallery" class="section">
                    <h2 class="section-title">{"Video Gallery"}</h2>
                    <CategoryBar
                        categories={CATEGORIES.clone()}
                        active={session.filter.clone()}
                        on_filter={on_filter}
                    />
                    <VideoGrid
                        videos={session.visible_videos()}
                        load_state={session.load_state.clone()}
                        on_select={on_select.clone()}
                    />
                </FadeInSection>

                <FadeInSection id={STREAM_SECTION_ID} class="section">
                    <h2 class="section-title">{"Stream Preview"}</h2>
                    <VideoSelector
                        videos={session.catalog.clone()}
                        selected={session.selected.clone()}
                        on_select={on_select}
                    />
                    <StreamPlayer view={player_view} />
                </FadeInSection>

                <FadeInSection id="integration" class="section">
                    <h2 class="section-title">{"Integration"}</h2>
                    <Tabs tabs={(*tabs).clone()} />
                </FadeInSection>
            </main>
        </>
    }
}
