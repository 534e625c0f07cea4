use crate::gallery::api::LOAD_ERROR_MESSAGE;
use crate::gallery::session::LoadState;
use crate::models::Video;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CategoryBarProps {
    pub categories: Vec<String>,
    pub active: String,
    pub on_filter: Callback<String>,
}

#[function_component(CategoryBar)]
pub fn category_bar(props: &CategoryBarProps) -> Html {
    html! {
        <div class="category-filters">
            { for props.categories.iter().map(|category| {
                let on_click = {
                    let on_filter = props.on_filter.clone();
                    let category = category.clone();
                    Callback::from(move |_: MouseEvent| on_filter.emit(category.clone()))
                };
                html! {
                    <button
                        key={category.clone()}
                        class={category_classes(category == &props.active)}
                        onclick={on_click}
                    >
                        { category_label(category) }
                    </button>
                }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: Video,
    pub on_select: Callback<String>,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let video = &props.video;
    let onclick = {
        let on_select = props.on_select.clone();
        let slug = video.slug.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(slug.clone()))
    };

    html! {
        <div class="video-card" {onclick}>
            <img
                src={video.thumbnail.url.clone()}
                alt={video.title.clone()}
                class="video-thumbnail"
                loading="lazy"
            />
            <div class="video-info">
                <div class="video-title">{ &video.title }</div>
                <div class="video-meta">
                    <span class="video-duration">{ format!("⏱️ {}s", video.duration_seconds) }</span>
                    <span class="video-fps">{ format!("🎬 {}fps", video.fps) }</span>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoGridProps {
    pub videos: Vec<Video>,
    pub load_state: LoadState,
    pub on_select: Callback<String>,
}

#[function_component(VideoGrid)]
pub fn video_grid(props: &VideoGridProps) -> Html {
    let content = match &props.load_state {
        LoadState::Loading => html! {
            <div class="grid-message">{"Loading videos..."}</div>
        },
        LoadState::Failed(_) => html! {
            <div style="grid-column: 1/-1; text-align: center; padding: 40px; color: var(--text-muted);">
                { LOAD_ERROR_MESSAGE }
            </div>
        },
        LoadState::Loaded if props.videos.is_empty() => html! {
            <div class="grid-message">{"No videos in this category."}</div>
        },
        LoadState::Loaded => props
            .videos
            .iter()
            .map(|video| {
                html! {
                    <VideoCard
                        key={video.slug.clone()}
                        video={video.clone()}
                        on_select={props.on_select.clone()}
                    />
                }
            })
            .collect::<Html>(),
    };

    html! {
        <div id="videos-grid" class="videos-grid">
            { content }
        </div>
    }
}

pub fn category_classes(active: bool) -> Classes {
    classes!("category-btn", active.then_some("active"))
}

pub fn category_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_active_button_gets_active_class() {
        assert_eq!(category_classes(true), classes!("category-btn", "active"));
        assert_eq!(category_classes(false), classes!("category-btn"));
    }

    #[test]
    fn labels_are_capitalised() {
        assert_eq!(category_label("all"), "All");
        assert_eq!(category_label("dance"), "Dance");
        assert_eq!(category_label(""), "");
    }
}
