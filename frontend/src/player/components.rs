use crate::clipboard::CopyButton;
use crate::models::Video;
use crate::player::view::{PlayerView, EMBED_PLACEHOLDER_MARKER};
use crate::utils::selector_label;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::{Event, HtmlSelectElement};
use yew::prelude::*;

// Reads "value" from the event target without casting to a concrete element.
fn event_value(e: &Event) -> Option<String> {
    let target = e.target()?;
    let js_value = Reflect::get(target.as_ref(), &JsValue::from_str("value")).ok()?;
    js_value.as_string()
}

/// Value the selector must hold: the selected slug, or the placeholder's empty value.
pub fn selector_value(selected: Option<&str>) -> &str {
    selected.unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct VideoSelectorProps {
    pub videos: Vec<Video>,
    pub selected: Option<String>,
    pub on_select: Callback<String>,
}

#[function_component(VideoSelector)]
pub fn video_selector(props: &VideoSelectorProps) -> Html {
    let select_ref = use_node_ref();

    // Option `selected` attributes go stale after a manual pick; set the value itself.
    {
        let select_ref = select_ref.clone();
        use_effect_with(
            (props.selected.clone(), props.videos.len()),
            move |(selected, _)| {
                if let Some(select) = select_ref.cast::<HtmlSelectElement>() {
                    select.set_value(selector_value(selected.as_deref()));
                }
                || ()
            },
        );
    }

    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            if let Some(slug) = event_value(&e).filter(|slug| !slug.is_empty()) {
                on_select.emit(slug);
            }
        })
    };

    html! {
        <select id="video-selector" class="video-selector" ref={select_ref} {onchange}>
            <option value="" selected={props.selected.is_none()}>
                {"Choose a video..."}
            </option>
            { for props.videos.iter().map(|video| html! {
                <option
                    key={video.slug.clone()}
                    value={video.slug.clone()}
                    selected={props.selected.as_deref() == Some(video.slug.as_str())}
                >
                    { selector_label(video) }
                </option>
            })}
        </select>
    }
}

#[derive(Properties, PartialEq)]
pub struct UrlFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: String,
}

#[function_component(UrlField)]
pub fn url_field(props: &UrlFieldProps) -> Html {
    html! {
        <div class="url-field">
            <span class="url-label">{ &*props.label }</span>
            <div class="url-input-group">
                <input
                    id={props.id.clone()}
                    type="text"
                    readonly={true}
                    placeholder="Select a video first"
                    value={props.value.clone()}
                />
                <CopyButton value={props.value.clone()} />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StreamPlayerProps {
    pub view: PlayerView,
}

#[function_component(StreamPlayer)]
pub fn stream_player(props: &StreamPlayerProps) -> Html {
    let view = &props.view;
    let loaded = view.is_loaded();
    let src = loaded.then(|| view.video_url.clone());
    let poster = loaded.then(|| view.thumbnail_url.clone());

    html! {
        <div class="stream-layout">
            <div class="player-column">
                <div class="player-wrapper">
                    <video id="stream-video" controls={true} playsinline={true} {src} {poster} />
                    <div id="player-overlay" class={classes!("player-overlay", loaded.then_some("hidden"))}>
                        <p>{"Select a video to start streaming"}</p>
                    </div>
                </div>
                <div class="stream-stats">
                    <div class="stat">
                        <span class="stat-label">{"Duration"}</span>
                        <span id="stream-duration" class="stat-value">{ &view.duration }</span>
                    </div>
                    <div class="stat">
                        <span class="stat-label">{"Size"}</span>
                        <span id="stream-size" class="stat-value">{ &view.size }</span>
                    </div>
                    <div class="stat">
                        <span class="stat-label">{"Frame rate"}</span>
                        <span id="stream-fps" class="stat-value">{ &view.fps }</span>
                    </div>
                </div>
            </div>

            <div class="player-panel">
                <div class="player-info">
                    <div class="info-row">
                        <span class="info-label">{"Status"}</span>
                        <span id="player-status" class="info-value">{ &view.status }</span>
                    </div>
                    <div class="info-row">
                        <span class="info-label">{"Quality"}</span>
                        <span id="player-quality" class="info-value">{ &view.quality }</span>
                    </div>
                    <div class="info-row">
                        <span class="info-label">{"Codec"}</span>
                        <span id="player-codec" class="info-value">{ &view.codec }</span>
                    </div>
                </div>

                <UrlField id="video-url" label="Video URL" value={view.video_url.clone()} />
                <UrlField id="thumbnail-url" label="Thumbnail URL" value={view.thumbnail_url.clone()} />

                <div class="embed-section">
                    <div class="embed-header">
                        <span>{"Embed code"}</span>
                        <CopyButton
                            value={view.embed_code.clone()}
                            refuse_containing={AttrValue::Static(EMBED_PLACEHOLDER_MARKER)}
                        />
                    </div>
                    <pre id="embed-code" class="code-block"><code>{ &view.embed_code }</code></pre>
                </div>
            </div>
        </div>
    }
}
