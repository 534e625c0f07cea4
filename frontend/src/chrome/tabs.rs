use crate::clipboard::CopyButton;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    pub name: &'static str,
    pub title: &'static str,
    pub code: String,
}

pub fn tab_panel_id(name: &str) -> String {
    format!("{name}-tab")
}

pub fn tab_code_id(name: &str) -> String {
    format!("{name}-code")
}

pub fn tab_button_classes(active: bool) -> Classes {
    classes!("tab-btn", active.then_some("active"))
}

pub fn tab_content_classes(active: bool) -> Classes {
    classes!("tab-content", active.then_some("active"))
}

/// Code samples showing how to consume the catalog served at `catalog_url`.
pub fn integration_tabs(catalog_url: &str) -> Vec<Tab> {
    vec![
        Tab {
            name: "html",
            title: "HTML",
            code: r#"<video width="1080" height="1920" controls poster="THUMBNAIL_URL">
  <source src="VIDEO_URL" type="video/mp4">
</video>"#
                .to_string(),
        },
        Tab {
            name: "javascript",
            title: "JavaScript",
            code: format!(
                r#"const response = await fetch("{catalog_url}");
const {{ videos }} = await response.json();
videos.forEach((video) => {{
  console.log(video.slug, video.sources[0].url);
}});"#
            ),
        },
        Tab {
            name: "json",
            title: "JSON",
            code: r#"{
  "videos": [
    {
      "slug": "example-dance",
      "title": "Example",
      "duration_seconds": 8,
      "fps": 30,
      "size_bytes": 2621440,
      "thumbnail": { "url": "https://cdn.example/example.jpg" },
      "sources": [
        { "url": "https://cdn.example/example.mp4", "quality": "1080p", "codec": "h264" }
      ]
    }
  ]
}"#
            .to_string(),
        },
    ]
}

#[derive(Properties, PartialEq)]
pub struct TabsProps {
    pub tabs: Vec<Tab>,
}

#[function_component(Tabs)]
pub fn tabs(props: &TabsProps) -> Html {
    let first = props.tabs.first().map(|t| t.name).unwrap_or_default();
    let active = use_state_eq(|| first);

    let on_switch = {
        let active = active.clone();
        Callback::from(move |name: &'static str| active.set(name))
    };

    html! {
        <div class="tabs">
            <div class="tab-buttons">
                { for props.tabs.iter().map(|tab| {
                    let name = tab.name;
                    let on_switch = on_switch.clone();
                    html! {
                        <button
                            key={name}
                            class={tab_button_classes(*active == name)}
                            onclick={Callback::from(move |_: MouseEvent| on_switch.emit(name))}
                        >
                            { tab.title }
                        </button>
                    }
                })}
            </div>
            { for props.tabs.iter().map(|tab| html! {
                <div
                    key={tab.name}
                    id={tab_panel_id(tab.name)}
                    class={tab_content_classes(*active == tab.name)}
                >
                    <div class="code-header">
                        <span>{ tab.title }</span>
                        <CopyButton value={tab.code.clone()} />
                    </div>
                    <pre class="code-block"><code id={tab_code_id(tab.name)}>{ &tab.code }</code></pre>
                </div>
            })}
        </div>
    }
}
