use crate::chrome::scroll::scroll_to_anchor;
use gloo_events::EventListener;
use yew::prelude::*;

pub const SHADOW_THRESHOLD: f64 = 100.0;
const SHADOW: &str = "0 4px 16px rgba(0, 0, 0, 0.3)";

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("gallery", "Gallery"),
    ("stream", "Stream"),
    ("integration", "Integration"),
];

pub fn header_style(scroll_offset: f64) -> String {
    if scroll_offset > SHADOW_THRESHOLD {
        format!("box-shadow: {SHADOW};")
    } else {
        "box-shadow: none;".to_string()
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub app_name: AttrValue,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let style = use_state_eq(|| header_style(0.0));

    {
        let style = style.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                let target = window.clone();
                EventListener::new(&target, "scroll", move |_| {
                    let offset = window.page_y_offset().unwrap_or(0.0);
                    style.set(header_style(offset));
                })
            });
            move || drop(listener)
        });
    }

    html! {
        <header class="header" style={(*style).clone()}>
            <div class="header-content">
                <a class="logo" href="#gallery" onclick={anchor_click("gallery")}>
                    { &*props.app_name }
                </a>
                <nav class="nav">
                    { for NAV_LINKS.iter().map(|&(id, label)| html! {
                        <a href={format!("#{id}")} onclick={anchor_click(id)}>{ label }</a>
                    })}
                </nav>
            </div>
        </header>
    }
}

fn anchor_click(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_anchor(id);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadow_only_past_threshold() {
        assert_eq!(header_style(0.0), "box-shadow: none;");
        assert_eq!(header_style(100.0), "box-shadow: none;");
        assert_eq!(
            header_style(100.5),
            "box-shadow: 0 4px 16px rgba(0, 0, 0, 0.3);"
        );
    }
}
