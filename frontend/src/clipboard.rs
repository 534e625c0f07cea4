use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::JsFuture;
use yew::prelude::*;

pub const FEEDBACK_MS: u32 = 2000;
pub const COPIED_LABEL: &str = "Copied!";
const COPIED_STYLE: &str = "background: var(--secondary); color: white;";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CopyFeedback {
    Idle,
    Copied,
}

impl CopyFeedback {
    pub fn label<'a>(&self, original: &'a str) -> &'a str {
        match self {
            CopyFeedback::Idle => original,
            CopyFeedback::Copied => COPIED_LABEL,
        }
    }

    pub fn classes(&self, base: &Classes) -> Classes {
        let mut classes = base.clone();
        if *self == CopyFeedback::Copied {
            classes.push("copied");
        }
        classes
    }

    pub fn style(&self) -> Option<&'static str> {
        match self {
            CopyFeedback::Idle => None,
            CopyFeedback::Copied => Some(COPIED_STYLE),
        }
    }
}

/// Empty values are never copied, nor values still showing a placeholder.
pub fn should_copy(value: &str, refuse_containing: Option<&str>) -> bool {
    if value.is_empty() {
        return false;
    }
    match refuse_containing {
        Some(marker) => !value.contains(marker),
        None => true,
    }
}

/// Feedback to show once a clipboard write settles. Failed writes show none.
pub fn feedback_after(result: &Result<(), String>) -> Option<CopyFeedback> {
    result.as_ref().ok().map(|_| CopyFeedback::Copied)
}

pub async fn write_text(value: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window available")?;
    let promise = window.navigator().clipboard().write_text(value);

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("Clipboard write failed: {:?}", e))
}

#[derive(Properties, PartialEq)]
pub struct CopyButtonProps {
    pub value: String,
    #[prop_or(AttrValue::Static("Copy"))]
    pub label: AttrValue,
    #[prop_or_default]
    pub refuse_containing: Option<AttrValue>,
    #[prop_or(classes!("copy-btn"))]
    pub class: Classes,
}

#[function_component(CopyButton)]
pub fn copy_button(props: &CopyButtonProps) -> Html {
    let feedback = use_state_eq(|| CopyFeedback::Idle);
    let revert = use_mut_ref(|| None::<Timeout>);

    let onclick = {
        let value = props.value.clone();
        let refuse_containing = props.refuse_containing.clone();
        let feedback = feedback.clone();
        let revert = revert.clone();

        Callback::from(move |_: MouseEvent| {
            if !should_copy(&value, refuse_containing.as_deref()) {
                return;
            }

            let value = value.clone();
            let feedback = feedback.clone();
            let revert = revert.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = write_text(&value).await;
                if let Err(e) = &result {
                    log::warn!("Copy to clipboard failed: {}", e);
                }
                if let Some(next) = feedback_after(&result) {
                    feedback.set(next);
                    let feedback = feedback.clone();
                    // Replacing a pending timeout cancels it
                    *revert.borrow_mut() = Some(Timeout::new(FEEDBACK_MS, move || {
                        feedback.set(CopyFeedback::Idle);
                    }));
                }
            });
        })
    };

    html! {
        <button
            class={feedback.classes(&props.class)}
            style={feedback.style()}
            {onclick}
        >
            { feedback.label(&props.label) }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_are_not_copied() {
        assert!(!should_copy("", None));
        assert!(!should_copy("", Some("Select a video")));
    }

    #[test]
    fn placeholder_is_refused() {
        let placeholder = "<!-- Select a video to generate embed code -->";
        assert!(!should_copy(placeholder, Some("Select a video")));
        assert!(should_copy("<video></video>", Some("Select a video")));
        assert!(should_copy(placeholder, None));
    }

    #[test]
    fn feedback_reverts_to_original_label_and_style() {
        let base = classes!("copy-btn");

        let copied = CopyFeedback::Copied;
        assert_eq!(copied.label("Copy URL"), "Copied!");
        assert_eq!(copied.classes(&base), classes!("copy-btn", "copied"));
        assert!(copied.style().is_some());

        let idle = CopyFeedback::Idle;
        assert_eq!(idle.label("Copy URL"), "Copy URL");
        assert_eq!(idle.classes(&base), base);
        assert_eq!(idle.style(), None);
    }

    #[test]
    fn successful_write_shows_copied_then_reverts_after_two_seconds() {
        assert_eq!(feedback_after(&Ok(())), Some(CopyFeedback::Copied));
        assert_eq!(FEEDBACK_MS, 2000);
    }

    #[test]
    fn failed_write_shows_no_feedback() {
        let denied = Err("Clipboard write failed: NotAllowedError".to_string());
        assert_eq!(feedback_after(&denied), None);
    }
}
