use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Fraction of a section that must be on screen before it fades in.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

const TRANSITION: &str = "transition: opacity 0.6s ease, transform 0.6s ease;";

pub fn section_style(shown: bool) -> String {
    if shown {
        format!("opacity: 1; transform: translateY(0); {TRANSITION}")
    } else {
        format!("opacity: 0; transform: translateY(20px); {TRANSITION}")
    }
}

/// Observes one element and fires its callback the first time it becomes
/// visible. Disconnects after firing and on drop.
pub struct OneShotObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl OneShotObserver {
    pub fn observe(element: &Element, on_visible: impl FnOnce() + 'static) -> Result<Self, JsValue> {
        let mut on_visible = Some(on_visible);
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
            if !intersecting {
                return;
            }
            if let Some(on_visible) = on_visible.take() {
                on_visible();
                observer.disconnect();
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for OneShotObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[derive(Properties, PartialEq)]
pub struct FadeInSectionProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(FadeInSection)]
pub fn fade_in_section(props: &FadeInSectionProps) -> Html {
    let node_ref = use_node_ref();
    let shown = use_state_eq(|| false);

    {
        let node_ref = node_ref.clone();
        let shown = shown.clone();
        use_effect_with((), move |_| {
            let observer = node_ref.cast::<Element>().and_then(|element| {
                let on_visible = {
                    let shown = shown.clone();
                    move || shown.set(true)
                };
                match OneShotObserver::observe(&element, on_visible) {
                    Ok(observer) => Some(observer),
                    Err(e) => {
                        log::debug!("IntersectionObserver unavailable: {:?}", e);
                        shown.set(true);
                        None
                    }
                }
            });
            move || drop(observer)
        });
    }

    html! {
        <section
            id={props.id.clone()}
            class={props.class.clone()}
            style={section_style(*shown)}
            ref={node_ref}
        >
            { for props.children.iter() }
        </section>
    }
}
