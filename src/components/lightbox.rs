// src/components/lightbox.rs
use crate::components::fallback_image::FallbackImage;
use crate::lightbox_state::LightboxState;
use crate::utils::ImagePathResolver;
use gloo::events::EventListener;
use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub state: LightboxState,
    pub resolver: ImagePathResolver,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
    pub on_close: Callback<()>,
    /// Raw `KeyboardEvent::key` values while the lightbox is open.
    pub on_key: Callback<String>,
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let open = props.state.is_open();

    // ------ KEYBOARD NAVIGATION ------
    {
        let on_key = props.on_key.clone();
        use_effect_with(open, move |open| {
            let listener = open.then(|| {
                EventListener::new(&document(), "keydown", move |event| {
                    if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                        on_key.emit(keyboard_event.key());
                    }
                })
            });

            // Cleanup closure
            || drop(listener)
        });
    }

    let candidates = props
        .state
        .current_image()
        .map(|path| props.resolver.candidates(path))
        .unwrap_or_default();
    let caption = if props.state.images().is_empty() {
        String::new()
    } else {
        props.state.caption()
    };

    let prev = props.on_prev.reform(|_: MouseEvent| ());
    let next = props.on_next.reform(|_: MouseEvent| ());
    let close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div
            id="lightbox"
            class={classes!("lightbox", open.then_some("open"))}
            aria-hidden={(!open).to_string()}
        >
            <button class="lb-prev" onclick={prev} title="Előző (←)">{"‹"}</button>
            <figure class="lb-figure">
                <FallbackImage
                    id="lb-img"
                    alt={props.state.title().to_string()}
                    {candidates}
                />
                <figcaption id="lb-caption">{ caption }</figcaption>
            </figure>
            <button class="lb-next" onclick={next} title="Következő (→)">{"›"}</button>
            <button class="lb-close" onclick={close} title="Bezárás (Esc)">{"×"}</button>
        </div>
    }
}
