// src/components/fallback_image.rs
use crate::image_source::{ImageSlot, LoadState};
use std::rc::Rc;
use yew::prelude::*;

pub enum SlotAction {
    Reset(Vec<String>),
    Failed(u64),
    Loaded(u64),
}

impl Reducible for ImageSlot {
    type Action = SlotAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut slot = (*self).clone();
        let changed = match action {
            SlotAction::Reset(candidates) => slot.reset(candidates),
            SlotAction::Failed(generation) => slot.fail(generation),
            SlotAction::Loaded(generation) => slot.succeed(generation),
        };
        if changed {
            Rc::new(slot)
        } else {
            self
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FallbackImageProps {
    /// URLs to try in order; see `ImagePathResolver::candidates`.
    pub candidates: Vec<String>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub alt: AttrValue,
    #[prop_or_default]
    pub lazy: bool,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub ontransitionend: Callback<TransitionEvent>,
}

/// `<img>` that walks its candidate list on `error` and hides itself once the
/// list runs out. A new candidate list starts a new generation, so reports
/// for the previous list are ignored.
#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let slot = use_reducer(|| ImageSlot::new(props.candidates.clone()));

    {
        let slot = slot.clone();
        use_effect_with(props.candidates.clone(), move |candidates| {
            slot.dispatch(SlotAction::Reset(candidates.clone()));
        });
    }

    let generation = slot.generation();
    let onerror = {
        let slot = slot.clone();
        Callback::from(move |_: Event| slot.dispatch(SlotAction::Failed(generation)))
    };
    let onload = {
        let slot = slot.clone();
        Callback::from(move |_: Event| slot.dispatch(SlotAction::Loaded(generation)))
    };

    let src = slot
        .chain()
        .current_url()
        .map(|url| AttrValue::from(url.to_string()));
    let hidden = slot.chain().state() == LoadState::Exhausted;

    html! {
        <img
            id={props.id.clone()}
            class={props.class.clone()}
            alt={props.alt.clone()}
            src={src}
            style={hidden.then_some("display:none")}
            loading={props.lazy.then_some("lazy")}
            decoding="async"
            {onerror}
            {onload}
            onclick={props.onclick.clone()}
            ontransitionend={props.ontransitionend.clone()}
        />
    }
}
