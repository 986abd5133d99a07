// src/components/item_card.rs
use crate::catalog_data::CatalogItem;
use crate::components::fallback_image::FallbackImage;
use crate::hover_cycle::{CoverFade, FadeStep, HoverCycle};
use crate::lightbox_state::LightboxRequest;
use crate::preload::Preloader;
use crate::utils::ImagePathResolver;
use crate::viewer_config::ViewerConfig;
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::{Interval, Timeout};
use std::rc::Rc;
use yew::prelude::*;

/// Thumbnails shown under the card text.
const MAX_THUMBNAILS: usize = 4;
/// If the cover never reports `transitionend` (hidden, or no CSS transition)
/// the swap happens after this delay instead.
const FADE_GUARD_MS: u32 = 800;

#[derive(Properties, PartialEq)]
pub struct ItemCardProps {
    pub item: CatalogItem,
    pub config: Rc<ViewerConfig>,
    pub on_open_lightbox: Callback<LightboxRequest>,
}

pub enum ItemCardMsg {
    PointerEnter,
    PointerLeave,
    Tick,
    FadedOut,
    FadeGuard(u64),
    FadeIn(u64),
}

pub struct ItemCard {
    hover: HoverCycle,
    timer: Option<Interval>,
    fade: CoverFade,
    fade_guard: Option<Timeout>,
    frame: Option<AnimationFrame>,
    _preloader: Preloader,
}

impl Component for ItemCard {
    type Message = ItemCardMsg;
    type Properties = ItemCardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let item = &ctx.props().item;
        let resolver = ctx.props().config.resolver();

        Self {
            hover: HoverCycle::new(item.images.len()),
            timer: None,
            fade: CoverFade::new(),
            fade_guard: None,
            frame: None,
            _preloader: if item.has_images() {
                Preloader::warm(&item.images, &resolver)
            } else {
                Preloader::default()
            },
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ItemCardMsg::PointerEnter => {
                // never leave two intervals running for one card
                self.timer = None;
                if self.hover.enter() {
                    log::debug!(
                        "Card {} cycling from image {}",
                        ctx.props().item.id,
                        self.hover.index()
                    );
                    let link = ctx.link().clone();
                    self.timer = Some(Interval::new(
                        ctx.props().config.hover_interval(),
                        move || link.send_message(ItemCardMsg::Tick),
                    ));
                }
                false
            }
            ItemCardMsg::Tick => match self.hover.tick() {
                Some(index) => self.begin_fade(ctx, index),
                None => false,
            },
            ItemCardMsg::PointerLeave => {
                self.timer = None;
                match self.hover.leave() {
                    Some(index) => self.begin_fade(ctx, index),
                    None => false,
                }
            }
            // transitionend of the fade-in does not swap
            ItemCardMsg::FadedOut => match self.fade.faded_out() {
                Some(generation) => self.schedule_fade_in(ctx, generation),
                None => false,
            },
            ItemCardMsg::FadeGuard(generation) => match self.fade.guard(generation) {
                Some(generation) => self.schedule_fade_in(ctx, generation),
                None => false,
            },
            ItemCardMsg::FadeIn(generation) => {
                if !self.fade.frame(generation) {
                    log::debug!("Dropping stale fade-in for card {}", ctx.props().item.id);
                    return false;
                }
                self.frame = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let item = &ctx.props().item;
        let resolver = ctx.props().config.resolver();

        let cover_candidates = item
            .images
            .get(self.fade.shown())
            .map(|path| resolver.candidates(path))
            .unwrap_or_default();
        let cover_class = classes!("cover", self.fade.is_faded().then_some("fade"));

        let onmouseenter = ctx.link().callback(|_: MouseEvent| ItemCardMsg::PointerEnter);
        let onmouseleave = ctx.link().callback(|_: MouseEvent| ItemCardMsg::PointerLeave);
        let ontransitionend = ctx.link().callback(|_: TransitionEvent| ItemCardMsg::FadedOut);

        html! {
            <article class="card" {onmouseenter} {onmouseleave}>
                <FallbackImage
                    class={cover_class}
                    alt={item.title.clone()}
                    lazy=true
                    candidates={cover_candidates}
                    {ontransitionend}
                />
                <div class="content">
                    <h3>{ item.title.clone() }</h3>
                    <p>{ item.desc.clone() }</p>
                    <div class="badges">
                        if !item.price_display.is_empty() {
                            <span class="badge">{ item.price_display.clone() }</span>
                        }
                        if !item.cat.is_empty() {
                            <span class="badge cat">{ item.cat.clone() }</span>
                        }
                    </div>
                    <div class="thumbgrid">
                        { for item.images.iter().take(MAX_THUMBNAILS).enumerate().map(|(index, path)| {
                            self.render_thumbnail(ctx, &resolver, index, path)
                        }) }
                    </div>
                </div>
            </article>
        }
    }
}

impl ItemCard {
    /// Start fading the cover towards `index` and arm whatever the fade
    /// step waits on.
    fn begin_fade(&mut self, ctx: &Context<Self>, index: usize) -> bool {
        match self.fade.begin(index) {
            FadeStep::AwaitTransition(generation) => {
                let link = ctx.link().clone();
                self.fade_guard = Some(Timeout::new(FADE_GUARD_MS, move || {
                    link.send_message(ItemCardMsg::FadeGuard(generation))
                }));
                true
            }
            FadeStep::Swapped(generation) => self.schedule_fade_in(ctx, generation),
        }
    }

    /// The cover has its new source; drop the guard and fade back in on the
    /// next frame.
    fn schedule_fade_in(&mut self, ctx: &Context<Self>, generation: u64) -> bool {
        self.fade_guard = None;
        let link = ctx.link().clone();
        self.frame = Some(request_animation_frame(move |_| {
            link.send_message(ItemCardMsg::FadeIn(generation))
        }));
        true
    }

    fn render_thumbnail(
        &self,
        ctx: &Context<Self>,
        resolver: &ImagePathResolver,
        index: usize,
        path: &str,
    ) -> Html {
        let item = &ctx.props().item;
        let request = LightboxRequest {
            images: item.images.clone(),
            index,
            title: item.title.clone(),
        };
        let onclick = ctx
            .props()
            .on_open_lightbox
            .reform(move |_: MouseEvent| request.clone());

        html! {
            <FallbackImage
                alt={format!("{} {}", item.title, index + 1)}
                lazy=true
                candidates={resolver.candidates(path)}
                {onclick}
            />
        }
    }
}
