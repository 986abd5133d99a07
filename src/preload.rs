// src/preload.rs
use crate::image_source::FallbackChain;
use crate::utils::ImagePathResolver;
use gloo_events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlImageElement;

/// An off-screen image walking its candidate list. Never attached to the
/// document; it only exists so the browser cache is warm when the visible
/// slot asks for the same URL.
struct PreloadHandle {
    _image: HtmlImageElement,
    _on_error: EventListener,
}

impl PreloadHandle {
    fn start(candidates: Vec<String>) -> Option<Self> {
        let image = HtmlImageElement::new().ok()?;
        let chain = Rc::new(RefCell::new(FallbackChain::new(candidates)));
        let first = chain.borrow().current_url().map(str::to_string)?;

        let on_error = {
            let target = image.clone();
            let chain = chain.clone();
            EventListener::new(&image, "error", move |_| {
                if let Some(next) = chain.borrow_mut().fail() {
                    target.set_src(next);
                }
            })
        };

        image.set_src(&first);
        Some(Self {
            _image: image,
            _on_error: on_error,
        })
    }
}

/// Cache warmer for every image of one item. Dropping it detaches the error
/// listeners, which also ends any chain still in flight.
#[derive(Default)]
pub struct Preloader {
    _handles: Vec<PreloadHandle>,
}

impl Preloader {
    pub fn warm(paths: &[String], resolver: &ImagePathResolver) -> Self {
        let handles = paths
            .iter()
            .filter_map(|path| PreloadHandle::start(resolver.candidates(path)))
            .collect();
        Self { _handles: handles }
    }
}
