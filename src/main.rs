// src/main.rs
mod catalog_data;
mod catalog_parser;
mod components;
mod error;
mod filters;
mod hover_cycle;
mod image_source;
mod lightbox_state;
mod preload;
mod utils;
mod viewer_config;

use catalog_data::CatalogItem;
use components::item_card::ItemCard;
use components::lightbox::Lightbox;
use error::LoadError;
use filters::{category_options, SortMode, ViewFilter};
use gloo_net::http::{Request, Response};
use lightbox_state::{LightboxRequest, LightboxState};
use std::rc::Rc;
use viewer_config::{ViewerConfig, CONFIG_URL};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub enum AppMsg {
    ConfigLoaded(ViewerConfig),
    CatalogLoaded(Result<Vec<CatalogItem>, LoadError>),
    Search(String),
    Category(String),
    Sort(SortMode),
    OpenLightbox(LightboxRequest),
    LightboxPrev,
    LightboxNext,
    LightboxClose,
    LightboxKey(String),
}

pub struct App {
    config: Rc<ViewerConfig>,
    items: Vec<CatalogItem>,
    categories: Vec<String>,
    filter: ViewFilter,
    // bumped on every filter change so the grid mounts fresh cards
    render_generation: u64,
    lightbox: LightboxState,
    loading: bool,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        // Config first, the catalog location may be overridden there
        ctx.link()
            .send_future(async { AppMsg::ConfigLoaded(load_viewer_config().await) });

        Self {
            config: Rc::new(ViewerConfig::default()),
            items: Vec::new(),
            categories: Vec::new(),
            filter: ViewFilter::default(),
            render_generation: 0,
            lightbox: LightboxState::new(),
            loading: true,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::ConfigLoaded(config) => {
                self.config = Rc::new(config);
                let url = self.config.catalog_url.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = load_catalog(&url).await;
                    link.send_message(AppMsg::CatalogLoaded(result));
                });
                false
            }
            AppMsg::CatalogLoaded(result) => {
                match result {
                    Ok(items) => {
                        self.categories = category_options(&items);
                        self.items = items;
                    }
                    Err(e) => {
                        log::error!("Failed to load catalog: {}", e);
                    }
                }
                self.loading = false;
                self.render_generation += 1;
                true
            }
            AppMsg::Search(term) => {
                self.filter.search = term;
                self.render_generation += 1;
                true
            }
            AppMsg::Category(category) => {
                self.filter.category = category;
                self.render_generation += 1;
                true
            }
            AppMsg::Sort(mode) => {
                self.filter.sort = mode;
                self.render_generation += 1;
                true
            }
            AppMsg::OpenLightbox(request) => {
                self.lightbox.open(request);
                true
            }
            AppMsg::LightboxPrev => self.lightbox.prev(),
            AppMsg::LightboxNext => self.lightbox.next(),
            AppMsg::LightboxClose => {
                let was_open = self.lightbox.is_open();
                self.lightbox.close();
                was_open
            }
            AppMsg::LightboxKey(key) => self.lightbox.handle_key(&key),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_open_lightbox = ctx.link().callback(AppMsg::OpenLightbox);
        let visible = self.filter.apply(&self.items);

        html! {
            <div class="app-container">
                <header class="app-header">
                    <h1>{"Katalógus"}</h1>
                </header>

                <main class="app-main">
                    { self.render_toolbar(ctx) }

                    if self.loading {
                        <div class="loading">{"Betöltés..."}</div>
                    }

                    <div id="grid" class="grid">
                        {for visible.iter().enumerate().map(|(position, item)| {
                            html! {
                                <ItemCard
                                    key={format!("{}-{}", self.render_generation, position)}
                                    item={(*item).clone()}
                                    config={self.config.clone()}
                                    on_open_lightbox={on_open_lightbox.clone()}
                                />
                            }
                        })}
                    </div>
                </main>

                <Lightbox
                    state={self.lightbox.clone()}
                    resolver={self.config.resolver()}
                    on_prev={ctx.link().callback(|_: ()| AppMsg::LightboxPrev)}
                    on_next={ctx.link().callback(|_: ()| AppMsg::LightboxNext)}
                    on_close={ctx.link().callback(|_: ()| AppMsg::LightboxClose)}
                    on_key={ctx.link().callback(AppMsg::LightboxKey)}
                />
            </div>
        }
    }
}

impl App {
    fn render_toolbar(&self, ctx: &Context<Self>) -> Html {
        let on_search = ctx.link().batch_callback(|e: InputEvent| {
            e.target_dyn_into::<web_sys::HtmlInputElement>()
                .map(|input| AppMsg::Search(input.value()))
        });
        let on_category = ctx.link().batch_callback(|e: Event| {
            e.target_dyn_into::<web_sys::HtmlSelectElement>()
                .map(|select| AppMsg::Category(select.value()))
        });
        let on_sort = ctx.link().batch_callback(|e: Event| {
            e.target_dyn_into::<web_sys::HtmlSelectElement>()
                .map(|select| AppMsg::Sort(SortMode::from_value(&select.value())))
        });

        html! {
            <div class="toolbar">
                <input
                    id="q"
                    type="search"
                    placeholder="Keresés..."
                    value={self.filter.search.clone()}
                    oninput={on_search}
                />

                <select id="cat" onchange={on_category}>
                    <option value="" selected={self.filter.category.is_empty()}>
                        {"Minden kategória"}
                    </option>
                    {for self.categories.iter().map(|category| {
                        html! {
                            <option
                                value={category.clone()}
                                selected={&self.filter.category == category}
                            >
                                {category.clone()}
                            </option>
                        }
                    })}
                </select>

                <select id="sort" onchange={on_sort}>
                    {for SortMode::all().into_iter().map(|mode| {
                        html! {
                            <option value={mode.value()} selected={self.filter.sort == mode}>
                                {mode.label()}
                            </option>
                        }
                    })}
                </select>
            </div>
        }
    }
}

async fn send(url: &str) -> Result<Response, LoadError> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|source| LoadError::Request {
            url: url.to_string(),
            source,
        })?;
    if !resp.ok() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: resp.status(),
        });
    }
    Ok(resp)
}

async fn load_catalog(url: &str) -> Result<Vec<CatalogItem>, LoadError> {
    let started = js_sys::Date::now();
    let text = send(url)
        .await?
        .text()
        .await
        .map_err(|source| LoadError::Body {
            url: url.to_string(),
            source,
        })?;

    let items = catalog_parser::parse_catalog(&text);
    log::info!(
        "Loaded {} catalog items from {} in {:.0} ms",
        items.len(),
        url,
        js_sys::Date::now() - started
    );
    Ok(items)
}

async fn fetch_viewer_config() -> Result<ViewerConfig, LoadError> {
    send(CONFIG_URL)
        .await?
        .json::<ViewerConfig>()
        .await
        .map_err(|source| LoadError::Body {
            url: CONFIG_URL.to_string(),
            source,
        })
}

/// The config file is optional; anything wrong with it means defaults.
async fn load_viewer_config() -> ViewerConfig {
    match fetch_viewer_config().await {
        Ok(config) => {
            log::info!("Loaded viewer config from {}", CONFIG_URL);
            config
        }
        Err(e) if e.is_not_found() => {
            log::info!("No {} deployed, using default viewer config", CONFIG_URL);
            ViewerConfig::default()
        }
        Err(e) => {
            log::warn!("Ignoring viewer config: {}", e);
            ViewerConfig::default()
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
