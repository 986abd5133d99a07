pub mod fallback_image;
pub mod item_card;
pub mod lightbox;
