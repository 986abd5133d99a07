// src/catalog_data.rs
use std::collections::HashMap;

/// One parsed TSV data row, keyed by header name.
pub type CatalogRow = HashMap<String, String>;

/// Columns holding image paths, in display order.
pub const IMAGE_COLUMNS: [&str; 4] = ["img1", "img2", "img3", "img4"];

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub id: String,
    pub cat: String,
    pub title: String,
    pub desc: String,
    pub price_display: String,
    pub price_numeric: f64,
    pub images: Vec<String>,
}

impl CatalogItem {
    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }

    /// Case-insensitive substring match on title, description and category.
    /// `term` must already be lowercase.
    pub fn matches_term(&self, term: &str) -> bool {
        [&self.title, &self.desc, &self.cat]
            .iter()
            .any(|field| field.to_lowercase().contains(term))
    }
}

/// Builders for test fixtures; real items come from `item_from_row`.
#[cfg(test)]
impl CatalogItem {
    pub fn new(id: String, title: String) -> Self {
        Self {
            id,
            cat: String::new(),
            title,
            desc: String::new(),
            price_display: String::new(),
            price_numeric: 0.0,
            images: Vec::new(),
        }
    }

    pub fn with_category(mut self, cat: &str) -> Self {
        self.cat = cat.to_string();
        self
    }

    pub fn with_desc(mut self, desc: &str) -> Self {
        self.desc = desc.to_string();
        self
    }

    pub fn with_price(mut self, price_numeric: f64) -> Self {
        self.price_numeric = price_numeric;
        self
    }

    pub fn with_images(mut self, images: &[&str]) -> Self {
        self.images = images.iter().map(|s| s.to_string()).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let item = CatalogItem::new("7".to_string(), "Tölgy asztal".to_string())
            .with_category("Bútor")
            .with_price(12500.0)
            .with_images(&["a.jpg", "b.jpg"]);
        assert_eq!(item.cat, "Bútor");
        assert_eq!(item.price_numeric, 12500.0);
        assert!(item.has_images());
        assert!(item.price_display.is_empty());
    }

    #[test]
    fn test_matches_term() {
        let item = CatalogItem::new("1".to_string(), "Tölgy Asztal".to_string())
            .with_desc("Masszív, Kézzel faragott")
            .with_category("Bútor");
        assert!(item.matches_term("asztal"));
        assert!(item.matches_term("kézzel"));
        assert!(item.matches_term("bútor"));
        assert!(!item.matches_term("szék"));
    }
}
