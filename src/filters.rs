// src/filters.rs
use crate::catalog_data::CatalogItem;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Catalog file order.
    #[default]
    Catalog,
    TitleAsc,
    TitleDesc,
    PriceAsc,
    PriceDesc,
}

impl SortMode {
    pub fn all() -> [SortMode; 5] {
        [
            SortMode::Catalog,
            SortMode::TitleAsc,
            SortMode::TitleDesc,
            SortMode::PriceAsc,
            SortMode::PriceDesc,
        ]
    }

    /// Parse a `<select>` value. Unknown values keep catalog order.
    pub fn from_value(value: &str) -> Self {
        match value {
            "title-asc" => SortMode::TitleAsc,
            "title-desc" => SortMode::TitleDesc,
            "price-asc" => SortMode::PriceAsc,
            "price-desc" => SortMode::PriceDesc,
            _ => SortMode::Catalog,
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            SortMode::Catalog => "",
            SortMode::TitleAsc => "title-asc",
            SortMode::TitleDesc => "title-desc",
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Catalog => "Alapértelmezett sorrend",
            SortMode::TitleAsc => "Név (A–Z)",
            SortMode::TitleDesc => "Név (Z–A)",
            SortMode::PriceAsc => "Ár (növekvő)",
            SortMode::PriceDesc => "Ár (csökkenő)",
        }
    }

    fn compare(&self, a: &CatalogItem, b: &CatalogItem) -> Ordering {
        match self {
            SortMode::Catalog => Ordering::Equal,
            SortMode::TitleAsc => collate(&a.title, &b.title),
            SortMode::TitleDesc => collate(&b.title, &a.title),
            SortMode::PriceAsc => a.price_numeric.total_cmp(&b.price_numeric),
            SortMode::PriceDesc => b.price_numeric.total_cmp(&a.price_numeric),
        }
    }
}

/// Current state of the search box, category select and sort select.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewFilter {
    pub search: String,
    pub category: String,
    pub sort: SortMode,
}

impl ViewFilter {
    /// Items to display, in display order.
    pub fn apply<'a>(&self, items: &'a [CatalogItem]) -> Vec<&'a CatalogItem> {
        let term = self.search.to_lowercase();
        let mut view: Vec<&CatalogItem> = items
            .iter()
            .filter(|item| self.category.is_empty() || item.cat == self.category)
            .filter(|item| term.is_empty() || item.matches_term(&term))
            .collect();
        // sort_by is stable, equal keys keep catalog order
        view.sort_by(|a, b| self.sort.compare(a, b));
        view
    }
}

/// Distinct non-empty categories, collated.
pub fn category_options(items: &[CatalogItem]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for item in items {
        if !item.cat.is_empty() && !categories.contains(&item.cat) {
            categories.push(item.cat.clone());
        }
    }
    categories.sort_by(|a, b| collate(a, b));
    categories
}

/// Primary weight of a character: its base letter plus a slot so that the
/// Hungarian umlaut vowels sort as letters of their own after o and u.
fn primary_key(c: char) -> (char, u8) {
    match c {
        'á' | 'à' | 'â' | 'ä' => ('a', 0),
        'é' | 'è' | 'ê' | 'ë' => ('e', 0),
        'í' | 'ì' | 'î' | 'ï' => ('i', 0),
        'ó' | 'ò' | 'ô' => ('o', 0),
        'ö' | 'ő' => ('o', 1),
        'ú' | 'ù' | 'û' => ('u', 0),
        'ü' | 'ű' => ('u', 1),
        other => (other, 0),
    }
}

fn lower(s: &str) -> Vec<char> {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Locale-aware string comparison for hu-HU: accents are ignored at first
/// (except ö/ő and ü/ű, which are separate letters), then unaccented before
/// accented, then lowercase before uppercase.
pub fn collate(a: &str, b: &str) -> Ordering {
    let (la, lb) = (lower(a), lower(b));
    la.iter()
        .map(|&c| primary_key(c))
        .cmp(lb.iter().map(|&c| primary_key(c)))
        .then_with(|| la.cmp(&lb))
        .then_with(|| {
            let case = |s: &str| s.chars().map(char::is_uppercase).collect::<Vec<_>>();
            case(a).cmp(&case(b))
        })
        .then_with(|| a.cmp(b))
}
