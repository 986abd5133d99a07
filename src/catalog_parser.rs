/*
// src/catalog_parser.rs
//
// Tab separated catalog parsing. The first line holds the column names, every
// further line is one record. There is no quoting: a tab always ends a field.
// Rows never fail to parse; anything missing becomes an empty string and the
// item mapping turns that into sensible defaults.
*/

use crate::catalog_data::*;

/// Split a TSV document into rows keyed by the header line. Short rows get an
/// empty string for every missing trailing column, extra cells are ignored.
pub fn parse_tsv(text: &str) -> Vec<CatalogRow> {
    let mut lines = text.trim().lines();
    let headers: Vec<&str> = match lines.next() {
        Some(header_line) => header_line.split('\t').collect(),
        None => return Vec::new(),
    };

    lines
        .map(|line| {
            let cells: Vec<&str> = line.split('\t').collect();
            headers
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    let value = cells.get(i).copied().unwrap_or_default();
                    (header.to_string(), value.to_string())
                })
                .collect()
        })
        .collect()
}

fn field<'a>(row: &'a CatalogRow, key: &str) -> &'a str {
    row.get(key).map(|v| v.trim()).unwrap_or_default()
}

/// Parse a numeric cell the lenient way the catalog is written: all whitespace
/// is dropped first so `"12 500"` reads as 12500. Empty, non-numeric and
/// non-finite values do not parse.
pub fn parse_number(raw: &str) -> Option<f64> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return None;
    }
    compact.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Format a number the way hu-HU does: decimal comma, at most three
/// fraction digits, and a no-break space between thousands groups once the
/// integer part has five or more digits (`1000` but `10 000`).
pub fn format_huf(value: f64) -> String {
    // fixed-point text stays exact for magnitudes past u64
    let fixed = format!("{:.3}", value.abs());
    let (digits, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac.trim_end_matches('0');

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 2);
    for (i, ch) in digits.chars().enumerate() {
        if digits.len() >= 5 && i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if value < 0.0 && (digits != "0" || !frac.is_empty()) {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac.is_empty() {
        out.push(',');
        out.push_str(frac);
    }
    out
}

fn format_price_cell(raw: &str) -> String {
    match parse_number(raw) {
        Some(n) => format_huf(n),
        None => raw.to_string(),
    }
}

/// Build a display item from one catalog row.
pub fn item_from_row(row: &CatalogRow) -> CatalogItem {
    let images = IMAGE_COLUMNS
        .iter()
        .map(|key| field(row, key))
        .filter(|path| !path.is_empty())
        .map(str::to_string)
        .collect();

    let starting = field(row, "ar_indulo_huf");
    let fast = field(row, "ar_gyors_huf");
    let price_display = match field(row, "price_display") {
        "" if !starting.is_empty() && !fast.is_empty() => format!(
            "Induló: {} Ft / Gyors: {} Ft",
            format_price_cell(starting),
            format_price_cell(fast)
        ),
        explicit => explicit.to_string(),
    };

    let price_numeric = ["price_numeric", "ar_indulo_huf"]
        .iter()
        .find_map(|key| parse_number(field(row, key)))
        .unwrap_or(0.0);

    let desc = match field(row, "desc") {
        "" => field(row, "desc_hu"),
        desc => desc,
    };

    CatalogItem {
        id: field(row, "id").to_string(),
        cat: field(row, "cat").to_string(),
        title: field(row, "title").to_string(),
        desc: desc.to_string(),
        price_display,
        price_numeric,
        images,
    }
}

/// Parse a whole TSV document into display items, in file order.
pub fn parse_catalog(text: &str) -> Vec<CatalogItem> {
    parse_tsv(text).iter().map(item_from_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> CatalogRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_tsv_uses_header_keys() {
        let rows = parse_tsv("id\ttitle\tcat\r\n1\tSzék\tBútor\r\n2\tLámpa\tVilágítás\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["title"], "Szék");
        assert_eq!(rows[1]["cat"], "Világítás");
    }

    #[test]
    fn test_short_row_gets_empty_fields() {
        let rows = parse_tsv("id\ttitle\tcat\timg1\n5\tPolc");
        assert_eq!(rows[0]["title"], "Polc");
        assert_eq!(rows[0]["cat"], "");
        assert_eq!(rows[0]["img1"], "");
    }

    #[test]
    fn test_empty_document() {
        assert!(parse_tsv("").is_empty());
        assert!(parse_tsv("id\ttitle\n").is_empty());
    }

    #[test]
    fn test_synthesized_price_label() {
        let item = item_from_row(&row(&[
            ("title", "Kanapé"),
            ("price_display", ""),
            ("ar_indulo_huf", "1000"),
            ("ar_gyors_huf", "2000"),
        ]));
        assert_eq!(
            item.price_display,
            "Induló: 1000 Ft / Gyors: 2000 Ft"
        );
        assert_eq!(item.price_numeric, 1000.0);
    }

    #[test]
    fn test_explicit_price_display_wins() {
        let item = item_from_row(&row(&[
            ("price_display", "  Egyedi ár  "),
            ("ar_indulo_huf", "1000"),
            ("ar_gyors_huf", "2000"),
            ("price_numeric", "1500"),
        ]));
        assert_eq!(item.price_display, "Egyedi ár");
        assert_eq!(item.price_numeric, 1500.0);
    }

    #[test]
    fn test_half_price_pair_is_not_synthesized() {
        let item = item_from_row(&row(&[("ar_indulo_huf", "1000")]));
        assert_eq!(item.price_display, "");
        assert_eq!(item.price_numeric, 1000.0);
    }

    #[test]
    fn test_no_price_fields() {
        let item = item_from_row(&row(&[("id", "1"), ("title", "Váza")]));
        assert_eq!(item.price_numeric, 0.0);
        assert_eq!(item.price_display, "");
    }

    #[test]
    fn test_price_numeric_falls_back_when_unparseable() {
        let item = item_from_row(&row(&[
            ("price_numeric", "n/a"),
            ("ar_indulo_huf", "12 500"),
        ]));
        assert_eq!(item.price_numeric, 12500.0);
    }

    #[test]
    fn test_images_trimmed_and_filtered() {
        let item = item_from_row(&row(&[
            ("img1", " a.jpg "),
            ("img2", ""),
            ("img3", "c.jpg"),
            ("img4", "   "),
        ]));
        assert_eq!(item.images, vec!["a.jpg".to_string(), "c.jpg".to_string()]);
    }

    #[test]
    fn test_desc_falls_back_to_hungarian_column() {
        let item = item_from_row(&row(&[("desc", " "), ("desc_hu", " Leírás ")]));
        assert_eq!(item.desc, "Leírás");
        let item = item_from_row(&row(&[("desc", "Text"), ("desc_hu", "Leírás")]));
        assert_eq!(item.desc, "Text");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number(" 1 234,5 "), None);
        assert_eq!(parse_number("1 234.5"), Some(1234.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn test_format_huf() {
        assert_eq!(format_huf(0.0), "0");
        assert_eq!(format_huf(999.0), "999");
        assert_eq!(format_huf(1000.0), "1000");
        assert_eq!(format_huf(9999.0), "9999");
        assert_eq!(format_huf(10000.0), "10\u{a0}000");
        assert_eq!(format_huf(1234567.0), "1\u{a0}234\u{a0}567");
        assert_eq!(format_huf(1500.25), "1500,25");
        assert_eq!(format_huf(12500.125), "12\u{a0}500,125");
        assert_eq!(format_huf(0.0004), "0");
        assert_eq!(format_huf(-2500.0), "-2500");
        assert_eq!(format_huf(-25000.0), "-25\u{a0}000");
        assert_eq!(format_huf(-0.0001), "0");
    }

    #[test]
    fn test_format_huf_beyond_integer_range() {
        assert_eq!(
            format_huf(1e20),
            "100\u{a0}000\u{a0}000\u{a0}000\u{a0}000\u{a0}000\u{a0}000"
        );
    }

    #[test]
    fn test_unparseable_price_cell_is_kept_verbatim() {
        let item = item_from_row(&row(&[
            ("ar_indulo_huf", "hívjon"),
            ("ar_gyors_huf", "3000"),
        ]));
        assert_eq!(item.price_display, "Induló: hívjon Ft / Gyors: 3000 Ft");
        assert_eq!(item.price_numeric, 0.0);
    }

    #[test]
    fn test_parse_catalog_keeps_order() {
        let items = parse_catalog("id\ttitle\n1\tB\n2\tA\n");
        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }
}
