// src/utils.rs
use urlencoding::encode;

/// Percent-encode every segment of a slash separated path, keeping the
/// separators themselves intact.
pub fn encode_path_segments(path: &str) -> String {
    path.split('/')
        .map(|segment| encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Remove a single leading `./` or `/` from a catalog image path.
pub fn clean_image_path(raw: &str) -> &str {
    raw.strip_prefix("./")
        .or_else(|| raw.strip_prefix('/'))
        .unwrap_or(raw)
}

/// Turns catalog image paths into the ordered list of URLs the browser should
/// try. Catalog paths are relative, and depending on how the site was
/// deployed the files can live under several different roots.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePathResolver {
    /// Folder holding the generated site when the parent directory is served.
    pub alternate_root: String,
    /// Folder used when images were copied into a dedicated subdirectory.
    pub images_root: String,
}

impl Default for ImagePathResolver {
    fn default() -> Self {
        Self {
            alternate_root: String::from("site_out_new"),
            images_root: String::from("images"),
        }
    }
}

impl ImagePathResolver {
    pub fn new(alternate_root: &str, images_root: &str) -> Self {
        Self {
            alternate_root: alternate_root.trim_matches('/').to_string(),
            images_root: images_root.trim_matches('/').to_string(),
        }
    }

    /// Candidate URLs for `raw`, most likely first. An empty path means
    /// "no image" and yields no candidates.
    pub fn candidates(&self, raw: &str) -> Vec<String> {
        let clean = clean_image_path(raw.trim());
        if clean.is_empty() {
            return Vec::new();
        }
        let encoded = encode_path_segments(clean);

        vec![
            format!("./{}", encoded),
            format!("./{}", clean),
            format!("./{}/{}", self.alternate_root, encoded),
            format!("./{}/{}", self.images_root, encoded),
            format!("/{}", encoded),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_keeps_separators() {
        assert_eq!(
            encode_path_segments("képek/nyári fotó.jpg"),
            "k%C3%A9pek/ny%C3%A1ri%20fot%C3%B3.jpg"
        );
        assert_eq!(encode_path_segments("a/b/c.png"), "a/b/c.png");
    }

    #[test]
    fn test_candidate_order() {
        let resolver = ImagePathResolver::default();
        let list = resolver.candidates("./img/Őszi kép.jpg");
        assert_eq!(
            list,
            vec![
                "./img/%C5%90szi%20k%C3%A9p.jpg".to_string(),
                "./img/Őszi kép.jpg".to_string(),
                "./site_out_new/img/%C5%90szi%20k%C3%A9p.jpg".to_string(),
                "./images/img/%C5%90szi%20k%C3%A9p.jpg".to_string(),
                "/img/%C5%90szi%20k%C3%A9p.jpg".to_string(),
            ]
        );
    }

    #[test]
    fn test_leading_slash_is_stripped() {
        let resolver = ImagePathResolver::default();
        let list = resolver.candidates("/photos/a.jpg");
        assert_eq!(list[0], "./photos/a.jpg");
        assert_eq!(list[4], "/photos/a.jpg");
    }

    #[test]
    fn test_first_candidate_decodes_to_clean_path() {
        let resolver = ImagePathResolver::default();
        for raw in ["./a b/ç d.png", "x/y z#1?.jpg", "plain.jpg", "/ünnep/100%.png"] {
            let list = resolver.candidates(raw);
            assert_eq!(list.len(), 5);
            let encoded = list[0].trim_start_matches("./");
            let decoded = urlencoding::decode(encoded).unwrap();
            assert_eq!(decoded, clean_image_path(raw));
        }
    }

    #[test]
    fn test_empty_path_has_no_candidates() {
        let resolver = ImagePathResolver::default();
        assert!(resolver.candidates("").is_empty());
        assert!(resolver.candidates("   ").is_empty());
        assert!(resolver.candidates("./").is_empty());
    }

    #[test]
    fn test_custom_roots() {
        let resolver = ImagePathResolver::new("/public/", "media");
        let list = resolver.candidates("a.jpg");
        assert_eq!(list[2], "./public/a.jpg");
        assert_eq!(list[3], "./media/a.jpg");
    }
}
