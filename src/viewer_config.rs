// src/viewer_config.rs
use crate::hover_cycle::HOVER_INTERVAL_MS;
use crate::utils::ImagePathResolver;
use serde::Deserialize;

/// Where the optional deployment overrides live, relative to the page.
pub const CONFIG_URL: &str = "assets/viewer.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Tab separated catalog, relative to the page.
    pub catalog_url: String,
    /// Site output folder tried when the parent directory is being served.
    pub alternate_root: String,
    /// Subfolder tried when images were copied next to the page.
    pub images_root: String,
    pub hover_interval_ms: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        let resolver = ImagePathResolver::default();
        Self {
            catalog_url: String::from("assets/items.tsv"),
            alternate_root: resolver.alternate_root,
            images_root: resolver.images_root,
            hover_interval_ms: HOVER_INTERVAL_MS,
        }
    }
}

impl ViewerConfig {
    pub fn resolver(&self) -> ImagePathResolver {
        ImagePathResolver::new(&self.alternate_root, &self.images_root)
    }

    /// Zero would make the cover swap continuously.
    pub fn hover_interval(&self) -> u32 {
        if self.hover_interval_ms == 0 {
            HOVER_INTERVAL_MS
        } else {
            self.hover_interval_ms
        }
    }
}
