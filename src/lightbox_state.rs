// src/lightbox_state.rs

/// What a thumbnail click asks the lightbox to show.
#[derive(Debug, Clone, PartialEq)]
pub struct LightboxRequest {
    pub images: Vec<String>,
    pub index: usize,
    pub title: String,
}

/// The single page-wide lightbox. Closing keeps the last image list around;
/// only the next open replaces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LightboxState {
    images: Vec<String>,
    index: usize,
    title: String,
    open: bool,
}

impl LightboxState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the shown list and open at `request.index`, wrapped into range.
    /// An empty list leaves the lightbox closed.
    pub fn open(&mut self, request: LightboxRequest) {
        let LightboxRequest {
            images,
            index,
            title,
        } = request;
        self.index = if images.is_empty() {
            0
        } else {
            index % images.len()
        };
        self.open = !images.is_empty();
        self.images = images;
        self.title = title;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn next(&mut self) -> bool {
        self.step(1)
    }

    pub fn prev(&mut self) -> bool {
        self.step(-1)
    }

    fn step(&mut self, delta: isize) -> bool {
        if !self.open || self.images.is_empty() {
            return false;
        }
        let len = self.images.len() as isize;
        self.index = (self.index as isize + delta).rem_euclid(len) as usize;
        true
    }

    /// Keyboard shortcuts. Returns whether the state changed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.open {
            return false;
        }
        match key {
            "Escape" => {
                self.close();
                true
            }
            "ArrowLeft" => self.prev(),
            "ArrowRight" => self.next(),
            _ => false,
        }
    }

    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    /// `"<title> (<position>/<count>)"`, position counted from 1.
    pub fn caption(&self) -> String {
        format!(
            "{} ({}/{})",
            self.title,
            self.index + 1,
            self.images.len()
        )
    }
}
