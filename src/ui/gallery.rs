use crate::models::Property;

pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.jpg";

/// Image gallery for a single property
#[derive(Debug, Clone)]
pub struct PropertyGallery {
    images: Vec<String>,
    index: usize,
    lightbox_open: bool,
}

impl PropertyGallery {
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images,
            index: 0,
            lightbox_open: false,
        }
    }

    pub fn for_property(property: &Property) -> Self {
        Self::new(property.images.clone())
    }

    /// Image currently shown, or the placeholder when there are none
    pub fn current_image(&self) -> &str {
        self.images
            .get(self.index)
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn thumbnails(&self) -> &[String] {
        &self.images
    }

    pub fn next(&mut self) {
        if !self.images.is_empty() {
            self.index = (self.index + 1) % self.images.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.images.is_empty() {
            self.index = (self.index + self.images.len() - 1) % self.images.len();
        }
    }

    /// Thumbnail click; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.images.len() {
            self.index = index;
            true
        } else {
            false
        }
    }

    pub fn open_lightbox(&mut self) {
        if !self.images.is_empty() {
            self.lightbox_open = true;
        }
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox_open = false;
    }

    pub fn is_lightbox_open(&self) -> bool {
        self.lightbox_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery() -> PropertyGallery {
        PropertyGallery::new(vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()])
    }

    #[test]
    fn test_next_prev_wrap() {
        let mut g = gallery();
        g.prev();
        assert_eq!(g.current_image(), "c.jpg");
        g.next();
        g.next();
        assert_eq!(g.current_image(), "b.jpg");
    }

    #[test]
    fn test_select_bounds() {
        let mut g = gallery();
        assert!(g.select(2));
        assert!(!g.select(3));
        assert_eq!(g.current_index(), 2);
    }

    #[test]
    fn test_empty_gallery() {
        let mut g = PropertyGallery::new(Vec::new());
        g.next();
        g.open_lightbox();
        assert_eq!(g.current_image(), PLACEHOLDER_IMAGE);
        assert!(!g.is_lightbox_open());
    }

    #[test]
    fn test_lightbox() {
        let mut g = gallery();
        g.open_lightbox();
        assert!(g.is_lightbox_open());
        g.close_lightbox();
        assert!(!g.is_lightbox_open());
    }
}
