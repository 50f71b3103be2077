//! Banner carousel state

use tracing::debug;

/// Rotates through a fixed list of images. The index is the single source of
/// truth for what is displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Carousel {
    images: Vec<String>,
    index: usize,
}

impl Carousel {
    pub fn new(images: Vec<String>) -> Self {
        Self { images, index: 0 }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// An empty carousel renders nothing and schedules no timer
    pub fn needs_timer(&self) -> bool {
        !self.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    /// Advance one slide, wrapping past the end. Returns the new index, or
    /// `None` for an empty carousel.
    pub fn tick(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.images.len();
        debug!(index = self.index, "carousel tick");
        Some(self.index)
    }

    /// Jump to a slide; out-of-range values wrap
    pub fn go_to(&mut self, index: usize) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.index = index % self.images.len();
        Some(self.index)
    }

    /// Horizontal offset of the sliding track, in percent
    pub fn offset_percent(&self) -> usize {
        self.index * 100
    }

    /// Image for a decorative background layer; missing layers reuse the first image
    pub fn layer(&self, layer: usize) -> Option<&str> {
        self.images
            .get(layer)
            .or_else(|| self.images.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_index_sequence_wraps() {
        let mut carousel = Carousel::new(images(&["a.png", "b.png", "c.png"]));
        let mut seen = vec![carousel.index()];
        for _ in 0..4 {
            seen.push(carousel.tick().unwrap());
        }
        assert_eq!(seen, [0, 1, 2, 0, 1]);
        assert_eq!(carousel.current(), Some("b.png"));
    }

    #[test]
    fn test_index_after_k_ticks_is_k_mod_n() {
        for n in 1..=5 {
            let names: Vec<String> = (0..n).map(|i| format!("{i}.png")).collect();
            let mut carousel = Carousel::new(names);
            for k in 1..=17 {
                carousel.tick();
                assert_eq!(carousel.index(), k % n, "n={n} k={k}");
            }
        }
    }

    #[test]
    fn test_empty_carousel() {
        let mut carousel = Carousel::new(Vec::new());
        assert!(!carousel.needs_timer());
        assert_eq!(carousel.tick(), None);
        assert_eq!(carousel.go_to(3), None);
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.current(), None);
    }

    #[test]
    fn test_go_to_wraps() {
        let mut carousel = Carousel::new(images(&["a", "b", "c"]));
        assert_eq!(carousel.go_to(4), Some(1));
        assert_eq!(carousel.offset_percent(), 100);
    }

    #[test]
    fn test_background_layers_fall_back_to_first() {
        let carousel = Carousel::new(images(&["a.png"]));
        assert_eq!(carousel.layer(0), Some("a.png"));
        assert_eq!(carousel.layer(2), Some("a.png"));
        assert_eq!(Carousel::default().layer(0), None);
    }
}
