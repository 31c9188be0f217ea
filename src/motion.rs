//! Numbers behind the decorative scroll and pointer effects.

/// Maximum image scale reached at the bottom of the hero.
pub const HERO_ZOOM: f64 = 0.3;

/// Depths of the three hero discs, front to back.
pub const HERO_LAYER_DEPTHS: [f64; 3] = [20.0, 10.0, 5.0];

/// Scroll range and travel of a section's parallax layer, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub scroll_end: f64,
    pub shift_end: f64,
}

impl Parallax {
    pub fn offset(self, scroll_y: f64) -> f64 {
        parallax_offset(scroll_y, self.scroll_end, self.shift_end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    TechStack,
    Projects,
    Contact,
}

impl Section {
    /// The hero moves with the pointer instead and has no scroll wash.
    pub fn parallax(self) -> Option<Parallax> {
        let (scroll_end, shift_end) = match self {
            Self::Hero => return None,
            Self::About => (800.0, 160.0),
            Self::TechStack => (1000.0, 200.0),
            Self::Projects => (1200.0, 240.0),
            Self::Contact => (1400.0, 280.0),
        };
        Some(Parallax {
            scroll_end,
            shift_end,
        })
    }
}

/// Maps `scroll_y` in `[0, input_end]` onto `[0, output_end]`, clamped.
pub fn parallax_offset(scroll_y: f64, input_end: f64, output_end: f64) -> f64 {
    if input_end <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / input_end).clamp(0.0, 1.0) * output_end
}

/// Pixel shift of a layer for a pointer at `pointer` (0..1 across the element).
pub fn pointer_layer_offset(pointer: f64, depth: f64) -> f64 {
    (pointer.clamp(0.0, 1.0) - 0.5) * depth * 1.5
}

/// Pointer position normalized to the element, centered when unknown.
pub fn normalized_pointer(position: f64, extent: f64) -> f64 {
    if extent <= 0.0 || !position.is_finite() {
        0.5
    } else {
        (position / extent).clamp(0.0, 1.0)
    }
}

pub fn hero_zoom(scroll_y: f64, section_height: f64) -> f64 {
    1.0 + parallax_offset(scroll_y, section_height, HERO_ZOOM)
}

/// CSS `animation-delay` for the `index`th card of a staggered grid.
pub fn stagger_delay(index: usize, step_ms: u32) -> String {
    format!("animation-delay: {}ms", index as u32 * step_ms)
}

pub fn translate_y(px: f64) -> String {
    format!("transform: translate3d(0, {px:.1}px, 0)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallax_maps_and_clamps() {
        assert_eq!(parallax_offset(0.0, 800.0, 160.0), 0.0);
        assert_eq!(parallax_offset(400.0, 800.0, 160.0), 80.0);
        assert_eq!(parallax_offset(800.0, 800.0, 160.0), 160.0);
        assert_eq!(parallax_offset(5000.0, 800.0, 160.0), 160.0);
        assert_eq!(parallax_offset(-20.0, 800.0, 160.0), 0.0);
        assert_eq!(parallax_offset(100.0, 0.0, 160.0), 0.0);
        assert_eq!(parallax_offset(f64::NAN, 800.0, 160.0), 0.0);
    }

    #[test]
    fn test_section_parallax_ranges() {
        assert_eq!(Section::Hero.parallax(), None);
        let about = Section::About.parallax().expect("about has a wash");
        assert_eq!(about.offset(400.0), 80.0);
        assert_eq!(about.offset(10_000.0), 160.0);
        let ends = [Section::TechStack, Section::Projects, Section::Contact]
            .map(|s| s.parallax().map(|p| (p.scroll_end, p.shift_end)));
        assert_eq!(
            ends,
            [Some((1000.0, 200.0)), Some((1200.0, 240.0)), Some((1400.0, 280.0))]
        );
    }

    #[test]
    fn test_pointer_layers() {
        assert_eq!(pointer_layer_offset(0.5, 20.0), 0.0);
        assert_eq!(pointer_layer_offset(1.0, 20.0), 15.0);
        assert_eq!(pointer_layer_offset(0.0, 10.0), -7.5);
        assert_eq!(pointer_layer_offset(3.0, 5.0), 3.75);
    }

    #[test]
    fn test_normalized_pointer() {
        assert_eq!(normalized_pointer(50.0, 200.0), 0.25);
        assert_eq!(normalized_pointer(-10.0, 200.0), 0.0);
        assert_eq!(normalized_pointer(10.0, 0.0), 0.5);
    }

    #[test]
    fn test_hero_zoom() {
        assert_eq!(hero_zoom(0.0, 900.0), 1.0);
        assert!((hero_zoom(450.0, 900.0) - 1.15).abs() < 1e-9);
        assert!((hero_zoom(2000.0, 900.0) - 1.3).abs() < 1e-9);
        // Before the section is measured the image stays at rest.
        assert_eq!(hero_zoom(450.0, 0.0), 1.0);
    }

    #[test]
    fn test_css_helpers() {
        assert_eq!(stagger_delay(0, 80), "animation-delay: 0ms");
        assert_eq!(stagger_delay(3, 80), "animation-delay: 240ms");
        assert_eq!(translate_y(12.345), "transform: translate3d(0, 12.3px, 0)");
    }
}
