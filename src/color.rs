use egui::Color32;

/// An opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<Rgb> for Color32 {
    fn from(rgb: Rgb) -> Self {
        Color32::from_rgb(rgb.r, rgb.g, rgb.b)
    }
}

/// Hue, saturation and value, each in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self {
            h: h.clamp(0.0, 1.0),
            s: s.clamp(0.0, 1.0),
            v: v.clamp(0.0, 1.0),
        }
    }
}

fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Convert HSV to RGB, rounding each channel to the nearest integer.
///
/// A hue of `1.0` wraps around to red, same as `0.0`.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let Hsv { h, s, v } = hsv;
    let h = h.rem_euclid(1.0) * 6.0;
    let sector = h.floor();
    let f = h - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector as u32 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb::new(channel(r), channel(g), channel(b))
}

/// Convert RGB to HSV. Grays get a hue of zero.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let r = rgb.r as f32 / 255.0;
    let g = rgb.g as f32 / 255.0;
    let b = rgb.b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max };
    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };

    Hsv { h, s, v: max }
}

/// The current drawing color, held as RGB with its HSV triple cached.
///
/// Every setter recomputes the other representation, so the two never
/// disagree. The picker edits HSV, the eyedropper sets RGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorState {
    rgb: Rgb,
    hsv: Hsv,
}

impl Default for ColorState {
    fn default() -> Self {
        Self::from_rgb(Rgb::RED)
    }
}

impl ColorState {
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            rgb,
            hsv: rgb_to_hsv(rgb),
        }
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    pub fn set_rgb(&mut self, rgb: Rgb) {
        self.rgb = rgb;
        self.hsv = rgb_to_hsv(rgb);
    }

    pub fn set_hsv(&mut self, hsv: Hsv) {
        self.hsv = Hsv::new(hsv.h, hsv.s, hsv.v);
        self.rgb = hsv_to_rgb(self.hsv);
    }

    /// Change only the hue, keeping saturation and value
    pub fn set_hue(&mut self, h: f32) {
        let Hsv { s, v, .. } = self.hsv;
        self.set_hsv(Hsv::new(h, s, v));
    }

    /// Change saturation and value, keeping the hue
    pub fn set_saturation_value(&mut self, s: f32, v: f32) {
        let h = self.hsv.h;
        self.set_hsv(Hsv::new(h, s, v));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Rgb, expected: Rgb) {
        let diff = |a: u8, b: u8| (a as i16 - b as i16).abs();
        assert!(
            diff(actual.r, expected.r) <= 1
                && diff(actual.g, expected.g) <= 1
                && diff(actual.b, expected.b) <= 1,
            "{actual:?} is not within 1 of {expected:?}"
        );
    }

    #[test]
    fn test_primary_hues() {
        assert_eq!(hsv_to_rgb(Hsv::new(0.0, 1.0, 1.0)), Rgb::new(255, 0, 0));
        assert_close(hsv_to_rgb(Hsv::new(0.333, 1.0, 1.0)), Rgb::new(0, 255, 0));
        assert_close(hsv_to_rgb(Hsv::new(0.667, 1.0, 1.0)), Rgb::new(0, 0, 255));
        assert_eq!(hsv_to_rgb(Hsv::new(1.0, 1.0, 1.0)), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_grays_and_black() {
        assert_eq!(hsv_to_rgb(Hsv::new(0.4, 0.0, 1.0)), Rgb::new(255, 255, 255));
        assert_eq!(hsv_to_rgb(Hsv::new(0.4, 0.7, 0.0)), Rgb::BLACK);
        assert_eq!(hsv_to_rgb(Hsv::new(0.0, 0.0, 0.5)), Rgb::new(128, 128, 128));

        let gray = rgb_to_hsv(Rgb::new(128, 128, 128));
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
    }

    #[test]
    fn test_rgb_survives_hsv_conversion() {
        for rgb in [
            Rgb::new(12, 200, 77),
            Rgb::new(255, 128, 0),
            Rgb::new(1, 2, 3),
            Rgb::new(250, 10, 240),
        ] {
            assert_eq!(hsv_to_rgb(rgb_to_hsv(rgb)), rgb);
        }
    }

    #[test]
    fn test_color_state_stays_consistent() {
        let mut color = ColorState::default();
        assert_eq!(color.rgb(), Rgb::RED);
        assert_eq!(color.hsv(), Hsv::new(0.0, 1.0, 1.0));

        color.set_rgb(Rgb::new(0, 0, 255));
        assert!((color.hsv().h - 2.0 / 3.0).abs() < 1e-4);

        color.set_hue(0.0);
        assert_eq!(color.rgb(), Rgb::RED);

        color.set_saturation_value(0.0, 1.0);
        assert_eq!(color.rgb(), Rgb::new(255, 255, 255));
        assert_eq!(color.hsv().h, 0.0);
    }

    #[test]
    fn test_hsv_inputs_are_clamped() {
        let mut color = ColorState::default();
        color.set_saturation_value(2.0, -1.0);
        assert_eq!(color.hsv().s, 1.0);
        assert_eq!(color.hsv().v, 0.0);
        assert_eq!(color.rgb(), Rgb::BLACK);
    }
}
