/// An sRGB color with integer channels.
///
/// Channels are nominally 0-255. Hex input can never exceed that, but `rgb()`
/// input is passed through unclamped, so the storage type is wider than `u8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u16,
    pub g: u16,
    pub b: u16,
}

impl Rgb {
    pub const fn new(r: u16, g: u16, b: u16) -> Self {
        Self { r, g, b }
    }
}

/// Hue in degrees [0, 360), saturation and lightness as percentages [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

/// Standard max/min-channel RGB -> HSL conversion.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(h * 60.0, s * 100.0, l * 100.0)
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Inverse of [`rgb_to_hsl`]. Output channels are rounded to the nearest integer.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h / 360.0;
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    let channel = |v: f64| -> u16 { (v * 255.0).round().clamp(0.0, 255.0) as u16 };
    Rgb::new(channel(r), channel(g), channel(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Rgb, b: Rgb) {
        let diff = |x: u16, y: u16| (x as i32 - y as i32).abs();
        assert!(
            diff(a.r, b.r) <= 1 && diff(a.g, b.g) <= 1 && diff(a.b, b.b) <= 1,
            "{a:?} vs {b:?}"
        );
    }

    #[test]
    fn pure_red() {
        let hsl = rgb_to_hsl(Rgb::new(255, 0, 0));
        assert_eq!(hsl, Hsl::new(0.0, 100.0, 50.0));
    }

    #[test]
    fn pure_blue_hue() {
        let hsl = rgb_to_hsl(Rgb::new(0, 0, 255));
        assert!((hsl.h - 240.0).abs() < 1e-9);
    }

    #[test]
    fn magenta_wraps_hue() {
        // max == r and g < b takes the +6 branch
        let hsl = rgb_to_hsl(Rgb::new(255, 0, 128));
        assert!(hsl.h > 300.0 && hsl.h < 360.0, "got {}", hsl.h);
    }

    #[test]
    fn gray_has_no_saturation() {
        let hsl = rgb_to_hsl(Rgb::new(128, 128, 128));
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 0.0);
        assert!((hsl.l - 50.196).abs() < 0.01);
    }

    #[test]
    fn hsl_to_rgb_known_values() {
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 100.0, 50.0)), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(120.0, 100.0, 50.0)), Rgb::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 0.0, 100.0)), Rgb::new(255, 255, 255));
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 0.0, 0.0)), Rgb::new(0, 0, 0));
    }

    #[test]
    fn round_trip_grid_within_one() {
        for r in (0..=255u16).step_by(17) {
            for g in (0..=255u16).step_by(17) {
                for b in (0..=255u16).step_by(17) {
                    let rgb = Rgb::new(r, g, b);
                    assert_close(hsl_to_rgb(rgb_to_hsl(rgb)), rgb);
                }
            }
        }
    }
}
