#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::float;
use crate::util::pack;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;

/// An RGBA colour with floating point channels.
///
/// Channels are nominally in `[0, 1]` but are not clamped on construction; only the HSB setters
/// and the composition operations clamp. The packed form is one byte per channel, so a
/// round trip through [`Packable`] only preserves the colour up to
/// [`COLOR_TOLERANCE`](crate::core::config::COLOR_TOLERANCE).
///
/// # Examples
///
/// ```
/// use simplevector::core::prelude::*;
///
/// assert_eq!(Color::new(1.0, 0.0, 0.0, 1.0).hex(), "#FF0000FF");
/// assert_eq!(Color::from_hsb(0.0, 1.0, 1.0, 1.0), Color::red());
/// assert_eq!(Color::new(1.0, 0.9, 0.8, 1.0).description(), "Pastel Bright Orange");
/// ```
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
    pub fn from_hsb(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        let mut rv = Self::default().with_alpha(alpha);
        rv.set_hsb(hue, saturation, brightness);
        rv
    }
    pub fn from_rgba8888(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red: f64::from(red) / 255.0,
            green: f64::from(green) / 255.0,
            blue: f64::from(blue) / 255.0,
            alpha: f64::from(alpha) / 255.0,
        }
    }

    pub fn red() -> Self {
        Self {
            red: 1.0,
            ..Default::default()
        }
    }
    pub fn green() -> Self {
        Self {
            green: 1.0,
            ..Default::default()
        }
    }
    pub fn blue() -> Self {
        Self {
            blue: 1.0,
            ..Default::default()
        }
    }
    pub fn black() -> Self {
        Self::default()
    }
    pub fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }
    pub fn clear() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// The channels in RGBA order.
    pub fn components(&self) -> [f64; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// The channels as bytes in RGBA order. Each channel is truncated after scaling to `0..=255`,
    /// and saturates outside that range.
    pub fn rgba8888(&self) -> (u8, u8, u8, u8) {
        let [r, g, b, a] = self.as_bytes();
        (r, g, b, a)
    }
    fn as_bytes(&self) -> [u8; 4] {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        let bytes = self.components().map(|c| (c * 255.0) as u8);
        bytes
    }
    pub fn uint32(&self) -> u32 {
        u32::from_be_bytes(self.as_bytes())
    }
    /// `#RRGGBBAA`, upper case.
    pub fn hex(&self) -> String {
        format!("#{:08X}", self.uint32())
    }

    /// Composites `other` over this colour, weighted by `other.alpha`. Keeps this colour's alpha.
    #[must_use]
    pub fn blend(&self, other: &Color) -> Self {
        let t = other.alpha;
        self.combine_rgb(other, |a, b| a * (1.0 - t) + b * t)
    }
    #[must_use]
    pub fn lighten(&self, other: &Color) -> Self {
        self.combine_rgb(other, f64::max)
            .with_alpha(self.alpha.max(other.alpha))
    }
    #[must_use]
    pub fn darken(&self, other: &Color) -> Self {
        self.combine_rgb(other, f64::min)
            .with_alpha(self.alpha.min(other.alpha))
    }
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Color) -> Self {
        let t = other.alpha;
        self.combine_rgb(other, |a, b| f64::min(a + b * t, 1.0))
    }
    #[must_use]
    pub fn subtract(&self, other: &Color) -> Self {
        let t = other.alpha;
        self.combine_rgb(other, |a, b| f64::max(a - b * t, 0.0))
    }
    #[must_use]
    pub fn multiply(&self, other: &Color) -> Self {
        self.combine_rgb(other, |a, b| f64::min(a * b, 1.0))
    }
    #[must_use]
    pub fn divide(&self, other: &Color) -> Self {
        self.combine_rgb(other, |a, b| if b == 0.0 { 1.0 } else { a / b })
    }
    #[must_use]
    pub fn difference(&self, other: &Color) -> Self {
        self.combine_rgb(other, |a, b| (a - b).abs())
    }

    fn combine_rgb(&self, other: &Color, f: impl Fn(f64, f64) -> f64) -> Self {
        Self {
            red: f(self.red, other.red),
            green: f(self.green, other.green),
            blue: f(self.blue, other.blue),
            alpha: self.alpha,
        }
    }

    /// Hue, saturation and brightness, each in `[0, 1]`.
    pub fn hsb(&self) -> (f64, f64, f64) {
        rgb_to_hsb(self.red, self.green, self.blue)
    }
    /// Rewrites the RGB channels. Hue wraps around, saturation and brightness are clamped.
    pub fn set_hsb(&mut self, hue: f64, saturation: f64, brightness: f64) {
        (self.red, self.green, self.blue) = hsb_to_rgb(
            float::wrap_unit(hue),
            saturation.clamp(0.0, 1.0),
            brightness.clamp(0.0, 1.0),
        );
    }
    pub fn hue(&self) -> f64 {
        self.hsb().0
    }
    pub fn saturation(&self) -> f64 {
        self.hsb().1
    }
    pub fn brightness(&self) -> f64 {
        self.hsb().2
    }
    pub fn set_hue(&mut self, hue: f64) {
        let (_, s, b) = self.hsb();
        self.set_hsb(hue, s, b);
    }
    pub fn set_saturation(&mut self, saturation: f64) {
        let (h, _, b) = self.hsb();
        self.set_hsb(h, saturation, b);
    }
    pub fn set_brightness(&mut self, brightness: f64) {
        let (h, s, _) = self.hsb();
        self.set_hsb(h, s, brightness);
    }

    pub fn hue_description(&self) -> &'static str {
        const NAMES: [&str; 12] = [
            "Red", "Orange", "Yellow", "Lime", "Green", "Teal", "Cyan", "Aqua", "Blue", "Purple",
            "Magenta", "Pink",
        ];
        // Each band is centred on a multiple of 1/12, so shift by half a band.
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        let band = ((self.hue() + 1.0 / 24.0) * 12.0) as usize % NAMES.len();
        NAMES[band]
    }
    pub fn brightness_description(&self) -> &'static str {
        match self.brightness() {
            b if b > 0.8 => "Bright",
            b if b > 0.2 => "",
            b if b > 0.05 => "Dark",
            b if b >= 0.001 => "Very Dark",
            _ => "Black",
        }
    }
    pub fn saturation_description(&self) -> &'static str {
        match self.saturation() {
            s if s > 0.75 => "Vivid",
            s if s > 0.5 => "",
            s if s > 0.1 => "Pastel",
            _ => "Gray",
        }
    }
    /// A rough English name such as `"Vivid Bright Red"` or `"Dark Gray"`.
    pub fn description(&self) -> String {
        let brightness = self.brightness_description();
        if brightness == "Black" {
            return brightness.to_string();
        }
        let (saturation, hue) = match self.saturation_description() {
            "Gray" => ("", "Gray"),
            saturation => (saturation, self.hue_description()),
        };
        [saturation, brightness, hue]
            .into_iter()
            .filter(|word| !word.is_empty())
            .join(" ")
    }
}

impl Default for Color {
    fn default() -> Self {
        Self {
            red: 0.0,
            green: 0.0,
            blue: 0.0,
            alpha: 1.0,
        }
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.components()
            .into_iter()
            .zip(other.components())
            .all(|(a, b)| (a - b).abs() <= COLOR_TOLERANCE)
    }
}

impl Packable for Color {
    const PACKED_LEN: usize = 4;

    fn to_bytes(&self) -> Result<Vec<u8>> {
        pack::encode(&self.as_bytes())
    }
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let [r, g, b, a]: [u8; 4] = pack::decode(bytes, Self::PACKED_LEN)?;
        Ok(Self::from_rgba8888(r, g, b, a))
    }
}

impl From<Color> for [f64; 4] {
    fn from(value: Color) -> Self {
        value.components()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Color({:.p$}, {:.p$}, {:.p$}, {:.p$})",
            self.red,
            self.green,
            self.blue,
            self.alpha,
            p = DISPLAY_PRECISION
        )
    }
}

fn rgb_to_hsb(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    if min == max {
        return (0.0, 0.0, max);
    }
    let range = max - min;
    let saturation = range / max;
    let rc = (max - r) / range;
    let gc = (max - g) / range;
    let bc = (max - b) / range;
    let h = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    ((h / 6.0).rem_euclid(1.0), saturation, max)
}

fn hsb_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    #[allow(clippy::cast_possible_truncation)]
    let sector = (sector as i64).rem_euclid(6);
    match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}
