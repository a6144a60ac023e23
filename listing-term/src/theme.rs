//! Colors for the painter.
//!
//! Colors are specified in Oklch and converted to sRGB once, when the theme is
//! built, so each tone keeps a perceptually even lightness.

use listing::Tone;
use palette::{IntoColor, Oklch, Srgb};

use crate::canvas::Rgb;

/// Foreground/background pair of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneStyle {
    pub fg: Rgb,
    pub bg: Rgb,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgb,
    /// Background of odd (striped) rows.
    pub stripe: Rgb,
    /// Background of selected rows.
    pub selected: Rgb,
    /// Background of the row under the keyboard cursor.
    pub cursor: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub primary: Rgb,
    pub rule: Rgb,
    /// Placeholder blocks of the loading skeleton.
    pub skeleton: Rgb,
    pub error: Rgb,
    pub badge: ToneStyle,
    pub positive: ToneStyle,
    pub negative: ToneStyle,
    pub caution: ToneStyle,
    pub info: ToneStyle,
    pub accent: ToneStyle,
    pub muted_badge: ToneStyle,
    pub subtle: ToneStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: oklch(0.18, 0.02, 265.0),
            stripe: oklch(0.21, 0.02, 265.0),
            selected: oklch(0.32, 0.08, 255.0),
            cursor: oklch(0.40, 0.10, 255.0),
            text: oklch(0.93, 0.01, 265.0),
            muted: oklch(0.62, 0.02, 265.0),
            primary: oklch(0.72, 0.14, 255.0),
            rule: oklch(0.32, 0.02, 265.0),
            skeleton: oklch(0.28, 0.01, 265.0),
            error: oklch(0.68, 0.17, 25.0),
            badge: tone(0.82, 0.10, 255.0),
            positive: tone(0.80, 0.15, 150.0),
            negative: tone(0.72, 0.16, 25.0),
            caution: tone(0.85, 0.14, 90.0),
            info: tone(0.75, 0.12, 250.0),
            accent: tone(0.74, 0.14, 305.0),
            muted_badge: tone(0.72, 0.01, 265.0),
            subtle: tone(0.76, 0.03, 240.0),
        }
    }

    /// Badge colors for a tone, `None` for plain cells.
    pub fn tone(&self, tone: Tone) -> Option<ToneStyle> {
        match tone {
            Tone::Plain => None,
            Tone::Positive => Some(self.positive),
            Tone::Negative => Some(self.negative),
            Tone::Caution => Some(self.caution),
            Tone::Info => Some(self.info),
            Tone::Accent => Some(self.accent),
            Tone::Muted => Some(self.muted_badge),
            Tone::Subtle => Some(self.subtle),
        }
    }
}

/// Light text on a dark wash of the same hue.
fn tone(l: f32, c: f32, h: f32) -> ToneStyle {
    ToneStyle {
        fg: oklch(l, c, h),
        bg: oklch(0.28, c * 0.45, h),
    }
}

fn oklch(l: f32, c: f32, h: f32) -> Rgb {
    let srgb: Srgb = Oklch::new(l, c, h).into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();
    Rgb::new(r, g, b)
}
