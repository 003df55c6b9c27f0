use serde::Serialize;
use vision_api::ColorInfo;

/// A dominant color reduced to a fixed palette name. Raw channel values
/// never leave this module; the composer only ever sees names.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct NamedColor {
    pub name: &'static str,
    /// Fraction of image pixels the color covers, as reported upstream.
    pub weight: f32,
}

// Palette thresholds. All comparisons are inclusive: a channel exactly at
// a bound satisfies that bound.
const WHITE_FLOOR: i16 = 230;
const BLACK_CEIL: i16 = 30;
const STRONG: i16 = 170;
const WEAK: i16 = 85;
const SOFT: i16 = 110;
const VIVID: i16 = 190;

/// Bucket an RGB triple into the fixed palette. Rules are checked in a
/// fixed priority order and the first match wins: white/black, then
/// single-channel dominance, then composite hues, then "gray".
#[must_use]
pub fn name_color(red: u8, green: u8, blue: u8) -> &'static str {
    let (r, g, b) = (i16::from(red), i16::from(green), i16::from(blue));
    let min = r.min(g).min(b);
    let max = r.max(g).max(b);

    if min >= WHITE_FLOOR {
        "white"
    } else if max <= BLACK_CEIL {
        "black"
    } else if r >= STRONG && g <= WEAK && b <= WEAK {
        "red"
    } else if g >= STRONG && r <= WEAK && b <= WEAK {
        "green"
    } else if b >= STRONG && r <= WEAK && g <= WEAK {
        "blue"
    } else if r >= STRONG && g >= STRONG && b <= SOFT {
        "yellow"
    } else if r >= STRONG && b >= STRONG && g <= SOFT {
        "magenta"
    } else if g >= STRONG && b >= STRONG && r <= SOFT {
        "cyan"
    } else if r >= VIVID && g > WEAK && g < STRONG && b <= WEAK {
        "orange"
    } else if b >= STRONG && r > WEAK && r < STRONG && g <= SOFT {
        "violet"
    } else if r >= VIVID && g > SOFT && g < WHITE_FLOOR && b > SOFT && b < WHITE_FLOOR {
        "pink"
    } else {
        "gray"
    }
}

/// Name every reported dominant color, keeping upstream order and weights.
#[must_use]
pub fn name_dominant_colors(colors: &[ColorInfo]) -> Vec<NamedColor> {
    colors
        .iter()
        .map(|info| {
            let channel = |v: f32| v.round().clamp(0.0, 255.0) as u8;
            NamedColor {
                name: name_color(
                    channel(info.color.red),
                    channel(info.color.green),
                    channel(info.color.blue),
                ),
                weight: info.pixel_fraction,
            }
        })
        .collect()
}
