// src/colour.rs
//! Kit colours.
//!
//! Two sources, tried in order by the club extractor:
//! - **Image**: every pixel of the kit-body raster is counted by exact colour and
//!   the dominant ones are kept (see [`extract_palette`]).
//! - **Style**: the `background-color` of the kit placeholder, which may carry one
//!   or two hex colours separated by `/` (see [`extract_style_fallback`]).
//!
//! Tokens are plain strings (`rgb(r,g,b)` from images, `#RRGGBB` from styles) because
//! they are only ever counted, compared and printed.

use std::collections::HashMap;
use std::fmt;

use image::RgbaImage;

use crate::config::consts::{DOMINANT_SHARE, PALETTE_CAP, STYLE_CAP};

regex!(HEX_PAIR = r"^#?[A-Fa-f0-9]{6}(/#?[A-Fa-f0-9]{6})?$");

/// One decoded pixel. Alpha is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    /// Unpack a `0xAARRGGBB` colour.
    pub fn from_packed(colour: u32) -> Self {
        Self {
            r: ((colour >> 16) & 0xff) as u8,
            g: ((colour >> 8) & 0xff) as u8,
            b: (colour & 0xff) as u8,
        }
    }

    pub fn token(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Decoded raster as packed `0xAARRGGBB` values, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    packed: Vec<u32>,
}

impl PixelGrid {
    /// `None` when the buffer does not hold exactly `width * height` pixels.
    pub fn new(width: u32, height: u32, packed: Vec<u32>) -> Option<Self> {
        (packed.len() == width as usize * height as usize).then_some(Self { width, height, packed })
    }

    pub fn from_rgba(img: &RgbaImage) -> Self {
        let packed = img
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                u32::from_be_bytes([a, r, g, b])
            })
            .collect();
        Self { width: img.width(), height: img.height(), packed }
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }

    /// `width × height`
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.packed.iter().copied().map(Pixel::from_packed)
    }
}

/// Occurrence count per colour token. Ties rank by first appearance.
#[derive(Debug, Default)]
pub struct ColourHistogram {
    counts: HashMap<String, (usize, usize)>, // token -> (count, first seen)
}

impl ColourHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, token: String) {
        let seen = self.counts.len();
        self.counts.entry(token).or_insert((0, seen)).0 += 1;
    }

    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).map_or(0, |(n, _)| *n)
    }

    /// Distinct tokens by descending count.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut out: Vec<_> = self.counts.iter().map(|(t, &(n, seen))| (t.as_str(), n, seen)).collect();
        out.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
        out.into_iter().map(|(t, n, _)| (t, n)).collect()
    }
}

impl FromIterator<String> for ColourHistogram {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut hist = Self::new();
        for token in iter {
            hist.add(token);
        }
        hist
    }
}

/// Non-empty, ordered list of colour tokens (most representative first).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette(Vec<String>);

impl Palette {
    /// `None` for an empty list: "no colours" is absence, not an empty palette.
    pub fn new(tokens: Vec<String>) -> Option<Self> {
        (!tokens.is_empty()).then_some(Self(tokens))
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}

/// Rank the colours of a raster.
///
/// Keeps every colour covering more than a quarter of the image; if none does,
/// the three most frequent. Never more than three.
pub fn extract_palette(grid: &PixelGrid) -> Option<Palette> {
    let hist: ColourHistogram = grid.pixels().map(|p| p.token()).collect();
    let threshold = grid.area() as f64 * DOMINANT_SHARE;
    let ranked = hist.ranked();

    let mut picked: Vec<String> = ranked
        .iter()
        .take_while(|(_, n)| *n as f64 > threshold)
        .take(PALETTE_CAP)
        .map(|(t, _)| s!(*t))
        .collect();

    if picked.is_empty() {
        picked = ranked.iter().take(PALETTE_CAP).map(|(t, _)| s!(*t)).collect();
    }
    Palette::new(picked)
}

/// Parse a `key: value; key: value` declaration list. Later keys override earlier ones;
/// declarations that are not exactly one `key: value` pair are skipped.
pub fn parse_style(style: &str) -> HashMap<String, String> {
    let mut out = HashMap::new();
    for decl in style.split(';') {
        let bits: Vec<&str> = decl.split(':').collect();
        if let [key, value] = bits.as_slice() {
            out.insert(s!(key.trim()), s!(value.trim()));
        }
    }
    out
}

/// Explicit `background-color` of a kit placeholder: `#AABBCC` or `#AABBCC/#112233`
/// (each `#` optional). Anything else, e.g. a named colour, is absent.
pub fn extract_style_fallback(style: &str) -> Option<Palette> {
    let decls = parse_style(style);
    let value = decls.get("background-color")?.trim();
    if !HEX_PAIR.is_match(value) {
        return None;
    }

    let tokens = value
        .split('/')
        .take(STYLE_CAP)
        .map(|part| if part.starts_with('#') { s!(part) } else { format!("#{part}") })
        .collect();
    Palette::new(tokens)
}
