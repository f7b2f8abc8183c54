// src/specs/club.rs
//! Scraping *spec* for a club page (and for the pages its ground links to).
//!
//! Reads three facts out of the info box:
//! - **Kit colours**: the kit-body image, else the inline `background-color` next to
//!   the kit-body placeholder.
//! - **Location candidates**: links in the value cell of the first
//!   ground/stadium/location row.
//! - **Coordinate**: the geo display element (`span.geo-dms`, else `#coordinates`).
//!
//! Everything here is a pure function of one parsed page, so candidates can be
//! re-derived from the same document as often as needed. The only I/O is the kit
//! image, which goes through [`Fetch`].

use scraper::{ElementRef, Html};
use url::Url;

use crate::colour::{Palette, extract_palette, extract_style_fallback};
use crate::coords::{Coordinate, coordinate_from_texts};
use crate::core::first_successful;
use crate::core::html::{attr, closest, first, has_class, next_element, prev_elements, select_text, text};
use crate::core::net::{Fetch, resolve};

selector!(KIT_CELL = "td.toccolours");
selector!(INFOBOX = "table.infobox");
selector!(KIT_BODY_IMG = "img[src*='/Kit_body_']");
selector!(KIT_BODY_SVG = "img[src*='/Kit_body.svg']");
selector!(LABELS = "th.infobox-label");
selector!(LINKS = "a");
selector!(GEO_DMS = "span.geo-dms");
selector!(COORDINATES = "#coordinates");
selector!(LATITUDE = "span.latitude");
selector!(LONGITUDE = "span.longitude");
selector!(DE_LATITUDE = "span[title='Breitengrad']");
selector!(DE_LONGITUDE = "span[title='Längengrad']");

/// Info-box labels whose value cell names the club's ground.
pub const LOCATION_LABELS: [&str; 4] = ["ground", "home ground", "stadium", "location"];

/// Element holding the kit drawing.
fn kit_box(doc: &Html) -> Option<ElementRef<'_>> {
    doc.select(&KIT_CELL).next().or_else(|| doc.select(&INFOBOX).next())
}

/// Kit-body raster, resolved against the page (the `src` is scheme-relative).
pub fn kit_image_url(kit: ElementRef<'_>, base: &Url) -> Option<Url> {
    let src = attr(first(kit, &KIT_BODY_IMG)?, "src")?;
    resolve(base, src).map_err(|e| loge!("Kit image: {e}")).ok()
}

/// `style` of the element just before the wrapper of the kit-body placeholder.
pub fn kit_style<'a>(kit: ElementRef<'a>) -> Option<&'a str> {
    let placeholder = first(kit, &KIT_BODY_SVG)?;
    let wrapper = closest(placeholder, "div")?;
    attr(prev_elements(wrapper).next()?, "style")
}

/// Kit colours: image palette first, inline style second.
pub fn extract_colours<F: Fetch + ?Sized>(doc: &Html, base: &Url, fetch: &F) -> Option<Palette> {
    let kit = kit_box(doc)?;

    let from_image = || {
        let url = kit_image_url(kit, base)?;
        let palette = extract_palette(&fetch.image(&url)?);
        if palette.is_some() {
            logd!("Colours from kit image {url}");
        }
        palette
    };
    let from_style = || {
        let palette = extract_style_fallback(kit_style(kit)?);
        if palette.is_some() {
            logd!("Colours from kit style on {base}");
        }
        palette
    };

    let sources: [Box<dyn FnOnce() -> Option<Palette> + '_>; 2] =
        [Box::new(from_image), Box::new(from_style)];
    first_successful(sources)
}

/// Pages that may carry the club's coordinate, in link order.
///
/// - No ground/stadium/location row: no candidates.
/// - A row without usable links: the page itself.
pub fn location_candidates(doc: &Html, base: &Url) -> Vec<Url> {
    let Some(label) = doc
        .select(&LABELS)
        .find(|th| LOCATION_LABELS.contains(&text(*th).to_lowercase().as_str()))
    else {
        return Vec::new();
    };
    let Some(value) = next_element(label) else {
        return Vec::new();
    };

    let links: Vec<Url> = value
        .select(&LINKS)
        .filter(|a| !has_class(*a, "new"))
        .filter_map(|a| attr(a, "href"))
        .filter(|href| !href.starts_with('#'))
        .filter_map(|href| resolve(base, href).map_err(|e| loge!("Location link: {e}")).ok())
        .collect();

    if links.is_empty() { vec![base.clone()] } else { links }
}

/// Coordinate shown on the page, if it parses.
pub fn extract_coordinate(doc: &Html) -> Option<Coordinate> {
    let geo = [&*GEO_DMS, &*COORDINATES]
        .into_iter()
        .find_map(|sel| doc.select(sel).next())?;

    let texts = [&*LATITUDE, &*LONGITUDE, &*DE_LATITUDE, &*DE_LONGITUDE].map(|sel| select_text(geo, sel));

    coordinate_from_texts(&texts)
        .map_err(|e| logd!("No coordinate: {e}"))
        .ok()
}
