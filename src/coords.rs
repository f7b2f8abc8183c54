// src/coords.rs
//! Degree/minute/second coordinates as printed in info boxes.
//!
//! Grammar (after [`compact_dms`]): `<deg>°<min>′[<sec>″]<hemisphere>` with
//! hemisphere one of `N S E W O` (`O` is German "Ost", i.e. east).

use std::fmt;

use crate::core::sanitize::compact_dms;
use crate::error::DmsError;

regex!(DMS = r"^([0-9.]+)°([0-9.]+)′(?:([0-9.]+)?″)?([NSEWO])$");

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Result<Self, DmsError> {
        if lat.abs() > 90.0 || lon.abs() > 180.0 || lat.is_nan() || lon.is_nan() {
            return Err(DmsError::OutOfRange { lat, lon });
        }
        Ok(Self { lat, lon })
    }
}

/// Plain decimal degrees, never exponent notation; whole numbers keep one decimal.
fn degrees(v: f64) -> String {
    let out = v.to_string();
    if out.contains('.') { out } else { out + ".0" }
}

/// `lat,lon`, e.g. `10.0,-0.1275`.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", degrees(self.lat), degrees(self.lon))
    }
}

fn number(group: Option<regex::Match<'_>>) -> Result<f64, DmsError> {
    match group {
        None => Ok(0.0),
        Some(m) => m.as_str().parse().map_err(|_| DmsError::BadNumber(s!(m.as_str()))),
    }
}

/// Signed decimal degrees; south and west are negative.
pub fn parse_dms(token: &str) -> Result<f64, DmsError> {
    let compact = compact_dms(token);
    let caps = DMS.captures(&compact).ok_or_else(|| DmsError::NoMatch(compact.clone()))?;

    let degrees = number(caps.get(1))?;
    let minutes = number(caps.get(2))?;
    let seconds = number(caps.get(3))?;
    let sign = match &caps[4] {
        "S" | "W" => -1.0,
        _ => 1.0,
    };
    Ok((degrees + minutes / 60.0 + seconds / 3600.0) * sign)
}

/// Pair candidate texts by position: the first two non-empty ones are
/// latitude then longitude. Anything after them is ignored.
pub fn coordinate_from_texts<I, S>(texts: I) -> Result<Coordinate, DmsError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let values: Vec<String> = texts
        .into_iter()
        .map(|t| compact_dms(t.as_ref()))
        .filter(|t| !t.is_empty())
        .take(2)
        .collect();

    let [lat, lon] = values.as_slice() else {
        return Err(DmsError::Incomplete(values.len()));
    };
    Coordinate::new(parse_dms(lat)?, parse_dms(lon)?)
}
