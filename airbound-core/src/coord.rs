//! Coordinate string parsing and formatting.
//!
//! AIXM sources mix several textual coordinate forms: decimal degrees
//! (`51.089056N`, `002.545428E`) and degree-minute-second with optional
//! decimal seconds (`510521.37N`, `0051624E`). [`parse_coordinate`]
//! auto-detects the form and normalizes to signed decimal degrees;
//! north latitude and east longitude are positive.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Error parsing a textual coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordParseError {
    /// Input matches none of the supported coordinate forms
    #[error("unrecognized coordinate format: {0}")]
    UnrecognizedFormat(String),
}

fn lat_dd_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{2})\.(\d{1,6})([NS])").unwrap())
}

fn lon_dd_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{3})\.(\d{1,6})([WE])").unwrap())
}

fn lat_dms_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{2})(\d{2})(\d{2})(\.\d{1,6})?([NS])").unwrap())
}

fn lon_dms_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{3})(\d{2})(\d{2})(\.\d{1,6})?([WE])").unwrap())
}

/// Degree/minute/second (plus decimal second fraction) to decimal degrees.
pub fn dms2dd(degree: f64, minute: f64, second: f64, fraction: f64) -> f64 {
    degree + minute / 60.0 + second / 3600.0 + fraction / 3600.0
}

/// Detect a coordinate format and convert to signed decimal degrees.
///
/// Works for latitude and longitude alike; the hemisphere letter decides
/// the sign (N/E positive, S/W negative).
pub fn parse_coordinate(input: &str) -> Result<f64, CoordParseError> {
    let unrecognized = || CoordParseError::UnrecognizedFormat(input.to_string());

    if let Some(c) = lat_dd_pattern().captures(input) {
        let value: f64 = format!("{}.{}", &c[1], &c[2])
            .parse()
            .map_err(|_| unrecognized())?;
        let sign = if &c[3] == "N" { 1.0 } else { -1.0 };
        return Ok(sign * value);
    }

    if let Some(c) = lon_dd_pattern().captures(input) {
        let value: f64 = format!("{}.{}", &c[1], &c[2])
            .parse()
            .map_err(|_| unrecognized())?;
        let sign = if &c[3] == "W" { -1.0 } else { 1.0 };
        return Ok(sign * value);
    }

    if let Some(c) = lat_dms_pattern().captures(input) {
        let sign = if &c[5] == "N" { 1.0 } else { -1.0 };
        return Ok(sign * dms_capture(&c).map_err(|_| unrecognized())?);
    }

    if let Some(c) = lon_dms_pattern().captures(input) {
        let sign = if &c[5] == "W" { -1.0 } else { 1.0 };
        return Ok(sign * dms_capture(&c).map_err(|_| unrecognized())?);
    }

    Err(unrecognized())
}

fn dms_capture(c: &regex::Captures<'_>) -> Result<f64, std::num::ParseFloatError> {
    let degree: f64 = c[1].parse()?;
    let minute: f64 = c[2].parse()?;
    let second: f64 = c[3].parse()?;
    let fraction: f64 = match c.get(4) {
        Some(m) => m.as_str().parse()?,
        None => 0.0,
    };
    Ok(dms2dd(degree, minute, second, fraction))
}

/// Split a decimal degree value into absolute degree, minute and rounded
/// decimal seconds fields.
pub(crate) fn dms_parts(dd: f64) -> (u32, u32, f64) {
    let degrees = dd.trunc().abs() as u32;
    let minutes_field = (dd.fract() * 60.0).abs();
    let minutes = minutes_field.trunc() as u32;
    let seconds = (minutes_field.fract() * 60.0 * 100.0).round() / 100.0;
    (degrees, minutes, seconds)
}

pub(crate) fn hemisphere(dd: f64, is_longitude: bool) -> char {
    match (is_longitude, dd < 0.0) {
        (true, true) => 'W',
        (true, false) => 'E',
        (false, true) => 'S',
        (false, false) => 'N',
    }
}

/// Decimal degrees to a `DDMMSS.ss` string with hemisphere suffix.
///
/// Latitudes use a two-digit degree field, longitudes three digits.
pub fn dd2dms(dd: f64, is_longitude: bool) -> String {
    let (degrees, minutes, seconds) = dms_parts(dd);
    let suffix = hemisphere(dd, is_longitude);
    if is_longitude {
        format!("{:03}{:02}{:05.2}{}", degrees, minutes, seconds, suffix)
    } else {
        format!("{:02}{:02}{:05.2}{}", degrees, minutes, seconds, suffix)
    }
}

/// Convert a radius value with its AIXM unit field to meters.
///
/// Returns `None` for units the engine does not know about.
pub fn geo_size_to_meters(value: f64, unit: &str) -> Option<f64> {
    match unit {
        "NM" => Some(value * 1852.0),
        "KM" => Some(value * 1000.0),
        "M" => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_degree_forms() {
        assert_eq!(parse_coordinate("050.1234W").unwrap(), -50.1234);
        assert_eq!(parse_coordinate("050.12345E").unwrap(), 50.12345);
        assert_eq!(parse_coordinate("50.1234N").unwrap(), 50.1234);
        assert_eq!(parse_coordinate("50.12345S").unwrap(), -50.12345);
    }

    #[test]
    fn test_parse_dms_forms() {
        assert_eq!(parse_coordinate("501020.23N").unwrap(), 50.172286111111106);
        assert_eq!(parse_coordinate("501020.23S").unwrap(), -50.172286111111106);
        assert_eq!(parse_coordinate("1201020.99W").unwrap(), -120.17249722222223);
        assert_eq!(parse_coordinate("1201020.99E").unwrap(), 120.17249722222223);
        assert_eq!(parse_coordinate("0901020E").unwrap(), 90.17222222222223);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            parse_coordinate("somewhere north"),
            Err(CoordParseError::UnrecognizedFormat(
                "somewhere north".to_string()
            ))
        );
        assert!(parse_coordinate("5N").is_err());
    }

    #[test]
    fn test_dms2dd() {
        assert_eq!(dms2dd(50.0, 10.0, 20.0, 0.23), 50.172286111111106);
    }

    #[test]
    fn test_dd2dms_round_trip() {
        assert_eq!(dd2dms(50.172286111111106, false), "501020.23N");
        assert_eq!(dd2dms(-50.172286111111106, false), "501020.23S");
        assert_eq!(dd2dms(120.17249722222223, true), "1201020.99E");
        assert_eq!(dd2dms(-120.17249722222223, true), "1201020.99W");
    }

    #[test]
    fn test_dd2dms_small_negative_keeps_hemisphere() {
        assert_eq!(dd2dms(-0.5, false), "003000.00S");
    }

    #[test]
    fn test_geo_size_to_meters() {
        assert_eq!(geo_size_to_meters(1.0, "NM"), Some(1852.0));
        assert_eq!(geo_size_to_meters(2.5, "KM"), Some(2500.0));
        assert_eq!(geo_size_to_meters(300.0, "M"), Some(300.0));
        assert_eq!(geo_size_to_meters(1.0, "FT"), None);
    }
}
