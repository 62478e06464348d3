//! Open Location Code encoding and decoding.
//!
//! Implements the pair section of the Open Location Code standard: a base-20
//! digit alphabet, latitude/longitude digits interleaved in pairs, each pair
//! refining the cell by a factor of 20, a `+` separator after the eighth
//! digit, and `0` padding for truncated codes. The tagging subsystem only
//! ever encodes full-precision codes and decodes full or zero-padded ones,
//! so grid refinement past ten digits is not implemented.

use crate::error::{GeotagError, Result};

/// The 20-symbol Open Location Code digit alphabet.
pub const CODE_ALPHABET: &str = "23456789CFGHJMPQRVWX";

/// Separator between the eight-digit prefix and the remaining digits.
const SEPARATOR: char = '+';

/// Position of the separator in a code.
const SEPARATOR_POSITION: usize = 8;

/// Padding digit for truncated codes.
const PADDING: char = '0';

/// Number of digits in a full-precision code.
const FULL_CODE_DIGITS: usize = 10;

/// Angular cell size per digit pair, in degrees.
const PAIR_RESOLUTIONS: [f64; 5] = [20.0, 1.0, 0.05, 0.0025, 0.000125];

/// A decoded cell: its center and angular size in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodedCell {
    /// Latitude of the cell center
    pub latitude: f64,
    /// Longitude of the cell center
    pub longitude: f64,
    /// Width and height of the cell, in degrees
    pub resolution: f64,
}

/// Full-precision geocode provider.
///
/// Abstracts the encode/decode pair so a conforming alternate implementation
/// of the same coordinate-encoding standard can be substituted.
pub trait CodeProvider {
    /// Encodes a coordinate as a full-precision code.
    ///
    /// Out-of-range inputs are rejected, never clamped.
    fn encode(&self, lat: f64, lng: f64) -> Result<String>;

    /// Decodes a full or zero-padded code into its cell.
    fn decode(&self, code: &str) -> Result<DecodedCell>;
}

/// Default provider implementing the Open Location Code standard.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlusCode;

impl CodeProvider for PlusCode {
    fn encode(&self, lat: f64, lng: f64) -> Result<String> {
        encode(lat, lng)
    }

    fn decode(&self, code: &str) -> Result<DecodedCell> {
        decode(code)
    }
}

/// Index of a character in the code alphabet, case-insensitive.
#[inline]
pub(crate) fn digit_value(c: char) -> Option<usize> {
    CODE_ALPHABET.find(c.to_ascii_uppercase())
}

fn encode(lat: f64, lng: f64) -> Result<String> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(GeotagError::InvalidCoordinate(format!(
            "latitude {lat} outside [-90, 90]"
        )));
    }
    if !(-180.0..=180.0).contains(&lng) {
        return Err(GeotagError::InvalidCoordinate(format!(
            "longitude {lng} outside [-180, 180]"
        )));
    }

    // The north pole encodes into the northernmost cell; longitude 180
    // belongs to the cell at -180.
    let lat = if lat == 90.0 {
        90.0 - PAIR_RESOLUTIONS[4]
    } else {
        lat
    };
    let lng = if lng == 180.0 { -180.0 } else { lng };

    let alphabet: Vec<char> = CODE_ALPHABET.chars().collect();
    let mut lat_rem = lat + 90.0;
    let mut lng_rem = lng + 180.0;
    let mut digits = String::with_capacity(FULL_CODE_DIGITS + 1);

    for resolution in PAIR_RESOLUTIONS {
        let lat_digit = ((lat_rem / resolution) as usize).min(alphabet.len() - 1);
        let lng_digit = ((lng_rem / resolution) as usize).min(alphabet.len() - 1);
        lat_rem -= lat_digit as f64 * resolution;
        lng_rem -= lng_digit as f64 * resolution;
        digits.push(alphabet[lat_digit]);
        digits.push(alphabet[lng_digit]);
    }

    digits.insert(SEPARATOR_POSITION, SEPARATOR);
    Ok(digits)
}

fn decode(code: &str) -> Result<DecodedCell> {
    let code = code.trim().to_ascii_uppercase();

    let Some(sep_index) = code.find(SEPARATOR) else {
        return Err(GeotagError::InvalidCode(format!(
            "missing '{SEPARATOR}' in {code:?}"
        )));
    };
    if sep_index != SEPARATOR_POSITION || code[sep_index + 1..].contains(SEPARATOR) {
        return Err(GeotagError::InvalidCode(format!(
            "misplaced '{SEPARATOR}' in {code:?}"
        )));
    }

    let stripped: String = code.chars().filter(|&c| c != SEPARATOR).collect();

    // Padding may only fill out the eight-digit prefix, with nothing after it.
    let significant = match stripped.find(PADDING) {
        Some(pad_start) => {
            let padding_ok = stripped[pad_start..].chars().all(|c| c == PADDING)
                && stripped.len() == SEPARATOR_POSITION;
            if !padding_ok {
                return Err(GeotagError::InvalidCode(format!("bad padding in {code:?}")));
            }
            &stripped[..pad_start]
        }
        None => &stripped[..],
    };

    if significant.len() < 2 || significant.len() % 2 != 0 || significant.len() > FULL_CODE_DIGITS {
        return Err(GeotagError::InvalidCode(format!(
            "unsupported digit count {} in {code:?}",
            significant.len()
        )));
    }

    let mut values = Vec::with_capacity(significant.len());
    for c in significant.chars() {
        match digit_value(c) {
            Some(v) => values.push(v),
            None => {
                return Err(GeotagError::InvalidCode(format!(
                    "invalid digit {c:?} in {code:?}"
                )));
            }
        }
    }

    let mut south = -90.0_f64;
    let mut west = -180.0_f64;
    for (pair, chunk) in values.chunks(2).enumerate() {
        let resolution = PAIR_RESOLUTIONS[pair];
        south += chunk[0] as f64 * resolution;
        west += chunk[1] as f64 * resolution;
    }
    let size = PAIR_RESOLUTIONS[values.len() / 2 - 1];

    Ok(DecodedCell {
        latitude: south + size / 2.0,
        longitude: west + size / 2.0,
        resolution: size,
    })
}
