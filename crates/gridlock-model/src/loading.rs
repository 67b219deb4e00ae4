// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Scenario stream loader.
//!
//! This module turns whitespace-delimited text streams into validated
//! [`Scenario`] values. A stream holds any number of scenarios back to
//! back: each begins with its vehicle count `N`, followed by `N` vehicle
//! records of the form `length orientation row col` (for example
//! `2 H 2 0`). A count of `0` — or a clean end of input at a scenario
//! boundary — terminates the stream.
//!
//! Malformed input is never silently accepted: unparsable tokens, counts
//! above the fixed vehicle capacity, unknown orientation letters, and
//! geometrically invalid placements all surface as descriptive
//! [`ScenarioLoadError`]s pointing at the offending vehicle. Lines may
//! contain comments introduced by `#`, which are ignored during
//! tokenization.

use crate::{
    index::VehicleIndex,
    scenario::{Scenario, ScenarioError},
    vehicle::{Orientation, Vehicle, VehicleLength},
    MAX_VEHICLES,
};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};

/// The error type for the scenario loading process.
#[derive(Debug)]
pub enum ScenarioLoadError {
    /// An I/O error occurred while reading the input stream.
    Io(std::io::Error),
    /// The input ended in the middle of a scenario record.
    UnexpectedEof,
    /// A token could not be parsed into the expected type.
    Parse(ParseTokenError),
    /// The declared vehicle count exceeds the fixed capacity.
    InvalidVehicleCount { count: usize },
    /// A vehicle record declared a length other than 2 or 3.
    InvalidLength { vehicle: VehicleIndex, length: usize },
    /// A vehicle record used an orientation token other than `H` or `V`.
    InvalidOrientation { vehicle: VehicleIndex, token: String },
    /// The vehicle records do not form a valid scenario.
    Invalid(ScenarioError),
}

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "usize").
    pub type_name: &'static str,
}

impl std::fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Could not parse token '{}' as type {}",
            self.token, self.type_name
        )
    }
}

impl std::error::Error for ParseTokenError {}

impl std::fmt::Display for ScenarioLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedEof => {
                write!(f, "Unexpected end of input while parsing a scenario")
            }
            Self::Parse(e) => write!(f, "Parse error: {}", e),
            Self::InvalidVehicleCount { count } => write!(
                f,
                "Scenario declares {} vehicles but at most {} are supported",
                count, MAX_VEHICLES
            ),
            Self::InvalidLength { vehicle, length } => write!(
                f,
                "{} has length {} but only lengths 2 and 3 exist",
                vehicle, length
            ),
            Self::InvalidOrientation { vehicle, token } => write!(
                f,
                "{} has orientation '{}' but only 'H' and 'V' are valid",
                vehicle, token
            ),
            Self::Invalid(e) => write!(f, "Invalid scenario: {}", e),
        }
    }
}

impl std::error::Error for ScenarioLoadError {}

impl From<std::io::Error> for ScenarioLoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseTokenError> for ScenarioLoadError {
    fn from(e: ParseTokenError) -> Self {
        Self::Parse(e)
    }
}

impl From<ScenarioError> for ScenarioLoadError {
    fn from(e: ScenarioError) -> Self {
        Self::Invalid(e)
    }
}

/// A loader for scenario streams.
///
/// The format this parser expects is as follows (whitespace-separated
/// tokens, `#` starts a comment):
///
/// ```raw
/// N                    // number of vehicles, 0 terminates the stream
/// len_0 o_0 row_0 col_0   // vehicle 0 (the target): length, H|V, anchor
/// ...
/// len_{N-1} o_{N-1} row_{N-1} col_{N-1}
/// N'                   // next scenario, and so on
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Creates a new `ScenarioLoader`.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Loads all scenarios from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<Vec<Scenario>, ScenarioLoadError> {
        let mut sc = Scanner::new(rdr);
        let mut scenarios = Vec::new();

        loop {
            // A missing count at a scenario boundary is a clean end of
            // input, exactly like the explicit 0 terminator.
            let count: usize = match sc.next_opt()? {
                None | Some(0) => break,
                Some(n) => n,
            };

            if count > MAX_VEHICLES {
                return Err(ScenarioLoadError::InvalidVehicleCount { count });
            }

            let mut vehicles = Vec::with_capacity(count);
            for i in 0..count {
                vehicles.push(self.read_vehicle(&mut sc, VehicleIndex::new(i))?);
            }

            scenarios.push(Scenario::new(vehicles)?);
        }

        Ok(scenarios)
    }

    /// Loads all scenarios from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Scenario>, ScenarioLoadError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads all scenarios from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Vec<Scenario>, ScenarioLoadError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads all scenarios from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Vec<Scenario>, ScenarioLoadError> {
        self.from_reader(s.as_bytes())
    }

    fn read_vehicle<R: BufRead>(
        &self,
        sc: &mut Scanner<R>,
        vehicle: VehicleIndex,
    ) -> Result<Vehicle, ScenarioLoadError> {
        let raw_length: usize = sc.next()?;
        let length = VehicleLength::from_cells(raw_length).ok_or(
            ScenarioLoadError::InvalidLength {
                vehicle,
                length: raw_length,
            },
        )?;

        let token: String = sc.next()?;
        let orientation = match token.as_str() {
            "H" => Orientation::Horizontal,
            "V" => Orientation::Vertical,
            _ => return Err(ScenarioLoadError::InvalidOrientation { vehicle, token }),
        };

        let row: usize = sc.next()?;
        let col: usize = sc.next()?;

        Ok(Vehicle::new(row, col, length, orientation))
    }
}

/// A helper to read whitespace-delimited tokens from a generic reader.
struct Scanner<R> {
    rdr: R,
    buf: String,
    pos: usize,
}

impl<R: BufRead> Scanner<R> {
    /// Creates a new `Scanner` wrapping the given reader.
    #[inline]
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            buf: String::new(),
            pos: 0,
        }
    }

    /// Refills the internal line buffer. Returns `Ok(true)` if data was
    /// read, `Ok(false)` on EOF.
    #[inline]
    fn fill_line(&mut self) -> Result<bool, ScenarioLoadError> {
        self.buf.clear();
        self.pos = 0;
        let n = self
            .rdr
            .read_line(&mut self.buf)
            .map_err(ScenarioLoadError::Io)?;
        Ok(n > 0)
    }

    /// Reads the next token and parses it into `T`.
    fn next<T>(&mut self) -> Result<T, ScenarioLoadError>
    where
        T: FromStr,
    {
        self.next_opt()?.ok_or(ScenarioLoadError::UnexpectedEof)
    }

    /// Reads the next token and parses it into `T`, returning `None` at a
    /// clean end of input. Skips whitespace and comments starting with
    /// `#`.
    fn next_opt<T>(&mut self) -> Result<Option<T>, ScenarioLoadError>
    where
        T: FromStr,
    {
        loop {
            // Refill buffer if empty or consumed
            if self.pos >= self.buf.len() && !self.fill_line()? {
                return Ok(None);
            }

            // Skip whitespace and comments
            while self.pos < self.buf.len() {
                let remainder = &self.buf[self.pos..];

                // Found a comment? Skip to end of line immediately.
                if remainder.starts_with('#') {
                    self.pos = self.buf.len();
                    break;
                }

                let c = remainder.chars().next().unwrap();
                if !c.is_whitespace() {
                    break; // Found start of a token
                }

                self.pos += c.len_utf8();
            }

            // If we consumed the whole line (whitespace/comments), loop to
            // get the next line
            if self.pos >= self.buf.len() {
                continue;
            }

            // Find end of token
            let mut end = self.pos;
            while end < self.buf.len() {
                let remainder = &self.buf[end..];

                // Token ends at whitespace or start of a comment
                if remainder.starts_with('#') {
                    break;
                }

                let c = remainder.chars().next().unwrap();
                if c.is_whitespace() {
                    break;
                }
                end += c.len_utf8();
            }

            let token = &self.buf[self.pos..end];
            self.pos = end;

            if token.is_empty() {
                continue;
            }

            return token
                .parse::<T>()
                .map(Some)
                .map_err(|_| {
                    ScenarioLoadError::Parse(ParseTokenError {
                        token: token.to_owned(),
                        type_name: std::any::type_name::<T>(),
                    })
                });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_scenario() {
        let input = "2\n2 H 2 0\n3 V 0 4\n0\n";
        let scenarios = ScenarioLoader::new()
            .from_str(input)
            .expect("input should load");

        assert_eq!(scenarios.len(), 1);
        let scenario = &scenarios[0];
        assert_eq!(scenario.num_vehicles(), 2);
        assert_eq!(scenario.vehicles()[0].row(), 2);
        assert_eq!(
            scenario.vehicles()[1].orientation(),
            Orientation::Vertical
        );
    }

    #[test]
    fn test_multiple_scenarios_until_zero() {
        let input = "1\n2 H 2 0\n1\n2 H 2 4\n0\n1\n2 H 0 0\n";
        let scenarios = ScenarioLoader::new().from_str(input).unwrap();
        // Everything after the 0 terminator is ignored.
        assert_eq!(scenarios.len(), 2);
    }

    #[test]
    fn test_eof_at_boundary_is_clean_end() {
        let input = "1\n2 H 2 0\n";
        let scenarios = ScenarioLoader::new().from_str(input).unwrap();
        assert_eq!(scenarios.len(), 1);
    }

    #[test]
    fn test_comments_and_free_form_whitespace() {
        let input = "# a scenario\n2   # two vehicles\n2 H 2 0\n  3\nV 0 4\n0";
        let scenarios = ScenarioLoader::new().from_str(input).unwrap();
        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].num_vehicles(), 2);
    }

    #[test]
    fn test_truncated_record_is_unexpected_eof() {
        let input = "1\n2 H 2";
        let err = ScenarioLoader::new().from_str(input).unwrap_err();
        assert!(matches!(err, ScenarioLoadError::UnexpectedEof));
    }

    #[test]
    fn test_non_numeric_token_fails_fast() {
        let input = "1\ntwo H 2 0\n0";
        let err = ScenarioLoader::new().from_str(input).unwrap_err();
        assert!(matches!(err, ScenarioLoadError::Parse(_)));
    }

    #[test]
    fn test_bad_orientation_token() {
        let input = "1\n2 X 2 0\n0";
        let err = ScenarioLoader::new().from_str(input).unwrap_err();
        match err {
            ScenarioLoadError::InvalidOrientation { vehicle, token } => {
                assert_eq!(vehicle.get(), 0);
                assert_eq!(token, "X");
            }
            other => panic!("expected InvalidOrientation, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_length_value() {
        let input = "1\n4 H 2 0\n0";
        let err = ScenarioLoader::new().from_str(input).unwrap_err();
        assert!(matches!(
            err,
            ScenarioLoadError::InvalidLength { length: 4, .. }
        ));
    }

    #[test]
    fn test_oversized_vehicle_count_is_rejected_before_reading_records() {
        let input = "9999\n";
        let err = ScenarioLoader::new().from_str(input).unwrap_err();
        assert!(matches!(
            err,
            ScenarioLoadError::InvalidVehicleCount { count: 9999 }
        ));
    }

    #[test]
    fn test_out_of_grid_placement_is_rejected() {
        let input = "1\n2 H 2 5\n0";
        let err = ScenarioLoader::new().from_str(input).unwrap_err();
        assert!(matches!(err, ScenarioLoadError::Invalid(_)));
    }
}
