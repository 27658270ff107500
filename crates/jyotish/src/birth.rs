//! Birth data supplied by the person requesting a report.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Gender used to pick the analysis branch and pronouns.
///
/// Anything that is not clearly male or female (non-binary, prefer not to
/// say, unknown values) is treated as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Other => "OTHER",
        }
    }
}

impl FromStr for Gender {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "male" | "m" => Gender::Male,
            "female" | "f" => Gender::Female,
            _ => Gender::Other,
        })
    }
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(gender) => gender,
            Err(never) => match never {},
        }
    }
}

impl From<Gender> for String {
    fn from(value: Gender) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while validating raw birth input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BirthDataError {
    #[error("Invalid birth date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },
    #[error("Invalid birth time '{value}': expected HH:MM or HH:MM:SS")]
    InvalidTime { value: String },
    #[error("Birth place must not be empty")]
    MissingPlace,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthData {
    pub date: NaiveDate,
    /// Local birth time as entered, "HH:MM" or "HH:MM:SS".
    pub time: String,
    pub place: String,
    pub gender: Gender,
}

impl BirthData {
    pub fn new(date: NaiveDate, time: impl Into<String>, place: impl Into<String>, gender: Gender) -> Self {
        Self {
            date,
            time: time.into(),
            place: place.into(),
            gender,
        }
    }

    /// Validate raw form input and build birth data from it.
    pub fn parse(date: &str, time: &str, place: &str, gender: &str) -> Result<Self, BirthDataError> {
        let date_str = date.trim();
        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
            BirthDataError::InvalidDate { value: date_str.to_string() }
        })?;

        let time_str = time.trim();
        parse_birth_time(time_str).ok_or_else(|| BirthDataError::InvalidTime {
            value: time_str.to_string(),
        })?;

        let place = place.trim();
        if place.is_empty() {
            return Err(BirthDataError::MissingPlace);
        }

        let gender = match gender.parse::<Gender>() {
            Ok(g) => g,
            Err(never) => match never {},
        };

        Ok(Self::new(date, time_str, place, gender))
    }
}

fn parse_birth_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}
