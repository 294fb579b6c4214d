use std::{fmt::Display, str::FromStr};

use thiserror::Error;

/// Platform routing value used as the API host prefix (`euw1`, `na1`, `kr`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region(String);

impl Region {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Region {
    type Err = InvalidRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let region = s.trim().to_ascii_lowercase();
        if region.is_empty() || !region.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(InvalidRegion(s.to_string()));
        }
        Ok(Region(region))
    }
}

#[derive(Debug, Error)]
#[error("Invalid region {0:?}, expected a platform id such as euw1, na1 or kr")]
pub struct InvalidRegion(String);
