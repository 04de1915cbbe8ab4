//! Address lookup tables: country > state > city > district, keyed by short codes.

use regex::Regex;
use std::sync::LazyLock;

static REGION_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\-]{1,16}$").unwrap());

pub fn is_valid_region_code(code: &str) -> bool {
    REGION_CODE_REGEX.is_match(code)
}

/// Codes are stored upper-case; lookups fold whatever the client sent.
pub fn normalize_region_code(code: &str) -> String {
    code.trim().to_uppercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegionCodeError {
    #[error("{0} is invalid")]
    Invalid(&'static str),

    #[error("districtCode requires cityCode")]
    DistrictWithoutCity,
}

fn checked(field: &'static str, raw: &str) -> Result<String, RegionCodeError> {
    let code = normalize_region_code(raw);
    if !is_valid_region_code(&code) {
        return Err(RegionCodeError::Invalid(field));
    }
    Ok(code)
}

/// Which level to list, and under which parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionScope {
    Countries,
    States {
        country: String,
    },
    Cities {
        country: String,
        state: String,
    },
    Districts {
        country: String,
        state: String,
        city: String,
    },
}

impl RegionScope {
    /// Validates and upper-cases every parent code.
    pub fn normalized(self) -> Result<Self, RegionCodeError> {
        Ok(match self {
            Self::Countries => Self::Countries,
            Self::States { country } => Self::States {
                country: checked("countryCode", &country)?,
            },
            Self::Cities { country, state } => Self::Cities {
                country: checked("countryCode", &country)?,
                state: checked("stateCode", &state)?,
            },
            Self::Districts {
                country,
                state,
                city,
            } => Self::Districts {
                country: checked("countryCode", &country)?,
                state: checked("stateCode", &state)?,
                city: checked("cityCode", &city)?,
            },
        })
    }
}

/// The address codes of one profile. City and district are optional, but a
/// district never stands without its city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionPath {
    pub country: String,
    pub state: String,
    pub city: Option<String>,
    pub district: Option<String>,
}

impl RegionPath {
    /// Empty city or district codes mean "not given".
    pub fn parse(
        country: &str,
        state: &str,
        city: &str,
        district: &str,
    ) -> Result<Self, RegionCodeError> {
        let optional = |field: &'static str, raw: &str| -> Result<Option<String>, RegionCodeError> {
            if raw.trim().is_empty() {
                Ok(None)
            } else {
                checked(field, raw).map(Some)
            }
        };

        let path = Self {
            country: checked("countryCode", country)?,
            state: checked("stateCode", state)?,
            city: optional("cityCode", city)?,
            district: optional("districtCode", district)?,
        };

        if path.district.is_some() && path.city.is_none() {
            return Err(RegionCodeError::DistrictWithoutCity);
        }
        Ok(path)
    }
}
