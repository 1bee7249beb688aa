use serde::{Deserialize, Serialize, Serializer};

use crate::error::{CubeRootError, Result};

/// Fixed `message` value of a successful response.
pub const DONE_MESSAGE: &str = "Done";

/// Name of the single query parameter carrying the input.
pub const PARAM: &str = "d";

/// Validated `/cubic-root` input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicRootRequest {
    pub d: f64,
}

impl CubicRootRequest {
    /// Parse the raw value of the `d` parameter.
    ///
    /// An absent or empty value is `MissingParameter`; anything `f64::from_str`
    /// rejects is `InvalidParameter` carrying the parser's message. A finite
    /// literal that overflows to infinity (`1e400`) is out of range; only an
    /// explicit `inf`/`infinity` spelling yields an infinite `d`.
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        let raw = match raw {
            Some(s) if !s.is_empty() => s,
            _ => return Err(CubeRootError::MissingParameter),
        };
        let d = raw
            .parse::<f64>()
            .map_err(|e| CubeRootError::InvalidParameter(e.to_string()))?;
        if d.is_infinite() && !is_inf_literal(raw) {
            return Err(CubeRootError::InvalidParameter("value out of range".into()));
        }
        Ok(Self { d })
    }

    /// Parse from decoded query pairs. The first `d` wins.
    pub fn from_query<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let raw = pairs
            .into_iter()
            .find(|(k, _)| *k == PARAM)
            .map(|(_, v)| v);
        Self::parse(raw)
    }
}

/// `/cubic-root` success body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubicRootResponse {
    #[serde(serialize_with = "serialize_finite")]
    pub result: f64,
    pub message: String,
}

impl CubicRootResponse {
    pub fn done(result: f64) -> Self {
        Self {
            result,
            message: DONE_MESSAGE.to_string(),
        }
    }

    /// Encode as compact JSON.
    ///
    /// JSON has no representation for NaN or infinities, so those results
    /// fail with `CubeRootError::Encoding`.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| CubeRootError::Encoding(e.to_string()))
    }
}

fn is_inf_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

// serde_json would otherwise write non-finite floats as `null`.
fn serialize_finite<S: Serializer>(v: &f64, s: S) -> std::result::Result<S::Ok, S::Error> {
    if !v.is_finite() {
        return Err(serde::ser::Error::custom(format!("unsupported value: {v}")));
    }
    s.serialize_f64(*v)
}
