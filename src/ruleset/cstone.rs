//! Access to the item database behind `finder.cstone.space`.

use crate::{
    error::{Error, Result},
    functions::normalize_codename,
    statics::DEFAULT_BASE_URL,
};
use sonic_rs::{prelude::*, Value};
use std::time::{SystemTime, UNIX_EPOCH};

pub const CODENAME_FIELD: &str = "ItemCodeName";

/// Anything that can answer an API path with a JSON array of item records.
pub trait JsonSource {
    fn fetch(&self, api: &str) -> Result<Vec<Value>>;
}

/// Blocking HTTP client for the item database.
#[derive(Debug)]
pub struct CstoneClient {
    base_url: String,
    agent: ureq::Agent,
}

impl Default for CstoneClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl CstoneClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            agent: ureq::Agent::new(),
        }
    }

    /// Full request URL with a millisecond timestamp that defeats caching.
    pub fn url(&self, api: &str) -> String {
        let timestamp: u128 = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default();

        format!("{}/{}?_={timestamp}", self.base_url, api.trim_start_matches('/'))
    }
}

impl JsonSource for CstoneClient {
    fn fetch(&self, api: &str) -> Result<Vec<Value>> {
        let url: String = self.url(api);
        tracing::debug!("GET {url}");

        let response: ureq::Response = self.agent.get(&url).call().map_err(|err| Error::Http {
            url: url.clone(),
            source: Box::new(err),
        })?;
        let body: String = response
            .into_string()
            .map_err(|err| Error::Body { url: url.clone(), source: err })?;

        parse_records(&body, &url)
    }
}

/// Parses a response body that must be a JSON array.
pub fn parse_records(body: &str, origin: &str) -> Result<Vec<Value>> {
    match sonic_rs::from_str::<Vec<Value>>(body) {
        Ok(records) => Ok(records),
        Err(err) => match sonic_rs::from_str::<Value>(body) {
            Ok(value) if !value.is_array() => Err(Error::NotAList(origin.to_owned())),
            _ => Err(err.into()),
        },
    }
}

/// One record of an API answer with typed field access.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    value: &'a Value,
    pub codename: &'a str,
}

impl<'a> Record<'a> {
    pub fn new(value: &'a Value) -> Result<Self> {
        let codename: &str = value
            .get(CODENAME_FIELD)
            .and_then(|field: &Value| field.as_str())
            .ok_or_else(|| Error::MissingField {
                field: CODENAME_FIELD,
                codename: sonic_rs::to_string(value).unwrap_or_default(),
            })?;

        Ok(Self { value, codename })
    }

    pub fn base_id(&self) -> String {
        normalize_codename(self.codename)
    }

    pub fn str(&self, field: &str) -> Option<&'a str> {
        self.value.get(field).and_then(|value: &Value| value.as_str())
    }

    /// Text of a field, rendering numbers as they are.
    pub fn text(&self, field: &str) -> String {
        let Some(value) = self.value.get(field) else {
            return String::new();
        };

        if let Some(string) = value.as_str() {
            string.to_owned()
        } else if let Some(int) = value.as_i64() {
            int.to_string()
        } else if let Some(float) = value.as_f64() {
            float.to_string()
        } else {
            String::new()
        }
    }

    /// Integer value of a field that may arrive as a number or a numeric string. Absent is `0`.
    pub fn int(&self, field: &str) -> i64 {
        let Some(value) = self.value.get(field) else {
            return 0;
        };

        if let Some(int) = value.as_i64() {
            int
        } else if let Some(float) = value.as_f64() {
            float.round() as i64
        } else if let Some(string) = value.as_str() {
            let trimmed: &str = string.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().map(|float: f64| float.round() as i64))
                .unwrap_or_default()
        } else {
            0
        }
    }
}
