use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityParseError {
    #[error("capability is empty")]
    Empty,
    #[error("capability \"{0}\" has an empty resource")]
    EmptyResource(String),
    #[error("capability \"{0}\" has an empty action")]
    EmptyAction(String),
    #[error("capability \"{0}\" has more than one ':'")]
    TooManySeparators(String),
}

/// A permission key: `resource` or `resource:action`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Capability {
    pub resource: String,
    pub action: Option<String>,
}

impl Capability {
    pub fn new(resource: impl Into<String>, action: Option<&str>) -> Self {
        Self {
            resource: resource.into(),
            action: action.map(str::to_string),
        }
    }

    pub fn resource(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            action: None,
        }
    }

    pub fn parse(value: &str) -> Result<Self, CapabilityParseError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(CapabilityParseError::Empty);
        }
        let mut parts = value.split(':');
        let resource = parts.next().unwrap_or("").trim();
        let action = parts.next().map(str::trim);
        if parts.next().is_some() {
            return Err(CapabilityParseError::TooManySeparators(value.to_string()));
        }
        if resource.is_empty() {
            return Err(CapabilityParseError::EmptyResource(value.to_string()));
        }
        if action == Some("") {
            return Err(CapabilityParseError::EmptyAction(value.to_string()));
        }
        Ok(Self::new(resource, action))
    }

    /// String actually checked for a `(permission, action)` pair: `permission:action`
    /// when an action is given, `permission` otherwise. No syntax check is applied.
    pub fn effective(permission: &str, action: Option<&str>) -> String {
        match action {
            Some(action) => format!("{}:{}", permission, action),
            None => permission.to_string(),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        self.resource == "*"
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.action {
            Some(action) => write!(f, "{}:{}", self.resource, action),
            None => f.write_str(&self.resource),
        }
    }
}

impl FromStr for Capability {
    type Err = CapabilityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Capability {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Capability {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
