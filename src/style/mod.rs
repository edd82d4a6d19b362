//! Attribute mapper: resolves styling specs against entity attributes.
//!
//! A spec is absent, an attribute name, or a caller-supplied function.
//! Function failures are contained per entity: [`try_resolve`] reports them
//! as a [`StylingError`], and every public mapping entry point collapses that
//! error to an absent value so one bad function cannot abort a conversion.

pub mod scale;

use std::fmt;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::error::BoxError;
use crate::graph::Attributes;

/// Caller-supplied styling function.
pub type StyleFn = Box<dyn Fn(&Attributes) -> Result<Option<Value>, BoxError>>;

/// How a visual property (color or label) is derived per entity.
#[derive(Default)]
pub enum StyleSpec {
    #[default]
    None,
    /// Read the named attribute.
    Attribute(String),
    Function(StyleFn),
}

impl StyleSpec {
    pub fn attribute(name: impl Into<String>) -> Self {
        StyleSpec::Attribute(name.into())
    }

    /// Fallible styling function.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&Attributes) -> Result<Option<Value>, BoxError> + 'static,
    {
        StyleSpec::Function(Box::new(f))
    }

    /// Infallible styling function.
    pub fn map<F>(f: F) -> Self
    where
        F: Fn(&Attributes) -> Option<Value> + 'static,
    {
        StyleSpec::Function(Box::new(move |attrs| Ok(f(attrs))))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, StyleSpec::None)
    }
}

impl From<&str> for StyleSpec {
    fn from(name: &str) -> Self {
        StyleSpec::attribute(name)
    }
}

impl From<String> for StyleSpec {
    fn from(name: String) -> Self {
        StyleSpec::Attribute(name)
    }
}

impl<T: Into<StyleSpec>> From<Option<T>> for StyleSpec {
    fn from(spec: Option<T>) -> Self {
        spec.map(Into::into).unwrap_or_default()
    }
}

impl fmt::Debug for StyleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleSpec::None => f.write_str("None"),
            StyleSpec::Attribute(name) => f.debug_tuple("Attribute").field(name).finish(),
            StyleSpec::Function(_) => f.write_str("Function(<fn>)"),
        }
    }
}

/// A styling function failed for one entity.
#[derive(Error, Debug)]
pub enum StylingError {
    #[error("styling function failed: {0}")]
    Function(#[source] BoxError),
}

/// Resolve a spec to its raw value, surfacing function failures.
pub fn try_resolve(attrs: &Attributes, spec: &StyleSpec) -> Result<Option<Value>, StylingError> {
    match spec {
        StyleSpec::None => Ok(None),
        StyleSpec::Attribute(name) => Ok(attrs.get(name).filter(|v| !v.is_null()).cloned()),
        StyleSpec::Function(f) => f(attrs)
            .map(|v| v.filter(|v| !v.is_null()))
            .map_err(StylingError::Function),
    }
}

/// Resolve a spec to its raw value; failures become None.
pub fn resolve(entity: &str, attrs: &Attributes, spec: &StyleSpec) -> Option<Value> {
    match try_resolve(attrs, spec) {
        Ok(value) => value,
        Err(e) => {
            debug!(entity, error = %e, "styling function failed; leaving value unset");
            None
        }
    }
}

/// Render a raw styling value as text. `null` has no text form.
pub fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

pub fn map_color(entity: &str, attrs: &Attributes, spec: &StyleSpec) -> Option<String> {
    resolve(entity, attrs, spec).as_ref().and_then(stringify)
}

pub fn map_label(entity: &str, attrs: &Attributes, spec: &StyleSpec) -> Option<String> {
    resolve(entity, attrs, spec).as_ref().and_then(stringify)
}

pub fn map_edge_label(attrs: &Attributes, spec: &StyleSpec) -> Option<String> {
    resolve("edge", attrs, spec).as_ref().and_then(stringify)
}

#[cfg(test)]
#[path = "../../tests/rust/test_style.rs"]
mod tests;
