//! Host element abstractions.
//!
//! Elements are owned by the host platform. This crate only sees them through the
//! [`Element`] trait: a stable identifier, a runtime class tag used for dispatch, and an
//! `Any` escape hatch so family-specific extractors can reach the concrete type.

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::borrow::Borrow;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier of an element in the host content store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ElementId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<u64> for ElementId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Runtime kind of an element, compared verbatim during descriptor dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassId(&'static str);

impl ClassId {
    #[must_use]
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Stable handle of a concrete content type inside its family (section, group, product type).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeHandle(String);

impl TypeHandle {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeHandle {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for TypeHandle {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for TypeHandle {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TypeHandle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A concrete content type as exposed by the host catalog: `(handle, displayName)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentType {
    pub handle: TypeHandle,
    pub name: String,
}

impl ContentType {
    pub fn new(handle: impl Into<TypeHandle>, name: impl Into<String>) -> Self {
        Self { handle: handle.into(), name: name.into() }
    }
}

/// A content item managed by the host platform.
pub trait Element: Any + fmt::Debug + Send + Sync {
    /// The element's identifier in the host content store.
    fn id(&self) -> ElementId;

    /// The element's runtime kind.
    fn class_id(&self) -> ClassId;

    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;
}

impl dyn Element {
    /// Downcasts to a concrete element type.
    #[must_use]
    pub fn downcast_ref<T: Element>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}
