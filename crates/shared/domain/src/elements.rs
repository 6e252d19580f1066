//! Element shapes of the built-in families, as handed over by the host.

use crate::constants::classes;
use crate::element::{ClassId, ContentType, Element, ElementId};
use std::any::Any;

/// A category, grouped by its category group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: ElementId,
    pub title: String,
    pub group: ContentType,
}

/// An entry, living in a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: ElementId,
    pub title: String,
    pub section: ContentType,
}

/// A commerce product, typed by its product type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ElementId,
    pub title: String,
    pub product_type: ContentType,
}

macro_rules! impl_element {
    ($ty:ty, $class:expr) => {
        impl Element for $ty {
            fn id(&self) -> ElementId {
                self.id
            }

            fn class_id(&self) -> ClassId {
                $class
            }

            fn as_any(&self) -> &dyn Any {
                self
            }
        }
    };
}

impl_element!(Category, classes::CATEGORY);
impl_element!(Entry, classes::ENTRY);
impl_element!(Product, classes::PRODUCT);
