//! Content-type descriptor registry.
//!
//! Every supported content family (categories, entries, commerce products, and any
//! family the host adds) is described once by a [`FamilyDefinition`]: the element class
//! it dispatches on, the administrator setting holding its enabled type handles, the
//! [`TypeExtractor`] reading an element's concrete type, and its control-panel surface.
//!
//! [`Registry::builder`] resolves those definitions against the host [`TypeCatalog`] and
//! the optional [`Capabilities`](slugeq_domain::capabilities::Capabilities) once at
//! startup. At most one descriptor matches any element class.

mod catalog;
mod descriptor;
mod error;
mod extractor;
mod options;
mod registry;

pub use catalog::{StaticCatalog, TypeCatalog};
pub use descriptor::{ContentTypeDescriptor, FamilyDefinition, SaveEvents, families};
pub use error::{RegistryError, RegistryErrorExt};
pub use extractor::{CategoryGroupExtractor, ProductTypeExtractor, SectionExtractor, TypeExtractor};
pub use options::{SelectOption, SettingOptions};
pub use registry::{Registry, RegistryBuilder};
