//! Domain model for custom task properties.

mod definition;
mod error;
mod ids;
mod properties;
mod value;

pub use definition::{NewPropertyDefinition, PropertyDefinition, PropertyDefinitionPatch, PropertyKind};
pub use error::{ParsePropertyKindError, PropertyDomainError};
pub use ids::PropertyDefinitionId;
pub use properties::TaskProperties;
pub use value::PropertyValue;
