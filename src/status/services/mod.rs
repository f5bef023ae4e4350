//! Application services for the status registry.

mod registry;

pub use registry::{
    CreateStatusRequest, StatusRegistryService, StatusRegistryServiceError,
    StatusRegistryServiceResult,
};
