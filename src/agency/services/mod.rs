//! Orchestration services for agency records.

mod provisioning;
mod records;

pub use provisioning::{
    ClientProvisioning, ClientProvisioningService, ProvisionedClient, ProvisioningError,
};
pub use records::{RecordService, RecordServiceError, RecordServiceResult};
