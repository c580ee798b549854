//! Application services for technician registry orchestration.

mod registry;

pub use registry::{
    RegisterTechnicianRequest, TechnicianRegistryError, TechnicianRegistryResult,
    TechnicianRegistryService, UpdateTechnicianProfileRequest,
};
