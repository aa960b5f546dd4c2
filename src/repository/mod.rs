//! Repository seam for reference data and appointments.
//!
//! The pipeline never touches a datastore directly: the vehicle directory,
//! service history and appointment book sit behind the [`Repository`] trait,
//! injected into the orchestrator and the API handlers. The in-memory
//! implementation backs the service as shipped; a persistent store slots in
//! behind the same interface.

mod memory;

pub use memory::InMemoryRepository;

use thiserror::Error;

use crate::types::{Appointment, ServiceRecord, VehicleRecord};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("appointment store unavailable: {0}")]
    Store(String),
}

/// Read access to reference data plus the appointment book.
///
/// Vehicle and history reads are keyed by exact identifier. A missing record
/// is `Ok(None)` / an empty list, never an error — only a store-level fault
/// surfaces as `Err`.
pub trait Repository: Send + Sync {
    fn lookup_vehicle(&self, id: &str) -> Result<Option<VehicleRecord>, RepositoryError>;

    fn service_history(&self, vehicle_id: &str) -> Result<Vec<ServiceRecord>, RepositoryError>;

    /// Service records sharing a manufacturing batch, across all vehicles
    fn batch_history(&self, batch_id: &str) -> Result<Vec<ServiceRecord>, RepositoryError>;

    fn append_appointment(&self, appointment: Appointment) -> Result<(), RepositoryError>;

    fn list_appointments(&self) -> Result<Vec<Appointment>, RepositoryError>;
}
