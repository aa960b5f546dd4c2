//! Intake normalizer (CustomerDataAgent) - first pipeline stage
//!
//! Converts the raw customer complaint plus a vehicle-directory lookup into a
//! normalized customer-data record. A missing directory entry is not an
//! error: the last-service date degrades to the "Unknown" sentinel.

use chrono::Utc;
use tracing::debug;

use super::{StageError, CUSTOMER_DATA_AGENT};
use crate::repository::Repository;
use crate::types::{CustomerComplaint, NormalizedCustomerData};

/// Sentinel last-service value for vehicles not in the directory
pub const UNKNOWN_LAST_SERVICE: &str = "Unknown";

pub async fn normalize(
    repo: &dyn Repository,
    input: &CustomerComplaint,
) -> Result<NormalizedCustomerData, StageError> {
    let vehicle = repo
        .lookup_vehicle(&input.vehicle_id)
        .map_err(|source| StageError::Repository {
            stage: CUSTOMER_DATA_AGENT,
            source,
        })?;

    let last_service = vehicle
        .map(|v| v.last_service_date)
        .unwrap_or_else(|| UNKNOWN_LAST_SERVICE.to_string());

    debug!(
        vehicle_id = %input.vehicle_id,
        symptoms = input.symptoms.len(),
        last_service = %last_service,
        "Collected customer data"
    );

    Ok(NormalizedCustomerData {
        vehicle_id: input.vehicle_id.clone(),
        symptoms: input.symptoms.clone(),
        last_service,
        complaint: input.complaint.clone(),
        timestamp: Utc::now(),
    })
}
