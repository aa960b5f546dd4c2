//! In-memory repository backing the service as shipped.
//!
//! Vehicle and history tables are fixed after construction; only the
//! appointment book mutates, behind its own lock. Lock poisoning surfaces as
//! a store error rather than a panic.

use std::collections::HashMap;
use std::sync::RwLock;

use super::{Repository, RepositoryError};
use crate::types::{
    Appointment, AppointmentStatus, ServiceRecord, ServiceType, VehicleRecord, VehicleStatus,
};

pub struct InMemoryRepository {
    vehicles: HashMap<String, VehicleRecord>,
    history: Vec<ServiceRecord>,
    appointments: RwLock<Vec<Appointment>>,
}

impl InMemoryRepository {
    /// Empty repository; hosts seed it through the insert methods.
    pub fn new() -> Self {
        Self {
            vehicles: HashMap::new(),
            history: Vec::new(),
            appointments: RwLock::new(Vec::new()),
        }
    }

    pub fn insert_vehicle(&mut self, vehicle: VehicleRecord) {
        self.vehicles.insert(vehicle.id.clone(), vehicle);
    }

    pub fn insert_service_record(&mut self, record: ServiceRecord) {
        self.history.push(record);
    }

    pub fn insert_appointment(&mut self, appointment: Appointment) {
        match self.appointments.get_mut() {
            Ok(book) => book.push(appointment),
            Err(poisoned) => poisoned.into_inner().push(appointment),
        }
    }

    /// Repository pre-loaded with the reference dataset the service ships
    /// with: two directory vehicles, four service records (two of them tied
    /// to the Batch-X cooling defect), and three historical appointments.
    pub fn seeded() -> Self {
        let mut repo = Self::new();

        repo.insert_vehicle(VehicleRecord {
            id: "VN12345".to_string(),
            model: "Tesla Model 3".to_string(),
            year: 2022,
            vin: "5YJ3E1EA0NF123456".to_string(),
            owner_name: "John Doe".to_string(),
            mileage: 24_500,
            last_service_date: "2024-10-12".to_string(),
            status: VehicleStatus::Warning,
        });
        repo.insert_vehicle(VehicleRecord {
            id: "VN67890".to_string(),
            model: "Ford Mustang Mach-E".to_string(),
            year: 2023,
            vin: "1FMCU0Hz1PMA67890".to_string(),
            owner_name: "Jane Smith".to_string(),
            mileage: 12_000,
            last_service_date: "2024-11-01".to_string(),
            status: VehicleStatus::Healthy,
        });

        repo.insert_service_record(ServiceRecord {
            id: "SR-001".to_string(),
            vehicle_id: "VN12345".to_string(),
            date: "2023-10-12".to_string(),
            description: "Annual Maintenance".to_string(),
            service_type: ServiceType::Maintenance,
            technician_notes: Some("Routine checkup. All systems normal.".to_string()),
            batch_id: None,
        });
        repo.insert_service_record(ServiceRecord {
            id: "SR-002".to_string(),
            vehicle_id: "VN12345".to_string(),
            date: "2024-04-15".to_string(),
            description: "Tire Rotation".to_string(),
            service_type: ServiceType::Maintenance,
            technician_notes: None,
            batch_id: None,
        });
        // Sibling vehicles in Batch-X showing the cooling defect pattern
        repo.insert_service_record(ServiceRecord {
            id: "SR-003".to_string(),
            vehicle_id: "VN12346".to_string(),
            date: "2024-11-20".to_string(),
            description: "Coolant Pump Replacement".to_string(),
            service_type: ServiceType::Repair,
            technician_notes: Some("Pump failure detected. Common in this batch.".to_string()),
            batch_id: Some("Batch-X".to_string()),
        });
        repo.insert_service_record(ServiceRecord {
            id: "SR-004".to_string(),
            vehicle_id: "VN12347".to_string(),
            date: "2024-12-01".to_string(),
            description: "Overheating Diagnosis".to_string(),
            service_type: ServiceType::Repair,
            technician_notes: Some("Cooling system inefficiency.".to_string()),
            batch_id: Some("Batch-X".to_string()),
        });

        repo.insert_appointment(Appointment {
            id: "APT-100".to_string(),
            vehicle_id: "VN12345".to_string(),
            date: "2024-10-12".to_string(),
            time: "10:00 AM".to_string(),
            status: AppointmentStatus::Completed,
            reason: "Annual Maintenance".to_string(),
        });
        repo.insert_appointment(Appointment {
            id: "APT-101".to_string(),
            vehicle_id: "VN67890".to_string(),
            date: "2025-10-15".to_string(),
            time: "02:00 PM".to_string(),
            status: AppointmentStatus::Scheduled,
            reason: "Tire Replacement".to_string(),
        });
        repo.insert_appointment(Appointment {
            id: "APT-102".to_string(),
            vehicle_id: "VN55555".to_string(),
            date: "2025-10-16".to_string(),
            time: "09:00 AM".to_string(),
            status: AppointmentStatus::Scheduled,
            reason: "Brake Inspection".to_string(),
        });

        repo
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for InMemoryRepository {
    fn lookup_vehicle(&self, id: &str) -> Result<Option<VehicleRecord>, RepositoryError> {
        Ok(self.vehicles.get(id).cloned())
    }

    fn service_history(&self, vehicle_id: &str) -> Result<Vec<ServiceRecord>, RepositoryError> {
        Ok(self
            .history
            .iter()
            .filter(|r| r.vehicle_id == vehicle_id)
            .cloned()
            .collect())
    }

    fn batch_history(&self, batch_id: &str) -> Result<Vec<ServiceRecord>, RepositoryError> {
        Ok(self
            .history
            .iter()
            .filter(|r| r.batch_id.as_deref() == Some(batch_id))
            .cloned()
            .collect())
    }

    fn append_appointment(&self, appointment: Appointment) -> Result<(), RepositoryError> {
        let mut book = self
            .appointments
            .write()
            .map_err(|e| RepositoryError::Store(e.to_string()))?;
        book.push(appointment);
        Ok(())
    }

    fn list_appointments(&self) -> Result<Vec<Appointment>, RepositoryError> {
        let book = self
            .appointments
            .read()
            .map_err(|e| RepositoryError::Store(e.to_string()))?;
        Ok(book.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_directory_is_queryable_by_exact_id() {
        let repo = InMemoryRepository::seeded();

        let vehicle = repo.lookup_vehicle("VN12345").unwrap().unwrap();
        assert_eq!(vehicle.model, "Tesla Model 3");
        assert_eq!(vehicle.year, 2022);

        assert!(repo.lookup_vehicle("VN99999").unwrap().is_none());
    }

    #[test]
    fn service_history_is_filtered_per_vehicle() {
        let repo = InMemoryRepository::seeded();

        let history = repo.service_history("VN12345").unwrap();
        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|r| r.vehicle_id == "VN12345"));

        assert!(repo.service_history("VN99999").unwrap().is_empty());
    }

    #[test]
    fn batch_history_spans_sibling_vehicles() {
        let repo = InMemoryRepository::seeded();

        let batch = repo.batch_history("Batch-X").unwrap();
        assert_eq!(batch.len(), 2);
        assert!(batch.iter().any(|r| r.vehicle_id == "VN12346"));
        assert!(batch.iter().any(|r| r.vehicle_id == "VN12347"));
    }

    #[test]
    fn appointments_append_and_list() {
        let repo = InMemoryRepository::seeded();
        assert_eq!(repo.list_appointments().unwrap().len(), 3);

        repo.append_appointment(Appointment {
            id: "APT-200".to_string(),
            vehicle_id: "VN67890".to_string(),
            date: "2025-11-01".to_string(),
            time: "11:00 AM".to_string(),
            status: AppointmentStatus::Scheduled,
            reason: "Coolant check".to_string(),
        })
        .unwrap();

        let listed = repo.list_appointments().unwrap();
        assert_eq!(listed.len(), 4);
        assert_eq!(listed[3].id, "APT-200");
    }
}
