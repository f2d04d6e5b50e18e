//! Ports module - re-exports the storage port definition

pub use crate::domain::storage_port::RentalsStorage;
