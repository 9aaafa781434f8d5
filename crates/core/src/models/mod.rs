pub mod allocation;
pub mod chart;
pub mod dashboard;
pub mod holding;
pub mod performance;
pub mod settings;
pub mod summary;
pub mod table;
