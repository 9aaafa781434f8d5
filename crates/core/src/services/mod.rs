pub mod allocation_service;
pub mod export_service;
pub mod metrics_service;
pub mod summary_service;
pub mod table_service;
