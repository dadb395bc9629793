pub mod analysis_service;
pub mod search_service;
