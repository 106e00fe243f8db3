pub mod capture_interaction;
pub mod status;
pub mod viewport;
