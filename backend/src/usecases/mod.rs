pub mod auth;
pub mod bootstrap;
pub mod dashboard;
pub mod plans;
pub mod seed_catalog;
pub mod server_status;
pub mod staff;
pub mod testimonials;
