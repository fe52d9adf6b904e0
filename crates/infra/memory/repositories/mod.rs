pub mod plans;
pub mod server_nodes;
pub mod staff;
pub mod testimonials;
pub mod users;
