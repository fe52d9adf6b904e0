pub mod plan_types;
pub mod user_roles;
