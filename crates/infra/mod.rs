pub mod memory;
pub mod security;
