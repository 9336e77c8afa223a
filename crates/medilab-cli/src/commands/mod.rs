pub mod config;
pub mod contact;
pub mod counter;
pub mod validate;
