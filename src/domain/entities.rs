pub mod application;
pub mod owner;
pub mod token;
