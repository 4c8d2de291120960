pub mod date;
pub mod valid_uuid;
