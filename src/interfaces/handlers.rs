pub mod applications;
pub mod home;
pub mod system;
