pub mod location;
pub mod notify;
