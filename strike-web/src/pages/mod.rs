pub mod booking;
pub mod confirmation;
pub mod not_found;
