pub mod field;
pub mod header;
pub mod shoe_fields;

pub use field::Field;
pub use header::Header;
pub use shoe_fields::ShoeFields;
