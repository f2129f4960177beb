pub mod button;
pub mod header;
