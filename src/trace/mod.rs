pub mod index;
pub mod row;
