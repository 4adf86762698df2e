pub mod shift;
pub mod summary;
