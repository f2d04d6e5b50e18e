pub mod get;
pub mod get_many;
