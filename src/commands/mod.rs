pub mod list;
pub mod resolve;
pub mod select;
pub mod status;
