pub mod options;
pub mod payload;
