pub mod client;
pub mod outcome;
