pub mod api;
pub mod intake;
pub mod pipeline;
pub mod request;
pub mod shared;
