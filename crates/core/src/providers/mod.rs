pub mod demo;
pub mod sample;
pub mod traits;
