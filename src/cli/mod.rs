pub mod emit;
pub mod opts;
pub mod status;
