mod network;
pub mod utils;
