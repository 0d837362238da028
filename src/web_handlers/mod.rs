pub mod interfaces;

pub use interfaces::{config, convert_handler, run_server, ConvertQuery};
