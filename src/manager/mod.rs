mod engine_manager;
mod file_engine_manager;


pub use engine_manager::*;
pub use file_engine_manager::*;
