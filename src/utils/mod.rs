mod file_io;

#[cfg(test)]
mod file_io_test;

pub use file_io::*;
