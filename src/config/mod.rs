//! Configuration file support

pub mod args_file;


pub use args_file::ArgsFile;
