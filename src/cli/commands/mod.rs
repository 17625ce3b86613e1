//! CLI command modules

pub mod common;
pub mod info;
pub mod informer_gen;
pub mod lister_gen;
