//! Tool implementations, one submodule per tool family

pub mod issues;
