// countrygen-lib: country name lookup table generator

pub mod cli;
pub mod codegen;
pub mod commands;
pub mod config;
pub mod countries;
pub mod errors;
pub mod fileops;
pub mod http_client;
pub mod json;
pub mod logger;
pub mod lookup;
pub mod output;
