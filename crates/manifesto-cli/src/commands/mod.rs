//! CLI command implementations

pub mod convert;
pub mod example;
pub mod generate;
pub mod inspect;
pub mod json_output;
pub mod prompt;
pub mod speak;
pub mod validate;
