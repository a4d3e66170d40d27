//! Configuration validation
//!
//! - `trait_def`: the `Validate` trait
//! - `config_validators`: one implementation per configuration section

mod config_validators;
mod trait_def;


pub use trait_def::Validate;
