pub mod config;
pub mod core;
pub mod evaluation;
pub mod rules;

pub use crate::core::converter::{G2pConfig, G2pConverter, G2pError};
pub use crate::rules::{RuleBook, RuleBookError};
