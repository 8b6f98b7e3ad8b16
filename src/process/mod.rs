// src/process/mod.rs

pub mod fairness;
pub mod parse;

pub use fairness::jains_fairness_index;
pub use parse::{parse_sample, parse_sample_with, ParseError, SAMPLE_DELIMITER};
