// src/data/mod.rs

pub mod catalog;
pub mod dataset;

pub use catalog::Catalog;
pub use dataset::{Category, Dataset, Megahertz};
