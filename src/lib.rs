//! fairlink: Jain's fairness index reporting over simulated radio-link
//! measurement catalogs.
//!
//! The pipeline is a single deterministic pass: catalog → tokenize each
//! sample → compute the index → emit one labeled line per sample.

pub mod data;
pub mod process;
pub mod report;

pub use data::{Catalog, Category, Dataset, Megahertz};
pub use process::{jains_fairness_index, parse_sample, ParseError};
pub use report::{render, ReportError, ReportLine};
