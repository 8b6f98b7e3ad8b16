use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::data::{Catalog, Category, Dataset, Megahertz};
use crate::process::{jains_fairness_index, parse_sample, ParseError};

/// A rendering defect: bad sample data or a mislabeled dataset.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Position surveys pair each sample with a carrier label; a count
    /// mismatch in either direction would drop or mislabel lines.
    #[error("position survey has {samples} samples but {frequencies} frequency labels")]
    FrequencyCount { samples: usize, frequencies: usize },

    #[error("{category} survey carries frequency labels; only position surveys are labeled by frequency")]
    UnexpectedFrequencies { category: Category },
}

/// One line of the fairness report.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportLine {
    Downlink { users: usize, index: f64 },
    Uplink { users: usize, index: f64 },
    Position { frequency_mhz: Megahertz, index: f64 },
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Wording and casing are part of the report contract.
        match self {
            ReportLine::Downlink { users, index } => {
                write!(f, "downlink with {} UE: {:.3}", users, index)
            }
            ReportLine::Uplink { users, index } => {
                write!(f, "Uplink with {} UE: {:.3}", users, index)
            }
            ReportLine::Position {
                frequency_mhz,
                index,
            } => {
                write!(f, "position {}: {:.3}", frequency_mhz, index)
            }
        }
    }
}

/// Render the whole catalog into report lines, dataset by dataset, samples in
/// declaration order. The first defect aborts the render.
#[tracing::instrument(level = "debug", skip(catalog), fields(datasets = catalog.datasets.len()))]
pub fn render(catalog: &Catalog) -> Result<Vec<ReportLine>, ReportError> {
    let mut lines = Vec::new();
    for dataset in &catalog.datasets {
        render_dataset(dataset, &mut lines)?;
    }
    Ok(lines)
}

fn render_dataset(dataset: &Dataset, lines: &mut Vec<ReportLine>) -> Result<(), ReportError> {
    debug!(
        category = %dataset.category,
        samples = dataset.samples.len(),
        "rendering dataset"
    );

    match dataset.category {
        Category::Position => {
            if dataset.samples.len() != dataset.frequencies_mhz.len() {
                return Err(ReportError::FrequencyCount {
                    samples: dataset.samples.len(),
                    frequencies: dataset.frequencies_mhz.len(),
                });
            }
            for (raw, &frequency_mhz) in dataset.samples.iter().zip(&dataset.frequencies_mhz) {
                let values = parse_sample(raw)?;
                lines.push(ReportLine::Position {
                    frequency_mhz,
                    index: jains_fairness_index(&values),
                });
            }
        }
        Category::Downlink | Category::Uplink => {
            if !dataset.frequencies_mhz.is_empty() {
                return Err(ReportError::UnexpectedFrequencies {
                    category: dataset.category,
                });
            }
            for raw in &dataset.samples {
                let values = parse_sample(raw)?;
                let index = jains_fairness_index(&values);
                let users = values.len();
                lines.push(match dataset.category {
                    Category::Downlink => ReportLine::Downlink { users, index },
                    _ => ReportLine::Uplink { users, index },
                });
            }
        }
    }

    Ok(())
}
