use anyhow::Result;
use fairlink::{report, Catalog};
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .with_writer(io::stderr) // report lines own stdout
        .init();
    info!("startup");

    // ─── 2) render the built-in catalog ──────────────────────────────
    let catalog = Catalog::builtin();
    info!(datasets = catalog.len(), "rendering fairness report");
    let lines = report::render(catalog)?;

    // ─── 3) one line per sample, in catalog order ────────────────────
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in &lines {
        writeln!(out, "{}", line)?;
    }

    info!(lines = lines.len(), "report complete");
    Ok(())
}
