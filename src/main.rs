use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use kira_enrichtable::document::EnrichmentDocument;
use kira_enrichtable::error::{EnrichmentError, Result};
use kira_enrichtable::input::fixture::FixtureSource;
use kira_enrichtable::input::read_gene_list;
use kira_enrichtable::logging::init_tracing;
use kira_enrichtable::model::DomainSelection;
use kira_enrichtable::pipeline::stage5_export::{ExportTargets, write_outputs};
use kira_enrichtable::report::text::render_document_summary;

#[derive(Debug, Parser)]
#[command(name = "kira-enrichtable", version, about = "Gene enrichment table builder")]
struct Cli {
    /// Default log filter when KIRA_ENRICHTABLE_LOG is unset.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Match genes, merge domain annotations, and write the document.
    Enrich(EnrichArgs),
    /// Project a saved document to CSV.
    Export(ExportArgs),
    /// Print a summary of a saved document.
    Inspect(InspectArgs),
}

#[derive(Debug, Args)]
struct EnrichArgs {
    /// Gene list, one per line; `-` for stdin.
    #[arg(long)]
    genes: PathBuf,
    #[arg(long)]
    tax_id: String,
    #[arg(long)]
    organism: String,
    /// Comma separated, in column order. Defaults to all five domains.
    #[arg(long)]
    domains: Option<String>,
    /// JSON fixture standing in for the graph service.
    #[arg(long)]
    source: PathBuf,
    #[arg(long)]
    out: PathBuf,
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct ExportArgs {
    #[arg(long)]
    document: PathBuf,
    #[arg(long)]
    out: PathBuf,
    /// Reorder columns before export.
    #[arg(long)]
    domains: Option<String>,
}

#[derive(Debug, Args)]
struct InspectArgs {
    #[arg(long)]
    document: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
enum RunConfig {
    Enrich {
        genes: PathBuf,
        tax_id: String,
        organism: String,
        domains: Option<DomainSelection>,
        source: PathBuf,
        targets: ExportPaths,
    },
    Export {
        document: PathBuf,
        domains: Option<DomainSelection>,
        csv: PathBuf,
    },
    Inspect {
        document: PathBuf,
    },
}

#[derive(Debug, Clone, PartialEq)]
struct ExportPaths {
    document: PathBuf,
    csv: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);
    if let Err(err) = run(cli.command).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run(command: Command) -> Result<()> {
    match build_config(command)? {
        RunConfig::Enrich {
            genes,
            tax_id,
            organism,
            domains,
            source,
            targets,
        } => {
            let raw_genes = read_gene_list(&genes)?;
            let source = FixtureSource::load(&source).await?;

            let mut doc = EnrichmentDocument::new();
            doc.set_parameters(&raw_genes, &tax_id, &organism, domains);
            if !doc.duplicate_genes().is_empty() {
                tracing::warn!(
                    duplicates = %doc.duplicate_genes().join(", "),
                    "duplicate genes removed from the list"
                );
            }
            doc.refresh_data(&source).await?;

            let table = doc.table();
            write_outputs(
                &doc,
                &table,
                &ExportTargets {
                    document: Some(targets.document),
                    csv: targets.csv,
                },
            )
        }
        RunConfig::Export {
            document,
            domains,
            csv,
        } => {
            let mut doc = load_document(&document)?;
            if doc.result().is_none() {
                return Err(EnrichmentError::MalformedDocument(format!(
                    "{} has no cached result; run enrich first",
                    document.display()
                )));
            }
            let mut table = doc.table();
            if let Some(order) = domains {
                table = doc.reorder(&table, order);
            }
            write_outputs(
                &doc,
                &table,
                &ExportTargets {
                    document: None,
                    csv: Some(csv),
                },
            )
        }
        RunConfig::Inspect { document } => {
            let doc = load_document(&document)?;
            print!("{}", render_document_summary(&doc));
            Ok(())
        }
    }
}

fn build_config(command: Command) -> Result<RunConfig> {
    Ok(match command {
        Command::Enrich(args) => RunConfig::Enrich {
            genes: args.genes,
            tax_id: args.tax_id,
            organism: args.organism,
            domains: parse_domains(args.domains.as_deref())?,
            source: args.source,
            targets: ExportPaths {
                document: args.out,
                csv: args.csv,
            },
        },
        Command::Export(args) => RunConfig::Export {
            document: args.document,
            domains: parse_domains(args.domains.as_deref())?,
            csv: args.out,
        },
        Command::Inspect(args) => RunConfig::Inspect {
            document: args.document,
        },
    })
}

fn parse_domains(arg: Option<&str>) -> Result<Option<DomainSelection>> {
    arg.map(DomainSelection::parse_list).transpose()
}

fn load_document(path: &Path) -> Result<EnrichmentDocument> {
    let payload = std::fs::read_to_string(path)?;
    let file_id = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    EnrichmentDocument::load(&payload, &file_id)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
