use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use client::PayablesClient;
use engine::{
    DateRange, LedgerFilter, Subject, SubjectKind, money, reconcile_all, reconcile_subject,
};
use export::{bulk_workbook, expense_csv, export_filename, vendor_workbook};

mod settings;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Parser)]
#[command(name = "bahikhata", about = "Payables ledger reconciliation and exports")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Export every subject's ledger into one workbook.
    Bulk {
        /// JSON file listing the subjects to cover.
        #[arg(long)]
        subjects: PathBuf,
        /// Range start (YYYY-MM-DD); requires --to.
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Range end (YYYY-MM-DD); requires --from.
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Output file; defaults to a generated name in the output dir.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Export one subject's ledger: a workbook for vendors, a CSV for
    /// expense heads.
    Subject {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long, value_enum, default_value_t = KindArg::Vendor)]
        kind: KindArg,
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        to: Option<NaiveDate>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print per-subject totals and the grand position.
    Summary {
        /// JSON file listing the subjects to cover.
        #[arg(long)]
        subjects: PathBuf,
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        to: Option<NaiveDate>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Vendor,
    Expense,
}

impl From<KindArg> for SubjectKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Vendor => SubjectKind::Vendor,
            KindArg::Expense => SubjectKind::Expense,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "bahikhata={level},client={level},engine={level},export={level}",
            level = settings.app.level
        ))
        .init();

    let cli = Cli::parse();
    let client = PayablesClient::new(&settings.server.url);

    match cli.command {
        Command::Bulk {
            subjects,
            from,
            to,
            out,
        } => {
            let subjects = load_subjects(&subjects)?;
            let range = build_range(from, to)?;
            let filter = LedgerFilter {
                range,
                company: settings.company.clone(),
            };

            let recon = reconcile_all(&client, &subjects, &filter).await;
            if recon.all_failed() {
                return Err("every subject failed to load".into());
            }

            let blob = bulk_workbook(&recon)?;
            let default_name = subjects
                .first()
                .map(|s| format!("all-{}s", s.kind.as_str().to_lowercase()))
                .unwrap_or_else(|| "ledger".to_string());
            let path = resolve_out(
                out,
                settings.output_dir.as_deref(),
                &export_filename(&default_name, range.as_ref(), "xlsx"),
            );
            std::fs::write(&path, blob)?;
            tracing::info!(
                "wrote {} ({} subjects, {} skipped)",
                path.display(),
                recon.grand.subject_count,
                recon.skipped.len()
            );
        }
        Command::Subject {
            id,
            name,
            kind,
            from,
            to,
            out,
        } => {
            let subject = Subject::new(id, name, kind.into());
            let range = build_range(from, to)?;
            let filter = LedgerFilter {
                range,
                company: settings.company.clone(),
            };

            let ledger = reconcile_subject(&client, &subject, &filter).await?;
            let (blob, extension) = match subject.kind {
                SubjectKind::Vendor => (vendor_workbook(&ledger)?, "xlsx"),
                SubjectKind::Expense => (expense_csv(&ledger)?, "csv"),
            };
            let path = resolve_out(
                out,
                settings.output_dir.as_deref(),
                &export_filename(&subject.name, range.as_ref(), extension),
            );
            std::fs::write(&path, blob)?;
            tracing::info!("wrote {}", path.display());
        }
        Command::Summary { subjects, from, to } => {
            let subjects = load_subjects(&subjects)?;
            let range = build_range(from, to)?;
            let filter = LedgerFilter {
                range,
                company: settings.company.clone(),
            };

            let recon = reconcile_all(&client, &subjects, &filter).await;
            print_summary(&recon);
        }
    }

    Ok(())
}

fn load_subjects(path: &Path) -> Result<Vec<Subject>, BoxError> {
    let raw = std::fs::read_to_string(path)?;
    let subjects: Vec<Subject> = serde_json::from_str(&raw)?;
    if subjects.is_empty() {
        return Err(format!("no subjects in {}", path.display()).into());
    }
    Ok(subjects)
}

fn build_range(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Option<DateRange>, BoxError> {
    match (from, to) {
        (Some(from), Some(to)) => {
            if from > to {
                return Err("--from must not be after --to".into());
            }
            Ok(Some(DateRange { from, to }))
        }
        (None, None) => Ok(None),
        _ => Err("--from and --to must be provided together".into()),
    }
}

fn resolve_out(out: Option<PathBuf>, output_dir: Option<&str>, filename: &str) -> PathBuf {
    match out {
        Some(path) => path,
        None => Path::new(output_dir.unwrap_or(".")).join(filename),
    }
}

fn print_summary(recon: &engine::Reconciliation) {
    println!(
        "{:<28} {:>18} {:>18} {:>18}  {}",
        "Subject", "Debit", "Credit", "Balance", "Status"
    );
    for ledger in &recon.subjects {
        let totals = &ledger.totals;
        println!(
            "{:<28} {:>18} {:>18} {:>18}  {}",
            ledger.subject.name,
            money::format_amount(totals.debit_total),
            money::format_amount(totals.credit_total),
            money::format_amount(totals.balance),
            totals.status().as_str()
        );
    }
    for skipped in &recon.skipped {
        println!("{:<28} (skipped: {})", skipped.subject_id, skipped.message);
    }
    println!(
        "\n{} subjects, total debit {}, total credit {}, {} {}",
        recon.grand.subject_count,
        money::format_inr(recon.grand.total_debit),
        money::format_inr(recon.grand.total_credit),
        recon.grand.position().as_str(),
        money::format_inr(recon.grand.total_balance.abs())
    );
}
