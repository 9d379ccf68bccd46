//! Graduate program catalog CLI.
//!
//! Provides the `gradcat` binary with subcommands for working with a local
//! program catalog: add, list, edit, delete, per-field tabs, full-card
//! display, and side-by-side comparison of a selected subset. All commands
//! run against a SQLite database through the same [`Catalog`] service a
//! richer frontend would use.

use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gradcat_catalog::{Catalog, CatalogError, TracingNotifier};
use gradcat_core::{ProgramDraft, ProgramId, Tab};
use gradcat_storage::SqliteStore;

mod render;

/// University graduate program catalog.
#[derive(Parser)]
#[command(name = "gradcat", about = "University graduate program catalog")]
struct Cli {
    /// Path to the catalog database file.
    #[arg(long, default_value = "gradcat.db")]
    db: String,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Add a program record.
    Add {
        #[command(flatten)]
        fields: DraftArgs,

        /// Print the stored record as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List programs, optionally restricted to a field tab and a search query.
    List {
        /// Restrict to one academic field (exact match).
        #[arg(short, long)]
        field: Option<String>,

        /// Case-insensitive search over program, university, and location.
        #[arg(short, long)]
        query: Option<String>,

        /// Print matching records as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the field tabs with per-field record counts.
    Fields,

    /// Show one program card in full.
    Show {
        /// Program id.
        id: ProgramId,
    },

    /// Replace every field of an existing record (id and date added are kept).
    Edit {
        /// Program id.
        id: ProgramId,

        #[command(flatten)]
        fields: DraftArgs,

        /// Print the updated record as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Delete a record.
    Delete {
        /// Program id.
        id: ProgramId,
    },

    /// Compare programs side by side.
    Compare {
        /// Program ids to compare (at least one).
        #[arg(required = true)]
        ids: Vec<ProgramId>,
    },
}

/// Draft fields shared by `add` and `edit`.
#[derive(Args)]
struct DraftArgs {
    /// Academic field (grouping key), e.g. "Computer Science".
    #[arg(long)]
    field: String,

    /// University name.
    #[arg(long)]
    university: String,

    /// Program name.
    #[arg(long)]
    name: String,

    /// University location, e.g. "Stanford, CA, USA".
    #[arg(long)]
    location: Option<String>,

    /// University overall ranking (positive integer).
    #[arg(long)]
    overall_ranking: Option<u32>,

    /// University subject ranking (positive integer).
    #[arg(long)]
    subject_ranking: Option<u32>,

    /// Program web page.
    #[arg(long)]
    link: Option<String>,

    /// Program duration, e.g. "2 years".
    #[arg(long)]
    duration: Option<String>,

    /// Free-form admission requirements text (bullets, lines, or prose).
    #[arg(long)]
    requirements: Option<String>,

    /// Total credits (0 = unknown).
    #[arg(long, default_value_t = 0)]
    credits: u32,

    /// Annual tuition fee (0 = unknown).
    #[arg(long, default_value_t = 0)]
    tuition: u32,
}

impl From<DraftArgs> for ProgramDraft {
    fn from(args: DraftArgs) -> Self {
        ProgramDraft {
            academic_field: args.field,
            university_name: args.university,
            university_location: args.location,
            university_overall_ranking: args.overall_ranking,
            university_subject_ranking: args.subject_ranking,
            program_name: args.name,
            program_link: args.link,
            program_duration: args.duration,
            admission_requirements: args.requirements,
            total_credits: args.credits,
            annual_tuition_fee: args.tuition,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    process::exit(run(cli));
}

/// Executes the parsed command.
///
/// Returns exit code: 0 = success, 1 = validation/usage error,
/// 2 = not found, 3 = storage/I/O error.
fn run(cli: Cli) -> i32 {
    let store = match SqliteStore::new(&cli.db) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: failed to open database '{}': {}", cli.db, e);
            return 3;
        }
    };
    let mut catalog = match Catalog::new(Box::new(store), Box::new(TracingNotifier)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: failed to load catalog: {}", e);
            return 3;
        }
    };

    let result = match cli.command {
        Commands::Add { fields, json } => run_add(&mut catalog, fields.into(), json),
        Commands::List { field, query, json } => run_list(&catalog, field, query, json),
        Commands::Fields => run_fields(&catalog),
        Commands::Show { id } => run_show(&catalog, id),
        Commands::Edit { id, fields, json } => run_edit(&mut catalog, id, fields.into(), json),
        Commands::Delete { id } => run_delete(&mut catalog, id),
        Commands::Compare { ids } => run_compare(&mut catalog, &ids),
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_code(&e)
        }
    }
}

fn exit_code(error: &CatalogError) -> i32 {
    match error {
        CatalogError::Validation(_) | CatalogError::EmptySelection => 1,
        CatalogError::NotFound(_) => 2,
        CatalogError::Storage(_) => 3,
    }
}

fn run_add(catalog: &mut Catalog, draft: ProgramDraft, json: bool) -> Result<(), CatalogError> {
    let program = catalog.add(draft)?;
    if json {
        println!("{}", to_json(&program));
    } else {
        print!("{}", render::card(&program));
        // The frontend switches to the new record's field tab; report it.
        println!("Field tab: {}", program.academic_field);
    }
    Ok(())
}

fn run_list(
    catalog: &Catalog,
    field: Option<String>,
    query: Option<String>,
    json: bool,
) -> Result<(), CatalogError> {
    let tab = match field {
        Some(f) => Tab::Field(f),
        None => Tab::All,
    };
    let query = query.unwrap_or_default();
    let programs = catalog.visible(&tab, &query);

    if json {
        println!("{}", to_json(&programs));
        return Ok(());
    }

    if programs.is_empty() {
        if catalog.is_empty() {
            println!("No programs added yet");
        } else {
            println!("No programs match your search");
        }
        return Ok(());
    }

    for program in &programs {
        print!("{}", render::card(program));
        println!();
    }
    println!("{} program(s)", programs.len());
    Ok(())
}

fn run_fields(catalog: &Catalog) -> Result<(), CatalogError> {
    println!("All Programs ({})", catalog.len());
    let counts = catalog.field_counts();
    for (field, count) in &counts {
        println!("{} ({})", field, count);
    }
    Ok(())
}

fn run_show(catalog: &Catalog, id: ProgramId) -> Result<(), CatalogError> {
    let program = catalog.get(id).ok_or(CatalogError::NotFound(id))?;
    print!("{}", render::card(program));
    Ok(())
}

fn run_edit(
    catalog: &mut Catalog,
    id: ProgramId,
    draft: ProgramDraft,
    json: bool,
) -> Result<(), CatalogError> {
    let program = catalog.edit(id, draft)?;
    if json {
        println!("{}", to_json(&program));
    } else {
        print!("{}", render::card(&program));
    }
    Ok(())
}

fn run_delete(catalog: &mut Catalog, id: ProgramId) -> Result<(), CatalogError> {
    catalog.delete(id)?;
    println!("Deleted {}", id);
    Ok(())
}

fn run_compare(catalog: &mut Catalog, ids: &[ProgramId]) -> Result<(), CatalogError> {
    for &id in ids {
        catalog.select(id)?;
    }
    let programs = catalog.comparison()?;
    println!("Program Comparison ({} programs)", programs.len());
    print!("{}", render::comparison_table(&programs));
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize: {}\"}}", e))
}
