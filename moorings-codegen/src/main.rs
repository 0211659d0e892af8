//! Moorings Codegen - Table descriptor generation tool
//!
//! This tool generates table descriptor modules (table structs, key
//! statics, typed column accessors) from catalog definitions. It writes
//! actual Rust source files, so generated descriptors are ordinary code
//! the rest of the project can read, review, and step through.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Re-export from library for binary
use moorings_codegen::parser::parse_catalog_from_file;
use moorings_codegen::{CatalogDefinition, TableWriter};

#[derive(Parser)]
#[command(name = "moorings-codegen")]
#[command(about = "Generate Moorings table descriptor code", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate table descriptor code from a catalog definition
    Generate {
        /// Input file containing the catalog definition (.toml or .json)
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for the generated module
        #[arg(short, long, default_value = "src/schema")]
        output: PathBuf,

        /// Path the generated code imports moorings items from
        #[arg(short, long, default_value = "moorings")]
        crate_path: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            crate_path,
        } => {
            generate_catalog(&input, &output, &crate_path)?;
        }
    }

    Ok(())
}

fn generate_catalog(input: &PathBuf, output: &PathBuf, crate_path: &str) -> anyhow::Result<()> {
    println!("🔧 Moorings Codegen");
    println!("📥 Input: {}", input.display());
    println!("📤 Output: {}", output.display());
    println!("📝 Crate path: {}", crate_path);

    // Create output directory if it doesn't exist
    std::fs::create_dir_all(output)?;

    let catalog = if input.exists() {
        parse_catalog_from_file(input)?
    } else {
        // Fallback to example if input doesn't exist
        println!("⚠️  Input not found, using example catalog");
        CatalogDefinition::example()
    };

    if catalog.tables.is_empty() {
        anyhow::bail!("No tables found in catalog");
    }

    let writer = TableWriter::with_crate_path(crate_path)?;

    let mod_file = output.join("mod.rs");
    std::fs::write(&mod_file, writer.generate_root_module(&catalog)?)?;
    println!("✅ Generated: {}", mod_file.display());

    let keys_file = output.join("keys.rs");
    std::fs::write(&keys_file, writer.generate_keys_module(&catalog)?)?;
    println!("✅ Generated: {}", keys_file.display());

    for table in &catalog.tables {
        let code = writer.generate_table_module(&catalog, table)?;

        // Write to output file
        let output_file = output.join(format!("{}.rs", table.name.to_lowercase()));
        std::fs::write(&output_file, code)?;

        println!("✅ Generated: {}", output_file.display());
    }

    let table_count = catalog.tables.len();
    println!(
        "✨ Generated {} table{}",
        table_count,
        if table_count == 1 { "" } else { "s" }
    );

    Ok(())
}
