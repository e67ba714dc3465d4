use crate::config::CatalogConstants;
use crate::core::{self, missing_columns, REQUIRED_COLUMNS};
use crate::error::{FeedError, FeedResult};
use crate::excel::{CatalogImporter, FeedExporter};
use crate::preview::render_preview_page;
use crate::types::{InputTable, Template};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Load a catalog and print what was found
fn load_catalog(input: &Path, verbose: bool) -> FeedResult<InputTable> {
    if verbose {
        println!("{}", "📖 Reading catalog...".cyan());
    }

    let table = CatalogImporter::from_path(input)?;

    if verbose {
        println!(
            "   Found {} columns, {} rows",
            table.columns().len(),
            table.len()
        );
        println!("   Columns: {}\n", table.columns().join(", "));
    }

    Ok(table)
}

fn report_missing(missing: &[String]) {
    println!("{}", "❌ Missing required columns:".bold().red());
    for name in missing {
        println!("   {}", name.red());
    }
    println!();
}

/// Execute the convert command
pub fn convert(
    input: PathBuf,
    output: PathBuf,
    template: Template,
    constants: Option<PathBuf>,
    preview: Option<PathBuf>,
    verbose: bool,
) -> FeedResult<()> {
    println!("{}", "🛢️  OilFeed - eBay Feed Conversion".bold().green());
    println!("   Input:    {}", input.display());
    println!("   Output:   {}", output.display());
    println!("   Template: {}\n", template.to_string().bright_yellow().bold());

    let constants = CatalogConstants::load_or_default(constants.as_deref())?;
    let table = load_catalog(&input, verbose)?;

    let missing = missing_columns(table.columns());
    if !missing.is_empty() {
        report_missing(&missing);
        return Err(FeedError::MissingColumns(missing));
    }

    if verbose {
        println!("{}", "🧮 Deriving listings...".cyan());
    }

    let feed = core::convert(&table, template, &constants)?;

    if verbose {
        println!("{}", "📊 Writing eBay workbook...".cyan());
    }

    FeedExporter::new(&feed).export(&output)?;

    println!("{}", "✅ eBay file generated!".bold().green());
    println!("   Listings: {}", feed.len());
    println!("   Excel file: {}", output.display());

    if let Some(preview_path) = preview {
        let page = render_preview_page(&output.display().to_string(), &feed.descriptions());
        fs::write(&preview_path, page)?;
        println!("   HTML preview: {}", preview_path.display());
    }
    println!();

    Ok(())
}

/// Execute the preview command: render descriptions without writing a feed
pub fn preview(
    input: PathBuf,
    output: Option<PathBuf>,
    constants: Option<PathBuf>,
) -> FeedResult<()> {
    let constants = CatalogConstants::load_or_default(constants.as_deref())?;
    let table = CatalogImporter::from_path(&input)?;
    let feed = core::convert(&table, Template::Full, &constants)?;
    let page = render_preview_page(&input.display().to_string(), &feed.descriptions());

    match output {
        Some(path) => {
            fs::write(&path, page)?;
            println!("{}", "✅ HTML preview written".bold().green());
            println!("   Listings: {}", feed.len());
            println!("   File: {}\n", path.display());
        }
        None => print!("{}", page),
    }

    Ok(())
}

/// Execute the columns command: show detected headers after normalization
pub fn columns(input: PathBuf) -> FeedResult<()> {
    println!("{}", "🔍 OilFeed - Detected Columns".bold().green());
    println!("   File: {}\n", input.display());

    let table = CatalogImporter::from_path(&input)?;

    for name in table.columns() {
        let marker = if REQUIRED_COLUMNS.contains(&name.as_str()) {
            "required".green()
        } else {
            "extra".dimmed()
        };
        println!("   {} ({})", name.bright_blue(), marker);
    }
    println!("\n   Rows: {}", table.len());

    let missing = missing_columns(table.columns());
    if missing.is_empty() {
        println!("{}", "\n✅ All required columns present\n".green());
    } else {
        println!();
        report_missing(&missing);
    }

    Ok(())
}

/// Execute the check command: fail when required columns are missing
pub fn check(input: PathBuf) -> FeedResult<()> {
    println!("{}", "✅ Checking catalog".bold().green());
    println!("   File: {}\n", input.display());

    let table = CatalogImporter::from_path(&input)?;
    let missing = missing_columns(table.columns());

    if !missing.is_empty() {
        report_missing(&missing);
        return Err(FeedError::MissingColumns(missing));
    }

    println!(
        "{}",
        format!("✅ Catalog is valid ({} rows)\n", table.len()).bold().green()
    );
    Ok(())
}

/// Execute the constants command: dump built-in constants as YAML
pub fn constants(output: Option<PathBuf>) -> FeedResult<()> {
    let yaml = CatalogConstants::default().to_yaml()?;
    match output {
        Some(path) => {
            fs::write(&path, yaml)?;
            println!("{}", "✅ Constants written".bold().green());
            println!("   File: {}\n", path.display());
        }
        None => print!("{}", yaml),
    }
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
