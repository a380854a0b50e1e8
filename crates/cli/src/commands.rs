//! Command handlers for the inkshelf binary

use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use console::style;
use inkshelf_catalog::{BookCatalog, BookEditor, CatalogPaths};
use inkshelf_core::{Page, PagePatch};
use inkshelf_store::DocumentStore;
use serde_json::{Map, Value};

/// Create empty collection files for a fresh storage directory.
pub async fn init_catalog(paths: &CatalogPaths) -> Result<()> {
    for path in [paths.text_path(), paths.info_path()] {
        if path.exists() {
            println!("{} already exists, leaving it alone", path.display());
            continue;
        }
        DocumentStore::new(&path)
            .save(&[])
            .await
            .with_context(|| format!("Failed to create {}", path.display()))?;
        println!("{} Created {}", style("✓").green().bold(), path.display());
    }
    Ok(())
}

/// List all books in the catalog
pub async fn list_books(paths: &CatalogPaths, matches: &ArgMatches) -> Result<()> {
    let listings = BookCatalog::new(paths.clone()).list().await;

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&listings)?);
        return Ok(());
    }

    if listings.is_empty() {
        println!("No books in catalog. Use 'replace-pages' and an info record to add one.");
        return Ok(());
    }

    println!("\n{} book(s) in catalog", style(listings.len()).bold().cyan());
    println!("{}", "=".repeat(72));
    for listing in listings {
        let pages = if listing.has_text {
            format!("{} page(s)", listing.pages_count)
        } else {
            "no text".to_string()
        };
        println!(
            "  {} [{}] {} — {}",
            style(&listing.slug).bold(),
            listing.status,
            pages,
            listing.name
        );
        if !listing.short_desc.is_empty() {
            println!("      {}", listing.short_desc);
        }
    }
    Ok(())
}

/// Show the full detail view for one book
pub async fn show_book(paths: &CatalogPaths, matches: &ArgMatches) -> Result<()> {
    let slug = required(matches, "slug")?;
    let detail = BookCatalog::new(paths.clone())
        .get(slug)
        .await
        .context("Failed to load book")?;
    println!("{}", serde_json::to_string_pretty(&detail)?);
    Ok(())
}

/// Apply a partial update: metadata merge, page patches, status change
pub async fn save_book(paths: &CatalogPaths, matches: &ArgMatches) -> Result<()> {
    let slug = required(matches, "slug")?;

    let changed_data = match matches.get_one::<String>("data") {
        Some(raw) => object_arg(raw)?,
        None => Map::new(),
    };

    let mut changed_pages = Vec::new();
    if let Some(raws) = matches.get_many::<String>("page") {
        for raw in raws {
            let patch: PagePatch =
                serde_json::from_value(json_arg(raw)?).context("Invalid page patch")?;
            changed_pages.push(patch);
        }
    }

    let status = matches.get_one::<String>("status").map(|s| s.as_str());

    BookEditor::new(paths)
        .save(slug, changed_data, &changed_pages, status)
        .await
        .context("Failed to save book")?;
    println!("{} Saved {}", style("✓").green().bold(), slug);
    Ok(())
}

/// Patch allow-listed metadata fields
pub async fn patch_info(paths: &CatalogPaths, matches: &ArgMatches) -> Result<()> {
    let slug = required(matches, "slug")?;
    let fields = object_arg(required(matches, "fields")?)?;

    BookEditor::new(paths)
        .patch_info_fields(slug, &fields)
        .await
        .context("Failed to patch info fields")?;
    println!("{} Patched {}", style("✓").green().bold(), slug);
    Ok(())
}

/// Replace a book's page sequence wholesale
pub async fn replace_pages(paths: &CatalogPaths, matches: &ArgMatches) -> Result<()> {
    let slug = required(matches, "slug")?;
    let pages: Vec<Page> = serde_json::from_value(json_arg(required(matches, "pages")?)?)
        .context("Invalid pages array")?;

    let count = pages.len();
    BookEditor::new(paths)
        .replace_pages(slug, pages)
        .await
        .context("Failed to replace pages")?;
    println!(
        "{} Replaced pages for {} ({} page(s))",
        style("✓").green().bold(),
        slug,
        count
    );
    Ok(())
}

/// Print the verbatim content of a file in the storage directory
pub async fn cat_file(paths: &CatalogPaths, matches: &ArgMatches) -> Result<()> {
    let name = required(matches, "file")?;
    let content = BookCatalog::new(paths.clone())
        .read_raw(name)
        .await
        .with_context(|| format!("Failed to read {}", name))?;
    print!("{}", content);
    Ok(())
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str> {
    matches
        .get_one::<String>(name)
        .map(|s| s.as_str())
        .ok_or_else(|| anyhow::anyhow!("{} is required", name))
}

/// Parses a JSON argument; an `@path` value reads the JSON from a file.
fn json_arg(raw: &str) -> Result<Value> {
    let text = match raw.strip_prefix('@') {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?
        }
        None => raw.to_string(),
    };
    serde_json::from_str(&text).context("Argument is not valid JSON")
}

fn object_arg(raw: &str) -> Result<Map<String, Value>> {
    match json_arg(raw)? {
        Value::Object(map) => Ok(map),
        _ => bail!("Expected a JSON object"),
    }
}
