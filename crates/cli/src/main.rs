use anyhow::Result;
use clap::{Arg, Command};
use inkshelf_catalog::CatalogPaths;

mod commands;

fn build_cli() -> Command {
    Command::new("inkshelf")
        .version("0.1.0")
        .about("Editorial catalog for long-form book content")
        .arg(
            Arg::new("dir")
                .short('d')
                .long("dir")
                .value_name("PATH")
                .help("Storage directory holding the collection files")
                .default_value(".")
                .global(true),
        )
        .subcommand(Command::new("init").about("Create empty collection files if missing"))
        .subcommand(
            Command::new("list")
                .about("List all books in the catalog")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the listing as JSON")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("info")
                .about("Show the full detail view for one book")
                .arg(Arg::new("slug").required(true).value_name("SLUG").help("Book slug")),
        )
        .subcommand(
            Command::new("save")
                .about("Apply a partial update to one book")
                .arg(Arg::new("slug").required(true).value_name("SLUG").help("Book slug"))
                .arg(
                    Arg::new("data")
                        .long("data")
                        .value_name("JSON")
                        .help("Metadata fields to merge, as a JSON object (or @path)"),
                )
                .arg(
                    Arg::new("page")
                        .long("page")
                        .value_name("JSON")
                        .action(clap::ArgAction::Append)
                        .help("Page patch {index, title?, content?}; repeatable"),
                )
                .arg(
                    Arg::new("status")
                        .long("status")
                        .value_name("STATUS")
                        .help("New status value"),
                ),
        )
        .subcommand(
            Command::new("patch-info")
                .about("Patch allow-listed metadata fields")
                .arg(Arg::new("slug").required(true).value_name("SLUG").help("Book slug"))
                .arg(
                    Arg::new("fields")
                        .required(true)
                        .value_name("JSON")
                        .help("Fields to patch, as a JSON object (or @path)"),
                ),
        )
        .subcommand(
            Command::new("replace-pages")
                .about("Replace a book's page sequence wholesale")
                .arg(Arg::new("slug").required(true).value_name("SLUG").help("Book slug"))
                .arg(
                    Arg::new("pages")
                        .required(true)
                        .value_name("JSON")
                        .help("JSON array of {title, content} pages (or @path)"),
                ),
        )
        .subcommand(
            Command::new("cat")
                .about("Print the verbatim content of a file in the storage directory")
                .arg(Arg::new("file").required(true).value_name("FILE").help("File name")),
        )
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let matches = build_cli().get_matches();
    let dir = matches
        .get_one::<String>("dir")
        .map(|s| s.as_str())
        .unwrap_or(".");
    let paths = CatalogPaths::new(dir);

    match matches.subcommand() {
        Some(("init", _)) => commands::init_catalog(&paths).await,
        Some(("list", sub_matches)) => commands::list_books(&paths, sub_matches).await,
        Some(("info", sub_matches)) => commands::show_book(&paths, sub_matches).await,
        Some(("save", sub_matches)) => commands::save_book(&paths, sub_matches).await,
        Some(("patch-info", sub_matches)) => commands::patch_info(&paths, sub_matches).await,
        Some(("replace-pages", sub_matches)) => commands::replace_pages(&paths, sub_matches).await,
        Some(("cat", sub_matches)) => commands::cat_file(&paths, sub_matches).await,
        _ => {
            build_cli().print_help()?;
            Ok(())
        }
    }
}
