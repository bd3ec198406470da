use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Describes the available arguments in the CLI.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// The path of the settings file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub subcommands: Subcommands,
}

/// Describes the available subcommands in the CLI.
#[derive(Subcommand, Debug)]
pub enum Subcommands {
    /// List the bookmarks of a collection.
    List(ListArgs),
    /// Show the details of a bookmark.
    Show(ShowArgs),
    /// Add a bookmark to a collection. Metadata is extracted from the url.
    Add(AddArgs),
    /// Delete a bookmark from a collection.
    Delete(DeleteArgs),
    /// Extract and print the metadata of a url without storing it.
    Inspect(InspectArgs),
}

/// Describes the arguments for the `list` subcommand.
#[derive(ClapArgs, Debug)]
pub struct ListArgs {
    /// The name of the configured collection.
    pub collection: String,
    /// List the oldest bookmarks first.
    #[arg(long)]
    pub ascending: bool,
    /// List all bookmarks instead of the first page.
    #[arg(long)]
    pub all: bool,
}

/// Describes the arguments for the `show` subcommand.
#[derive(ClapArgs, Debug)]
pub struct ShowArgs {
    pub collection: String,
    /// The id of the bookmark.
    pub object_id: String,
}

/// Describes the arguments for the `add` subcommand.
#[derive(ClapArgs, Debug)]
pub struct AddArgs {
    pub collection: String,
    /// The url of the bookmark. Prompted for if missing.
    #[arg(long)]
    pub url: Option<String>,
    /// Make the bookmark public.
    #[arg(long)]
    pub public: bool,
}

/// Describes the arguments for the `delete` subcommand.
#[derive(ClapArgs, Debug)]
pub struct DeleteArgs {
    pub collection: String,
    pub object_id: String,
    /// Delete without confirmation.
    #[arg(short, long)]
    pub yes: bool,
}

/// Describes the arguments for the `inspect` subcommand.
#[derive(ClapArgs, Debug)]
pub struct InspectArgs {
    /// The url to be inspected.
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_list() {
        let args = Args::parse_from(["binmark", "-vv", "list", "tech_bookmarks", "--all"]);
        assert_eq!(args.verbose, 2);
        assert!(args.config.is_none());

        match args.subcommands {
            Subcommands::List(list_args) => {
                assert_eq!(list_args.collection, "tech_bookmarks");
                assert!(list_args.all);
                assert!(!list_args.ascending);
            }
            subcommands => panic!("Unexpected subcommand: {subcommands:?}"),
        }
    }

    #[test]
    fn test_parse_add() {
        let args = Args::parse_from([
            "binmark",
            "add",
            "tech_bookmarks",
            "--url",
            "https://www.youtube.com/watch?v=XYZ",
            "--public",
            "--config",
            "/tmp/config.yaml",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/config.yaml")));

        match args.subcommands {
            Subcommands::Add(add_args) => {
                assert_eq!(
                    add_args.url.as_deref(),
                    Some("https://www.youtube.com/watch?v=XYZ")
                );
                assert!(add_args.public);
            }
            subcommands => panic!("Unexpected subcommand: {subcommands:?}"),
        }
    }

    #[test]
    fn test_parse_missing_object_id() {
        let res = Args::try_parse_from(["binmark", "delete", "tech_bookmarks"]);
        assert!(res.is_err());
    }
}
