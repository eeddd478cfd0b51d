//! dcsql CLI -- compile denial constraints into violation-detecting SQL.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "dcsql",
    about = "Compile denial constraints into violation-detecting SQL"
)]
pub struct App {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compile constraint documents to SQL, one statement per document
    Compile(CompileArgs),
    /// Print the JSON Schema for the structured constraint format to stdout
    Schema,
}

#[derive(Debug, Parser)]
pub struct CompileArgs {
    /// Input files, one constraint document per non-empty line.
    /// Lines starting with `#` are skipped. Infix and structured documents
    /// may be mixed freely; the front end is chosen per line by shape.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
    /// Bind both join aliases to this pre-registered relation
    #[arg(long, conflicts_with = "csv")]
    pub table: Option<String>,
    /// Bind both join aliases to a CSV file scanned by the engine
    #[arg(long)]
    pub csv: Option<PathBuf>,
    /// Exclude the pair of a row with itself (appends an engine-dependent
    /// rowid guard; the default keeps the source system's unrestricted
    /// self-join)
    #[arg(long)]
    pub distinct_pairs: bool,
    /// Skip documents that fail to compile instead of aborting the batch
    #[arg(long)]
    pub keep_going: bool,
    /// Output results as JSON (one object per document)
    #[arg(long)]
    pub json: bool,
}

impl CompileArgs {
    /// The table binding selected by `--table` or `--csv`.
    #[must_use]
    pub fn binding(&self) -> Option<dcsql_core::TableBinding> {
        match (&self.table, &self.csv) {
            (Some(name), None) => Some(dcsql_core::TableBinding::Relation(name.clone())),
            (None, Some(path)) => Some(dcsql_core::TableBinding::CsvFile(
                path.display().to_string(),
            )),
            _ => None,
        }
    }

    /// Emission options selected by the flags.
    #[must_use]
    pub const fn options(&self) -> dcsql_core::SqlOptions {
        dcsql_core::SqlOptions {
            include_reflexive_pairs: !self.distinct_pairs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_from_table_flag() {
        let app = App::parse_from(["dcsql", "compile", "--table", "hours", "dcs.txt"]);
        let Command::Compile(args) = app.command else {
            panic!("expected compile");
        };
        assert_eq!(
            args.binding(),
            Some(dcsql_core::TableBinding::Relation("hours".into()))
        );
        assert!(args.options().include_reflexive_pairs);
    }

    #[test]
    fn test_binding_from_csv_flag() {
        let app = App::parse_from(["dcsql", "compile", "--csv", "hours.csv", "dcs.txt"]);
        let Command::Compile(args) = app.command else {
            panic!("expected compile");
        };
        assert_eq!(
            args.binding(),
            Some(dcsql_core::TableBinding::CsvFile("hours.csv".into()))
        );
    }

    #[test]
    fn test_table_and_csv_conflict() {
        let result = App::try_parse_from([
            "dcsql", "compile", "--table", "hours", "--csv", "hours.csv", "dcs.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_binding_is_none() {
        let app = App::parse_from(["dcsql", "compile", "dcs.txt"]);
        let Command::Compile(args) = app.command else {
            panic!("expected compile");
        };
        assert_eq!(args.binding(), None);
    }

    #[test]
    fn test_distinct_pairs_flag() {
        let app = App::parse_from([
            "dcsql",
            "compile",
            "--table",
            "hours",
            "--distinct-pairs",
            "dcs.txt",
        ]);
        let Command::Compile(args) = app.command else {
            panic!("expected compile");
        };
        assert!(!args.options().include_reflexive_pairs);
    }
}
