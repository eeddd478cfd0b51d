use std::{fs, process};

use clap::Parser;
use dcsql_cli::{App, Command, CompileArgs};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let app = App::parse();
    match &app.command {
        Command::Compile(args) => compile(args),
        Command::Schema => schema(),
    }
}

fn compile(args: &CompileArgs) {
    let Some(binding) = args.binding() else {
        eprintln!("Either --table or --csv is required");
        process::exit(2);
    };
    let options = args.options();
    let mut any_failed = false;

    for path in &args.paths {
        let filename = path.display();
        let contents = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Failed to read {filename}: {e}");
            process::exit(1);
        });

        for (line_no, line) in contents.lines().enumerate() {
            let document = line.trim();
            if document.is_empty() || document.starts_with('#') {
                continue;
            }
            let line_no = line_no + 1;

            match dcsql_parser::compile(document, &binding, &options) {
                Ok(sql) => {
                    if args.json {
                        let result = serde_json::json!({
                            "file": filename.to_string(),
                            "line": line_no,
                            "ok": true,
                            "sql": sql,
                        });
                        println!("{result}");
                    } else {
                        println!("{sql}");
                    }
                }
                Err(e) => {
                    any_failed = true;
                    if args.json {
                        let result = serde_json::json!({
                            "file": filename.to_string(),
                            "line": line_no,
                            "ok": false,
                            "error": e.to_string(),
                        });
                        println!("{result}");
                    } else {
                        eprintln!("{filename}:{line_no}: {e}");
                    }
                    if !args.keep_going {
                        process::exit(1);
                    }
                }
            }
        }
    }

    if any_failed {
        process::exit(1);
    }
}

fn schema() {
    let schema = schemars::schema_for!(dcsql_parser::ConstraintDoc);
    let text = serde_json::to_string_pretty(&schema).unwrap_or_else(|e| {
        eprintln!("Failed to serialize schema: {e}");
        process::exit(1);
    });
    println!("{text}");
}
