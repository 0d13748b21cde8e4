use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::Path;
use tmspec::{to_json, Configuration, DemoManager, LoadError, SpecLoader};

/// Parses a Turing machine transition table into configuration records.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(after_help = "EXAMPLES:
  tmspec-cli demos/turing-first.tm
  cat demos/scrub.tm | tmspec-cli --format text
  tmspec-cli --demo turing-first
  tmspec-cli --demo scrub --source")]
struct Cli {
    /// Path to a spec file (.tm). Spec text can also be piped via stdin.
    spec_file: Option<String>,

    /// Parse one of the built-in demo specs instead
    #[clap(short, long, conflicts_with = "spec_file")]
    demo: Option<String>,

    /// List the built-in demo specs and exit
    #[clap(short, long)]
    list: bool,

    /// Print the source text of the demo given with --demo instead of its records
    #[clap(short, long, requires = "demo")]
    source: bool,

    /// Output format for the parsed records
    #[clap(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Pretty-printed JSON
    Json,
    /// One rule per line, in the input notation
    Text,
}

fn main() {
    let cli = Cli::parse();

    if cli.list {
        list_demos();
        return;
    }

    if cli.source {
        print_demo_source(&cli);
        return;
    }

    let configurations = match load_spec(&cli) {
        Ok(configurations) => configurations,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match cli.format {
        Format::Json => match to_json(&configurations) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Format::Text => {
            for (i, config) in configurations.iter().enumerate() {
                println!("{:>3}: {}", i + 1, config);
            }
        }
    }
}

/// Loads spec records based on CLI arguments.
///
/// It tries a named demo, then a file path, then stdin.
fn load_spec(cli: &Cli) -> Result<Vec<Configuration>, LoadError> {
    if let Some(name) = &cli.demo {
        DemoManager::get_by_name(name).map(|demo| demo.configurations.clone())
    } else if let Some(file_path) = &cli.spec_file {
        SpecLoader::load_spec(Path::new(file_path))
    } else if atty::isnt(atty::Stream::Stdin) {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| LoadError::FileError(format!("Failed to read from stdin: {}", e)))?;
        SpecLoader::load_spec_from_string(&buffer)
    } else {
        Err(LoadError::FileError(
            "No spec given: pass a file, pipe one via stdin, or use --demo".to_string(),
        ))
    }
}

fn print_demo_source(cli: &Cli) {
    let name = cli.demo.as_deref().unwrap_or_default();

    match DemoManager::get_by_name(name) {
        Ok(demo) => print!("{}", demo.text),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn list_demos() {
    for index in 0..DemoManager::count() {
        if let Ok(info) = DemoManager::get_info(index) {
            println!(
                "{:<16} {} rules, {} states, starts in {}",
                info.name,
                info.rule_count,
                info.state_count,
                info.initial_state.as_deref().unwrap_or("-")
            );
        }
    }
}
