/*
 * ==========================================================================
 * KITTEN - Small Steps, Sharp Claws
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Website:  https://www.pawx-lang.com
 * Github:   https://github.com/samwilcox/pawx
 *
 * License:
 * This file is part of the KITTEN teaching language front end.
 *
 * KITTEN is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *    https://license.pawx-lang.com
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use kitten::{analyze, Analysis, Config, Outcome};
use tracing_subscriber::EnvFilter;

/// Scan and syntax-check a KITTEN program.
#[derive(Parser)]
#[command(name = "kitten", version, about)]
struct Cli {
    /// Source file to check.
    file: PathBuf,

    /// JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Let block bodies hold more than one statement.
    #[arg(long = "multi-statement")]
    multi_statement: bool,

    /// Print the full analysis as JSON.
    #[arg(long)]
    json: bool,

    /// Log statement dispatch (`kitten=debug`). `RUST_LOG` wins when set.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("kitten=debug")
    } else {
        EnvFilter::new("kitten=warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::from(2);
            }
        },
        None => Config::default(),
    };
    if cli.multi_statement {
        config.parser.multi_statement_blocks = true;
    }

    let source = match std::fs::read_to_string(&cli.file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: cannot read {}: {e}", cli.file.display());
            return ExitCode::from(2);
        }
    };

    let analysis = analyze(&source, &config);

    if cli.json {
        match serde_json::to_string_pretty(&analysis) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::from(2);
            }
        }
    } else {
        report(&analysis);
    }

    if analysis.is_accepted() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn report(analysis: &Analysis) {
    for error in &analysis.lexed.diagnostics {
        println!("{}", kitten::Diagnostic::from(error));
    }

    match &analysis.outcome {
        Outcome::Accepted(_) => println!("accepted"),
        Outcome::Rejected(diagnostic) => {
            println!("{diagnostic}");
            if let Some(help) = &diagnostic.help {
                println!("  help: {help}");
            }
        }
    }
}
