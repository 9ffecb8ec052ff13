use sqlwalk::runner::Walkthrough;
use sqlwalk::{catalog, config, repl};
use tracing::info;

fn print_usage() {
    println!("Usage: sqlwalk [COMMAND]");
    println!();
    println!("Commands:");
    println!("  run [config.toml]   Run the full walkthrough (default)");
    println!("  repl [config.toml]  Start the interactive shell");
    println!("  list [--json]       List the walkthrough examples");
}

fn load_config(path: Option<&String>) -> config::Config {
    let loaded = match path {
        Some(path) => config::load_config(path),
        None => config::load_default(),
    };
    match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_walkthrough(config: config::Config) {
    let walkthrough = Walkthrough::new(config);
    let mut stdout = std::io::stdout();
    match walkthrough.run(&mut stdout) {
        Ok(report) => println!("Walkthrough complete: {} examples.", report.outcomes.len()),
        Err(e) => {
            eprintln!("Walkthrough halted: {}", e);
            std::process::exit(1);
        }
    }
}

fn main() {
    // Initialize the logging system using tracing subscriber. Logs go to
    // stderr so stdout stays clean for rendered results and JSON output.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    info!("starting sqlwalk");

    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        None => run_walkthrough(load_config(None)),
        Some("run") => run_walkthrough(load_config(args.get(2))),
        Some("repl") => {
            let config = load_config(args.get(2));
            if let Err(e) = repl::run_repl(&config) {
                eprintln!("Shell error: {}", e);
                std::process::exit(1);
            }
        }
        Some("list") => {
            if args.get(2).map(String::as_str) == Some("--json") {
                match serde_json::to_string_pretty(&catalog::walkthrough()) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Failed to serialize catalog: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                for example in catalog::walkthrough() {
                    println!(
                        "{:<24} [{}] {}",
                        example.name, example.database, example.title
                    );
                }
            }
        }
        Some("--help") | Some("-h") | Some("help") => print_usage(),
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            std::process::exit(2);
        }
    }
}
