use crate::catalog;
use crate::config::Config;
use crate::core::db::{self, query, schema, DatabaseHandle};
use crate::core::Result;
use crate::results_grid::ResultsGrid;
use std::io::{self, BufRead, Write};

/// Represents a parsed REPL command.
#[derive(Debug, PartialEq)]
pub enum Command {
    /// Open a database file, replacing any current handle
    Open(String),
    /// Show the tables and columns of the open database
    Tables,
    /// List the walkthrough catalog
    List,
    /// Run one catalog example by name against its configured database
    Run(String),
    Help,
    Quit,
    /// Bare SQL executes against the open database
    Sql(String),
    Unknown(String),
}

/// Parses a user input string into a corresponding `Command`.
///
/// Input starting with a colon (`:`) is a command; anything else is SQL.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    if !input.starts_with(':') {
        return Command::Sql(input.to_string());
    }
    let parts: Vec<&str> = input[1..].split_whitespace().collect();
    match parts.as_slice() {
        ["open", path] => Command::Open(path.to_string()),
        ["tables"] => Command::Tables,
        ["list"] => Command::List,
        ["run", name] => Command::Run(name.to_string()),
        ["help"] => Command::Help,
        ["quit"] => Command::Quit,
        _ => Command::Unknown(input.to_string()),
    }
}

fn print_help() {
    println!("Available commands:");
    println!("  :open <path>  - Open a database file");
    println!("  :tables       - Show tables and columns of the open database");
    println!("  :list         - List the walkthrough examples");
    println!("  :run <name>   - Run one example against its sample database");
    println!("  :help         - Show this help");
    println!("  :quit         - Exit");
    println!("\nOr enter SQL directly against the open database.");
}

fn print_catalog() {
    for example in catalog::walkthrough() {
        println!(
            "  {:<24} [{}] {}",
            example.name, example.database, example.title
        );
    }
}

fn run_sql(handle: &DatabaseHandle, sql: &str, max_rows: usize) {
    match query::execute(handle, sql) {
        Ok(result) => {
            let grid = ResultsGrid::from_result(&result).with_max_display_rows(max_rows);
            print!("{}", grid.render());
            println!("({} rows)", result.row_count());
        }
        Err(e) => eprintln!("Error executing query: {}", e),
    }
}

fn run_example(config: &Config, name: &str) {
    let example = match catalog::find(name) {
        Some(example) => example,
        None => {
            eprintln!("No example named '{}'. Try :list.", name);
            return;
        }
    };
    println!("== {} [{}]", example.title, example.name);
    println!("{}", example.explanation);
    println!("sql> {}", example.sql);

    let path = config.database_path(example.database).to_path_buf();
    let outcome = db::with_database(path, |handle| {
        run_sql(handle, example.sql, config.render.max_rows);
        Ok(())
    });
    if let Err(e) = outcome {
        eprintln!("Error running example: {}", e);
    }
}

/// Runs the interactive shell: reads lines from standard input, parses them,
/// and dispatches until `:quit` or end of input.
pub fn run_repl(config: &Config) -> Result<()> {
    println!("Welcome to the sqlwalk shell. Type :help for commands, :quit to exit.");
    let stdin = io::stdin();
    let mut current: Option<DatabaseHandle> = None;

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break; // end of input
        }
        let trimmed = input.trim();
        if trimmed.is_empty() {
            continue;
        }

        match parse_command(trimmed) {
            Command::Quit => break,
            Command::Help => print_help(),
            Command::List => print_catalog(),
            Command::Open(path) => {
                if let Some(mut handle) = current.take() {
                    if let Err(e) = handle.close() {
                        eprintln!("Error closing previous database: {}", e);
                    }
                }
                match DatabaseHandle::open(&path) {
                    Ok(handle) => {
                        println!("Opened database: {}", path);
                        current = Some(handle);
                    }
                    Err(e) => eprintln!("Error opening database: {}", e),
                }
            }
            Command::Tables => match &current {
                Some(handle) => match schema::describe_all(handle) {
                    Ok(tables) => {
                        for table in tables {
                            let columns: Vec<String> = table
                                .columns
                                .iter()
                                .map(|c| format!("{} {}", c.name, c.type_name))
                                .collect();
                            println!("{} ({})", table.name, columns.join(", "));
                        }
                    }
                    Err(e) => eprintln!("Error reading schema: {}", e),
                },
                None => eprintln!("No database open. Use :open <path> first."),
            },
            Command::Run(name) => run_example(config, &name),
            Command::Sql(sql) => match &current {
                Some(handle) => run_sql(handle, &sql, config.render.max_rows),
                None => eprintln!("No database open. Use :open <path> first."),
            },
            Command::Unknown(text) => {
                eprintln!("Unknown command: {}. Type :help for commands.", text)
            }
        }
    }

    if let Some(mut handle) = current.take() {
        handle.close()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_open_command() {
        let cmd = parse_command(":open sales.sqlite");
        assert_eq!(cmd, Command::Open("sales.sqlite".to_string()));
    }

    #[test]
    fn test_parse_run_command() {
        let cmd = parse_command(":run left-join");
        assert_eq!(cmd, Command::Run("left-join".to_string()));
    }

    #[test]
    fn test_parse_bare_words_are_sql() {
        let cmd = parse_command("SELECT * FROM accounts");
        assert_eq!(cmd, Command::Sql("SELECT * FROM accounts".to_string()));
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_command(":tables"), Command::Tables);
        assert_eq!(parse_command(":list"), Command::List);
        assert_eq!(parse_command(":help"), Command::Help);
        assert_eq!(parse_command(":quit"), Command::Quit);
    }

    #[test]
    fn test_parse_missing_argument_is_unknown() {
        assert_eq!(
            parse_command(":open"),
            Command::Unknown(":open".to_string())
        );
        assert_eq!(parse_command(":run"), Command::Unknown(":run".to_string()));
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            parse_command(":frobnicate"),
            Command::Unknown(":frobnicate".to_string())
        );
    }
}
