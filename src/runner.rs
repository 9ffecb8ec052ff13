use crate::catalog::{self, QueryExample, SampleDb};
use crate::config::Config;
use crate::core::db::{self, query, DatabaseHandle};
use crate::core::Result;
use crate::results_grid::ResultsGrid;
use std::io::Write;
use tracing::{info, warn};

/// Walkthrough Runner
///
/// Drives the whole teaching sequence: open the animals database, execute its
/// catalog entries in order, close the handle, then do the same for the sales
/// database. Exactly one handle is open at a time. The first failure halts
/// the run and propagates; the handle is still released on that path, because
/// each database section runs inside a scoped acquisition.

/// What happened for one executed example.
#[derive(Debug, Clone)]
pub struct ExampleOutcome {
    /// Catalog slug of the example
    pub name: String,
    /// Sample database it ran against
    pub database: SampleDb,
    /// Rows the query returned
    pub rows: usize,
}

/// Summary of a completed walkthrough run.
#[derive(Debug, Clone, Default)]
pub struct WalkthroughReport {
    pub outcomes: Vec<ExampleOutcome>,
}

/// Executes the built-in catalog against the configured sample databases.
pub struct Walkthrough {
    config: Config,
    examples: Vec<QueryExample>,
}

impl Walkthrough {
    pub fn new(config: Config) -> Self {
        Walkthrough {
            config,
            examples: catalog::walkthrough(),
        }
    }

    /// Runs every catalog entry in order, writing rendered results to `out`.
    ///
    /// Databases are visited in `SampleDb::ALL` order; each one is opened
    /// once, queried in sequence, and closed before the next is opened.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<WalkthroughReport> {
        let mut report = WalkthroughReport::default();

        for sample_db in SampleDb::ALL {
            let entries: Vec<&QueryExample> = self
                .examples
                .iter()
                .filter(|e| e.database == sample_db)
                .collect();
            if entries.is_empty() {
                continue;
            }

            let path = self.config.database_path(sample_db);
            info!("walkthrough section: {} ({})", sample_db, path.display());

            let outcomes = db::with_database(path, |handle| {
                let mut outcomes = Vec::with_capacity(entries.len());
                for example in &entries {
                    outcomes.push(self.run_example(handle, example, out)?);
                }
                Ok(outcomes)
            })?;
            report.outcomes.extend(outcomes);
        }

        Ok(report)
    }

    fn run_example<W: Write>(
        &self,
        handle: &DatabaseHandle,
        example: &QueryExample,
        out: &mut W,
    ) -> Result<ExampleOutcome> {
        writeln!(out, "== {} [{}]", example.title, example.name)?;
        writeln!(out, "{}", example.explanation)?;
        writeln!(out, "sql> {}", example.sql)?;

        let result = query::execute(handle, example.sql)?;
        let grid = ResultsGrid::from_result(&result)
            .with_max_display_rows(self.config.render.max_rows);
        writeln!(out, "{}", grid.render())?;
        writeln!(out, "({} rows)\n", result.row_count())?;

        if let Some(expected) = example.expected_rows {
            if expected != result.row_count() {
                // Documented counts describe the full sample data; smaller
                // copies of the databases legitimately differ.
                warn!(
                    example = example.name,
                    expected,
                    actual = result.row_count(),
                    "row count differs from the documented expectation"
                );
            }
        }

        Ok(ExampleOutcome {
            name: example.name.to_string(),
            database: example.database,
            rows: result.row_count(),
        })
    }
}
