/// Query Catalog Module
///
/// The ordered, built-in sequence of example queries that makes up the
/// walkthrough. Each entry is an immutable value tagged with the sample
/// database it targets, the tables it touches, and a short explanation for
/// the reader. Entries never mutate after authoring; the runner executes them
/// in the order given here.

use serde::Serialize;
use std::fmt;

/// The two sample databases the walkthrough runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleDb {
    /// Austin Animal Center intake records
    Animals,
    /// A small CRM sales dataset
    Sales,
}

impl SampleDb {
    /// Walkthrough order: animals first, then sales.
    pub const ALL: [SampleDb; 2] = [SampleDb::Animals, SampleDb::Sales];

    /// Conventional file name for this sample database.
    pub fn file_name(&self) -> &'static str {
        match self {
            SampleDb::Animals => "animals.sqlite",
            SampleDb::Sales => "sales.sqlite",
        }
    }
}

impl fmt::Display for SampleDb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleDb::Animals => write!(f, "animals"),
            SampleDb::Sales => write!(f, "sales"),
        }
    }
}

/// One illustrative query: SQL text with no parameters, plus the metadata a
/// reader needs to follow along.
#[derive(Debug, Clone, Serialize)]
pub struct QueryExample {
    /// Short unique slug, used by `:run <name>` in the REPL
    pub name: &'static str,
    /// Human-readable heading
    pub title: &'static str,
    /// Which sample database the query targets
    pub database: SampleDb,
    /// The query text
    pub sql: &'static str,
    /// Tables the query touches
    pub tables: &'static [&'static str],
    /// What the example demonstrates
    pub explanation: &'static str,
    /// Documented row count on the full sample data, where the walkthrough
    /// states one. Informational only; the runner logs a mismatch but does
    /// not fail, since scaled-down copies of the data produce fewer rows.
    pub expected_rows: Option<usize>,
}

/// Returns the full walkthrough in teaching order.
pub fn walkthrough() -> Vec<QueryExample> {
    vec![
        // -- Part one: query basics on the animal intake data --
        QueryExample {
            name: "select-all",
            title: "Selecting every column",
            database: SampleDb::Animals,
            sql: "SELECT * FROM austin_animal_center_intakes LIMIT 10",
            tables: &["austin_animal_center_intakes"],
            explanation: "SELECT * returns every column of every row. LIMIT caps the \
                          output so a large table stays readable.",
            expected_rows: Some(10),
        },
        QueryExample {
            name: "select-columns",
            title: "Choosing columns",
            database: SampleDb::Animals,
            sql: "SELECT animal_type, breed, color FROM austin_animal_center_intakes LIMIT 10",
            tables: &["austin_animal_center_intakes"],
            explanation: "Naming columns in the projection list narrows the result to just \
                          those columns, in the order written.",
            expected_rows: Some(10),
        },
        QueryExample {
            name: "distinct-types",
            title: "DISTINCT values",
            database: SampleDb::Animals,
            sql: "SELECT DISTINCT animal_type FROM austin_animal_center_intakes",
            tables: &["austin_animal_center_intakes"],
            explanation: "DISTINCT collapses duplicate rows, leaving each animal type once.",
            expected_rows: None,
        },
        QueryExample {
            name: "distinct-combinations",
            title: "DISTINCT over several columns",
            database: SampleDb::Animals,
            sql: "SELECT DISTINCT animal_type, sex_upon_intake, age_upon_intake \
                  FROM austin_animal_center_intakes",
            tables: &["austin_animal_center_intakes"],
            explanation: "With several columns, DISTINCT keeps each combination of values \
                          once. On the full intake data this yields exactly 539 rows.",
            expected_rows: Some(539),
        },
        QueryExample {
            name: "where-equals",
            title: "Filtering with WHERE",
            database: SampleDb::Animals,
            sql: "SELECT name, animal_type, intake_condition \
                  FROM austin_animal_center_intakes WHERE animal_type = 'Dog' LIMIT 10",
            tables: &["austin_animal_center_intakes"],
            explanation: "WHERE keeps only the rows the predicate accepts; here, dogs.",
            expected_rows: Some(10),
        },
        QueryExample {
            name: "where-compound",
            title: "Combining predicates",
            database: SampleDb::Animals,
            sql: "SELECT name, animal_type, intake_condition \
                  FROM austin_animal_center_intakes \
                  WHERE animal_type = 'Dog' AND intake_condition <> 'Normal' LIMIT 10",
            tables: &["austin_animal_center_intakes"],
            explanation: "AND, OR, and NOT combine predicates. This keeps the dogs that \
                          arrived in anything other than normal condition.",
            expected_rows: Some(10),
        },
        QueryExample {
            name: "order-by",
            title: "Ordering results",
            database: SampleDb::Animals,
            sql: "SELECT name, animal_type, intake_type \
                  FROM austin_animal_center_intakes \
                  WHERE name IS NOT NULL ORDER BY name LIMIT 10",
            tables: &["austin_animal_center_intakes"],
            explanation: "Without ORDER BY, row order is whatever the engine finds \
                          convenient. An explicit ORDER BY is the only ordering a query \
                          may rely on.",
            expected_rows: Some(10),
        },
        QueryExample {
            name: "count-all",
            title: "Counting rows",
            database: SampleDb::Animals,
            sql: "SELECT COUNT(*) AS intake_count FROM austin_animal_center_intakes",
            tables: &["austin_animal_center_intakes"],
            explanation: "Aggregate functions reduce many rows to one value. COUNT(*) \
                          counts rows regardless of NULLs.",
            expected_rows: Some(1),
        },
        QueryExample {
            name: "group-by",
            title: "GROUP BY",
            database: SampleDb::Animals,
            sql: "SELECT animal_type, COUNT(*) AS intake_count \
                  FROM austin_animal_center_intakes \
                  GROUP BY animal_type ORDER BY intake_count DESC",
            tables: &["austin_animal_center_intakes"],
            explanation: "GROUP BY partitions the rows and applies the aggregate to each \
                          partition, giving one output row per animal type.",
            expected_rows: None,
        },
        QueryExample {
            name: "group-by-having",
            title: "Filtering groups with HAVING",
            database: SampleDb::Animals,
            sql: "SELECT intake_condition, COUNT(*) AS condition_count \
                  FROM austin_animal_center_intakes \
                  GROUP BY intake_condition \
                  HAVING COUNT(*) > 50 ORDER BY condition_count DESC",
            tables: &["austin_animal_center_intakes"],
            explanation: "WHERE filters rows before grouping; HAVING filters the groups \
                          themselves, so it can reference aggregates.",
            expected_rows: None,
        },
        // -- Part two: joins and set operations on the sales data --
        QueryExample {
            name: "won-deal-count",
            title: "Counting won deals",
            database: SampleDb::Sales,
            sql: "SELECT COUNT(*) AS won_deals FROM sales_pipeline WHERE deal_stage = 'Won'",
            tables: &["sales_pipeline"],
            explanation: "A plain filtered count over the pipeline: how many deals closed \
                          as won, across all agents.",
            expected_rows: Some(1),
        },
        QueryExample {
            name: "won-by-agent",
            title: "Won deals per agent",
            database: SampleDb::Sales,
            sql: "SELECT sales_agent, COUNT(close_value) AS won_deals \
                  FROM sales_pipeline WHERE deal_stage = 'Won' \
                  GROUP BY sales_agent ORDER BY won_deals DESC",
            tables: &["sales_pipeline"],
            explanation: "The same won deals, grouped by agent. COUNT(close_value) skips \
                          NULLs, unlike COUNT(*).",
            expected_rows: None,
        },
        QueryExample {
            name: "prolific-agents",
            title: "Agents above a threshold",
            database: SampleDb::Sales,
            sql: "SELECT sales_agent, COUNT(close_value) AS won_deals \
                  FROM sales_pipeline WHERE deal_stage = 'Won' \
                  GROUP BY sales_agent \
                  HAVING COUNT(close_value) > 200 ORDER BY won_deals DESC",
            tables: &["sales_pipeline"],
            explanation: "Adding HAVING keeps only the agents that won more than 200 \
                          deals: a strict subset of the agents in the previous example.",
            expected_rows: None,
        },
        QueryExample {
            name: "inner-join",
            title: "Inner join",
            database: SampleDb::Sales,
            sql: "SELECT p.sales_agent, t.manager, p.product \
                  FROM sales_pipeline AS p \
                  JOIN sales_teams AS t ON p.sales_agent = t.sales_agent \
                  LIMIT 10",
            tables: &["sales_pipeline", "sales_teams"],
            explanation: "An inner join keeps only the rows with a match on both sides, \
                          pairing each deal with its agent's manager.",
            expected_rows: Some(10),
        },
        QueryExample {
            name: "left-join",
            title: "Left outer join",
            database: SampleDb::Sales,
            sql: "SELECT a.account, a.sector, p.deal_stage \
                  FROM accounts AS a \
                  LEFT JOIN sales_pipeline AS p ON a.account = p.account \
                  ORDER BY a.account",
            tables: &["accounts", "sales_pipeline"],
            explanation: "A left outer join keeps every account at least once, even those \
                          with no deals; the missing right-side columns come back NULL.",
            expected_rows: None,
        },
        QueryExample {
            name: "right-join-swapped",
            title: "RIGHT JOIN by swapping operands",
            database: SampleDb::Sales,
            sql: "SELECT t.sales_agent, t.manager, p.opportunity_id \
                  FROM sales_teams AS t \
                  LEFT JOIN sales_pipeline AS p ON p.sales_agent = t.sales_agent \
                  ORDER BY t.sales_agent",
            tables: &["sales_teams", "sales_pipeline"],
            explanation: "Older SQLite has no RIGHT JOIN, and the workaround is worth \
                          knowing anyway: swap the operands and write a LEFT JOIN. Every \
                          team member appears, deal or no deal. Recent engines also \
                          accept the native RIGHT JOIN spelling.",
            expected_rows: None,
        },
        QueryExample {
            name: "full-outer-union",
            title: "FULL OUTER JOIN as a union of left joins",
            database: SampleDb::Sales,
            sql: "SELECT a.account AS account, i.office_location \
                  FROM accounts AS a \
                  LEFT JOIN intl_accounts AS i ON a.account = i.account \
                  UNION ALL \
                  SELECT i.account, i.office_location \
                  FROM intl_accounts AS i \
                  LEFT JOIN accounts AS a ON a.account = i.account \
                  WHERE a.account IS NULL",
            tables: &["accounts", "intl_accounts"],
            explanation: "A full outer join keeps unmatched rows from both sides. Without \
                          native support it is spelled as a left join in each direction, \
                          with the second leg filtered to the rows the first leg missed.",
            expected_rows: None,
        },
        QueryExample {
            name: "union",
            title: "UNION",
            database: SampleDb::Sales,
            sql: "SELECT account FROM accounts UNION SELECT account FROM intl_accounts",
            tables: &["accounts", "intl_accounts"],
            explanation: "UNION stacks two compatible result sets and removes duplicates, \
                          giving every account name once.",
            expected_rows: None,
        },
        QueryExample {
            name: "union-all",
            title: "UNION ALL",
            database: SampleDb::Sales,
            sql: "SELECT account FROM accounts UNION ALL SELECT account FROM intl_accounts",
            tables: &["accounts", "intl_accounts"],
            explanation: "UNION ALL keeps duplicates, so accounts present in both tables \
                          appear twice. It is cheaper than UNION because nothing is \
                          deduplicated.",
            expected_rows: None,
        },
        QueryExample {
            name: "intersect",
            title: "INTERSECT",
            database: SampleDb::Sales,
            sql: "SELECT account FROM accounts INTERSECT SELECT account FROM intl_accounts",
            tables: &["accounts", "intl_accounts"],
            explanation: "INTERSECT keeps only the rows both sides produce: the accounts \
                          that are also international accounts.",
            expected_rows: None,
        },
        QueryExample {
            name: "except",
            title: "EXCEPT",
            database: SampleDb::Sales,
            sql: "SELECT account FROM accounts EXCEPT SELECT account FROM intl_accounts",
            tables: &["accounts", "intl_accounts"],
            explanation: "EXCEPT subtracts the second result from the first: the accounts \
                          with no international counterpart.",
            expected_rows: None,
        },
    ]
}

/// The catalog entries targeting one sample database, in walkthrough order.
pub fn examples_for(db: SampleDb) -> Vec<QueryExample> {
    walkthrough().into_iter().filter(|e| e.database == db).collect()
}

/// Looks up a single example by its slug.
pub fn find(name: &str) -> Option<QueryExample> {
    walkthrough().into_iter().find(|e| e.name == name)
}
