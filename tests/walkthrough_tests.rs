//! End-to-end tests over the miniature sample databases: handle lifecycle,
//! error classification, the documented result-set properties, and a full
//! walkthrough run.

use sqlwalk::catalog::{self, SampleDb};
use sqlwalk::config::Config;
use sqlwalk::core::db::{self, query, schema, DatabaseHandle};
use sqlwalk::core::SqlWalkError;
use sqlwalk::runner::Walkthrough;
use sqlwalk::test_utils;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn animals_fixture(dir: &Path) -> PathBuf {
    let path = dir.join("animals.sqlite");
    test_utils::create_animals_fixture(&path).unwrap();
    path
}

fn sales_fixture(dir: &Path) -> PathBuf {
    let path = dir.join("sales.sqlite");
    test_utils::create_sales_fixture(&path).unwrap();
    path
}

#[test]
fn result_columns_match_the_projection_list() {
    let dir = tempdir().unwrap();
    let path = sales_fixture(dir.path());

    let result = db::with_database(&path, |handle| {
        query::execute(handle, "SELECT account, sector, revenue FROM accounts")
    })
    .unwrap();
    assert_eq!(result.columns, vec!["account", "sector", "revenue"]);
}

#[test]
fn list_tables_on_sales_includes_the_documented_tables() {
    let dir = tempdir().unwrap();
    let path = sales_fixture(dir.path());

    let tables = db::with_database(&path, |handle| schema::list_tables(handle)).unwrap();
    for required in ["sales_pipeline", "sales_teams", "accounts", "intl_accounts"] {
        assert!(
            tables.contains(&required.to_string()),
            "missing table {}",
            required
        );
    }
}

#[test]
fn distinct_combinations_deduplicate() {
    let dir = tempdir().unwrap();
    let path = animals_fixture(dir.path());

    db::with_database(&path, |handle| {
        let all = query::execute(
            handle,
            "SELECT animal_type, sex_upon_intake, age_upon_intake \
             FROM austin_animal_center_intakes",
        )?;
        let distinct = query::execute(
            handle,
            "SELECT DISTINCT animal_type, sex_upon_intake, age_upon_intake \
             FROM austin_animal_center_intakes",
        )?;

        // The fixture carries one duplicated combination on purpose.
        assert_eq!(all.row_count(), 12);
        assert_eq!(distinct.row_count(), 11);

        let unique: HashSet<&Vec<Option<String>>> = all.rows.iter().collect();
        assert_eq!(unique.len(), distinct.row_count());
        Ok(())
    })
    .unwrap();
}

#[test]
fn having_returns_a_strict_subset_of_grouped_agents() {
    let dir = tempdir().unwrap();
    let path = sales_fixture(dir.path());

    db::with_database(&path, |handle| {
        let grouped = query::execute(
            handle,
            "SELECT sales_agent, COUNT(close_value) AS won_deals \
             FROM sales_pipeline WHERE deal_stage = 'Won' \
             GROUP BY sales_agent",
        )?;
        let filtered = query::execute(
            handle,
            "SELECT sales_agent, COUNT(close_value) AS won_deals \
             FROM sales_pipeline WHERE deal_stage = 'Won' \
             GROUP BY sales_agent \
             HAVING COUNT(close_value) > 2",
        )?;

        let grouped_agents: HashSet<Option<String>> =
            grouped.rows.iter().map(|r| r[0].clone()).collect();
        let filtered_agents: HashSet<Option<String>> =
            filtered.rows.iter().map(|r| r[0].clone()).collect();

        assert!(filtered_agents.is_subset(&grouped_agents));
        assert!(filtered_agents.len() < grouped_agents.len());
        assert!(filtered_agents.contains(&Some("Darcel Schlecht".to_string())));
        Ok(())
    })
    .unwrap();
}

#[test]
fn left_join_keeps_every_left_row() {
    let dir = tempdir().unwrap();
    let path = sales_fixture(dir.path());

    db::with_database(&path, |handle| {
        let accounts = query::execute(handle, "SELECT account FROM accounts")?;
        let joined = query::execute(
            handle,
            "SELECT a.account, p.deal_stage \
             FROM accounts AS a \
             LEFT JOIN sales_pipeline AS p ON a.account = p.account",
        )?;

        let joined_accounts: HashSet<Option<String>> =
            joined.rows.iter().map(|r| r[0].clone()).collect();
        for row in &accounts.rows {
            assert!(
                joined_accounts.contains(&row[0]),
                "account {:?} missing from the join",
                row[0]
            );
        }

        // The account with no deals survives, with NULL right-side columns.
        let trinity: Vec<_> = joined
            .rows
            .iter()
            .filter(|r| r[0] == Some("Trinity Dynamics".to_string()))
            .collect();
        assert_eq!(trinity.len(), 1);
        assert_eq!(trinity[0][1], None);
        Ok(())
    })
    .unwrap();
}

#[test]
fn full_outer_union_covers_both_sides() {
    let dir = tempdir().unwrap();
    let path = sales_fixture(dir.path());
    let example = catalog::find("full-outer-union").unwrap();

    let result =
        db::with_database(&path, |handle| query::execute(handle, example.sql)).unwrap();

    let accounts: HashSet<Option<String>> = result.rows.iter().map(|r| r[0].clone()).collect();
    // Accounts-only, matched, and intl-only rows are all present.
    assert!(accounts.contains(&Some("Betasoloin".to_string())));
    assert!(accounts.contains(&Some("Acme Corporation".to_string())));
    assert!(accounts.contains(&Some("Soya Ventures".to_string())));
    // The account column itself is never NULL in this spelling.
    assert!(!accounts.contains(&None));
}

#[test]
fn set_operations_relate_as_documented() {
    let dir = tempdir().unwrap();
    let path = sales_fixture(dir.path());

    db::with_database(&path, |handle| {
        let union = query::execute(
            handle,
            "SELECT account FROM accounts UNION SELECT account FROM intl_accounts",
        )?;
        let union_all = query::execute(
            handle,
            "SELECT account FROM accounts UNION ALL SELECT account FROM intl_accounts",
        )?;
        let intersect = query::execute(
            handle,
            "SELECT account FROM accounts INTERSECT SELECT account FROM intl_accounts",
        )?;
        let except = query::execute(
            handle,
            "SELECT account FROM accounts EXCEPT SELECT account FROM intl_accounts",
        )?;

        // 4 accounts, 3 intl, overlapping on 2 names
        assert_eq!(union.row_count(), 5);
        assert_eq!(union_all.row_count(), 7);
        assert_eq!(intersect.row_count(), 2);
        assert_eq!(except.row_count(), 2);
        Ok(())
    })
    .unwrap();
}

#[test]
fn execute_after_close_always_fails() {
    let dir = tempdir().unwrap();
    let path = sales_fixture(dir.path());

    let mut handle = DatabaseHandle::open(&path).unwrap();
    let before = query::execute(&handle, "SELECT COUNT(*) FROM accounts").unwrap();
    assert_eq!(before.rows[0][0], Some("4".to_string()));

    handle.close().unwrap();
    for _ in 0..3 {
        match query::execute(&handle, "SELECT COUNT(*) FROM accounts") {
            Err(SqlWalkError::ConnectionClosed(_)) => {}
            other => panic!("Expected ConnectionClosed, got {:?}", other),
        }
    }

    match handle.close() {
        Err(SqlWalkError::InvalidState(_)) => {}
        other => panic!("Expected InvalidState on double close, got {:?}", other),
    }
}

#[test]
fn error_taxonomy_end_to_end() {
    let dir = tempdir().unwrap();
    let path = sales_fixture(dir.path());

    match DatabaseHandle::open(dir.path().join("absent.sqlite")) {
        Err(SqlWalkError::NotFound(_)) => {}
        other => panic!("Expected NotFound, got {:?}", other.map(|_| ())),
    }

    db::with_database(&path, |handle| {
        match query::execute(handle, "SELECT FROM WHERE") {
            Err(SqlWalkError::Syntax(_)) => {}
            other => panic!("Expected Syntax, got {:?}", other),
        }
        match query::execute(handle, "SELECT * FROM imaginary_table") {
            Err(SqlWalkError::Reference(name)) => assert_eq!(name, "imaginary_table"),
            other => panic!("Expected Reference, got {:?}", other),
        }
        Ok(())
    })
    .unwrap();
}

#[test]
fn full_walkthrough_runs_both_databases_in_sequence() {
    let dir = tempdir().unwrap();
    let mut config = Config::default();
    config.databases.animals = animals_fixture(dir.path());
    config.databases.sales = sales_fixture(dir.path());

    let mut out = Vec::new();
    let report = Walkthrough::new(config).run(&mut out).unwrap();

    assert_eq!(report.outcomes.len(), catalog::walkthrough().len());

    // Animals outcomes strictly precede sales outcomes.
    let first_sales = report
        .outcomes
        .iter()
        .position(|o| o.database == SampleDb::Sales)
        .unwrap();
    assert!(report.outcomes[..first_sales]
        .iter()
        .all(|o| o.database == SampleDb::Animals));
    assert!(report.outcomes[first_sales..]
        .iter()
        .all(|o| o.database == SampleDb::Sales));

    let rendered = String::from_utf8(out).unwrap();
    assert!(rendered.contains("== DISTINCT over several columns [distinct-combinations]"));
    assert!(rendered.contains("== EXCEPT [except]"));
}
