/// Test Support Module
///
/// Builds miniature copies of the two sample databases so every walkthrough
/// query is executable in tests without shipping the real data files. The
/// schemas match the real datasets; the row counts are deliberately small,
/// with the relationships the join and set-operation examples rely on:
/// an account with no deals, a team member with no deals, and account tables
/// that overlap only partially.

use crate::core::Result;
use rusqlite::Connection;
use std::path::Path;

const ANIMALS_FIXTURE_SQL: &str = "
CREATE TABLE austin_animal_center_intakes (
    animal_id TEXT,
    name TEXT,
    datetime TEXT,
    found_location TEXT,
    intake_type TEXT,
    intake_condition TEXT,
    animal_type TEXT,
    sex_upon_intake TEXT,
    age_upon_intake TEXT,
    breed TEXT,
    color TEXT
);
INSERT INTO austin_animal_center_intakes VALUES
    ('A001', 'Rex',    '2024-01-03', 'Austin (TX)', 'Stray',           'Normal',  'Dog',  'Neutered Male', '2 years',   'Labrador Retriever', 'Black'),
    ('A002', 'Bella',  '2024-01-05', 'Austin (TX)', 'Owner Surrender', 'Normal',  'Dog',  'Spayed Female', '1 year',    'Pit Bull Mix',       'Brown'),
    ('A003', 'Duke',   '2024-01-09', 'Austin (TX)', 'Stray',           'Injured', 'Dog',  'Intact Male',   '3 years',   'German Shepherd',    'Tan'),
    ('A004', 'Luna',   '2024-01-12', 'Austin (TX)', 'Stray',           'Sick',    'Dog',  'Spayed Female', '2 years',   'Labrador Retriever', 'Yellow'),
    ('A005', 'Milo',   '2024-01-15', 'Austin (TX)', 'Stray',           'Normal',  'Cat',  'Neutered Male', '6 months',  'Domestic Shorthair', 'Orange'),
    ('A006', 'Cleo',   '2024-01-18', 'Austin (TX)', 'Owner Surrender', 'Normal',  'Cat',  'Spayed Female', '4 years',   'Siamese',            'Seal Point'),
    ('A007', NULL,     '2024-01-21', 'Austin (TX)', 'Wildlife',        'Injured', 'Bird', 'Unknown',       '1 year',    'Grackle',            'Black'),
    ('A008', 'Kiwi',   '2024-01-24', 'Austin (TX)', 'Stray',           'Normal',  'Bird', 'Unknown',       '2 months',  'Parakeet',           'Green'),
    ('A009', 'Shadow', '2024-01-27', 'Austin (TX)', 'Stray',           'Normal',  'Cat',  'Intact Male',   '6 months',  'Domestic Shorthair', 'Black'),
    ('A010', 'Rocky',  '2024-02-01', 'Austin (TX)', 'Public Assist',   'Aged',    'Dog',  'Neutered Male', '10 years',  'Beagle',             'Tricolor'),
    ('A011', NULL,     '2024-02-04', 'Austin (TX)', 'Stray',           'Normal',  'Dog',  'Spayed Female', '2 years',   'Pit Bull Mix',       'White'),
    ('A012', 'Whiskers','2024-02-07','Austin (TX)', 'Stray',           'Sick',    'Cat',  'Spayed Female', '8 years',   'Maine Coon',         'Gray');
";

const SALES_FIXTURE_SQL: &str = "
CREATE TABLE sales_teams (
    sales_agent TEXT,
    manager TEXT,
    regional_office TEXT
);
CREATE TABLE accounts (
    account TEXT,
    sector TEXT,
    year_established INTEGER,
    revenue REAL,
    employees INTEGER,
    office_location TEXT
);
CREATE TABLE intl_accounts (
    account TEXT,
    office_location TEXT
);
CREATE TABLE sales_pipeline (
    opportunity_id TEXT,
    sales_agent TEXT,
    product TEXT,
    account TEXT,
    deal_stage TEXT,
    engage_date TEXT,
    close_date TEXT,
    close_value INTEGER
);

INSERT INTO sales_teams VALUES
    ('Moses Frase',    'Dustin Brinkmann', 'Central'),
    ('Darcel Schlecht','Melvin Marxen',    'Central'),
    ('Zane Levy',      'Summer Sewald',    'West'),
    ('Vicki Laflamme', 'Celia Rouche',     'West');

-- 'Trinity Dynamics' has no pipeline rows at all, for the outer-join examples
INSERT INTO accounts VALUES
    ('Acme Corporation', 'technology', 1996, 1100.0, 2822, 'United States'),
    ('Betasoloin',       'medical',    1999,  251.0,  495, 'United States'),
    ('Bubba Gump',       'retail',     1989,  525.0, 1445, 'United States'),
    ('Trinity Dynamics', 'technology', 2005,  812.0, 1050, 'United States');

-- overlaps accounts on two names, adds one of its own
INSERT INTO intl_accounts VALUES
    ('Acme Corporation', 'Belgium'),
    ('Bubba Gump',       'Japan'),
    ('Soya Ventures',    'Kenya');

-- Vicki Laflamme has no deals, so the swapped-operand join shows NULLs
INSERT INTO sales_pipeline VALUES
    ('OPP001', 'Moses Frase',     'GTX Basic',   'Acme Corporation', 'Won',      '2024-02-01', '2024-03-01', 1054),
    ('OPP002', 'Moses Frase',     'GTX Pro',     'Betasoloin',       'Won',      '2024-02-03', '2024-03-11', 4514),
    ('OPP003', 'Moses Frase',     'MG Special',  'Bubba Gump',       'Lost',     '2024-02-07', '2024-03-14', NULL),
    ('OPP004', 'Darcel Schlecht', 'GTX Basic',   'Acme Corporation', 'Won',      '2024-02-09', '2024-03-19', 988),
    ('OPP005', 'Darcel Schlecht', 'GTX Plus Pro','Bubba Gump',       'Won',      '2024-02-11', '2024-03-21', 5891),
    ('OPP006', 'Darcel Schlecht', 'MG Advanced', 'Betasoloin',       'Won',      '2024-02-15', '2024-03-26', 3180),
    ('OPP007', 'Darcel Schlecht', 'GTX Basic',   'Acme Corporation', 'Engaging', '2024-02-18', NULL,         NULL),
    ('OPP008', 'Zane Levy',       'MG Special',  'Betasoloin',       'Won',      '2024-02-20', '2024-04-02', 612),
    ('OPP009', 'Zane Levy',       'GTX Pro',     'Bubba Gump',       'Lost',     '2024-02-24', '2024-04-07', NULL);
";

/// Creates the miniature animals sample database at `path`.
pub fn create_animals_fixture(path: &Path) -> Result<()> {
    let conn = Connection::open(path)?;
    conn.execute_batch(ANIMALS_FIXTURE_SQL)?;
    if let Err((_conn, e)) = conn.close() {
        return Err(e.into());
    }
    Ok(())
}

/// Creates the miniature sales sample database at `path`.
pub fn create_sales_fixture(path: &Path) -> Result<()> {
    let conn = Connection::open(path)?;
    conn.execute_batch(SALES_FIXTURE_SQL)?;
    if let Err((_conn, e)) = conn.close() {
        return Err(e.into());
    }
    Ok(())
}
