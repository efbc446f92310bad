use std::path::Path;

use design_patterns::behavioral::iterator::{csv_example, CsvIterator};
use design_patterns::config::default_cats_csv;
use design_patterns::structural::flyweight::{cat_database_example, CatDatabase};
use design_patterns::PatternError;

#[test]
fn test_cat_fixture_shares_variations() {
    let mut db = CatDatabase::default();
    let lines = db.load_csv(default_cats_csv()).unwrap();

    assert_eq!(lines.len(), 6);
    assert_eq!(db.cat_count(), 6);
    assert_eq!(db.variation_count(), 4);
}

#[test]
fn test_find_cat_by_own_and_shared_fields() {
    let mut db = CatDatabase::default();
    db.load_csv(default_cats_csv()).unwrap();

    let siri = db.find_cat(&[("name", "Siri")]).unwrap();
    assert_eq!(siri.owner, "Alexander Shvets");

    let persian = db.find_cat(&[("breed", "Persian"), ("owner", "Kenji Sato")]).unwrap();
    assert_eq!(persian.name, "Luna");

    assert!(db.find_cat(&[("name", "Bob")]).is_none());
    assert!(db.find_cat(&[("whiskers", "long")]).is_none());
}

#[test]
fn test_cat_database_example_reports_misses() {
    let lines = cat_database_example(&default_cats_csv()).unwrap();
    assert_eq!(
        lines.last().unwrap(),
        "CatDataBase: Sorry, your query does not yield any results."
    );
}

#[test]
fn test_iterator_walks_fixture() {
    let rows: Vec<_> = CsvIterator::open(default_cats_csv())
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0].get("Name"), Some("Steve"));
    assert_eq!(rows[5].get("Breed"), Some("Maine Coon"));
    assert_eq!(rows[5].index, 5);
}

#[test]
fn test_missing_fixture() {
    let missing = Path::new("no/such/cats.csv");

    let err = csv_example(missing).unwrap_err();
    assert!(matches!(err, PatternError::MissingFile(_)));

    let err = CatDatabase::default().load_csv(missing).unwrap_err();
    assert_eq!(err.to_string(), "The file \"no/such/cats.csv\" does not exist.");
}
