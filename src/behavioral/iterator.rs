//! Iterator: walk a collection without exposing how it is stored.

use std::fs::File;
use std::path::Path;

use crate::error::{PatternError, Result};
use crate::output;

// ============================================================================
// Example: Iterator Pattern - Hand-Written Iterator
// ============================================================================

pub struct BookCollection {
    books: Vec<String>,
}

impl BookCollection {
    pub fn new(books: &[&str]) -> Self {
        Self {
            books: books.iter().map(|b| b.to_string()).collect(),
        }
    }

    pub fn iter(&self) -> BookIterator<'_> {
        BookIterator {
            books: &self.books,
            index: 0,
        }
    }
}

/// Yields `(index, title)` pairs.
pub struct BookIterator<'a> {
    books: &'a [String],
    index: usize,
}

impl<'a> Iterator for BookIterator<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let book = self.books.get(self.index)?;
        let item = (self.index, book.as_str());
        self.index += 1;
        Some(item)
    }
}

pub fn book_example() -> Vec<String> {
    let books = BookCollection::new(&[
        "The Catcher in the Rye",
        "To Kill a Mockingbird",
        "1984",
        "Pride and Prejudice",
    ]);
    books
        .iter()
        .map(|(index, book)| format!("Book {index}: {book}"))
        .collect()
}

// ============================================================================
// Example: Iterator Pattern - IntoIterator for a Collection
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: u32,
    pub name: String,
}

#[derive(Default)]
pub struct UserCollection {
    users: Vec<User>,
}

impl UserCollection {
    pub fn add(&mut self, id: u32, name: &str) {
        self.users.push(User {
            id,
            name: name.to_string(),
        });
    }
}

impl<'a> IntoIterator for &'a UserCollection {
    type Item = &'a User;
    type IntoIter = std::slice::Iter<'a, User>;

    fn into_iter(self) -> Self::IntoIter {
        self.users.iter()
    }
}

pub fn user_example() -> Vec<String> {
    let mut users = UserCollection::default();
    users.add(1, "John Doe");
    users.add(2, "Jane Smith");
    users.add(3, "Emily Johnson");

    (&users)
        .into_iter()
        .enumerate()
        .map(|(index, user)| format!("User {index}: ID: {}, Name: {}", user.id, user.name))
        .collect()
}

// ============================================================================
// Example: CSV Rows
// ============================================================================

/// One data row, fields in header order.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvRow {
    pub index: usize,
    pub fields: Vec<(String, String)>,
}

impl CsvRow {
    pub fn get(&self, header: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == header)
            .map(|(_, value)| value.as_str())
    }
}

/// Streams rows of a CSV file lazily; the file is read as you go.
pub struct CsvIterator {
    headers: Vec<String>,
    records: csv::StringRecordsIntoIter<File>,
    index: usize,
}

impl CsvIterator {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_delimiter(path, b',')
    }

    pub fn with_delimiter(path: impl AsRef<Path>, delimiter: u8) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PatternError::MissingFile(path.to_path_buf()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .from_path(path)?;
        let headers = reader.headers()?.iter().map(str::to_string).collect();
        Ok(Self {
            headers,
            records: reader.into_records(),
            index: 0,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl Iterator for CsvIterator {
    type Item = Result<CsvRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(e.into())),
        };

        let row = CsvRow {
            index: self.index,
            fields: self
                .headers
                .iter()
                .cloned()
                .zip(record.iter().map(str::to_string))
                .collect(),
        };
        self.index += 1;
        Some(Ok(row))
    }
}

pub fn csv_example(path: &Path) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for row in CsvIterator::open(path)? {
        let row = row?;
        let fields: Vec<String> = row
            .fields
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect();
        lines.push(format!("Row {}: {}", row.index, fields.join(", ")));
    }
    Ok(lines)
}

pub fn run(cats_csv: &Path) {
    output::title("Pattern: Iterator");

    output::section("Books");
    output::lines(book_example());
    println!();

    output::section("Users");
    output::lines(user_example());
    println!();

    output::section("CSV Rows");
    match csv_example(cats_csv) {
        Ok(lines) => output::lines(lines),
        Err(e) => output::error(e),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_book_iterator_indexes() {
        let books = BookCollection::new(&["A", "B"]);
        let items: Vec<_> = books.iter().collect();
        assert_eq!(items, vec![(0, "A"), (1, "B")]);
        assert_eq!(book_example()[2], "Book 2: 1984");
    }

    #[test]
    fn test_empty_books() {
        assert_eq!(BookCollection::new(&[]).iter().next(), None);
    }

    #[test]
    fn test_user_iteration() {
        assert_eq!(
            user_example(),
            vec![
                "User 0: ID: 1, Name: John Doe",
                "User 1: ID: 2, Name: Jane Smith",
                "User 2: ID: 3, Name: Emily Johnson",
            ]
        );
    }

    #[test]
    fn test_csv_rows_keyed_by_header() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Name,Age").unwrap();
        writeln!(file, "Steve,3").unwrap();
        writeln!(file, "Siri,2").unwrap();

        let rows: Vec<CsvRow> = CsvIterator::open(file.path())
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].index, 1);
        assert_eq!(rows[1].get("Name"), Some("Siri"));
        assert_eq!(rows[0].get("Color"), None);
    }

    #[test]
    fn test_csv_custom_delimiter() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "a;b").unwrap();
        writeln!(file, "1;2").unwrap();

        let iter = CsvIterator::with_delimiter(file.path(), b';').unwrap();
        assert_eq!(iter.headers(), ["a", "b"]);
    }

    #[test]
    fn test_missing_csv() {
        let err = csv_example(Path::new("does/not/exist.csv")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The file \"does/not/exist.csv\" does not exist."
        );
    }
}
