use bookledger_core::{Book, BookRepository, InventoryStats, JsonCatalogRepository};
use tempfile::TempDir;

fn open_repo(dir: &TempDir) -> JsonCatalogRepository {
    JsonCatalogRepository::open(dir.path().join("library_catalog.json"))
}

#[test]
fn add_book_appends_and_reports_success() {
    let dir = TempDir::new().unwrap();
    let mut repo = open_repo(&dir);

    assert!(repo.add_book(Book::new("Python Programming", "John Doe", "1111111111")));
    assert_eq!(repo.list_all().len(), 1);
}

#[test]
fn add_rejects_duplicate_isbn_without_mutation() {
    let dir = TempDir::new().unwrap();
    let mut repo = open_repo(&dir);

    assert!(repo.add_book(Book::new("Python Programming", "John Doe", "1111111111")));
    assert!(!repo.add_book(Book::new("Another Title", "Jane Doe", "1111111111")));

    assert_eq!(repo.list_all().len(), 1);
    assert_eq!(repo.list_all()[0].title, "Python Programming");
}

#[test]
fn list_all_preserves_insertion_order() {
    let dir = TempDir::new().unwrap();
    let mut repo = open_repo(&dir);

    assert!(repo.add_book(Book::new("First", "Author A", "isbn-1")));
    assert!(repo.add_book(Book::new("Second", "Author B", "isbn-2")));
    assert!(repo.add_book(Book::new("Third", "Author C", "isbn-3")));

    let isbns: Vec<&str> = repo
        .list_all()
        .iter()
        .map(|book| book.isbn.as_str())
        .collect();
    assert_eq!(isbns, vec!["isbn-1", "isbn-2", "isbn-3"]);
}

#[test]
fn find_by_isbn_is_exact_and_case_sensitive() {
    let dir = TempDir::new().unwrap();
    let mut repo = open_repo(&dir);

    assert!(repo.add_book(Book::new("Python Programming", "John Doe", "ISBN-1")));

    let found = repo.find_by_isbn("ISBN-1").expect("exact key should match");
    assert_eq!(found.title, "Python Programming");

    assert!(repo.find_by_isbn("isbn-1").is_none());
    assert!(repo.find_by_isbn("ISBN-").is_none());
}

#[test]
fn search_by_title_is_case_insensitive_substring() {
    let dir = TempDir::new().unwrap();
    let mut repo = open_repo(&dir);

    assert!(repo.add_book(Book::new("Python Programming", "John Doe", "isbn-1")));
    assert!(repo.add_book(Book::new("PROGRAMMING Basics", "Jane Doe", "isbn-2")));
    assert!(repo.add_book(Book::new("Data Science", "John Smith", "isbn-3")));

    let matches = repo.search_by_title("prog");
    let titles: Vec<&str> = matches.iter().map(|book| book.title.as_str()).collect();
    assert_eq!(titles, vec!["Python Programming", "PROGRAMMING Basics"]);
}

#[test]
fn search_by_author_matches_partial_names() {
    let dir = TempDir::new().unwrap();
    let mut repo = open_repo(&dir);

    assert!(repo.add_book(Book::new("Python Programming", "John Doe", "isbn-1")));
    assert!(repo.add_book(Book::new("Data Science", "John Smith", "isbn-2")));
    assert!(repo.add_book(Book::new("Rust in Practice", "Ada Lovelace", "isbn-3")));

    let matches = repo.search_by_author("john");
    assert_eq!(matches.len(), 2);

    let matches = repo.search_by_author("LOVELACE");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].isbn, "isbn-3");
}

#[test]
fn searches_on_empty_store_return_empty() {
    let dir = TempDir::new().unwrap();
    let repo = open_repo(&dir);

    assert!(repo.search_by_title("anything").is_empty());
    assert!(repo.search_by_author("anyone").is_empty());
    assert!(repo.find_by_isbn("missing").is_none());
    assert!(repo.list_all().is_empty());
}

#[test]
fn issue_marks_book_unavailable() {
    let dir = TempDir::new().unwrap();
    let mut repo = open_repo(&dir);

    assert!(repo.add_book(Book::new("Python Programming", "John Doe", "isbn-1")));
    assert!(repo.issue_book("isbn-1"));

    let book = repo.find_by_isbn("isbn-1").unwrap();
    assert!(!book.is_available());
}

#[test]
fn issue_fails_the_second_time_in_a_row() {
    let dir = TempDir::new().unwrap();
    let mut repo = open_repo(&dir);

    assert!(repo.add_book(Book::new("Python Programming", "John Doe", "isbn-1")));
    assert!(repo.issue_book("isbn-1"));
    assert!(!repo.issue_book("isbn-1"));
}

#[test]
fn issue_fails_for_unknown_isbn() {
    let dir = TempDir::new().unwrap();
    let mut repo = open_repo(&dir);

    assert!(!repo.issue_book("missing"));
}

#[test]
fn return_restores_availability_after_issue() {
    let dir = TempDir::new().unwrap();
    let mut repo = open_repo(&dir);

    assert!(repo.add_book(Book::new("Python Programming", "John Doe", "isbn-1")));
    assert!(repo.issue_book("isbn-1"));
    assert!(repo.return_book("isbn-1"));

    let book = repo.find_by_isbn("isbn-1").unwrap();
    assert!(book.is_available());
}

#[test]
fn return_fails_when_book_was_not_issued() {
    let dir = TempDir::new().unwrap();
    let mut repo = open_repo(&dir);

    assert!(repo.add_book(Book::new("Python Programming", "John Doe", "isbn-1")));
    assert!(!repo.return_book("isbn-1"));
    assert!(!repo.return_book("missing"));
}

#[test]
fn statistics_counts_total_available_and_issued() {
    let dir = TempDir::new().unwrap();
    let mut repo = open_repo(&dir);

    assert!(repo.add_book(Book::new("Python Programming", "John Doe", "isbn-1")));
    assert!(repo.add_book(Book::new("Data Science", "John Smith", "isbn-2")));
    assert!(repo.issue_book("isbn-1"));

    assert_eq!(
        repo.statistics(),
        InventoryStats {
            total: 2,
            available: 1,
            issued: 1,
        }
    );
}

#[test]
fn statistics_are_recomputed_after_every_mutation() {
    let dir = TempDir::new().unwrap();
    let mut repo = open_repo(&dir);

    assert_eq!(
        repo.statistics(),
        InventoryStats {
            total: 0,
            available: 0,
            issued: 0,
        }
    );

    assert!(repo.add_book(Book::new("Python Programming", "John Doe", "isbn-1")));
    assert!(repo.issue_book("isbn-1"));
    assert!(repo.return_book("isbn-1"));

    assert_eq!(
        repo.statistics(),
        InventoryStats {
            total: 1,
            available: 1,
            issued: 0,
        }
    );
}
