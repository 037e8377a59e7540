use bookledger_core::{Book, BookStatus};

#[test]
fn new_book_starts_available() {
    let book = Book::new("Test Book", "Test Author", "1234567890");

    assert_eq!(book.title, "Test Book");
    assert_eq!(book.author, "Test Author");
    assert_eq!(book.isbn, "1234567890");
    assert_eq!(book.status, BookStatus::Available);
    assert!(book.is_available());
}

#[test]
fn issue_flips_available_to_issued() {
    let mut book = Book::new("Test Book", "Test Author", "1234567890");

    assert!(book.issue());
    assert_eq!(book.status, BookStatus::Issued);
    assert!(!book.is_available());
}

#[test]
fn issue_fails_when_already_issued() {
    let mut book = Book::new("Test Book", "Test Author", "1234567890");

    assert!(book.issue());
    assert!(!book.issue());
    assert_eq!(book.status, BookStatus::Issued);
}

#[test]
fn return_item_is_the_inverse_of_issue() {
    let mut book = Book::new("Test Book", "Test Author", "1234567890");

    assert!(book.issue());
    assert!(book.return_item());
    assert!(book.is_available());
}

#[test]
fn return_item_fails_when_not_issued() {
    let mut book = Book::new("Test Book", "Test Author", "1234567890");

    assert!(!book.return_item());
    assert_eq!(book.status, BookStatus::Available);
}

#[test]
fn display_renders_single_line_summary() {
    let mut book = Book::new("Test Book", "Test Author", "1234567890");
    assert_eq!(
        book.to_string(),
        "Title: Test Book | Author: Test Author | ISBN: 1234567890 | Status: available"
    );

    book.issue();
    assert_eq!(
        book.to_string(),
        "Title: Test Book | Author: Test Author | ISBN: 1234567890 | Status: issued"
    );
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let book = Book::new("Test Book", "Test Author", "1234567890");

    let json = serde_json::to_value(&book).unwrap();
    assert_eq!(json["title"], "Test Book");
    assert_eq!(json["author"], "Test Author");
    assert_eq!(json["isbn"], "1234567890");
    assert_eq!(json["status"], "available");
    assert_eq!(json.as_object().unwrap().len(), 4);

    let decoded: Book = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, book);
}

#[test]
fn issued_status_round_trips_through_serde() {
    let mut book = Book::new("Test Book", "Test Author", "1234567890");
    book.issue();

    let json = serde_json::to_value(&book).unwrap();
    assert_eq!(json["status"], "issued");

    let decoded: Book = serde_json::from_value(json).unwrap();
    assert!(!decoded.is_available());
    assert_eq!(decoded, book);
}
