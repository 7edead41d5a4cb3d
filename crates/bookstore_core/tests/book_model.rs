use bookstore_core::Book;

#[test]
fn book_constructs_with_all_fields() {
    let book = Book::new(1, "Test Book", "Test Author");

    assert_eq!(book.id, 1);
    assert_eq!(book.title, "Test Book");
    assert_eq!(book.author_name, "Test Author");
}

#[test]
fn books_format_nicely() {
    let book = Book::new(1, "Test Book", "Test Author");

    assert_eq!(book.to_string(), "Book(1, Test Book, Test Author)");
}

#[test]
fn identical_books_are_equal() {
    let book = Book::new(1, "Test Book", "Test Author");
    let book_2 = Book::new(1, "Test Book", "Test Author");

    assert_eq!(book, book_2);
}

#[test]
fn books_differing_in_any_field_are_unequal() {
    let book = Book::new(1, "Test Book", "Test Author");

    assert_ne!(book, Book::new(2, "Test Book", "Test Author"));
    assert_ne!(book, Book::new(1, "Other Book", "Test Author"));
    assert_ne!(book, Book::new(1, "Test Book", "Other Author"));
}

#[test]
fn book_serialization_uses_column_field_names() {
    let book = Book::new(3, "Emma", "Jane Austen");

    let json = serde_json::to_value(&book).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["title"], "Emma");
    assert_eq!(json["author_name"], "Jane Austen");

    let decoded: Book = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, book);
}
