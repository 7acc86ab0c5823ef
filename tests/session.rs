use std::fs;
use std::io::Cursor;
use std::path::Path;

use book_collection_manager::{App, Book, BookCollection, Config, Console};

/// Run a whole session against `storage` with `input` as the typed lines and
/// return the collection afterwards plus everything printed.
fn run_session(storage: &Path, input: &str) -> (BookCollection, String) {
    let collection = BookCollection::open(&Config::with_storage_path(storage)).unwrap();
    let console = Console::new(Cursor::new(input.to_owned()), Vec::new());
    let mut app = App::new(collection, console);
    app.run().unwrap();

    let (collection, console) = app.into_parts();
    let output = String::from_utf8(console.into_output()).unwrap();
    (collection, output)
}

fn storage_in(dir: &tempfile::TempDir) -> std::path::PathBuf {
    dir.path().join("data.json")
}

#[test]
fn add_then_search_reports_one_detailed_match() {
    let dir = tempfile::tempdir().unwrap();
    let input = "1\nDune\nFrank Herbert\n1965\nSci-Fi\nYES\n3\n1\ndun\n5\n";
    let (collection, output) = run_session(&storage_in(&dir), input);

    assert_eq!(
        collection.books(),
        [Book::new("Dune", "Frank Herbert", "1965", "Sci-Fi", true)]
    );
    assert!(output.contains("Who is the author of Dune: "));
    assert!(output.contains("Book added successfully. ✅"));
    assert!(output.contains("Matching books..."));
    assert!(output.contains("1. Dune by Frank Herbert (1965) - Sci-Fi - Read\n"));
    assert!(output.ends_with("Thank you for using Book Collection Manager. Goodbye!\n"));
}

#[test]
fn listing_is_abbreviated_and_repeatable() {
    let dir = tempfile::tempdir().unwrap();
    let path = storage_in(&dir);
    let input = "1\nDune\nFrank Herbert\n1965\nSci-Fi\nno\n\
                 1\nEmma\nJane Austen\n1815\nNovel\nyes\n4\n4\n5\n";
    let (_, output) = run_session(&path, input);

    let listing = "\n<--Our Books-->\n\n1. Dune by Frank Herbert (1965)\n2. Emma by Jane Austen (1815)\n";
    assert_eq!(output.matches(listing).count(), 2);
    assert!(!output.contains("Sci-Fi"));
}

#[test]
fn empty_store_lists_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = storage_in(&dir);
    let (collection, output) = run_session(&path, "4\n5\n");

    assert!(collection.is_empty());
    assert!(output.contains("<--Our Books-->\n\n\n\n📚"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn search_without_matches_is_distinct_from_empty_listing() {
    let dir = tempfile::tempdir().unwrap();
    let input = "1\nDune\nFrank Herbert\n1965\nSci-Fi\nno\n3\n2\ntolkien\n5\n";
    let (_, output) = run_session(&storage_in(&dir), input);

    assert!(output.contains("No matching books found!"));
    assert!(!output.contains("Matching books..."));
}

#[test]
fn remove_matches_title_ignoring_case() {
    let dir = tempfile::tempdir().unwrap();
    let path = storage_in(&dir);
    run_session(&path, "1\nFoo\nA\n2000\nx\nno\n1\nFoo\nB\n2001\ny\nno\n5\n");

    let (collection, output) = run_session(&path, "2\nfoo\n2\nFOO\n5\n");
    assert!(collection.is_empty());
    assert_eq!(output.matches("Book removed successfully!").count(), 2);
}

#[test]
fn remove_missing_title_reports_not_found_and_keeps_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = storage_in(&dir);
    run_session(&path, "1\nFoo\nA\n2000\nx\nno\n5\n");
    let before = fs::read(&path).unwrap();

    let collection = BookCollection::open(&Config::with_storage_path(&path)).unwrap();
    let console = Console::new(Cursor::new("2\nBar\n".to_owned()), Vec::new());
    let mut app = App::new(collection, console);
    app.run().unwrap();

    let (collection, console) = app.into_parts();
    let output = String::from_utf8(console.into_output()).unwrap();
    assert!(output.contains("Book not found!"));
    assert_eq!(collection.len(), 1);
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn invalid_choice_is_reported_without_side_effects() {
    let dir = tempfile::tempdir().unwrap();
    let path = storage_in(&dir);
    let (collection, output) = run_session(&path, "9\nhello\n5\n");

    assert_eq!(output.matches("Invalid choice. Please try again.").count(), 2);
    assert_eq!(output.matches("Please choose an option (1-5): ").count(), 3);
    assert!(collection.is_empty());
}

#[test]
fn end_of_input_mid_prompt_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let path = storage_in(&dir);
    let (collection, output) = run_session(&path, "1\nHalf a Book\n");

    assert!(collection.is_empty());
    assert!(output.ends_with("Goodbye!\n"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn corrupt_storage_starts_empty_and_is_overwritten_on_exit() {
    let dir = tempfile::tempdir().unwrap();
    let path = storage_in(&dir);
    fs::write(&path, "definitely not json").unwrap();

    let (collection, output) = run_session(&path, "5\n");
    assert!(collection.is_empty());
    assert!(!output.contains("json"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn failed_save_aborts_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blocked").join("data.json");
    let collection = BookCollection::open(&Config::with_storage_path(&path)).unwrap();
    // A plain file where the storage directory should be makes every save fail.
    fs::write(dir.path().join("blocked"), "not a directory").unwrap();

    let console = Console::new(
        Cursor::new("1\nDune\nFrank Herbert\n1965\nSci-Fi\nno\n5\n".to_owned()),
        Vec::new(),
    );
    let mut app = App::new(collection, console);
    let err = app.run().unwrap_err();
    assert!(format!("{err:#}").contains("failed to save new book"));
}

#[test]
fn numeric_year_in_existing_file_is_kept_on_exit() {
    let dir = tempfile::tempdir().unwrap();
    let path = storage_in(&dir);
    fs::write(
        &path,
        r#"[{"title":"Dune","author":"Frank Herbert","year":"1965","genre":"Sci-Fi","read":true},{"title":"Emma","author":"Jane Austen","year":1815,"genre":"Novel","read":false}]"#,
    )
    .unwrap();

    let (collection, _) = run_session(&path, "5\n");
    assert_eq!(collection.len(), 2);

    let reopened = BookCollection::open(&Config::with_storage_path(&path)).unwrap();
    assert_eq!(
        reopened.books(),
        [
            Book::new("Dune", "Frank Herbert", "1965", "Sci-Fi", true),
            Book::new("Emma", "Jane Austen", "1815", "Novel", false),
        ]
    );
}
