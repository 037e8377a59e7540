//! Interactive menu shell over the BookLedger inventory engine.
//!
//! # Responsibility
//! - Prompt for and validate user input before it reaches the core crate.
//! - Render repository outcomes as formatted terminal text.
//!
//! # Invariants
//! - All business decisions stay inside `bookledger_core`.
//! - Invalid input re-prompts; it never aborts the session.
//! - Only an unrecoverable startup fault exits with a non-zero status.

use bookledger_core::{
    core_version, default_log_level, init_logging, Book, BookRepository, InventoryService,
    JsonCatalogRepository,
};
use std::io::{self, BufRead, Write};

const DEFAULT_CATALOG_FILE: &str = "library_catalog.json";
const MENU_WIDTH: usize = 60;

fn main() {
    if let Err(err) = bootstrap_logging() {
        eprintln!("bookledger: failed to initialize logging: {err}");
        std::process::exit(1);
    }

    let catalog_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CATALOG_FILE.to_string());

    let repo = JsonCatalogRepository::open(catalog_path.as_str());

    clear_screen();
    print_header();
    println!("Catalog file: {}", repo.catalog_path().display());

    let mut service = InventoryService::new(repo);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_menu_loop(&mut service, &mut input);
}

fn bootstrap_logging() -> Result<(), String> {
    let log_dir = std::env::current_dir()
        .map_err(|err| format!("cannot resolve working directory: {err}"))?
        .join("logs");
    let log_dir = log_dir
        .to_str()
        .ok_or_else(|| "log directory path is not valid UTF-8".to_string())?;
    init_logging(default_log_level(), log_dir)
}

fn run_menu_loop<R: BookRepository>(service: &mut InventoryService<R>, input: &mut impl BufRead) {
    loop {
        print_menu();
        let Some(choice) = read_menu_choice(input) else {
            // EOF on stdin ends the session cleanly.
            break;
        };

        match choice {
            1 => add_book(service, input),
            2 => issue_book(service, input),
            3 => return_book(service, input),
            4 => list_all(service),
            5 => search_by_title(service, input),
            6 => search_by_isbn(service, input),
            7 => search_by_author(service, input),
            8 => show_statistics(service),
            9 => {
                println!("\nGoodbye!");
                break;
            }
            _ => unreachable!("read_menu_choice only returns 1-9"),
        }
    }
}

fn add_book<R: BookRepository>(service: &mut InventoryService<R>, input: &mut impl BufRead) {
    print_section("ADD NEW BOOK");

    let Some(title) = prompt_required(input, "Enter book title: ") else {
        return;
    };
    let Some(author) = prompt_required(input, "Enter author name: ") else {
        return;
    };
    let Some(isbn) = prompt_required(input, "Enter ISBN: ") else {
        return;
    };

    if service.add_book(title.clone(), author, isbn.clone()) {
        println!("\nBook '{title}' added successfully!");
    } else {
        println!("\nCould not add '{title}': ISBN {isbn} already exists or the catalog could not be saved.");
    }
}

fn issue_book<R: BookRepository>(service: &mut InventoryService<R>, input: &mut impl BufRead) {
    print_section("ISSUE BOOK");

    let Some(isbn) = prompt_required(input, "Enter ISBN of the book to issue: ") else {
        return;
    };

    if service.issue_book(&isbn) {
        println!("\nBook with ISBN {isbn} issued successfully!");
    } else {
        println!("\nBook with ISBN {isbn} could not be issued (not found or already issued).");
    }
}

fn return_book<R: BookRepository>(service: &mut InventoryService<R>, input: &mut impl BufRead) {
    print_section("RETURN BOOK");

    let Some(isbn) = prompt_required(input, "Enter ISBN of the book to return: ") else {
        return;
    };

    if service.return_book(&isbn) {
        println!("\nBook with ISBN {isbn} returned successfully!");
    } else {
        println!("\nBook with ISBN {isbn} could not be returned (not found or not issued).");
    }
}

fn list_all<R: BookRepository>(service: &InventoryService<R>) {
    print_section("ALL BOOKS");

    let books = service.list_all();
    if books.is_empty() {
        println!("The catalog is empty.");
        return;
    }
    for book in books {
        println!("{book}");
    }
    println!("\n{} book(s) in the catalog.", books.len());
}

fn search_by_title<R: BookRepository>(service: &InventoryService<R>, input: &mut impl BufRead) {
    print_section("SEARCH BY TITLE");

    let Some(query) = prompt_required(input, "Enter title to search: ") else {
        return;
    };
    render_matches(&service.search_by_title(&query));
}

fn search_by_isbn<R: BookRepository>(service: &InventoryService<R>, input: &mut impl BufRead) {
    print_section("SEARCH BY ISBN");

    let Some(isbn) = prompt_required(input, "Enter ISBN to search: ") else {
        return;
    };

    match service.find_by_isbn(&isbn) {
        Some(book) => println!("\n{book}"),
        None => println!("\nNo book found with ISBN {isbn}."),
    }
}

fn search_by_author<R: BookRepository>(service: &InventoryService<R>, input: &mut impl BufRead) {
    print_section("SEARCH BY AUTHOR");

    let Some(query) = prompt_required(input, "Enter author to search: ") else {
        return;
    };
    render_matches(&service.search_by_author(&query));
}

fn show_statistics<R: BookRepository>(service: &InventoryService<R>) {
    print_section("STATISTICS");

    let stats = service.statistics();
    println!("Total books:     {}", stats.total);
    println!("Available books: {}", stats.available);
    println!("Issued books:    {}", stats.issued);
}

fn render_matches(books: &[&Book]) {
    if books.is_empty() {
        println!("\nNo matching books found.");
        return;
    }
    println!();
    for book in books {
        println!("{book}");
    }
    println!("\n{} match(es) found.", books.len());
}

fn read_menu_choice(input: &mut impl BufRead) -> Option<u32> {
    loop {
        print!("Enter your choice (1-9): ");
        flush_stdout();

        let line = read_line(input)?;
        match line.parse::<u32>() {
            Ok(choice @ 1..=9) => return Some(choice),
            _ => println!("Invalid choice. Enter a number between 1 and 9."),
        }
    }
}

fn prompt_required(input: &mut impl BufRead, prompt: &str) -> Option<String> {
    loop {
        print!("{prompt}");
        flush_stdout();

        let line = read_line(input)?;
        if line.is_empty() {
            println!("Input cannot be empty. Please try again.");
            continue;
        }
        return Some(line);
    }
}

/// Reads one line from stdin, trimmed. `None` means end of input.
fn read_line(input: &mut impl BufRead) -> Option<String> {
    let mut buffer = String::new();
    match input.read_line(&mut buffer) {
        Ok(0) => None,
        Ok(_) => Some(buffer.trim().to_string()),
        Err(_) => None,
    }
}

fn flush_stdout() {
    let _ = io::stdout().flush();
}

fn clear_screen() {
    // ANSI clear + cursor home; harmless on terminals without support.
    print!("\x1b[2J\x1b[1;1H");
    flush_stdout();
}

fn print_header() {
    println!("{}", "=".repeat(MENU_WIDTH));
    println!("{:^MENU_WIDTH$}", "LIBRARY INVENTORY MANAGER");
    println!("{:^MENU_WIDTH$}", format!("bookledger v{}", core_version()));
    println!("{}", "=".repeat(MENU_WIDTH));
}

fn print_section(title: &str) {
    println!("\n{}", "-".repeat(MENU_WIDTH));
    println!("{title}");
    println!("{}", "-".repeat(MENU_WIDTH));
}

fn print_menu() {
    println!("\n{}", "-".repeat(MENU_WIDTH));
    println!("MAIN MENU");
    println!("{}", "-".repeat(MENU_WIDTH));
    println!("1. Add New Book");
    println!("2. Issue Book");
    println!("3. Return Book");
    println!("4. View All Books");
    println!("5. Search Book by Title");
    println!("6. Search Book by ISBN");
    println!("7. Search Book by Author");
    println!("8. View Statistics");
    println!("9. Exit");
    println!("{}", "-".repeat(MENU_WIDTH));
}
