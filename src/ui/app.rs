use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::models::{parse_read_answer, Book};
use crate::store::{BookCollection, SearchField};

use super::console::{Console, InputClosed, Tone};
use super::menu::MenuChoice;
use super::render::{listing_lines, match_lines};

const BANNER: &str = "\n\n📚 Welcome to Your Book Collection Manager! 📚\n";
const MENU_PROMPT: &str = "\nPlease choose an option (1-5): ";
const SEARCH_FIELD_PROMPT: &str = "\nSearch by:\n1. Title\n2. Author\n\nEnter your choice: ";
const GOODBYE: &str = "\nThank you for using Book Collection Manager. Goodbye!";

/// Whether the loop should show the menu again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Menu,
    Exit,
}

/// Interactive session: owns the collection and the console it talks through.
pub struct App<R, W> {
    collection: BookCollection,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(collection: BookCollection, console: Console<R, W>) -> Self {
        Self {
            collection,
            console,
        }
    }

    /// Hand back the collection and console once the session is over.
    pub fn into_parts(self) -> (BookCollection, Console<R, W>) {
        (self.collection, self.console)
    }

    /// Show the menu and dispatch choices until the user exits or input ends.
    /// The collection is saved once more on the way out. Storage failures
    /// abort the session.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.step() {
                Ok(Flow::Menu) => {}
                Ok(Flow::Exit) => break,
                Err(err) if err.is::<InputClosed>() => {
                    debug!("input closed, exiting");
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        self.collection
            .save()
            .context("failed to save book collection on exit")?;
        info!(count = self.collection.len(), "session finished");
        self.console.say(GOODBYE)
    }

    fn step(&mut self) -> Result<Flow> {
        self.show_menu()?;
        let answer = self.console.prompt(MENU_PROMPT)?;

        match MenuChoice::parse(&answer) {
            Some(MenuChoice::AddBook) => self.add_book()?,
            Some(MenuChoice::RemoveBook) => self.remove_book()?,
            Some(MenuChoice::SearchBooks) => self.search_books()?,
            Some(MenuChoice::ListBooks) => self.list_books()?,
            Some(MenuChoice::Exit) => return Ok(Flow::Exit),
            None => self
                .console
                .status(Tone::Problem, "Invalid choice. Please try again.\n")?,
        }
        Ok(Flow::Menu)
    }

    fn show_menu(&mut self) -> Result<()> {
        self.console.status(Tone::Heading, BANNER)?;
        for choice in MenuChoice::ALL {
            self.console
                .say(format_args!("{}. {}", choice.number(), choice.label()))?;
        }
        Ok(())
    }

    fn add_book(&mut self) -> Result<()> {
        let title = self.console.prompt("Enter book title: ")?;
        let author = self
            .console
            .prompt(&format!("Who is the author of {title}: "))?;
        let year = self.console.prompt("Enter publication year: ")?;
        let genre = self
            .console
            .prompt(&format!("What is the genre of {title}: "))?;
        let read = parse_read_answer(&self.console.prompt("Have you read this book? (yes/no): ")?);

        self.collection
            .add(Book::new(title, author, year, genre, read))
            .context("failed to save new book")?;
        self.console
            .status(Tone::Success, "\nBook added successfully. ✅\n")
    }

    fn remove_book(&mut self) -> Result<()> {
        let title = self
            .console
            .prompt("Enter the title of the book you want to remove: ")?;

        let removed = self
            .collection
            .remove(&title)
            .context("failed to save collection after removal")?;
        match removed {
            Some(book) => {
                debug!(title = %book.title, "removed book");
                self.console
                    .status(Tone::Success, "\nBook removed successfully!\n")
            }
            None => self.console.status(Tone::Notice, "\nBook not found!\n"),
        }
    }

    fn search_books(&mut self) -> Result<()> {
        let field = SearchField::from_choice(&self.console.prompt(SEARCH_FIELD_PROMPT)?);
        let query = self.console.prompt("Search here: ")?;

        let lines = match_lines(self.collection.search(&query, field));
        if lines.is_empty() {
            return self
                .console
                .status(Tone::Notice, "\nNo matching books found!\n");
        }

        self.console.status(Tone::Heading, "\nMatching books...\n")?;
        for line in lines {
            self.console.say(line)?;
        }
        Ok(())
    }

    fn list_books(&mut self) -> Result<()> {
        self.console.status(Tone::Heading, "\n<--Our Books-->\n")?;
        for line in listing_lines(&self.collection) {
            self.console.say(line)?;
        }
        Ok(())
    }
}
