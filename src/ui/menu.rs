/// Top-level menu entries. Each operation returns to the menu when done;
/// `Exit` ends the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    RemoveBook,
    SearchBooks,
    ListBooks,
    Exit,
}

impl MenuChoice {
    /// Every entry in display order.
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::AddBook,
        MenuChoice::RemoveBook,
        MenuChoice::SearchBooks,
        MenuChoice::ListBooks,
        MenuChoice::Exit,
    ];

    /// Parse the number typed at the menu prompt. Anything else is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::AddBook),
            "2" => Some(MenuChoice::RemoveBook),
            "3" => Some(MenuChoice::SearchBooks),
            "4" => Some(MenuChoice::ListBooks),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            MenuChoice::AddBook => 1,
            MenuChoice::RemoveBook => 2,
            MenuChoice::SearchBooks => 3,
            MenuChoice::ListBooks => 4,
            MenuChoice::Exit => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddBook => "Add a new book",
            MenuChoice::RemoveBook => "Remove a book",
            MenuChoice::SearchBooks => "Search for books",
            MenuChoice::ListBooks => "View all books",
            MenuChoice::Exit => "Exit",
        }
    }
}
