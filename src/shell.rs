//! Line-oriented command language for the bundled binary.
//!
//! Each input line is one command. Most commands map directly to an
//! [`Event`]; a few control the shell itself.
//!
//! | Command               | Effect                                   |
//! |-----------------------|------------------------------------------|
//! | `category <key>`      | select a category (`all`, `web`, `tech`) |
//! | `subcategory <name>`  | select a subcategory (`All` clears)      |
//! | `search [text]`       | replace the search query                 |
//! | `type <char>`         | append one character to the query        |
//! | `backspace`, `clear`  | edit the query                           |
//! | `page <n>`, `next-page`, `prev-page` | paginate                  |
//! | `view`                | toggle grid/list                         |
//! | `open <id>`, `close`  | open or close the detail view            |
//! | `next`, `prev`, `jump <i>`, `zoom` | gallery navigation          |
//! | `key <name>`          | press ArrowLeft, ArrowRight or Escape    |
//! | `loaded [src]`, `failed [src]` | report an image load result     |
//! | `show`, `help`, `quit`| shell control                            |
//!
//! Blank lines and lines starting with `#` are ignored.

use crate::app::{Event, Key};
use crate::domain::error::{CatalogError, Result};
use crate::domain::{Category, EntryId};

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Feed an event to the handler.
    Event(Event),
    /// Print the current view model.
    Show,
    Help,
    Quit,
}

/// Usage text printed by `help`.
pub const HELP: &str = "\
commands:
  category <key>        all, web, tech, design, pm, education, demo, va, content, prof, commercial, industrial
  subcategory <name>    select a subcategory, `All` clears it
  search [text]         replace the search query
  type <char>           append a character to the search query
  backspace | clear     edit the search query
  page <n> | next-page | prev-page
  view                  toggle grid/list
  open <id> | close
  next | prev | jump <index> | zoom
  key <ArrowLeft|ArrowRight|Escape>
  loaded [src] | failed [src]
  show | help | quit";

/// Parses one input line.
///
/// Returns `Ok(None)` for blank lines and comments.
///
/// # Errors
///
/// Returns [`CatalogError::Command`] for unknown commands and missing or
/// malformed arguments.
///
/// # Examples
///
/// ```
/// use folio_catalog::shell::{parse_command, Command};
/// use folio_catalog::{Category, Event};
///
/// assert_eq!(
///     parse_command("category tech").unwrap(),
///     Some(Command::Event(Event::SetCategory(Category::Technical)))
/// );
/// assert_eq!(parse_command("  # comment").unwrap(), None);
/// assert!(parse_command("fly away").is_err());
/// ```
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (name, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(name, rest)| (name, rest.trim()));

    let event = match name.to_ascii_lowercase().as_str() {
        "category" => Event::SetCategory(Category::from_key(required(name, rest)?)),
        "subcategory" => Event::SetSubcategory(required(name, rest)?.to_string()),
        "search" => Event::SetSearchQuery(rest.to_string()),
        "type" => {
            let mut chars = required(name, rest)?.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Event::SearchChar(c),
                _ => return Err(usage(name, "expects a single character")),
            }
        }
        "backspace" => Event::Backspace,
        "clear" => Event::ClearSearch,
        "page" => Event::SetPage(number(name, rest)?),
        "next-page" => Event::NextPage,
        "prev-page" => Event::PreviousPage,
        "view" => Event::ToggleViewMode,
        "open" => Event::OpenDetail(EntryId::parse(required(name, rest)?)),
        "close" => Event::CloseDetail,
        "next" => Event::NextImage,
        "prev" => Event::PreviousImage,
        "jump" => Event::JumpTo(number(name, rest)?),
        "zoom" => Event::ToggleZoom,
        "key" => Event::Key(
            required(name, rest)?
                .parse::<Key>()
                .map_err(|e| CatalogError::Command(e.to_string()))?,
        ),
        "loaded" => Event::ImageLoaded { src: optional(rest) },
        "failed" => Event::ImageFailed { src: optional(rest) },
        "show" => return Ok(Some(Command::Show)),
        "help" => return Ok(Some(Command::Help)),
        "quit" | "exit" => return Ok(Some(Command::Quit)),
        _ => return Err(CatalogError::Command(line.to_string())),
    };

    Ok(Some(Command::Event(event)))
}

fn required<'a>(name: &str, rest: &'a str) -> Result<&'a str> {
    if rest.is_empty() {
        Err(usage(name, "needs an argument"))
    } else {
        Ok(rest)
    }
}

fn optional(rest: &str) -> Option<String> {
    (!rest.is_empty()).then(|| rest.to_string())
}

fn number(name: &str, rest: &str) -> Result<usize> {
    required(name, rest)?
        .parse()
        .map_err(|_| usage(name, "expects a non-negative number"))
}

fn usage(name: &str, problem: &str) -> CatalogError {
    CatalogError::Command(format!("`{name}` {problem}"))
}
