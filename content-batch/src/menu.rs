//! Interactive main menu: pick a create or purge run, repeat until quit.

use content_batch_core::batch::banner;
use content_batch_core::content::{ContentKind, PurgeKind};
use content_batch_core::contract::{ContentApi, Operator};

use crate::cli::{create, purge};
use crate::operator::TerminalOperator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create(ContentKind),
    Purge(PurgeKind),
    Quit,
}

const OPTIONS: &[(&str, &str)] = &[
    ("1", "Create universities"),
    ("2", "Create casts"),
    ("3", "Create articles"),
    ("4", "Purge casts"),
    ("5", "Purge articles"),
    ("6", "Purge users"),
    ("7", "Purge universities"),
    ("Q", "Quit"),
];

/// Maps a typed answer to a menu entry. Case and surrounding whitespace are ignored.
pub fn parse_choice(answer: &str) -> Option<MenuChoice> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "1" => Some(MenuChoice::Create(ContentKind::University)),
        "2" => Some(MenuChoice::Create(ContentKind::Cast)),
        "3" => Some(MenuChoice::Create(ContentKind::Article)),
        "4" => Some(MenuChoice::Purge(PurgeKind::Cast)),
        "5" => Some(MenuChoice::Purge(PurgeKind::Article)),
        "6" => Some(MenuChoice::Purge(PurgeKind::User)),
        "7" => Some(MenuChoice::Purge(PurgeKind::University)),
        "q" => Some(MenuChoice::Quit),
        _ => None,
    }
}

pub async fn run_menu<A>(api: &A, operator: &TerminalOperator)
where
    A: ContentApi + ?Sized,
{
    loop {
        operator.show(&banner("MAIN MENU"));
        operator.show("Please select what you would like to do:\n");
        for (key, label) in OPTIONS {
            operator.show(&format!("  {key}) {label}"));
        }

        let answer = operator.prompt_text("\nEnter your choice: ");
        if answer.trim().is_empty() && operator.input_closed() {
            tracing::info!("Input closed, leaving menu");
            break;
        }

        match parse_choice(&answer) {
            Some(MenuChoice::Create(kind)) => create(kind, api, operator).await,
            Some(MenuChoice::Purge(kind)) => purge(kind, api, operator).await,
            Some(MenuChoice::Quit) => {
                operator.show("\nExiting...");
                break;
            }
            None => operator.show("\nInvalid choice. Please try again.\n"),
        }
    }
}
