//! Rolodex CLI
//!
//! Command-line front end for the Rolodex address book.
//!
//! # Commands
//!
//! - `add` - Add a new contact
//! - `find` - Look up a contact by name
//! - `update` - Change a contact's phone and/or email
//! - `remove` - Delete a contact by name
//! - `list` - Print all contacts in name order
//!
//! Each invocation opens the table file, rebuilds the index, performs one
//! operation, and exits. Contact data lives in the table file between
//! invocations.

use clap::{Parser, Subcommand};
use rolodex_core::{Config, ContactBook, CoreError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Rolodex command-line address book.
#[derive(Parser)]
#[command(name = "rolodex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the contact table file
    #[arg(global = true, short, long, default_value = "contacts.json")]
    path: PathBuf,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new contact
    Add {
        /// Contact name (the unique key)
        name: String,

        /// Phone number
        phone: String,

        /// Email address
        email: String,
    },

    /// Look up a contact by name
    Find {
        /// Name to search for
        name: String,
    },

    /// Change a contact's phone and/or email
    Update {
        /// Name of the contact to update
        name: String,

        /// New phone number
        #[arg(long)]
        phone: Option<String>,

        /// New email address
        #[arg(long)]
        email: Option<String>,
    },

    /// Delete a contact by name
    Remove {
        /// Name of the contact to delete
        name: String,
    },

    /// Print all contacts in name order
    List,

    /// Show version information
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CoreError> {
    if matches!(cli.command, Commands::Version) {
        println!("rolodex v{}", env!("CARGO_PKG_VERSION"));
        println!("rolodex_core v{}", rolodex_core::VERSION);
        return Ok(());
    }

    let mut book = Config::new(&cli.path).open()?;

    match cli.command {
        Commands::Add { name, phone, email } => {
            book.insert(&name, &phone, &email)?;
            println!("Contact {name} added.");
        }
        Commands::Find { name } => {
            let contact = book.find(&name)?;
            println!("{contact}");
        }
        Commands::Update { name, phone, email } => {
            if phone.is_none() && email.is_none() {
                eprintln!("nothing to update: pass --phone and/or --email");
                return Ok(());
            }
            book.update(&name, phone.as_deref(), email.as_deref())?;
            println!("Contact {name} updated.");
        }
        Commands::Remove { name } => {
            book.remove(&name)?;
            println!("Contact {name} removed.");
        }
        Commands::List => print_listing(&book),
        // Handled before the book is opened.
        Commands::Version => {}
    }

    Ok(())
}

/// Renders the in-order listing as an aligned table.
fn print_listing(book: &ContactBook) {
    let contacts = book.contacts();
    if contacts.is_empty() {
        println!("No contacts to display.");
        return;
    }

    let name_width = contacts
        .iter()
        .map(|c| c.name.len())
        .chain(["Name".len()])
        .max()
        .unwrap_or(0);
    let phone_width = contacts
        .iter()
        .map(|c| c.phone.len())
        .chain(["Phone".len()])
        .max()
        .unwrap_or(0);

    println!("{:<name_width$}  {:<phone_width$}  Email", "Name", "Phone");
    for contact in contacts {
        println!(
            "{:<name_width$}  {:<phone_width$}  {}",
            contact.name, contact.phone, contact.email
        );
    }
}
