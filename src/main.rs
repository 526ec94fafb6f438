//! Contact Book - demo entry point
//!
//! Builds a small address book, reports rejected input, and prints the book
//! page by page as JSON.

use anyhow::Result;
use contact_book::{AddressBook, Birthday, Config, Phone, Record};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logging goes to stderr; stdout carries the JSON pages.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Page size: {}", config.page_size);

    let mut book = AddressBook::new().with_page_size(config.page_size);

    let mut john = Record::new("John").with_phone(Phone::new("+38-050-123-456")?);
    john.add_phone(Phone::new("+38-067-765-432")?);
    john.set_birthday(Some("1990-05-20"))?;
    book.add_record(john);

    let jane = Record::new("Jane")
        .with_phone(Phone::new("+44-207-946-018")?)
        .with_birthday(Birthday::new("1985-12-01")?);
    book.add_record(jane);

    for (name, phone) in [("Bill", "+11-111-111-111"), ("Ann", "11-111-111-111")] {
        match Phone::new(phone) {
            Ok(phone) => {
                book.add_record(Record::new(name).with_phone(phone));
            }
            Err(e) => warn!(name = %name, "Skipping contact: {}", e),
        }
    }

    if let Some(jane) = book.find_mut("Jane") {
        if let Err(e) = jane.set_birthday(Some("1985-02-30")) {
            warn!("Birthday not changed: {}", e);
        }
    }

    for (number, page) in book.iterator().enumerate() {
        info!(page = number + 1, records = page.len(), "Page");
        for record in &page {
            match record.days_to_birthday() {
                Some(days) => info!("{} (birthday in {} days)", record, days),
                None => info!("{}", record),
            }
        }
        println!("{}", serde_json::to_string(&page)?);
    }

    Ok(())
}
