//! Summary metrics command

use anyhow::Result;
use chrono::Local;

use super::common::{open_registry, print_json};
use crate::cli::DbOpts;

/// Handle the summary command
pub fn handle_summary(db: &DbOpts, json: bool) -> Result<()> {
    let store = open_registry(db)?;
    let summary = store.registration_summary(Local::now().date_naive())?;

    if json {
        return print_json(&summary);
    }

    println!("Total players: {}", summary.total_players);
    println!("Total fees collected: ${:.2}", summary.total_fees);
    match summary.average_age {
        Some(age) => println!("Average age: {:.0} years", age),
        None => println!("Average age: n/a"),
    }
    Ok(())
}
