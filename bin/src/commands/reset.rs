//! Reset command implementation.

use crate::display::open_store;
use anyhow::Result;
use eurofx_lib::prelude::*;
use inquire::Confirm;
use std::path::PathBuf;
use tracing::info;

/// Delete every stored rate set after confirmation.
pub(crate) fn reset(database: Option<PathBuf>, yes: bool) -> Result<()> {
    let store = open_store(database)?;
    let count = store.count()?;

    if count == 0 {
        println!("Database is already empty.");
        return Ok(());
    }

    if !yes {
        let confirmed = Confirm::new(&format!("Delete all {count} stored rate sets?"))
            .with_default(false)
            .prompt()?;
        if !confirmed {
            println!("Reset cancelled.");
            return Ok(());
        }
    }

    store.clear()?;
    info!(deleted = count, "database reset");
    println!("Deleted {count} rate sets.");
    Ok(())
}
