//! Status command implementation.

use crate::cli::commands::Target;
use crate::error::Result;
use crate::sync::{get_status, print_status};

/// Show which params each store has names for.
///
/// # Errors
///
/// Returns an error if the roots are invalid or a store cannot be read.
pub fn execute(target: Target<'_>, json: bool) -> Result<()> {
    let (roots, games) = target.resolve()?;
    let statuses = get_status(&roots, &games)?;

    if json {
        let output = serde_json::json!({
            "smithbox": roots.smithbox.display().to_string(),
            "paramdex": roots.paramdex.display().to_string(),
            "games": statuses,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("Smithbox: {}", roots.smithbox.display());
        println!("Paramdex: {}", roots.paramdex.display());
        println!();
        print_status(&statuses);
    }

    Ok(())
}
