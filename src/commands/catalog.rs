//! Catalog command implementation

use crate::error::Result;
use crate::ui::display;

/// Run catalog command
pub fn run() -> Result<()> {
    display::print_catalog();
    Ok(())
}
