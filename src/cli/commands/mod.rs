mod advisory;
mod ledger;
mod system;
mod views;

use super::registry::CommandEntry;

pub(crate) fn all_definitions() -> Vec<CommandEntry> {
    let mut entries = Vec::new();
    entries.extend(ledger::definitions());
    entries.extend(views::definitions());
    entries.extend(advisory::definitions());
    entries.extend(system::definitions());
    entries
}
