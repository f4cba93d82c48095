//! Terminal display mount: one statistics block per gallery card.

use planimeter_core::{CardHandle, DisplayMount, format_area};

/// Prints cards to stdout in dequeue order.
#[derive(Debug, Default)]
pub struct TerminalMount {
    appended: usize,
}

impl TerminalMount {
    fn print_statistics(card: &CardHandle) {
        let latest = card.latest().map_or_else(|| "-".to_string(), format_area);
        let mean = card.mean().map_or_else(|| "-".to_string(), format_area);
        println!("{}", card.name());
        println!("  No. of calculations: {}", card.count());
        println!("  Latest result:       {latest}");
        println!("  Mean area:           {mean}");
    }
}

impl DisplayMount for TerminalMount {
    fn append(&mut self, card: &CardHandle) {
        self.appended += 1;
        println!("[{}] {} ... loading", self.appended, card.name());
    }

    fn refresh(&mut self, card: &CardHandle) {
        Self::print_statistics(card);
    }
}
