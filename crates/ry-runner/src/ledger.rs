//! Wage accounting.

/// Sink for the wage a run charges at its terminal state.
pub trait Ledger {
    /// Charge `wage` units against the run named `run_name`.
    fn charge(&mut self, run_name: &str, wage: u32);
}

/// A [`Ledger`] that records every charge.
#[derive(Debug, Default)]
pub struct LedgerBook {
    entries: Vec<(String, u32)>,
}

impl LedgerBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[(String, u32)] {
        &self.entries
    }

    pub fn total(&self) -> u32 {
        self.entries.iter().map(|(_, w)| w).sum()
    }
}

impl Ledger for LedgerBook {
    fn charge(&mut self, run_name: &str, wage: u32) {
        self.entries.push((run_name.to_string(), wage));
    }
}
