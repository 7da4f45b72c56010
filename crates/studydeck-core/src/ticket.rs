use thiserror::Error;

/// Marker handed out when async work starts; compared against the owning
/// [`Generation`] when the work completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("stale response at stage={stage} (ticket {ticket}, current #{current})")]
pub struct StaleTicket {
    pub stage: &'static str,
    pub ticket: Ticket,
    pub current: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Generation {
    current: u64,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate every outstanding ticket and hand out a new one.
    pub fn advance(&mut self) -> Ticket {
        self.current = self.current.wrapping_add(1);
        Ticket(self.current)
    }

    /// Invalidate outstanding tickets without starting new work.
    pub fn invalidate(&mut self) {
        self.current = self.current.wrapping_add(1);
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.current
    }

    pub fn check_current(&self, ticket: Ticket, stage: &'static str) -> Result<(), StaleTicket> {
        if self.is_current(ticket) {
            Ok(())
        } else {
            Err(StaleTicket {
                stage,
                ticket,
                current: self.current,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Generation;

    #[test]
    fn advancing_invalidates_previous_tickets() {
        let mut generation = Generation::new();
        let first = generation.advance();
        let second = generation.advance();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));

        let err = generation.check_current(first, "load").unwrap_err();
        assert_eq!(err.stage, "load");
        assert_eq!(err.current, second.value());
    }

    #[test]
    fn invalidate_leaves_no_current_ticket() {
        let mut generation = Generation::new();
        let ticket = generation.advance();
        generation.invalidate();
        assert!(generation.check_current(ticket, "submit").is_err());
    }
}
