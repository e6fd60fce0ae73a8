//! Discards responses that arrive after a newer request for the same slot.

/// Independent request streams of the interactive UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestSlot {
    List,
    Detail,
}

/// Tag attached to an in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    slot: RequestSlot,
    seq: u64,
}

impl Ticket {
    pub fn slot(&self) -> RequestSlot {
        self.slot
    }
}

#[derive(Debug, Default)]
pub struct RequestSequencer {
    list: u64,
    detail: u64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    fn counter(&mut self, slot: RequestSlot) -> &mut u64 {
        match slot {
            RequestSlot::List => &mut self.list,
            RequestSlot::Detail => &mut self.detail,
        }
    }

    fn latest(&self, slot: RequestSlot) -> u64 {
        match slot {
            RequestSlot::List => self.list,
            RequestSlot::Detail => self.detail,
        }
    }

    /// Issues a new ticket, making every earlier ticket of `slot` stale.
    pub fn issue(&mut self, slot: RequestSlot) -> Ticket {
        let counter = self.counter(slot);
        *counter += 1;
        Ticket {
            slot,
            seq: *counter,
        }
    }

    /// Makes all outstanding tickets of `slot` stale without issuing a new one.
    pub fn invalidate(&mut self, slot: RequestSlot) {
        *self.counter(slot) += 1;
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.seq == self.latest(ticket.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let mut sequencer = RequestSequencer::new();
        let first = sequencer.issue(RequestSlot::List);
        let second = sequencer.issue(RequestSlot::List);
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }

    #[test]
    fn test_slots_are_independent() {
        let mut sequencer = RequestSequencer::new();
        let list = sequencer.issue(RequestSlot::List);
        let detail = sequencer.issue(RequestSlot::Detail);
        sequencer.issue(RequestSlot::Detail);
        assert!(sequencer.is_current(list));
        assert!(!sequencer.is_current(detail));
        assert_eq!(list.slot(), RequestSlot::List);
    }

    #[test]
    fn test_invalidate() {
        let mut sequencer = RequestSequencer::new();
        let detail = sequencer.issue(RequestSlot::Detail);
        sequencer.invalidate(RequestSlot::Detail);
        assert!(!sequencer.is_current(detail));
        let next = sequencer.issue(RequestSlot::Detail);
        assert!(sequencer.is_current(next));
    }
}
