//! Deferred view loading bookkeeping.
//!
//! Every load gets a fresh generation. Only the most recent ticket can settle;
//! completions carrying any other generation are stale and get dropped.

use super::route::ViewId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub view: ViewId,
    pub generation: u64,
}

#[derive(Debug, Default)]
pub struct DeferredViewLoader {
    generation: u64,
    in_flight: Option<LoadTicket>,
}

impl DeferredViewLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bumps the generation without starting a load. Used for mounts that
    /// need no content, so older completions still turn stale.
    pub fn supersede(&mut self) -> u64 {
        self.generation += 1;
        self.in_flight = None;
        self.generation
    }

    pub fn begin(&mut self, view: ViewId) -> LoadTicket {
        let generation = self.supersede();
        let ticket = LoadTicket { view, generation };
        self.in_flight = Some(ticket);
        ticket
    }

    pub fn settle(&mut self, generation: u64) -> Option<LoadTicket> {
        match self.in_flight {
            Some(ticket) if ticket.generation == generation => self.in_flight.take(),
            _ => None,
        }
    }

    pub fn cancel(&mut self) -> Option<LoadTicket> {
        self.in_flight.take()
    }

    pub fn in_flight(&self) -> Option<LoadTicket> {
        self.in_flight
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/loader.rs"]
mod tests;
