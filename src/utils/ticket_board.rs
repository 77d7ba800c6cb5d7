use rand::Rng;

use crate::utils::{ NumberSampler, NumberSet };

#[derive(Clone, Debug, PartialEq)]
pub struct Ticket {
    /// Render key; never reused, so each draw mounts fresh widgets.
    pub id: u64,
    pub numbers: NumberSet,
}

/// Tickets currently on screen. Every draw throws the old ones away.
#[derive(Debug, Default)]
pub struct TicketBoard {
    tickets: Vec<Ticket>,
    next_id: u64,
}

impl TicketBoard {
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn regenerate<R: Rng>(&mut self, sampler: &mut NumberSampler<R>) {
        self.tickets.clear();

        for _ in 0..sampler.config().tickets_per_draw {
            let numbers = sampler.generate();
            self.tickets.push(Ticket { id: self.next_id, numbers });
            self.next_id += 1;
        }

        log::debug!("Generated {} tickets", self.tickets.len());
    }
}
