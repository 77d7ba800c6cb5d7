mod number_sampler;
mod number_set;
mod theme_state;
mod ticket_board;

pub use number_sampler::NumberSampler;
pub use number_set::NumberSet;
pub use theme_state::ThemeState;
pub use ticket_board::{ Ticket, TicketBoard };
