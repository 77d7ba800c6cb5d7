mod lotto_ticket;
mod style_scope;

pub use lotto_ticket::{ parse_numbers, LottoTicket };
pub use style_scope::{ StyleRule, StyleScope };
