use dioxus::prelude::*;
use rand::Rng;

use crate::components::LottoTicket;
use crate::utils::{ NumberSampler, TicketBoard };

/// Generate-button action: replaces every ticket on the board.
pub fn draw_tickets<R: Rng>(mut board: Signal<TicketBoard>, sampler: &mut NumberSampler<R>) {
    board.write().regenerate(sampler);
}

/// Generator page. A `Signal<TicketBoard>` in context is used as the board
/// when present.
#[component]
pub fn Home() -> Element {
    let mut sampler = use_signal(NumberSampler::with_defaults);
    let board = use_hook(|| {
        try_consume_context::<Signal<TicketBoard>>()
            .unwrap_or_else(|| Signal::new(TicketBoard::default()))
    });
    let tickets = board.read().tickets().to_vec();

    rsx! {
        main {
            class: "container",
            p { class: "subtitle", "Five games of 6 numbers from 1 to 45." }
            button {
                id: "generator-btn",
                class: "generate",
                onclick: move |_| draw_tickets(board, &mut *sampler.write()),
                "Generate Numbers"
            }
            div {
                id: "lotto-tickets-container",
                class: "tickets",
                for ticket in tickets {
                    LottoTicket { key: "{ticket.id}", numbers: ticket.numbers.to_attribute() }
                }
            }
        }
    }
}
