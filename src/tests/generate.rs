use std::cell::Cell;

use dioxus::prelude::*;

use crate::tests::common::{ mocks::seeded_sampler, rerender, setup };
use crate::utils::TicketBoard;
use crate::views::{ draw_tickets, Home };

thread_local! {
    static LIVE_BOARD: Cell<Option<Signal<TicketBoard>>> = const { Cell::new(None) };
}

fn home_with_board() -> Element {
    let board = use_signal(TicketBoard::default);
    use_context_provider(|| board);
    use_hook(|| LIVE_BOARD.with(|cell| cell.set(Some(board))));
    rsx! { Home {} }
}

fn widget_count(html: &str) -> usize {
    html.matches("data-widget=\"lotto-ticket\"").count()
}

#[test]
fn test_generate_always_leaves_five_tickets() {
    setup();
    let mut sampler = seeded_sampler(1);
    let mut board = TicketBoard::default();

    for _ in 0..4 {
        board.regenerate(&mut sampler);
        assert_eq!(board.len(), 5);
    }
}

#[test]
fn test_generate_replaces_previous_tickets() {
    setup();
    let mut sampler = seeded_sampler(2);
    let mut board = TicketBoard::default();

    board.regenerate(&mut sampler);
    let first_ids: Vec<u64> = board.tickets().iter().map(|t| t.id).collect();
    board.regenerate(&mut sampler);

    assert!(board.tickets().iter().all(|t| !first_ids.contains(&t.id)));
}

#[test]
fn test_every_ticket_is_a_valid_number_set() {
    setup();
    let mut sampler = seeded_sampler(3);
    let mut board = TicketBoard::default();

    for _ in 0..100 {
        board.regenerate(&mut sampler);
        for ticket in board.tickets() {
            let values = ticket.numbers.as_slice();
            assert_eq!(values.len(), 6);
            assert!(values.iter().all(|n| (1..=45).contains(n)));
            assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}

#[test]
fn test_ticket_attribute_round_trips_into_widget_parser() {
    setup();
    let mut sampler = seeded_sampler(4);
    let mut board = TicketBoard::default();
    board.regenerate(&mut sampler);

    for ticket in board.tickets() {
        let parsed = crate::components::parse_numbers(&ticket.numbers.to_attribute()).unwrap();
        let expected: Vec<i64> = ticket.numbers.as_slice().iter().map(|&n| i64::from(n)).collect();
        assert_eq!(parsed, expected);
    }
}

#[test]
fn test_home_renders_one_widget_per_ticket() {
    setup();
    let mut dom = VirtualDom::new(home_with_board);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("id=\"lotto-tickets-container\""));
    assert_eq!(widget_count(&html), 0);

    let board = LIVE_BOARD.with(Cell::get).expect("board signal is mounted");
    let mut sampler = seeded_sampler(5);

    for _ in 0..3 {
        dom.in_runtime(|| draw_tickets(board, &mut sampler));
        let html = rerender(&mut dom);
        assert_eq!(widget_count(&html), 5);

        let tickets = dom.in_runtime(|| board.read().tickets().to_vec());
        for ticket in &tickets {
            let attribute = format!("data-numbers=\"{}\"", ticket.numbers.to_attribute());
            assert!(html.contains(&attribute), "missing {}", attribute);
        }
    }
}
