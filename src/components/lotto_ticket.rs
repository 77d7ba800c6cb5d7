use dioxus::prelude::*;

use crate::components::{ StyleRule, StyleScope };
use crate::configs::TICKET_TAG;
use crate::error::AppError;

const TICKET_RULES: &[StyleRule] = &[
    StyleRule {
        selector: ":host",
        declarations: "display: block; margin-bottom: 1rem;",
    },
    StyleRule {
        selector: ".ticket-container",
        declarations: "display: flex; justify-content: center; align-items: center; \
            padding: 1rem; border: 1px solid #ddd; border-radius: 8px; \
            background-color: #f9f9f9; box-shadow: 0 2px 4px rgba(0,0,0,0.1);",
    },
    StyleRule {
        selector: ".lotto-ball",
        declarations: "width: 40px; height: 40px; border-radius: 50%; \
            background-color: #f0f0f0; color: #333; display: flex; \
            justify-content: center; align-items: center; font-weight: bold; \
            font-size: 1.2rem; margin: 0 5px; \
            box-shadow: inset 0 -2px 4px rgba(0,0,0,0.2);",
    },
];

/// Parses the `numbers` value of a ticket. Blank input is an empty ticket.
pub fn parse_numbers(raw: &str) -> Result<Vec<i64>, AppError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(raw)?)
}

/// One ticket: a row of balls built from a JSON array of integers.
///
/// Re-renders whenever `numbers` changes. Input that does not parse renders
/// an empty ticket.
#[component]
pub fn LottoTicket(numbers: String) -> Element {
    let scope = use_hook(|| StyleScope::new(TICKET_TAG));
    let scope_id = scope.id().to_string();
    let stylesheet = scope.stylesheet(TICKET_RULES);

    let balls = parse_numbers(&numbers).unwrap_or_else(|e| {
        log::warn!("Rendering empty ticket for {:?}: {}", numbers, e);
        Vec::new()
    });

    rsx! {
        div {
            "data-widget": TICKET_TAG,
            "data-scope": "{scope_id}",
            "data-numbers": "{numbers}",
            style { "{stylesheet}" }
            div {
                class: "ticket-container",
                for (index, number) in balls.into_iter().enumerate() {
                    div { key: "{index}", class: "lotto-ball", "{number}" }
                }
            }
        }
    }
}
