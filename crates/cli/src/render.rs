//! Plain-text rendering of an [`Outcome`] for terminals.

use std::fmt::Write;

use supplestore_storefront::{ProductCard, StorefrontView};

use crate::run::Outcome;

pub fn text(outcome: &Outcome) -> String {
    let mut out = String::new();
    view(&mut out, &outcome.view);

    if outcome.cart.item_count > 0 {
        let _ = writeln!(
            out,
            "\nCarrito: {} artículo(s), subtotal {}",
            outcome.cart.item_count, outcome.cart.subtotal
        );
        for line in &outcome.cart.lines {
            let _ = writeln!(out, "  {} x{}  {}", line.title, line.quantity, line.line_total());
        }
    }
    out
}

fn view(out: &mut String, view: &StorefrontView) {
    let _ = writeln!(out, "{}", view.title);
    let _ = writeln!(out, "{} producto(s)  [{}]", view.result_count, view.href);

    let active: Vec<String> = view
        .sidebar
        .groups
        .iter()
        .flat_map(|g| {
            g.options
                .iter()
                .filter(|o| o.active)
                .map(move |o| format!("{}: {}", g.title, o.label))
        })
        .collect();
    if !active.is_empty() {
        let _ = writeln!(out, "Filtros: {}", active.join(", "));
    }
    out.push('\n');

    if let Some(empty) = &view.empty {
        let _ = writeln!(out, "{}", empty.message);
        let _ = writeln!(out, "Limpiar filtros: {}", empty.clear_filters_href);
        return;
    }

    for card in &view.products {
        let _ = writeln!(out, "{}", card_line(card));
    }

    if let Some(controls) = &view.pagination {
        let pages: Vec<String> = controls
            .pages
            .iter()
            .map(|p| {
                if *p == controls.current_page {
                    format!("[{p}]")
                } else {
                    p.to_string()
                }
            })
            .collect();
        let _ = writeln!(
            out,
            "\n{} {} {}",
            if controls.has_previous { "<" } else { " " },
            pages.join(" "),
            if controls.has_next { ">" } else { " " },
        );
    }
}

fn card_line(card: &ProductCard) -> String {
    let stars: String = (0..5)
        .map(|i| if i < card.rating { '★' } else { '☆' })
        .collect();
    let mut line = format!(
        "#{:<3} {:<28} {:>9}  {} ({})",
        card.id.0, card.title, card.price, stars, card.review_count
    );
    if let Some(tag) = &card.tag {
        let _ = write!(line, "  <{tag}>");
    }
    line
}
