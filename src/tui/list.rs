use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::listing::{paging, PageView};
use crate::model::Business;

pub fn render_search(frame: &mut Frame, area: Rect, search: &str, active: bool) {
    let border_style = if active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let content = if search.is_empty() && !active {
        Span::styled(
            "Search by Name, City, or Category (press /)",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(
            format!("{search}{}", if active { "_" } else { "" }),
            Style::default().fg(Color::White),
        )
    };
    let input = Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(border_style),
    );
    frame.render_widget(input, area);
}

/// Placeholder shown instead of the table while a fetch is in flight.
pub fn render_loader(frame: &mut Frame, area: Rect) {
    let loader = Paragraph::new("Loading... Please wait!")
        .style(Style::default().fg(Color::Blue))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(loader, area);
}

fn website_cell(record: &Business) -> Cell<'static> {
    match record.website.as_deref() {
        Some(url) if !url.is_empty() => Cell::from(Span::styled(
            "Visit",
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        )),
        _ => Cell::from(Span::styled("N/A", Style::default().fg(Color::DarkGray))),
    }
}

fn rating_cell(record: &Business) -> Cell<'static> {
    match record.rating {
        Some(rating) => Cell::from(format!("{rating:.1}")),
        None => Cell::from(Span::styled("N/A", Style::default().fg(Color::DarkGray))),
    }
}

pub fn render_table(frame: &mut Frame, area: Rect, view: &PageView<'_>, cursor: usize) {
    let header = Row::new(vec![
        "Name", "Category", "Address", "City", "State", "Zip", "Phone", "Website", "Rating",
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = view
        .records
        .iter()
        .map(|record| {
            Row::new(vec![
                Cell::from(record.name.clone()),
                Cell::from(record.category.label()),
                Cell::from(record.address.clone()),
                Cell::from(record.city.clone()),
                Cell::from(record.state.clone()),
                Cell::from(record.zip_code.clone()),
                Cell::from(record.phone_number.clone()),
                website_cell(record),
                rating_cell(record),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(18),
        Constraint::Percentage(12),
        Constraint::Percentage(18),
        Constraint::Percentage(10),
        Constraint::Percentage(6),
        Constraint::Percentage(7),
        Constraint::Percentage(11),
        Constraint::Percentage(12),
        Constraint::Percentage(6),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Businesses ({}) ", view.total_records)),
        )
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = TableState::default();
    if !view.records.is_empty() {
        state.select(Some(cursor.min(view.records.len() - 1)));
    }
    frame.render_stateful_widget(table, area, &mut state);
}

/// Pagination footer: "page X of Y" plus the Previous / numbered / Next
/// button model.
pub fn render_footer(frame: &mut Frame, area: Rect, view: &PageView<'_>) {
    let controls = paging::page_controls(view.current_page, view.total_pages);

    let enabled = Style::default().fg(Color::White);
    let disabled = Style::default().fg(Color::DarkGray);
    let current = Style::default()
        .fg(Color::Black)
        .bg(Color::Blue)
        .add_modifier(Modifier::BOLD);

    let mut spans: Vec<Span> = vec![
        Span::styled(
            format!("Showing page {} of {}   ", controls.current, controls.pages.len()),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            "[Previous]",
            if controls.prev_enabled { enabled } else { disabled },
        ),
        Span::raw(" "),
    ];
    for page in &controls.pages {
        let style = if *page == controls.current {
            current
        } else {
            enabled
        };
        spans.push(Span::styled(format!("[{page}]"), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        "[Next]",
        if controls.next_enabled { enabled } else { disabled },
    ));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}
