use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use tokio::sync::mpsc;

use crate::client::{ApiClient, ClientError};
use crate::listing::Listing;
use crate::model::Business;

use super::form::{self, FormField, FormState};
use super::list;
use super::notify::Notice;
use super::AppEvent;

/// Which mutation a completed network call belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

/// Result of a network task, posted back onto the event channel.
#[derive(Debug)]
pub enum NetResponse {
    Listed(Result<Vec<Business>, ClientError>),
    Mutated {
        action: MutationKind,
        result: Result<(), ClientError>,
    },
}

/// What currently owns the keyboard. The list stays mounted underneath the
/// form and the confirm dialog; only focus moves.
#[derive(Debug)]
pub enum Mode {
    Browse,
    Search,
    Form(FormState),
    ConfirmDelete { id: i64, name: String, yes: bool },
}

/// Shell/coordinator: owns the listing, the modal state and the notices,
/// and turns key events plus network responses into state transitions.
pub struct App {
    client: Arc<ApiClient>,
    listing: Listing,
    loading: bool,
    cursor: usize,
    mode: Mode,
    notices: Vec<Notice>,
    events: Option<mpsc::Sender<AppEvent>>,
    should_quit: bool,
}

impl App {
    pub fn new(client: ApiClient, page_size: usize) -> Self {
        Self {
            client: Arc::new(client),
            listing: Listing::new(page_size),
            loading: false,
            cursor: 0,
            mode: Mode::Browse,
            notices: Vec::new(),
            events: None,
            should_quit: false,
        }
    }

    /// Wires up the event channel and kicks off the initial fetch.
    pub fn attach_events(&mut self, events: mpsc::Sender<AppEvent>) {
        self.events = Some(events);
        self.request_refresh();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn on_tick(&mut self) {
        let now = Instant::now();
        self.notices.retain(|notice| !notice.expired(now));
    }

    fn raise(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    fn visible_rows(&self) -> usize {
        self.listing.page_view().records.len()
    }

    fn clamp_cursor(&mut self) {
        let rows = self.visible_rows();
        if rows == 0 {
            self.cursor = 0;
        } else if self.cursor >= rows {
            self.cursor = rows - 1;
        }
    }

    fn selected_record(&self) -> Option<Business> {
        self.listing
            .page_view()
            .records
            .get(self.cursor)
            .map(|record| (*record).clone())
    }

    /// Invalidate-and-refetch: the cache is rebuilt wholesale after every
    /// mutation, eventual consistency with the store.
    fn request_refresh(&mut self) {
        self.loading = true;
        if let Some(tx) = self.events.clone() {
            let client = self.client.clone();
            tokio::spawn(async move {
                let result = client.list().await;
                let _ = tx.send(AppEvent::Net(NetResponse::Listed(result))).await;
            });
        }
    }

    fn request_delete(&mut self, id: i64) {
        if let Some(tx) = self.events.clone() {
            let client = self.client.clone();
            tokio::spawn(async move {
                let result = client.delete(id).await;
                let _ = tx
                    .send(AppEvent::Net(NetResponse::Mutated {
                        action: MutationKind::Delete,
                        result,
                    }))
                    .await;
            });
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else { return };
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.mode {
            Mode::Browse => self.handle_browse_key(key),
            Mode::Search => self.handle_search_key(key),
            Mode::Form(_) => self.handle_form_key(key),
            Mode::ConfirmDelete { .. } => self.handle_confirm_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => {
                let rows = self.visible_rows();
                if rows > 0 && self.cursor + 1 < rows {
                    self.cursor += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Char('h') | KeyCode::Left | KeyCode::PageUp => {
                self.listing.prev_page();
                self.cursor = 0;
            }
            KeyCode::Char('l') | KeyCode::Right | KeyCode::PageDown => {
                self.listing.next_page();
                self.cursor = 0;
            }
            KeyCode::Char('/') => self.mode = Mode::Search,
            KeyCode::Char('r') => self.request_refresh(),
            KeyCode::Char('a') => self.mode = Mode::Form(FormState::create()),
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(record) = self.selected_record() {
                    self.mode = Mode::Form(FormState::edit(&record));
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(record) = self.selected_record() {
                    if let Some(id) = record.business_id {
                        self.mode = Mode::ConfirmDelete {
                            id,
                            name: record.name,
                            yes: false,
                        };
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.mode = Mode::Browse,
            KeyCode::Backspace => {
                self.listing.pop_search_char();
                self.cursor = 0;
            }
            KeyCode::Char(ch) => {
                self.listing.push_search_char(ch);
                self.cursor = 0;
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let Mode::Form(mut form) = std::mem::replace(&mut self.mode, Mode::Browse) else {
            return;
        };
        if form.submitting {
            // Inputs are hidden behind the loader; nothing to route.
            self.mode = Mode::Form(form);
            return;
        }
        match key.code {
            KeyCode::Esc => {}
            KeyCode::Enter => self.submit_form(form),
            KeyCode::Tab | KeyCode::Down => {
                form.focus_next();
                self.mode = Mode::Form(form);
            }
            KeyCode::BackTab | KeyCode::Up => {
                form.focus_prev();
                self.mode = Mode::Form(form);
            }
            KeyCode::Left if form.focus == FormField::Category => {
                form.cycle_category(-1);
                self.mode = Mode::Form(form);
            }
            KeyCode::Right if form.focus == FormField::Category => {
                form.cycle_category(1);
                self.mode = Mode::Form(form);
            }
            KeyCode::Char(' ') if form.focus == FormField::Category => {
                form.cycle_category(1);
                self.mode = Mode::Form(form);
            }
            KeyCode::Backspace => {
                form.backspace();
                self.mode = Mode::Form(form);
            }
            KeyCode::Char(ch) => {
                form.insert_char(ch);
                self.mode = Mode::Form(form);
            }
            _ => self.mode = Mode::Form(form),
        }
    }

    fn submit_form(&mut self, mut form: FormState) {
        match form.build_record() {
            Err(message) => {
                // Stays open for correction.
                self.raise(Notice::error(message));
                self.mode = Mode::Form(form);
            }
            Ok(record) => {
                form.submitting = true;
                let action = if form.is_edit() {
                    MutationKind::Update
                } else {
                    MutationKind::Create
                };
                let id = form.existing_id();
                self.mode = Mode::Form(form);
                if let Some(tx) = self.events.clone() {
                    let client = self.client.clone();
                    tokio::spawn(async move {
                        let result = match id {
                            Some(id) => client.update(id, &record).await,
                            None => client.create(&record).await,
                        };
                        let _ = tx
                            .send(AppEvent::Net(NetResponse::Mutated { action, result }))
                            .await;
                    });
                }
            }
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        let Mode::ConfirmDelete { id, name, yes } =
            std::mem::replace(&mut self.mode, Mode::Browse)
        else {
            return;
        };
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => self.request_delete(id),
            KeyCode::Enter if yes => self.request_delete(id),
            // Declining is a silent no-op.
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {}
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                self.mode = Mode::ConfirmDelete {
                    id,
                    name,
                    yes: !yes,
                };
            }
            _ => {
                self.mode = Mode::ConfirmDelete { id, name, yes };
            }
        }
    }

    pub fn handle_net(&mut self, response: NetResponse) {
        match response {
            NetResponse::Listed(Ok(records)) => {
                self.listing.set_records(records);
                self.loading = false;
                self.clamp_cursor();
            }
            NetResponse::Listed(Err(_)) => {
                // Previous (or empty) collection is retained.
                self.loading = false;
                self.raise(Notice::error("Error fetching businesses"));
            }
            NetResponse::Mutated {
                action,
                result: Ok(()),
            } => {
                let message = match action {
                    MutationKind::Create => "Business added successfully!",
                    MutationKind::Update => "Business updated successfully!",
                    MutationKind::Delete => "Business deleted successfully!",
                };
                self.raise(Notice::success(message));
                if matches!(self.mode, Mode::Form(_)) {
                    self.mode = Mode::Browse;
                }
                self.request_refresh();
            }
            NetResponse::Mutated {
                action: MutationKind::Delete,
                result: Err(_),
            } => {
                self.raise(Notice::error("Error deleting business. Please try again."));
            }
            NetResponse::Mutated { result: Err(_), .. } => {
                self.raise(Notice::error("Please enter valid data!"));
                if let Mode::Form(form) = &mut self.mode {
                    form.submitting = false;
                }
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(frame.area());

        self.render_header(frame, areas[0]);
        list::render_search(
            frame,
            areas[1],
            self.listing.search(),
            matches!(self.mode, Mode::Search),
        );

        if self.loading {
            list::render_loader(frame, areas[2]);
        } else {
            let view = self.listing.page_view();
            list::render_table(frame, areas[2], &view, self.cursor);
            list::render_footer(frame, areas[3], &view);
        }

        self.render_status(frame, areas[4]);

        match &self.mode {
            Mode::Form(state) => form::render_form(frame, frame.area(), state),
            Mode::ConfirmDelete { name, yes, .. } => {
                render_confirm_dialog(frame, frame.area(), name, *yes);
            }
            _ => {}
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "Business Directory",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "a add   e/Enter edit   d delete   / search   \u{2190}/\u{2192} page   r refresh   q quit",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let status = match self.notices.last() {
            Some(notice) => Paragraph::new(notice.text.clone()).style(notice.style()),
            None => Paragraph::new("Ready").style(Style::default().fg(Color::DarkGray)),
        };
        frame.render_widget(status, area);
    }
}

fn render_confirm_dialog(frame: &mut Frame, area: Rect, name: &str, yes: bool) {
    let popup = form::popup_area(area, 50, 25);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Confirm Delete ")
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let selected = Style::default()
        .fg(Color::Black)
        .bg(Color::Red)
        .add_modifier(Modifier::BOLD);
    let unselected = Style::default().fg(Color::White);

    let lines = vec![
        Line::from("Are you sure you want to delete this business?"),
        Line::from(Span::styled(
            name.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Yes ", if yes { selected } else { unselected }),
            Span::raw("   "),
            Span::styled(" No ", if yes { unselected } else { selected }),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center),
        inner,
    );
}
