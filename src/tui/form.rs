use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::model::{Business, Category};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Category,
    Address,
    City,
    State,
    ZipCode,
    PhoneNumber,
    Website,
    Rating,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::Name,
        FormField::Category,
        FormField::Address,
        FormField::City,
        FormField::State,
        FormField::ZipCode,
        FormField::PhoneNumber,
        FormField::Website,
        FormField::Rating,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Business Name",
            FormField::Category => "Category",
            FormField::Address => "Street Address",
            FormField::City => "City",
            FormField::State => "State",
            FormField::ZipCode => "Zip Code",
            FormField::PhoneNumber => "Phone Number",
            FormField::Website => "Website (Optional)",
            FormField::Rating => "Rating (1-5, Optional)",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> FormField {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> FormField {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Draft record being edited in the modal form.
///
/// Seeded from an existing record in edit mode, empty defaults in create
/// mode. Field buffers hold raw text; `build_record` is the input-layer
/// validation gate that turns the draft into a wire record.
#[derive(Debug, Clone)]
pub struct FormState {
    existing_id: Option<i64>,
    pub name: String,
    pub category: Option<usize>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone_number: String,
    pub website: String,
    pub rating: String,
    pub focus: FormField,
    pub submitting: bool,
}

impl FormState {
    pub fn create() -> Self {
        Self {
            existing_id: None,
            name: String::new(),
            category: None,
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            phone_number: String::new(),
            website: String::new(),
            rating: String::new(),
            focus: FormField::Name,
            submitting: false,
        }
    }

    pub fn edit(record: &Business) -> Self {
        Self {
            existing_id: record.business_id,
            name: record.name.clone(),
            category: Category::ALL.iter().position(|c| *c == record.category),
            address: record.address.clone(),
            city: record.city.clone(),
            state: record.state.clone(),
            zip_code: record.zip_code.clone(),
            phone_number: record.phone_number.clone(),
            website: record.website.clone().unwrap_or_default(),
            rating: record.rating.map(|r| r.to_string()).unwrap_or_default(),
            focus: FormField::Name,
            submitting: false,
        }
    }

    pub fn existing_id(&self) -> Option<i64> {
        self.existing_id
    }

    pub fn is_edit(&self) -> bool {
        self.existing_id.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Business"
        } else {
            "Add Business"
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Routes a typed character into the focused field. The category select
    /// and the numeric rating field only accept what the widget allows.
    pub fn insert_char(&mut self, ch: char) {
        match self.focus {
            FormField::Name => self.name.push(ch),
            FormField::Category => {}
            FormField::Address => self.address.push(ch),
            FormField::City => self.city.push(ch),
            FormField::State => self.state.push(ch),
            FormField::ZipCode => self.zip_code.push(ch),
            FormField::PhoneNumber => self.phone_number.push(ch),
            FormField::Website => self.website.push(ch),
            FormField::Rating => {
                if ch.is_ascii_digit() || ch == '.' {
                    self.rating.push(ch);
                }
            }
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Name => {
                self.name.pop();
            }
            FormField::Category => {
                self.category = None;
            }
            FormField::Address => {
                self.address.pop();
            }
            FormField::City => {
                self.city.pop();
            }
            FormField::State => {
                self.state.pop();
            }
            FormField::ZipCode => {
                self.zip_code.pop();
            }
            FormField::PhoneNumber => {
                self.phone_number.pop();
            }
            FormField::Website => {
                self.website.pop();
            }
            FormField::Rating => {
                self.rating.pop();
            }
        }
    }

    /// Steps the category select forwards or backwards through the closed
    /// set, wrapping at either end.
    pub fn cycle_category(&mut self, step: isize) {
        let len = Category::ALL.len() as isize;
        let current = self.category.map(|i| i as isize);
        let next = match (current, step.signum()) {
            (None, 1) => 0,
            (None, _) => len - 1,
            (Some(i), _) => (i + step).rem_euclid(len),
        };
        self.category = Some(next as usize);
    }

    pub fn field_text(&self, field: FormField) -> String {
        match field {
            FormField::Name => self.name.clone(),
            FormField::Category => self
                .category
                .and_then(|i| Category::ALL.get(i))
                .map(|c| c.label().to_string())
                .unwrap_or_else(|| "Select Category".to_string()),
            FormField::Address => self.address.clone(),
            FormField::City => self.city.clone(),
            FormField::State => self.state.clone(),
            FormField::ZipCode => self.zip_code.clone(),
            FormField::PhoneNumber => self.phone_number.clone(),
            FormField::Website => self.website.clone(),
            FormField::Rating => self.rating.clone(),
        }
    }

    /// Input-layer validation: required fields non-empty, category selected,
    /// rating blank or a number between 1 and 5. No cross-field rules; the
    /// remote API stays authoritative.
    pub fn build_record(&self) -> Result<Business, String> {
        let required = [
            (FormField::Name, &self.name),
            (FormField::Address, &self.address),
            (FormField::City, &self.city),
            (FormField::State, &self.state),
            (FormField::ZipCode, &self.zip_code),
            (FormField::PhoneNumber, &self.phone_number),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(format!("{} is required", field.label()));
            }
        }

        let category = self
            .category
            .and_then(|i| Category::ALL.get(i).copied())
            .ok_or_else(|| "Category is required".to_string())?;

        let rating = match self.rating.trim() {
            "" => None,
            raw => {
                let value: f64 = raw
                    .parse()
                    .map_err(|_| "Rating must be a number".to_string())?;
                if !(1.0..=5.0).contains(&value) {
                    return Err("Rating must be between 1 and 5".to_string());
                }
                Some(value)
            }
        };

        let website = match self.website.trim() {
            "" => None,
            raw => Some(raw.to_string()),
        };

        Ok(Business {
            business_id: self.existing_id,
            name: self.name.clone(),
            category,
            address: self.address.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip_code: self.zip_code.clone(),
            phone_number: self.phone_number.clone(),
            website,
            rating,
        })
    }
}

/// Centered popup rect, sized as a percentage of the surrounding area.
pub fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

/// Renders the modal form as an overlay above the (still mounted) list.
pub fn render_form(frame: &mut Frame, area: Rect, form: &FormState) {
    let popup = popup_area(area, 60, 80);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", form.title()))
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    if form.submitting {
        let loader = Paragraph::new("Saving... please wait")
            .style(Style::default().fg(Color::Yellow))
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(loader, inner);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for field in FormField::ALL {
        let focused = form.focus == field;
        let marker = if focused { "> " } else { "  " };
        let value = form.field_text(field);
        let value_style = if focused {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Blue)),
            Span::styled(
                format!("{:<24}", field.label()),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(value, value_style),
            Span::styled(
                if focused { "_" } else { "" },
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter save   Esc cancel   Tab/Down next   Up prev   Left/Right category",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn filled_form() -> FormState {
        let mut form = FormState::create();
        form.name = "Joe's Cafe".to_string();
        form.category = Some(1); // Restaurant
        form.address = "1 Main St".to_string();
        form.city = "Springfield".to_string();
        form.state = "IL".to_string();
        form.zip_code = "62704".to_string();
        form.phone_number = "555-1234".to_string();
        form
    }

    #[test]
    fn build_record_for_create_carries_no_id() {
        let record = filled_form().build_record().unwrap();
        assert!(record.business_id.is_none());
        assert_eq!(record.category, Category::Restaurant);
        assert!(record.website.is_none());
        assert!(record.rating.is_none());
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let mut form = filled_form();
        form.city.clear();
        let err = form.build_record().unwrap_err();
        assert!(err.contains("City"));
    }

    #[test]
    fn unselected_category_is_rejected() {
        let mut form = filled_form();
        form.category = None;
        assert!(form.build_record().is_err());
    }

    #[test]
    fn rating_must_be_in_range() {
        let mut form = filled_form();
        form.rating = "5.5".to_string();
        assert!(form.build_record().is_err());
        form.rating = "0.9".to_string();
        assert!(form.build_record().is_err());
        form.rating = "4.5".to_string();
        assert_eq!(form.build_record().unwrap().rating, Some(4.5));
    }

    #[test]
    fn blank_optionals_map_to_none() {
        let mut form = filled_form();
        form.website = "  ".to_string();
        form.rating = String::new();
        let record = form.build_record().unwrap();
        assert!(record.website.is_none());
        assert!(record.rating.is_none());
    }

    #[test]
    fn edit_seeds_draft_from_record_and_keeps_id() {
        let record = Business {
            business_id: Some(7),
            name: "Acme".to_string(),
            category: Category::RealEstate,
            address: "9 Elm".to_string(),
            city: "Dayton".to_string(),
            state: "OH".to_string(),
            zip_code: "45402".to_string(),
            phone_number: "555-0000".to_string(),
            website: Some("https://acme.example".to_string()),
            rating: Some(4.0),
        };
        let form = FormState::edit(&record);
        assert!(form.is_edit());
        assert_eq!(form.title(), "Edit Business");
        assert_eq!(form.existing_id(), Some(7));
        let rebuilt = form.build_record().unwrap();
        assert_eq!(rebuilt, record);
    }

    #[test]
    fn category_cycles_and_wraps() {
        let mut form = FormState::create();
        form.cycle_category(1);
        assert_eq!(form.category, Some(0));
        form.cycle_category(-1);
        assert_eq!(form.category, Some(Category::ALL.len() - 1));
        form.cycle_category(1);
        assert_eq!(form.category, Some(0));
    }

    #[test]
    fn rating_field_only_accepts_numeric_input() {
        let mut form = FormState::create();
        form.focus = FormField::Rating;
        for ch in "4a.5x".chars() {
            form.insert_char(ch);
        }
        assert_eq!(form.rating, "4.5");
    }

    #[test]
    fn focus_cycles_through_all_fields() {
        let mut form = FormState::create();
        for _ in 0..FormField::ALL.len() {
            form.focus_next();
        }
        assert_eq!(form.focus, FormField::Name);
        form.focus_prev();
        assert_eq!(form.focus, FormField::Rating);
    }
}
