//! Terminal rendering of the search form and the results screen

use ratatui::{prelude::*, widgets::*};

use crate::constants::{APP_NAME, CITY_PLACEHOLDER, STATE_PLACEHOLDER, WIDE_LAYOUT_MIN_WIDTH};
use crate::messages::ui_events::{Field, Screen};
use crate::messages::RenderState;

const SEARCH_ICON: &str = "🔍 ";

/// Draw the whole frame for `state`
pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_title_bar(f, state, main_chunks[0]);

    match state.screen {
        Screen::Form => draw_form(f, state, main_chunks[1]),
        Screen::Results => draw_results(f, state, main_chunks[1]),
    }

    draw_status_bar(f, state, main_chunks[2]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_title_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", APP_NAME),
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        ),
        Span::styled(format!(" {}", state.path), Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Form controls side by side on wide terminals, stacked otherwise
fn form_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
    if area.width >= WIDE_LAYOUT_MIN_WIDTH {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(50),
                Constraint::Percentage(50),
                Constraint::Length(14),
            ])
            .split(rows[0]);
        (cols[0], cols[1], cols[2], rows[1])
    } else {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);
        (rows[0], rows[1], rows[2], rows[3])
    }
}

fn draw_form(f: &mut Frame, state: &RenderState, area: Rect) {
    let (state_area, city_area, search_area, options_area) = form_layout(area);

    let state_value = state.selected_state.as_ref().map(|s| s.as_str());
    let city_value = state.selected_city.as_ref().map(|c| c.as_str());

    f.render_widget(
        select_box(STATE_PLACEHOLDER, state_value, state.focus == Field::State, true),
        state_area,
    );
    f.render_widget(
        select_box(
            CITY_PLACEHOLDER,
            city_value,
            state.focus == Field::City,
            state.city_enabled,
        ),
        city_area,
    );
    f.render_widget(search_button(state.focus == Field::Search), search_area);

    match state.focus {
        Field::State => {
            let items: Vec<&str> = state.states.iter().map(|s| s.as_str()).collect();
            let title = options_title("States", state.loading_states);
            draw_options(f, &items, state_value, state.highlighted_state, &title, options_area);
        }
        Field::City if state.city_enabled => {
            let items: Vec<&str> = state.cities.iter().map(|c| c.as_str()).collect();
            let title = options_title("Cities", state.loading_cities);
            draw_options(f, &items, city_value, state.highlighted_city, &title, options_area);
        }
        _ => {
            let text = "Choose a state and a city, then press Enter on Search.";
            let hint = Paragraph::new(text)
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL).title(" Options "));
            f.render_widget(hint, options_area);
        }
    }
}

/// A single-value picker showing its value or placeholder
pub fn select_box<'a>(
    placeholder: &'a str,
    value: Option<&'a str>,
    is_focused: bool,
    enabled: bool,
) -> Paragraph<'a> {
    let border_style = if !enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let text = match value {
        Some(v) => Span::raw(v),
        None => Span::styled(placeholder, Style::default().fg(Color::DarkGray)),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    Paragraph::new(Line::from(vec![Span::raw(SEARCH_ICON), text])).block(block)
}

fn search_button(is_focused: bool) -> Paragraph<'static> {
    let style = if is_focused {
        Style::default().fg(Color::Black).bg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Cyan).bold()
    };

    Paragraph::new(format!("{}Search", SEARCH_ICON))
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style))
}

fn options_title(name: &str, loading: bool) -> String {
    let loading = if loading { " [...]" } else { "" };
    format!(" {}{} (↑/↓ move, Enter choose) ", name, loading)
}

fn draw_options(
    f: &mut Frame,
    items: &[&str],
    chosen: Option<&str>,
    highlighted: usize,
    title: &str,
    area: Rect,
) {
    let list_items: Vec<ListItem> = items
        .iter()
        .map(|item| {
            let marker = if Some(*item) == chosen { "* " } else { "  " };
            ListItem::new(format!("{}{}", marker, item))
        })
        .collect();

    let list = List::new(list_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(title.to_string()),
        )
        .highlight_style(Style::default().fg(Color::Yellow).bold());

    let mut list_state = ListState::default();
    if !items.is_empty() {
        list_state.select(Some(highlighted.min(items.len() - 1)));
    }

    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_results(f: &mut Frame, state: &RenderState, area: Rect) {
    let heading = match (&state.result_state, &state.result_city) {
        (Some(s), Some(c)) => format!("Hospitals in {}, {}", c, s),
        _ => String::from("Hospitals"),
    };

    let lines = vec![
        Line::from(Span::styled(heading, Style::default().bold())),
        Line::from(""),
        Line::from(Span::styled(
            format!("Route: {}", state.path),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from("Press Esc to start a new search."),
    ];

    let results = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Search "))
        .wrap(Wrap { trim: false });
    f.render_widget(results, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let bar = if let Some(hint) = &state.validation_hint {
        Paragraph::new(format!(" {} ", hint)).style(Style::default().fg(Color::Red))
    } else {
        let text = match state.screen {
            Screen::Form => " Tab:next | ↑/↓:move | Enter:choose | s:search | ?:help | q:quit ",
            Screen::Results => " Esc/b:back | ?:help | q:quit ",
        };
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray))
    };
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 HOSPITAL SEARCH - Keyboard Shortcuts

 FORM
   Tab / Shift+Tab    Next / previous control
   ↑ / ↓              Move through options
   Enter / Space      Choose option (Search: submit)
   Backspace          Clear the state
   s                  Search

 RESULTS
   Esc / b            Back to the form

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CityName, StateName};
    use ratatui::backend::TestBackend;

    fn render(state: &RenderState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw_ui(f, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_empty_form_shows_placeholders() {
        let state = RenderState {
            path: "/".into(),
            ..RenderState::default()
        };
        let screen = render(&state, 80, 24);
        assert!(screen.contains("State"));
        assert!(screen.contains("City"));
        assert!(screen.contains("Search"));
    }

    #[test]
    fn test_state_options_listed_in_order() {
        let state = RenderState {
            states: vec![StateName::new("Alaska"), StateName::new("Texas")],
            ..RenderState::default()
        };
        let screen = render(&state, 120, 24);
        let alaska = screen.find("Alaska").unwrap();
        let texas = screen.find("Texas").unwrap();
        assert!(alaska < texas);
    }

    #[test]
    fn test_results_screen_shows_route() {
        let state = RenderState {
            screen: Screen::Results,
            path: "/search?state=CA&city=LA".into(),
            result_state: Some(StateName::new("CA")),
            result_city: Some(CityName::new("LA")),
            ..RenderState::default()
        };
        let screen = render(&state, 80, 20);
        assert!(screen.contains("Hospitals in LA, CA"));
        assert!(screen.contains("/search?state=CA&city=LA"));
    }

    #[test]
    fn test_validation_hint_in_status_bar() {
        let state = RenderState {
            validation_hint: Some("Please select a city".into()),
            ..RenderState::default()
        };
        assert!(render(&state, 80, 20).contains("Please select a city"));
    }
}
