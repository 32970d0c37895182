//! Drawing functions - render a `RenderState` snapshot, never mutate it

use ratatui::{buffer::Buffer, prelude::*, widgets::*};
use std::time::Instant;

use crate::constants::{APP_NAME, LIST_TITLE};
use crate::dialog::{dialog_title, DIALOG_DESCRIPTION};
use crate::filter::empty_message;
use crate::messages::RenderState;
use crate::models::{logo_label, ExtensionRecord, FilterValue};
use crate::theme::{toggle_icon, Palette};
use crate::transition::{CrossFade, FadeFrame};

/// Top-level screen regions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MainLayout {
    pub header: Rect,
    pub filter_bar: Rect,
    pub cards: Rect,
    pub status: Rect,
}

impl MainLayout {
    pub fn new(area: Rect) -> Self {
        let [header, filter_bar, _spacer, cards, status] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(1), // Title + filter selector
                Constraint::Length(1), // Spacer
                Constraint::Min(0),    // Cards
                Constraint::Length(1), // Status bar
            ])
            .areas(area);

        MainLayout {
            header,
            filter_bar,
            cards,
            status,
        }
    }
}

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();
    let palette = state.palette();

    f.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.muted)),
        area,
    );

    let layout = MainLayout::new(area);
    draw_header(f, state, &palette, layout.header);
    draw_filter_bar(f, state, &palette, layout.filter_bar);
    draw_cards(f, state, &palette, layout.cards);
    draw_status_bar(f, state, &palette, layout.status);

    if let Some(pending) = &state.dialog {
        draw_remove_dialog(f, &pending.name, &pending.logo, state.dialog_busy, &palette, area);
    }

    if state.show_help {
        draw_help_popup(f, &palette, area);
    }
}

/// Draw one frame of a filter cross-fade
pub fn draw_fade(f: &mut Frame, fade: &CrossFade<RenderState>, now: Instant) {
    let (snapshot, amount) = match fade.frame_at(now) {
        FadeFrame::Out { snapshot, amount } | FadeFrame::In { snapshot, amount } => (snapshot, amount),
        FadeFrame::Done(snapshot) => (snapshot, 0.0),
    };

    draw_ui(f, snapshot);
    // Only the card region fades; header and controls stay put
    let cards = MainLayout::new(f.area()).cards;
    apply_fade(f.buffer_mut(), cards, snapshot.palette().background, amount);
}

/// Blend every cell in `area` toward `toward` by `amount` (0 = untouched)
pub fn apply_fade(buf: &mut Buffer, area: Rect, toward: Color, amount: f32) {
    if amount <= 0.0 {
        return;
    }
    let area = area.intersection(buf.area);

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                match (cell.fg, toward) {
                    (Color::Rgb(r, g, b), Color::Rgb(tr, tg, tb)) => {
                        cell.set_fg(Color::Rgb(lerp(r, tr, amount), lerp(g, tg, amount), lerp(b, tb, amount)));
                    }
                    _ if amount > 0.5 => {
                        cell.set_style(Style::default().add_modifier(Modifier::DIM));
                    }
                    _ => {}
                }
            }
        }
    }
}

fn lerp(from: u8, to: u8, amount: f32) -> u8 {
    let amount = amount.clamp(0.0, 1.0);
    (from as f32 + (to as f32 - from as f32) * amount).round() as u8
}

fn draw_header(f: &mut Frame, state: &RenderState, palette: &Palette, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.muted))
        .style(Style::default().bg(palette.surface));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(16)])
        .split(inner);

    let logo = Line::from(vec![
        Span::styled(" ◆ ", Style::default().fg(palette.accent).bold()),
        Span::styled(APP_NAME, Style::default().fg(palette.text).bold()),
    ]);
    f.render_widget(Paragraph::new(logo), chunks[0]);

    let button = Line::from(vec![
        Span::styled(
            format!("({}) ", state.theme_preference.as_str()),
            Style::default().fg(palette.muted),
        ),
        Span::styled(
            format!("[ {} ]", toggle_icon(state.resolved_theme)),
            Style::default().fg(palette.text).bold(),
        ),
    ])
    .right_aligned();
    f.render_widget(Paragraph::new(button), chunks[1]);
}

fn draw_filter_bar(f: &mut Frame, state: &RenderState, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(34)])
        .split(area);

    let title = Paragraph::new(Span::styled(
        format!(" {}", LIST_TITLE),
        Style::default().fg(palette.text).bold(),
    ));
    f.render_widget(title, chunks[0]);
    f.render_widget(render_filter_selector(state.filter, palette), chunks[1]);
}

/// Renders the All / Active / Inactive selector
pub fn render_filter_selector(current: FilterValue, palette: &Palette) -> Tabs<'static> {
    let titles: Vec<Line> = FilterValue::ALL
        .iter()
        .map(|value| Line::from(format!(" {} ", value.label())))
        .collect();

    Tabs::new(titles)
        .select(current.index())
        .style(Style::default().fg(palette.text).bg(palette.surface))
        .highlight_style(Style::default().fg(palette.on_accent).bg(palette.accent).bold())
        .divider(" ")
}

fn draw_cards(f: &mut Frame, state: &RenderState, palette: &Palette, area: Rect) {
    if state.visible.is_empty() {
        let message = Paragraph::new(empty_message(state.filter))
            .style(Style::default().fg(palette.muted))
            .alignment(Alignment::Center);
        let middle = Rect {
            y: area.y + area.height / 2,
            height: area.height.min(1),
            ..area
        };
        f.render_widget(message, middle);
        return;
    }

    let items: Vec<ListItem> = state
        .visible
        .iter()
        .map(|record| render_card(record, palette))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.muted))
                .style(Style::default().bg(palette.surface)),
        )
        .highlight_symbol("▌ ")
        .highlight_style(Style::default().fg(palette.accent))
        .highlight_spacing(HighlightSpacing::Always);

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected.min(state.visible.len() - 1)));
    f.render_stateful_widget(list, area, &mut list_state);
}

/// One extension card: badge and name, description, remove button and switch
pub fn render_card<'a>(record: &'a ExtensionRecord, palette: &Palette) -> ListItem<'a> {
    let badge = Span::styled(
        format!(" {} ", record.logo_label()),
        Style::default().fg(palette.on_accent).bg(palette.accent).bold(),
    );
    let name = Span::styled(format!(" {}", record.name), Style::default().fg(palette.text).bold());

    let switch = if record.is_active {
        Span::styled("  ━━●  on ", Style::default().fg(palette.accent).bold())
    } else {
        Span::styled("  ○━━ off ", Style::default().fg(palette.muted))
    };

    ListItem::new(vec![
        Line::from(vec![badge, name]),
        Line::from(Span::styled(
            format!("      {}", record.description),
            Style::default().fg(palette.muted),
        )),
        Line::from(vec![
            Span::styled("      ( Remove )", Style::default().fg(palette.text)),
            switch,
        ]),
        Line::from(""),
    ])
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, palette: &Palette, area: Rect) {
    let counts = format!(" {}/{} active ", state.active_count, state.total);
    let hints = match &state.notice {
        Some(notice) => format!("| {} ", notice),
        None => String::from("| Space:toggle | d:remove | Tab:filter | t:theme | ?:help | q:quit "),
    };

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(counts, Style::default().fg(palette.text)),
        Span::raw(hints),
    ]))
    .style(Style::default().fg(palette.muted));
    f.render_widget(bar, area);
}

fn draw_remove_dialog(f: &mut Frame, name: &str, logo: &str, busy: bool, palette: &Palette, area: Rect) {
    let popup_area = centered_rect(60, 40, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent))
        .title(format!(" {} ", dialog_title(name)))
        .title_style(Style::default().fg(palette.text).bold())
        .style(Style::default().bg(palette.surface));

    let remove_style = if busy {
        Style::default().fg(palette.muted)
    } else {
        Style::default().fg(palette.on_accent).bg(palette.accent).bold()
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", logo_label(logo, name)),
            Style::default().fg(palette.on_accent).bg(palette.accent).bold(),
        ))
        .right_aligned(),
        Line::from(""),
        Line::from(Span::styled(DIALOG_DESCRIPTION, Style::default().fg(palette.muted))),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Esc: Cancel ", Style::default().fg(palette.text)),
            Span::raw("  "),
            Span::styled(" Enter: Remove ", remove_style),
        ])
        .right_aligned(),
    ];

    let dialog = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(dialog, popup_area);
}

fn draw_help_popup(f: &mut Frame, palette: &Palette, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 EXTENSIONS - Keyboard Shortcuts

 LIST
   ↑ / ↓  (k / j)     Move selection
   Space / Enter      Toggle selected extension
   d / Delete         Remove selected extension

 FILTER
   Tab / →            Next filter
   Shift+Tab / ←      Previous filter
   1 / 2 / 3          All / Active / Inactive

 REMOVE DIALOG
   Enter / y          Confirm removal
   Esc / n            Cancel

 GENERAL
   t                  Toggle light / dark theme
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(palette.surface).fg(palette.text));

    let help = Paragraph::new(help_text).block(block).wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
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
    use crate::dialog::PendingRemoval;
    use crate::models::{ResolvedTheme, ThemePreference};
    use crate::transition::ViewTransition;
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    fn render(state: &RenderState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|f| draw_ui(f, state)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buf: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn with_records() -> RenderState {
        let mut record = ExtensionRecord::new(1, "DevLens", true);
        record.description = String::from("Quickly inspect page layouts");
        RenderState {
            visible: vec![record, ExtensionRecord::new(2, "StyleSpy", false)],
            total: 2,
            active_count: 1,
            ..RenderState::default()
        }
    }

    #[test]
    fn test_cards_rendered() {
        let text = render(&with_records());
        assert!(text.contains("DevLens"));
        assert!(text.contains("Quickly inspect page layouts"));
        assert!(text.contains("StyleSpy"));
        assert!(text.contains("1/2 active"));
        assert!(text.contains("Extensions List"));
    }

    #[test]
    fn test_empty_state_message() {
        let state = RenderState {
            filter: FilterValue::Inactive,
            total: 3,
            active_count: 3,
            ..RenderState::default()
        };
        assert!(render(&state).contains("All extensions active"));

        let state = RenderState {
            filter: FilterValue::Active,
            ..RenderState::default()
        };
        assert!(render(&state).contains("No active extensions"));

        assert!(render(&RenderState::default()).contains("No extensions found"));
    }

    #[test]
    fn test_theme_button_icon() {
        let light = RenderState {
            theme_preference: ThemePreference::Light,
            resolved_theme: ResolvedTheme::Light,
            ..RenderState::default()
        };
        let text = render(&light);
        assert!(text.contains("☾"));
        assert!(text.contains("(light)"));

        assert!(render(&RenderState::default()).contains("☀"));
    }

    #[test]
    fn test_remove_dialog() {
        let state = RenderState {
            dialog: Some(PendingRemoval {
                name: String::from("DevLens"),
                logo: String::from("./assets/images/logo-devlens.svg"),
            }),
            ..with_records()
        };
        let text = render(&state);
        assert!(text.contains("Remove DevLens?"));
        assert!(text.contains("Enter: Remove"));
    }

    #[test]
    fn test_apply_fade_blends_toward_background() {
        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        buf[(0, 0)].set_fg(Color::Rgb(200, 100, 0));
        apply_fade(&mut buf, area, Color::Rgb(0, 0, 0), 0.5);
        assert_eq!(buf[(0, 0)].fg, Color::Rgb(100, 50, 0));

        buf[(1, 0)].set_fg(Color::Red);
        apply_fade(&mut buf, area, Color::Rgb(0, 0, 0), 0.9);
        assert!(buf[(1, 0)].modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_draw_fade_shows_before_then_after() {
        let before = with_records();
        let after = RenderState {
            filter: FilterValue::Inactive,
            visible: vec![ExtensionRecord::new(2, "StyleSpy", false)],
            ..with_records()
        };
        let start = Instant::now();
        let fade = ViewTransition {
            before,
            after,
            duration: Duration::from_millis(100),
        }
        .start(start);

        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|f| draw_fade(f, &fade, start)).unwrap();
        assert!(buffer_text(terminal.backend().buffer()).contains("DevLens"));

        terminal
            .draw(|f| draw_fade(f, &fade, start + Duration::from_millis(100)))
            .unwrap();
        assert!(!buffer_text(terminal.backend().buffer()).contains("DevLens"));
    }

    #[test]
    fn test_fade_only_touches_card_region() {
        let state = with_records();
        let start = Instant::now();
        let fade = ViewTransition {
            before: state.clone(),
            after: state.clone(),
            duration: Duration::from_millis(100),
        }
        .start(start);

        let mut plain = Terminal::new(TestBackend::new(90, 30)).unwrap();
        plain.draw(|f| draw_ui(f, &state)).unwrap();
        let mut faded = Terminal::new(TestBackend::new(90, 30)).unwrap();
        faded
            .draw(|f| draw_fade(f, &fade, start + Duration::from_millis(25)))
            .unwrap();

        let plain = plain.backend().buffer();
        let faded = faded.backend().buffer();
        let layout = MainLayout::new(Rect::new(0, 0, 90, 30));

        for region in [layout.header, layout.filter_bar, layout.status] {
            for y in region.top()..region.bottom() {
                for x in region.left()..region.right() {
                    assert_eq!(plain[(x, y)], faded[(x, y)]);
                }
            }
        }

        let cards = layout.cards;
        let changed = (cards.top()..cards.bottom())
            .flat_map(|y| (cards.left()..cards.right()).map(move |x| (x, y)))
            .any(|pos| plain[pos] != faded[pos]);
        assert!(changed);
    }
}
