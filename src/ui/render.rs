use crate::counter::{STEP_MAX, STEP_MIN};
use crate::ui::app::{App, Focus};
use crate::ui::layout::{layout_regions, split_body};
use crate::ui::theme::{
    ACCENT, FOCUS_BORDER, GAUGE_FILL, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT,
};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());
    let (counter_pane, step_pane) = split_body(body);

    frame.render_widget(header_widget(app), header);
    frame.render_widget(counter_widget(app), counter_pane);
    render_step_pane(frame, app, step_pane);
    frame.render_widget(footer_widget(footer.width), footer);
}

fn header_widget(app: &App) -> Paragraph<'static> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let separator_style = Style::default().fg(HEADER_SEPARATOR);
    let line = Line::from(vec![
        Span::styled("  fluxcell", text_style.add_modifier(Modifier::BOLD)),
        Span::styled("  │  ", separator_style),
        Span::styled(format!("counter {}", app.counter()), text_style),
        Span::styled("  │  ", separator_style),
        Span::styled(format!("step {}", app.step()), text_style),
    ]);

    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn pane_block(title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn counter_widget(app: &App) -> Paragraph<'static> {
    let value_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let hint_style = Style::default()
        .fg(HEADER_TEXT)
        .add_modifier(Modifier::DIM);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(app.counter().to_string(), value_style)),
        Line::from(""),
        Line::from(Span::styled(
            format!("-/+ changes by {}", app.step()),
            hint_style,
        )),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(pane_block(" Counter ", app.focus() == Focus::Counter))
}

fn render_step_pane(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = pane_block(" Step ", app.focus() == Focus::Step);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(inner);

    let hint_style = Style::default()
        .fg(HEADER_TEXT)
        .add_modifier(Modifier::DIM);
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("arrows adjust the step", hint_style)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(text, rows[0]);

    let span = (STEP_MAX - STEP_MIN) as f64;
    let ratio = ((app.step() - STEP_MIN) as f64 / span).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(GAUGE_FILL))
        .ratio(ratio)
        .label(format!("{} / {}", app.step(), STEP_MAX));
    frame.render_widget(gauge, rows[1]);
}

fn footer_widget(width: u16) -> Paragraph<'static> {
    let hints = " Tab: Switch pane │ +/-: Counter │ ←/→: Step │ q: Quit";
    let version = format!("v{} ", VERSION);

    // Pad using char count, not byte count (for Unicode)
    let hints_width = hints.chars().count();
    let version_width = version.chars().count();
    let content_width = width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(hints_width)
        .saturating_sub(version_width);

    let text_style = Style::default()
        .fg(HEADER_TEXT)
        .add_modifier(Modifier::DIM);

    let line = Line::from(vec![
        Span::styled(hints, text_style),
        Span::styled(" ".repeat(padding), text_style),
        Span::styled(version, text_style),
    ]);

    Paragraph::new(line)
        .style(text_style)
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}
