use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::carousel::{Slot, WindowEntry};
use crate::catalog::{CategoryItem, LoadOrigin};
use crate::contact::{LeadField, NotificationKind};
use crate::ui::app::{App, Focus};
use crate::ui::layout::{card_slots, carousel_regions, centered_rect, layout_regions};
use crate::ui::theme::{accent_color, Palette};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let colors = app.palette();
    frame.render_widget(
        Block::default().style(Style::default().bg(colors.background)),
        area,
    );

    let (header, body, footer) = layout_regions(area);
    frame.render_widget(header_widget(app, colors), header);
    draw_body(frame, body, app, colors);
    frame.render_widget(footer_widget(app, colors, footer), footer);

    if app.focus() == Focus::Contact {
        draw_contact(frame, app, colors);
    }
}

fn header_widget(app: &App, colors: Palette) -> Paragraph<'static> {
    let text = Style::default().fg(colors.text);
    let separator = Style::default().fg(colors.dim);
    let source = match app.origin() {
        Some(LoadOrigin::Remote) => "live",
        Some(LoadOrigin::Preview) => "preview",
        Some(LoadOrigin::Fallback) => "offline defaults",
        None => "loading",
    };
    let autoplay = if app.carousel().is_auto_playing() {
        "autoplay on"
    } else {
        "autoplay off"
    };

    let line = Line::from(vec![
        Span::styled("  SHOP BY ", text.add_modifier(Modifier::BOLD)),
        Span::styled(
            "CATEGORY",
            Style::default().fg(colors.gold).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  │  ", separator),
        Span::styled(source, text),
        Span::styled("  │  ", separator),
        Span::styled(autoplay, text),
        Span::styled("  │  ", separator),
        Span::styled(app.theme().as_str(), text),
    ]);

    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(colors.border)),
    )
}

fn footer_widget(app: &App, colors: Palette, area: Rect) -> Paragraph<'static> {
    let hints = match app.focus() {
        Focus::Carousel => " ←/→: Browse │ 1-9: Jump │ Enter/click: Open │ a: View all │ c: Contact │ t: Theme │ q: Quit",
        Focus::Contact => " Tab: Next field │ Enter: Send │ Esc: Close",
    };
    let version = format!("v{} ", VERSION);

    let hints_width = hints.chars().count();
    let version_width = version.chars().count();
    let content_width = area.width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(hints_width)
        .saturating_sub(version_width);

    let style = Style::default().fg(colors.text).add_modifier(Modifier::DIM);
    let line = Line::from(vec![
        Span::styled(hints, style),
        Span::styled(" ".repeat(padding), style),
        Span::styled(version, style),
    ]);

    Paragraph::new(line).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border)),
    )
}

fn draw_body(frame: &mut Frame<'_>, area: Rect, app: &App, colors: Palette) {
    let carousel = app.carousel();
    if carousel.is_empty() {
        let message = if app.is_loading() {
            "Loading categories…".to_string()
        } else {
            app.load_error()
                .unwrap_or("No categories to show")
                .to_string()
        };
        let placeholder = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(colors.dim));
        frame.render_widget(placeholder, area);
        return;
    }

    let (cards, strip) = carousel_regions(area);
    let slots = card_slots(cards);
    for entry in carousel.window() {
        let slot_area = match entry.slot {
            Slot::Left => slots[0],
            Slot::Center => slots[1],
            Slot::Right => slots[2],
        };
        frame.render_widget(card_widget(&entry, colors), slot_area);
    }

    frame.render_widget(strip_widget(app, colors), strip);
}

fn card_widget(entry: &WindowEntry<'_, CategoryItem>, colors: Palette) -> Paragraph<'static> {
    let item = entry.item;
    let accent = accent_color(&item.accent, colors.gold);
    let centered = entry.slot == Slot::Center;
    let text = if centered {
        Style::default().fg(colors.text)
    } else {
        Style::default().fg(colors.dim)
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} {}", item.icon.glyph(), item.badge.to_uppercase()),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            item.title.clone(),
            text.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(item.description.clone(), text)),
        Line::default(),
        Line::from(Span::styled(format!("{} products", item.count), text)),
    ];
    if centered {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Enter ▸ explore",
            Style::default().fg(colors.gold),
        )));
    }

    let border = if centered {
        Style::default().fg(accent)
    } else {
        Style::default().fg(colors.border)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if centered {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(border)
        .style(if centered {
            Style::default().bg(colors.highlight)
        } else {
            Style::default()
        });

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block)
}

fn strip_widget(app: &App, colors: Palette) -> Paragraph<'static> {
    let carousel = app.carousel();
    let dots: Vec<Span<'static>> = (0..carousel.len())
        .map(|index| {
            if index == carousel.active_index() {
                Span::styled("━━ ", Style::default().fg(colors.gold))
            } else {
                Span::styled("• ", Style::default().fg(colors.dim))
            }
        })
        .collect();

    let mut lines = vec![Line::from(dots)];
    if let Some(route) = app.route() {
        lines.push(Line::from(Span::styled(
            format!("→ {}", route.path()),
            Style::default().fg(colors.status_ok),
        )));
    }
    Paragraph::new(lines).alignment(Alignment::Center)
}

fn draw_contact(frame: &mut Frame<'_>, app: &App, colors: Palette) {
    let area = centered_rect(70, 80, frame.area());
    frame.render_widget(Clear, area);

    let modal = app.contact();
    let data = modal.data();
    let label = Style::default().fg(colors.gold);
    let text = Style::default().fg(colors.text);

    let mut lines = vec![
        Line::from(Span::styled(
            data.title.clone(),
            text.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(data.subtitle.clone(), Style::default().fg(colors.dim))),
        Line::default(),
        Line::from(vec![Span::styled("Email    ", label), Span::styled(data.email.clone(), text)]),
        Line::from(vec![Span::styled("Phone    ", label), Span::styled(data.phone.clone(), text)]),
        Line::from(vec![
            Span::styled("Address  ", label),
            Span::styled(data.address.clone(), text),
        ]),
        Line::from(vec![
            Span::styled("Mon-Fri  ", label),
            Span::styled(data.hours_weekday.clone(), text),
        ]),
        Line::from(vec![
            Span::styled("Saturday ", label),
            Span::styled(data.hours_saturday.clone(), text),
        ]),
        Line::from(vec![
            Span::styled("Sunday   ", label),
            Span::styled(data.hours_sunday.clone(), text),
        ]),
        Line::default(),
    ];

    for field in LeadField::ALL {
        let focused = field == modal.field();
        let marker = if focused { "▸ " } else { "  " };
        let required = if field.is_required() { "*" } else { " " };
        let value_style = if focused {
            text.add_modifier(Modifier::UNDERLINED)
        } else {
            text
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{:<8}{required} ", field.label()), label),
            Span::styled(modal.form().get(field).to_string(), value_style),
        ]));
    }

    lines.push(Line::default());
    if modal.is_submitting() {
        lines.push(Line::from(Span::styled("Sending…", Style::default().fg(colors.dim))));
    } else if let Some(note) = modal.notification() {
        let color = match note.kind {
            NotificationKind::Success => colors.status_ok,
            NotificationKind::Error => colors.status_error,
        };
        lines.push(Line::from(Span::styled(
            note.message.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }

    let block = Block::default()
        .title(" Contact Us ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors.gold))
        .style(Style::default().bg(colors.background));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
