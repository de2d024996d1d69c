//! Help overlay listing the deck's keyboard shortcuts.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::shortcuts::{Action, ShortcutRegistry};
use crate::tui::component::{Component, ComponentEvent};
use crate::tui::{centered_rect, Theme};

/// Modal overlay showing every binding in the deck context.
pub struct HelpOverlay {
    registry: ShortcutRegistry,
}

impl HelpOverlay {
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: ShortcutRegistry::new(),
        }
    }

    fn key_label(code: KeyCode) -> String {
        match code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        }
    }
}

impl Default for HelpOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for HelpOverlay {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') | KeyCode::Enter => {
                Some(ComponentEvent::Closed)
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = centered_rect(50, 70, area);
        f.render_widget(Clear, popup);

        let mut lines = vec![
            Line::from(Span::styled(
                "Keyboard",
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        let mut seen: Option<Action> = None;
        for (binding, action) in self.registry.bindings_for("deck") {
            // bindings_for sorts by action, so the first row of each action
            // carries the description
            let description = if seen == Some(action) {
                String::new()
            } else {
                seen = Some(action);
                action.description().to_string()
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:>10}  ", Self::key_label(binding.code)),
                    Style::default().fg(theme.accent),
                ),
                Span::styled(description, Style::default().fg(theme.text)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Esc or ? to close",
            Style::default().fg(theme.text_muted),
        )));

        let paragraph = Paragraph::new(lines)
            .style(Style::default().bg(theme.surface))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, popup);
    }
}
