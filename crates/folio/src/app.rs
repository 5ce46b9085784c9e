//! Application core: event loop, page scrolling, action dispatch.

use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use folio_core::content::{Anchor, NAV_ITEMS};
use folio_core::nav::NAV_TARGET;
use folio_core::{Page, PageOptions, TargetId};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::action::Action;
use crate::component::Component;
use crate::event::{Event, EventReader};
use crate::layout::{CELL_HEIGHT, PageLayout, cols_to_px, px_to_rows, rows_to_px};
use crate::relay::AppRelay;
use crate::sections::create_sections;
use crate::theme;
use crate::tui::Tui;
use crate::widgets::nav_bar::{self, NavHit, menu_height};
use crate::widgets::{MobileMenu, NAV_ROWS, NavBarView, Revealed};

/// Rows scrolled per mouse wheel notch.
const WHEEL_ROWS: u16 = 3;

/// Rows left for the page once the bar and the status line are drawn.
fn viewport_rows(height: u16) -> u16 {
    height.saturating_sub(NAV_ROWS + 1)
}

/// Top-level application state and event loop.
pub struct App {
    page: Page,
    /// Stacked section geometry plus the visual state of every target.
    layout: PageLayout,
    /// Page sections, top to bottom.
    sections: Vec<Box<dyn Component>>,
    running: bool,
    help_visible: bool,
    /// Keys go to the contact form while set.
    contact_focused: bool,
    relay_configured: bool,
    /// Terminal size for responsive layout.
    terminal_size: (u16, u16),
    /// Zero point of the motion clock.
    started: Instant,
    tick_rate: Duration,
    render_rate: Duration,
    /// Action sender: components can dispatch actions through this.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Action receiver: main loop drains this.
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    pub fn new(
        relay: AppRelay,
        options: PageOptions,
        tick_rate: Duration,
        render_rate: Duration,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let relay_configured = relay.is_configured();

        Self {
            page: Page::new(options),
            layout: PageLayout::new(),
            sections: create_sections(relay),
            running: true,
            help_visible: false,
            contact_focused: false,
            relay_configured,
            terminal_size: (80, 24),
            started: Instant::now(),
            tick_rate,
            render_rate,
            action_tx,
            action_rx,
        }
    }

    /// Run the main event loop.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        self.terminal_size = tui.size().unwrap_or((80, 24));
        self.relayout();

        let now = self.now();
        self.page.mount(&mut self.layout, now);

        let mut events = EventReader::new(self.tick_rate, self.render_rate);

        info!(
            width = self.terminal_size.0,
            height = self.terminal_size.1,
            rows = self.layout.height(),
            "event loop started"
        );

        while self.running {
            // 1. Wait for the next event
            let Some(event) = events.next().await else {
                break;
            };

            // 2. Map event → action(s)
            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(action) = self.handle_mouse_event(mouse)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => self.action_tx.send(Action::Resize(w, h))?,
                Event::Tick => self.action_tx.send(Action::Tick)?,
                Event::Render => self.action_tx.send(Action::Render)?,
            }

            // 3. Drain and process all queued actions
            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        self.page.teardown();
        for section in &mut self.sections {
            section.shutdown();
        }
        events.stop();
        info!("event loop ended");
        Ok(())
    }

    // ── Geometry ─────────────────────────────────────────────────────

    /// Re-stack the sections for the current terminal size.
    fn relayout(&mut self) {
        let (width, height) = self.terminal_size;
        let rows = viewport_rows(height);
        self.layout.rebuild(width, rows, &self.sections);
        self.page.resize(self.layout.height_px(), rows_to_px(rows));
        debug!(width, height, page_rows = self.layout.height(), "page laid out");
    }

    fn now(&self) -> Duration {
        self.started.elapsed()
    }

    /// Page row at the top of the viewport.
    fn scroll_row(&self) -> u16 {
        u16::try_from(px_to_rows(self.page.scroll_offset()).max(0)).unwrap_or(u16::MAX)
    }

    fn compact(&self) -> bool {
        folio_core::NavBar::is_compact(cols_to_px(self.terminal_size.0))
    }

    fn page_px(&self) -> f32 {
        rows_to_px(viewport_rows(self.terminal_size.1).saturating_sub(2))
    }

    fn contact_mut(&mut self) -> Option<&mut Box<dyn Component>> {
        self.sections
            .iter_mut()
            .find(|s| s.anchor() == Some(Anchor::Contact))
    }

    // ── Input ────────────────────────────────────────────────────────

    /// Map a key event to an action. Global keys are handled here; the
    /// contact form takes everything but Ctrl+C while focused.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        if self.contact_focused {
            if let Some(contact) = self.contact_mut() {
                return contact.handle_key_event(key);
            }
            return Ok(None);
        }

        if self.help_visible {
            // In help mode, Esc or ? closes help
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Ok(Some(Action::ToggleHelp)),
                _ => Ok(None),
            };
        }

        let line = CELL_HEIGHT;
        let page = self.page_px();
        let action = match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('q')) => Action::Quit,
            (_, KeyCode::Char('?')) => Action::ToggleHelp,

            // Scrolling
            (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => Action::ScrollBy(line),
            (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => Action::ScrollBy(-line),
            (KeyModifiers::NONE, KeyCode::PageDown | KeyCode::Char(' ')) => Action::ScrollBy(page),
            (KeyModifiers::NONE, KeyCode::PageUp) => Action::ScrollBy(-page),
            (KeyModifiers::CONTROL, KeyCode::Char('d')) => Action::ScrollBy(page / 2.0),
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => Action::ScrollBy(-page / 2.0),
            (KeyModifiers::NONE, KeyCode::Char('g') | KeyCode::Home) => {
                Action::Follow(Anchor::Hero)
            }
            (_, KeyCode::Char('G') | KeyCode::End) => Action::ScrollToBottom,

            // Anchors via number keys
            (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='9')) => {
                let index = c.to_digit(10).and_then(|d| usize::try_from(d).ok());
                match index.and_then(|d| NAV_ITEMS.get(d - 1)) {
                    Some(item) => Action::Follow(item.target),
                    None => return Ok(None),
                }
            }

            (KeyModifiers::NONE, KeyCode::Char('m')) => Action::ToggleMenu,
            (KeyModifiers::NONE, KeyCode::Char('c') | KeyCode::Tab) => {
                self.action_tx.send(Action::Follow(Anchor::Contact))?;
                Action::FocusContact
            }
            (KeyModifiers::NONE, KeyCode::Esc) if self.page.nav().is_menu_open() => {
                Action::CloseMenu
            }
            _ => return Ok(None),
        };
        Ok(Some(action))
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let rows = f32::from(WHEEL_ROWS) * CELL_HEIGHT;
        match mouse.kind {
            MouseEventKind::ScrollDown => Ok(Some(Action::ScrollBy(rows))),
            MouseEventKind::ScrollUp => Ok(Some(Action::ScrollBy(-rows))),
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row),
            _ => Ok(None),
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) -> Result<Option<Action>> {
        if self.help_visible {
            return Ok(Some(Action::ToggleHelp));
        }

        let (width, height) = self.terminal_size;
        let compact = self.compact();

        if row < NAV_ROWS {
            if row != 1 {
                return Ok(None);
            }
            return Ok(nav_bar::hit_test(width, compact, column).map(nav_action));
        }
        if row >= height.saturating_sub(1) {
            return Ok(None);
        }

        let page_row = row - NAV_ROWS;
        if compact && self.page.nav().is_menu_open() {
            if page_row < menu_height() {
                return Ok(nav_bar::menu_hit(page_row).map(nav_action));
            }
            return Ok(Some(Action::CloseMenu));
        }

        let absolute = self.scroll_row().saturating_add(page_row);
        let Some(index) = self.layout.section_at(absolute) else {
            return Ok(None);
        };
        let Some((rect, layout)) = self.layout.section(index) else {
            return Ok(None);
        };
        let relative = absolute - rect.y;

        let Some(section) = self.sections.get_mut(index) else {
            return Ok(None);
        };
        let is_contact = section.anchor() == Some(Anchor::Contact);
        let action = section.handle_click(column, relative, width, layout)?;

        if action.is_none() && self.contact_focused && !is_contact {
            return Ok(Some(Action::ReleaseFocus));
        }
        Ok(action)
    }

    // ── Actions ──────────────────────────────────────────────────────

    /// Process a single action: update page state and propagate to sections.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => {
                self.running = false;
            }

            Action::Render => {
                let now = self.now();
                self.page.tick(now, &mut self.layout);
            }

            Action::Resize(w, h) => {
                self.terminal_size = (*w, *h);
                self.relayout();
                if !self.compact() {
                    self.page.nav_mut().close_menu();
                }
            }

            Action::ScrollBy(delta) => self.page.scroll_by(*delta),

            Action::ScrollToBottom => {
                let bottom = self.layout.height_px();
                self.page.scroll_by(bottom);
            }

            Action::Follow(anchor) => {
                let now = self.now();
                if !self.page.follow(*anchor, &self.layout, now) {
                    debug!(%anchor, "nothing to follow");
                }
            }

            Action::ToggleMenu => self.page.nav_mut().toggle_menu(),
            Action::CloseMenu => self.page.nav_mut().close_menu(),

            Action::ToggleHelp => {
                self.help_visible = !self.help_visible;
            }

            Action::FocusContact => {
                self.contact_focused = true;
                self.page.nav_mut().close_menu();
                if let Some(contact) = self.contact_mut() {
                    contact.set_focused(true);
                }
            }

            Action::ReleaseFocus => {
                self.contact_focused = false;
                if let Some(contact) = self.contact_mut() {
                    contact.set_focused(false);
                }
            }

            Action::Tick => {}
        }

        for section in &mut self.sections {
            if let Some(follow_up) = section.update(action)? {
                self.action_tx.send(follow_up)?;
            }
        }

        Ok(())
    }

    // ── Rendering ────────────────────────────────────────────────────

    /// Render the full application frame.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BACKGROUND)),
            area,
        );

        // Layout: [nav bar] [page viewport] [status bar]
        let layout = Layout::vertical([
            Constraint::Length(NAV_ROWS),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

        let nav_area = layout[0];
        let page_area = layout[1];
        let status_area = layout[2];

        self.render_page(frame.buffer_mut(), page_area);
        self.render_nav(frame, nav_area);

        if self.compact() && self.page.nav().is_menu_open() {
            frame.render_widget(
                MobileMenu {
                    active: self.active_anchor(),
                },
                page_area,
            );
        }

        self.render_status_bar(frame, status_area);

        if self.help_visible {
            self.render_help_overlay(frame, area);
        }
    }

    /// Section under the top of the viewport.
    fn active_anchor(&self) -> Option<Anchor> {
        self.layout.anchor_at(self.scroll_row())
    }

    /// Draw each section that intersects the viewport off-screen, then copy
    /// the visible rows into the frame.
    fn render_page(&self, buf: &mut Buffer, area: Rect) {
        let top = self.scroll_row();
        let bottom = top.saturating_add(area.height);
        let visuals = self.layout.visuals();

        for (index, section) in self.sections.iter().enumerate() {
            let Some((rect, layout)) = self.layout.section(index) else {
                continue;
            };
            if rect.bottom() <= top || rect.y >= bottom {
                continue;
            }

            let mut scratch = Buffer::empty(rect);
            scratch.set_style(rect, Style::default().bg(theme::BACKGROUND));
            section.render(rect, &mut scratch, layout, visuals);

            for y in rect.y.max(top)..rect.bottom().min(bottom) {
                let screen_y = area.y + (y - top);
                for x in 0..rect.width.min(area.width) {
                    if let (Some(src), Some(dst)) =
                        (scratch.cell((x, y)), buf.cell_mut((area.x + x, screen_y)))
                    {
                        *dst = src.clone();
                    }
                }
            }
        }
    }

    fn render_nav(&self, frame: &mut Frame, area: Rect) {
        let nav = self.page.nav();
        let view = NavBarView {
            appearance: nav.appearance(),
            compact: self.compact(),
            menu_open: nav.is_menu_open(),
            active: self.active_anchor(),
        };
        let state = self.layout.visuals().get(&TargetId::new(NAV_TARGET));
        Revealed::new(view, state, theme::BACKGROUND)
            .clip(area)
            .render(area, frame.buffer_mut());
    }

    /// Render the bottom status bar with relay status and key hints.
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let relay = if self.relay_configured {
            Span::styled("● relay", Style::default().fg(theme::GREEN))
        } else {
            Span::styled("○ relay off", Style::default().fg(theme::RED))
        };

        let hints: &[(&str, &str)] = if self.contact_focused {
            &[
                ("Tab", "next field"),
                ("Alt+Enter", "newline"),
                ("Enter", "send"),
                ("Esc", "leave form"),
            ]
        } else {
            &[
                ("j/k", "scroll"),
                ("1-4", "sections"),
                ("c", "contact"),
                ("?", "help"),
                ("q", "quit"),
            ]
        };

        let mut spans = vec![Span::raw(" "), relay, Span::styled(" │", theme::key_hint())];
        for (key, label) in hints {
            spans.push(Span::styled(format!(" {key} "), theme::key_hint_key()));
            spans.push(Span::styled(*label, theme::key_hint()));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    /// Render the help overlay centered on screen.
    #[allow(clippy::unused_self)]
    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_width = 52u16.min(area.width.saturating_sub(4));
        let help_height = 20u16.min(area.height.saturating_sub(2));

        let x = (area.width.saturating_sub(help_width)) / 2;
        let y = (area.height.saturating_sub(help_height)) / 2;

        let help_area = Rect::new(area.x + x, area.y + y, help_width, help_height);

        // Clear the background
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::SURFACE)),
            help_area,
        );

        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .title_style(theme::heading())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());

        let inner = block.inner(help_area);
        frame.render_widget(block, help_area);

        let heading = |title: &'static str| {
            Line::from(Span::styled(format!("  {title}"), theme::highlight()))
        };
        let row = |keys: &'static str, label: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {keys:<12}"), theme::key_hint_key()),
                Span::styled(label, theme::key_hint()),
            ])
        };

        let help_text = vec![
            Line::from(""),
            heading("Page"),
            row("j/k ↑/↓", "Scroll a line"),
            row("Space PgDn", "Scroll a page"),
            row("Ctrl+d/u", "Half page down / up"),
            row("g/G", "Top / bottom"),
            row("1-4", "Jump to section"),
            row("m", "Toggle compact menu"),
            Line::from(""),
            heading("Contact form"),
            row("c Tab", "Write a message"),
            row("Tab", "Next field"),
            row("Alt+Enter", "New line in message"),
            row("Enter", "Send"),
            row("Esc", "Leave the form"),
            Line::from(""),
            row("?", "This help      q  Quit"),
        ];

        frame.render_widget(Paragraph::new(help_text), inner);
    }
}

fn nav_action(hit: NavHit) -> Action {
    match hit {
        NavHit::Follow(anchor) => Action::Follow(anchor),
        NavHit::ToggleMenu => Action::ToggleMenu,
    }
}
