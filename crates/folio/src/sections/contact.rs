//! Contact section: channels panel and the message form.
//!
//! Panel geometry depends only on width, so layout, drawing, and mouse hit
//! testing all derive from one [`Geometry`].

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_core::content::{
    Anchor, CONTACT_CHANNELS, CONTACT_HEADER, FOLLOW_LINKS, FORM_COPY, Icon,
};
use folio_core::contact::{ContactSnapshot, FieldError};
use folio_core::page::targets;
use folio_core::{ContactForm, Field, SubmitOutcome};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, StatefulWidget, Widget},
};
use tracing::debug;

use super::{Paint, SECTION_PAD, centered, content_frame, header_height, header_widget, reveal};
use crate::action::Action;
use crate::component::Component;
use crate::layout::{SectionLayout, Visuals};
use crate::relay::{AppRelay, UNCONFIGURED_NOTICE};
use crate::theme;
use crate::widgets::{put, text};

const GAP: u16 = 2;
const MESSAGE_ROWS: u16 = 5;
/// Inner form width from which name and email sit side by side.
const SIDE_BY_SIDE: u16 = 50;
const CURSOR: char = '█';

// ── Geometry ────────────────────────────────────────────────────────

/// Section-relative rects for one width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Geometry {
    header: Rect,
    content: Rect,
    info: Rect,
    form: Rect,
    /// Label row plus the bordered input box.
    fields: [(Field, Rect); 3],
    status: Rect,
    button: Rect,
    height: u16,
}

fn info_height() -> u16 {
    let channels = u16::try_from(CONTACT_CHANNELS.len()).unwrap_or(0);
    // border, title, gap, 3 rows per channel, follow title, links, border
    6 + channels * 3
}

impl Geometry {
    fn new(width: u16) -> Self {
        let (x, w) = content_frame(width);
        let header_h = header_height(&CONTACT_HEADER, w);
        let header = Rect::new(x, SECTION_PAD, w, header_h);
        let top = header.bottom() + 2;

        let wide = !super::is_compact(width);
        let (info_x, info_w, form_x, form_w) = if wide {
            let left = w.saturating_sub(GAP) * 2 / 5;
            (x, left, x + left + GAP, w.saturating_sub(left + GAP))
        } else {
            (x, w, x, w)
        };

        let info_h = info_height();
        let form_y = if wide { top } else { top + info_h + 1 };

        let ix = form_x + 2;
        let iw = form_w.saturating_sub(4);
        let mut y = form_y + 1 + 2;

        let (name, email) = if iw >= SIDE_BY_SIDE {
            let half = iw.saturating_sub(GAP) / 2;
            let pair = (
                Rect::new(ix, y, half, 4),
                Rect::new(ix + half + GAP, y, iw.saturating_sub(half + GAP), 4),
            );
            y += 5;
            pair
        } else {
            let name = Rect::new(ix, y, iw, 4);
            let email = Rect::new(ix, y + 5, iw, 4);
            y += 10;
            (name, email)
        };
        let message = Rect::new(ix, y, iw, 1 + MESSAGE_ROWS + 2);
        y += message.height + 1;
        let status = Rect::new(ix, y, iw, 1);
        y += 2;
        let button = Rect::new(ix, y, iw, 1);
        y += 1;
        let form_h = y + 1 - form_y;

        let (info, form, content_h) = if wide {
            let h = info_h.max(form_h);
            (
                Rect::new(info_x, top, info_w, h),
                Rect::new(form_x, form_y, form_w, h),
                h,
            )
        } else {
            (
                Rect::new(info_x, top, info_w, info_h),
                Rect::new(form_x, form_y, form_w, form_h),
                info_h + 1 + form_h,
            )
        };

        Self {
            header,
            content: Rect::new(x, top, w, content_h),
            info,
            form,
            fields: [
                (Field::Name, name),
                (Field::Email, email),
                (Field::Message, message),
            ],
            status,
            button,
            height: top + content_h + SECTION_PAD,
        }
    }

    fn field_at(&self, column: u16, row: u16) -> Option<Field> {
        self.fields
            .iter()
            .find(|(_, r)| r.contains((column, row).into()))
            .map(|(field, _)| *field)
    }
}

/// Move `rect` from `from`'s coordinate space into `to`'s.
fn rebase(rect: Rect, from: Rect, to: Rect) -> Rect {
    Rect {
        x: to.x + rect.x.saturating_sub(from.x),
        y: to.y + rect.y.saturating_sub(from.y),
        ..rect
    }
}

/// The last `max` columns of `s`.
fn tail(s: &str, max: u16) -> String {
    let mut width = 0;
    let mut start = s.len();
    for (i, c) in s.char_indices().rev() {
        let w = text::width(c.encode_utf8(&mut [0; 4]));
        if width + w > max {
            break;
        }
        width += w;
        start = i;
    }
    s[start..].to_owned()
}

fn panel(focused: bool) -> Block<'static> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            theme::border_focused()
        } else {
            theme::border()
        })
        .style(Style::default().bg(theme::SURFACE))
}

fn copy_for(field: Field) -> (&'static str, &'static str) {
    match field {
        Field::Name => (FORM_COPY.name_label, FORM_COPY.name_placeholder),
        Field::Email => (FORM_COPY.email_label, FORM_COPY.email_placeholder),
        Field::Message => (FORM_COPY.message_label, FORM_COPY.message_placeholder),
    }
}

// ── Section ─────────────────────────────────────────────────────────

pub struct ContactSection {
    form: ContactForm<AppRelay>,
    active: Field,
    focused: bool,
    /// Last client-side validation failure, cleared on the next edit.
    invalid: Option<FieldError>,
    notice: Option<&'static str>,
    throbber_state: throbber_widgets_tui::ThrobberState,
}

impl ContactSection {
    pub fn new(relay: AppRelay) -> Self {
        let notice = (!relay.is_configured()).then_some(UNCONFIGURED_NOTICE);
        Self {
            form: ContactForm::new(relay),
            active: Field::Name,
            focused: false,
            invalid: None,
            notice,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    fn submit(&mut self) {
        match self.form.submit() {
            SubmitOutcome::Dispatched => {
                self.invalid = None;
                self.throbber_state = throbber_widgets_tui::ThrobberState::default();
            }
            SubmitOutcome::Ignored => {}
            SubmitOutcome::Invalid(err) => {
                self.active = err.field();
                self.invalid = Some(err);
            }
        }
    }

    fn edit(&mut self, edit: impl FnOnce(&mut String)) {
        self.invalid = None;
        self.form.edit_field(self.active, edit);
    }

    // ── Drawing ──────────────────────────────────────────────────────

    fn draw_content(&self, area: Rect, buf: &mut Buffer, g: &Geometry) {
        let snapshot = self.form.snapshot();
        self.draw_info(rebase(g.info, g.content, area), buf);

        let form = rebase(g.form, g.content, area);
        let block = panel(self.focused);
        let inner = block.inner(form);
        block.render(form, buf);

        Line::from(vec![
            Span::styled(format!("{} ", theme::glyph(Icon::Send)), theme::highlight()),
            Span::styled(FORM_COPY.form_title, theme::heading()),
        ])
        .render(Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), 1), buf);

        if snapshot.status.is_submitted() {
            Self::draw_success(inner, buf);
            return;
        }

        for (field, rect) in g.fields {
            let active = self.focused && field == self.active;
            self.draw_input(rebase(rect, g.content, area), buf, field, &snapshot, active);
        }
        self.draw_status(rebase(g.status, g.content, area), buf, &snapshot);
        self.draw_button(rebase(g.button, g.content, area), buf, &snapshot);
    }

    #[allow(clippy::unused_self)]
    fn draw_info(&self, area: Rect, buf: &mut Buffer) {
        let block = panel(false);
        let inner = block.inner(area);
        block.render(area, buf);
        let inner = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };
        let max = usize::from(inner.width);

        put(buf, inner.x, inner.y, FORM_COPY.info_title, max, theme::heading());
        let mut y = inner.y + 2;
        for channel in CONTACT_CHANNELS {
            put(
                buf,
                inner.x,
                y,
                format!("{} {}", theme::glyph(channel.icon), channel.label),
                max,
                theme::muted(),
            );
            let value_style = if channel.href == "#" {
                theme::text()
            } else {
                theme::link()
            };
            put(buf, inner.x + 3, y + 1, channel.value, max.saturating_sub(3), value_style);
            y += 3;
        }

        put(buf, inner.x, y, FORM_COPY.follow_title, max, theme::muted());
        let mut x = inner.x;
        for link in FOLLOW_LINKS {
            let label = format!("[{}] {}", theme::glyph(link.icon), link.label);
            let w = text::width(&label);
            if x + w > inner.right() {
                break;
            }
            put(buf, x, y + 1, label, usize::from(w), theme::text());
            x += w + 2;
        }
    }

    fn draw_input(
        &self,
        area: Rect,
        buf: &mut Buffer,
        field: Field,
        snapshot: &ContactSnapshot,
        active: bool,
    ) {
        if area.height < 4 {
            return;
        }
        let (label, placeholder) = copy_for(field);
        let invalid = self.invalid.is_some_and(|e| e.field() == field);

        let label_style = if invalid {
            theme::error()
        } else if active {
            theme::highlight()
        } else {
            theme::muted()
        };
        put(buf, area.x, area.y, label, usize::from(area.width), label_style);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(if invalid {
                theme::error()
            } else if active {
                theme::border_focused()
            } else {
                theme::border()
            });
        let boxed = Rect::new(area.x, area.y + 1, area.width, area.height - 1);
        let inner = block.inner(boxed);
        block.render(boxed, buf);

        let value = snapshot.form.get(field);
        if value.is_empty() && !active {
            put(buf, inner.x, inner.y, placeholder, usize::from(inner.width), theme::muted());
            return;
        }

        if field.is_multiline() {
            let mut shown = value.to_owned();
            if active {
                shown.push(CURSOR);
            }
            let lines = text::wrap(&shown, inner.width);
            let skip = lines.len().saturating_sub(usize::from(inner.height));
            for (row, line) in (0u16..).zip(lines.into_iter().skip(skip)) {
                put(buf, inner.x, inner.y + row, line, usize::from(inner.width), theme::text());
            }
        } else {
            let room = if active { inner.width.saturating_sub(1) } else { inner.width };
            let mut shown = tail(value, room);
            if active {
                shown.push(CURSOR);
            }
            put(buf, inner.x, inner.y, shown, usize::from(inner.width), theme::text());
        }
    }

    fn draw_status(&self, area: Rect, buf: &mut Buffer, snapshot: &ContactSnapshot) {
        let max = usize::from(area.width);
        if let Some(error) = &snapshot.status.error {
            put(buf, area.x, area.y, error, max, theme::error());
        } else if let Some(invalid) = self.invalid {
            put(
                buf,
                area.x,
                area.y,
                format!("{}: {}", invalid.field(), invalid.message()),
                max,
                theme::error(),
            );
        } else if let Some(notice) = self.notice {
            put(buf, area.x, area.y, notice, max, theme::muted());
        }
    }

    fn draw_button(&self, area: Rect, buf: &mut Buffer, snapshot: &ContactSnapshot) {
        if snapshot.status.is_submitting() {
            let throbber = throbber_widgets_tui::Throbber::default()
                .label(format!(" {}", FORM_COPY.submitting))
                .style(theme::muted())
                .throbber_style(theme::highlight());
            StatefulWidget::render(throbber, area, buf, &mut self.throbber_state.clone());
            return;
        }
        let label = format!(
            " {} {} ",
            theme::glyph(Icon::Send),
            FORM_COPY.submit
        );
        Line::styled(label, theme::button_primary())
            .centered()
            .render(area, buf);
    }

    fn draw_success(area: Rect, buf: &mut Buffer) {
        let mid = area.height / 2;
        let rows = [
            (mid.saturating_sub(2), Line::styled("✓", theme::success())),
            (mid, Line::styled(FORM_COPY.success_title, theme::success())),
            (mid + 1, Line::styled(FORM_COPY.success_body, theme::muted())),
        ];
        for (row, line) in rows {
            centered(buf, area, row, line);
        }
    }
}

// ── Component impl ──────────────────────────────────────────────────

impl Component for ContactSection {
    fn anchor(&self) -> Option<Anchor> {
        Some(Anchor::Contact)
    }

    fn layout(&self, width: u16, _viewport_rows: u16) -> SectionLayout {
        let g = Geometry::new(width);
        let mut layout = SectionLayout::new(g.height);
        layout.push(targets::CONTACT_TITLE, g.header);
        layout.push(targets::CONTACT_CONTENT, g.content);
        layout
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Esc => return Ok(Some(Action::ReleaseFocus)),
            KeyCode::Tab => self.active = self.active.next(),
            KeyCode::BackTab => self.active = self.active.prev(),
            KeyCode::Enter
                if key.modifiers.contains(KeyModifiers::ALT) && self.active.is_multiline() =>
            {
                self.edit(|s| s.push('\n'));
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => self.edit(|s| {
                s.pop();
            }),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit(|s| s.push(c));
            }
            _ => {}
        }
        Ok(None)
    }

    fn handle_click(
        &mut self,
        column: u16,
        row: u16,
        width: u16,
        _layout: &SectionLayout,
    ) -> Result<Option<Action>> {
        let g = Geometry::new(width);
        if let Some(field) = g.field_at(column, row) {
            debug!(%field, "contact field clicked");
            self.active = field;
            return Ok(Some(Action::FocusContact));
        }
        if g.button.contains((column, row).into()) {
            self.submit();
            return Ok(Some(Action::FocusContact));
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        if *action == Action::Tick && self.form.status().is_submitting() {
            self.throbber_state.calc_next();
        }
        Ok(None)
    }

    fn render(&self, area: Rect, buf: &mut Buffer, layout: &SectionLayout, visuals: &Visuals) {
        reveal(
            buf,
            area,
            layout,
            visuals,
            &targets::CONTACT_TITLE,
            header_widget(&CONTACT_HEADER),
        );
        let g = Geometry::new(area.width);
        reveal(
            buf,
            area,
            layout,
            visuals,
            &targets::CONTACT_CONTENT,
            Paint(|r: Rect, b: &mut Buffer| self.draw_content(r, b, &g)),
        );
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn shutdown(&mut self) {
        self.form.shutdown();
    }

    fn id(&self) -> &'static str {
        "contact"
    }
}
