//! Draws a [`Screen`] through the hwpm-ui widgets.
//!
//! Layout is in character cells: every position is a multiple of the
//! context's `char_width` / `line_height`, so the same code renders on a
//! pixel backend and on the text backend.

use hwpm_content::FileEntry;
use hwpm_content::chrome;
use hwpm_types::error::Result;
use hwpm_ui::list_view::{ListItem, ListView};
use hwpm_ui::panel::Panel;
use hwpm_ui::progress_bar::ProgressBar;
use hwpm_ui::{DrawContext, Rect, Widget};

use crate::boot::LineStatus;
use crate::view::{BootView, MainView, Screen, SelectorView, clock_stamp};

/// Boot box width, in cells.
const BOOT_COLUMNS: u32 = 72;
/// Selector box width, in cells.
const SELECTOR_COLUMNS: u32 = 64;

/// Draw `screen` into `area`.
pub fn draw_screen(screen: &Screen<'_>, ctx: &mut DrawContext<'_>, area: Rect) -> Result<()> {
    ctx.backend
        .fill_rect(area.x, area.y, area.w, area.h, ctx.theme.background)?;
    match screen {
        Screen::Blank => Ok(()),
        Screen::Boot(view) => draw_boot(view, ctx, area),
        Screen::Main(view) => {
            draw_main(view, ctx, area)?;
            if let Some(selector) = &view.selector {
                draw_selector(selector, ctx, area)?;
            }
            Ok(())
        },
    }
}

// ---------------------------------------------------------------------------
// Boot
// ---------------------------------------------------------------------------

fn draw_boot(view: &BootView, ctx: &mut DrawContext<'_>, area: Rect) -> Result<()> {
    let cw = ctx.char_width();
    let lh = ctx.line_height();
    // Border, title gap, messages, gap, bar, footer, border.
    let rows = view.lines.len() as u32 + 7;
    let outer = area.centered(BOOT_COLUMNS * cw, rows * lh);

    Panel::themed(ctx)
        .with_title(view.title.to_uppercase())
        .with_border(ctx.theme.border_strong)
        .draw_in(ctx, outer)?;
    let inner = Panel::content_rect(ctx, outer);

    let stamp = clock_stamp(view.clock_ms);
    let mut y = inner.y + lh as i32;
    for line in view.visible_lines() {
        let (text, color) = match line.status {
            LineStatus::Current => (
                format!("{stamp} {} _", line.text.to_uppercase()),
                ctx.theme.accent,
            ),
            _ => (
                format!("{stamp} {}", line.text.to_uppercase()),
                ctx.theme.accent_subtle,
            ),
        };
        ctx.label_fit(&text, inner.x, y, inner.w, color)?;
        y += lh as i32;
    }

    let bar_y = inner.y + ((view.lines.len() as u32 + 2) * lh) as i32;
    ProgressBar::new(view.progress).draw(ctx, inner.x, bar_y, inner.w, lh)?;

    let footer_w = ctx.measure_text(view.footer).min(inner.w);
    let fx = inner.right() - footer_w as i32;
    ctx.label_fit(
        view.footer,
        fx,
        bar_y + lh as i32,
        inner.w,
        ctx.theme.border_strong,
    )
}

// ---------------------------------------------------------------------------
// Main panel
// ---------------------------------------------------------------------------

fn draw_main(view: &MainView<'_>, ctx: &mut DrawContext<'_>, area: Rect) -> Result<()> {
    let lh = ctx.line_height();
    let cw = ctx.char_width();
    let (header, body) = area.split_top(lh * 2);
    draw_header(view, ctx, header)?;

    let cols = body.columns(&[1, 2, 1], cw);
    if let [left, center, right] = cols.as_slice() {
        draw_files(view, ctx, *left)?;
        draw_center(view, ctx, *center)?;
        draw_logs(view, ctx, *right)?;
    }
    Ok(())
}

fn draw_header(view: &MainView<'_>, ctx: &mut DrawContext<'_>, area: Rect) -> Result<()> {
    let cw = ctx.char_width();
    let badges = format!(
        "[!] {}  [CPU] {}  MODE: {}",
        view.content.security_warning, view.content.resource_usage, view.key
    );
    let badges_w = ctx.measure_text(&badges).min(area.w);
    let bx = area.right() - badges_w as i32;
    ctx.label_fit(&badges, bx, area.y, badges_w, ctx.theme.error)?;

    let brand = format!(
        "{} {} {} | {}",
        chrome::BRAND,
        chrome::BRAND_TAG,
        chrome::VERSION,
        view.content.system_name
    );
    let brand_w = area.w.saturating_sub(badges_w + cw * 2);
    ctx.label_fit(&brand, area.x, area.y, brand_w, ctx.theme.text_primary)?;

    ctx.divider_h(area.x, area.y + ctx.line_height() as i32, area.w)
}

/// One explorer row: folders get a `+` and a trailing slash.
fn file_item(entry: &FileEntry, ctx: &DrawContext<'_>) -> ListItem {
    let item = if entry.is_folder() {
        ListItem::new(format!("+ {}/", entry.name)).colored(ctx.theme.text_secondary)
    } else if entry.is_flagged() {
        ListItem::new(format!("- {} (!)", entry.name)).colored(ctx.theme.error)
    } else {
        ListItem::new(format!("- {}", entry.name))
    };
    item.indented(entry.depth)
}

fn draw_files(view: &MainView<'_>, ctx: &mut DrawContext<'_>, area: Rect) -> Result<()> {
    let lh = ctx.line_height();
    Panel::themed(ctx)
        .with_title(view.content.files_title.to_uppercase())
        .draw_in(ctx, area)?;
    let inner = Panel::content_rect(ctx, area);
    let (list_area, footer) = inner.split_bottom(lh * 2);

    let items = view.files.iter().map(|e| file_item(e, ctx)).collect();
    ListView::new(items).draw(ctx, list_area.x, list_area.y, list_area.w, list_area.h)?;

    ctx.divider_h(footer.x, footer.y, footer.w)?;
    let fy = footer.y + lh as i32;
    let count = format!("{} OBJECTS", view.files.len());
    ctx.label_fit(&count, footer.x, fy, footer.w, ctx.theme.text_secondary)?;
    let ro_w = ctx.measure_text("RO");
    if ro_w + ctx.measure_text(&count) < footer.w {
        ctx.label_colored("RO", footer.right() - ro_w as i32, fy, ctx.theme.text_secondary)?;
    }
    Ok(())
}

fn draw_center(view: &MainView<'_>, ctx: &mut DrawContext<'_>, area: Rect) -> Result<()> {
    let lh = ctx.line_height();
    let (output, button) = area.split_bottom(lh * 3);
    let (output, _gap) = output.split_bottom(lh);

    let mut locked = Panel::themed(ctx).with_border(ctx.theme.border);
    locked.background = Some(ctx.theme.overlay);
    locked.draw_in(ctx, output)?;
    let mid = output.y + (output.h / 2) as i32;
    let mid = mid - mid.rem_euclid(lh as i32);
    ctx.label_centered("[LOCKED]", output, mid - lh as i32, ctx.theme.text_secondary)?;
    ctx.label_centered(
        &view.content.output_locked.to_uppercase(),
        output,
        mid,
        ctx.theme.text_secondary,
    )?;

    Panel::themed(ctx)
        .with_border(ctx.theme.accent)
        .draw_in(ctx, button)?;
    let label = format!("[ {} ]", view.content.execute_label.to_uppercase());
    ctx.label_centered(&label, button, button.y + lh as i32, ctx.theme.accent)
}

fn draw_logs(view: &MainView<'_>, ctx: &mut DrawContext<'_>, area: Rect) -> Result<()> {
    Panel::themed(ctx)
        .with_title(view.content.logs_title.to_uppercase())
        .draw_in(ctx, area)?;
    let inner = Panel::content_rect(ctx, area);
    let items = view
        .logs
        .iter()
        .map(|l| ListItem::new(l.as_str()).colored(ctx.theme.text_accent))
        .collect();
    ListView::new(items)
        .following_tail()
        .draw(ctx, inner.x, inner.y, inner.w, inner.h)
}

// ---------------------------------------------------------------------------
// Selector overlay
// ---------------------------------------------------------------------------

/// Greedy word wrap to `max_w` pixels.
fn wrap_words(ctx: &DrawContext<'_>, text: &str, max_w: u32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if ctx.measure_text(&candidate) > max_w && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn draw_selector(view: &SelectorView, ctx: &mut DrawContext<'_>, area: Rect) -> Result<()> {
    let cw = ctx.char_width();
    let lh = ctx.line_height() as i32;
    let box_w = (SELECTOR_COLUMNS * cw).min(area.w.saturating_sub(cw * 4));
    let text_w = box_w.saturating_sub(cw * 2);
    let warning = wrap_words(ctx, chrome::SELECTOR_WARNING, text_w);
    // Borders, title, gap, warning, gap, two lines per row, gap, footer.
    let rows = 2 + 2 + warning.len() as u32 + 1 + view.rows.len() as u32 * 2 + 2;
    let outer = area.centered(box_w, rows * lh as u32);

    let mut modal = Panel::themed(ctx).with_border(ctx.theme.border_strong);
    modal.background = Some(ctx.theme.overlay);
    modal.draw_in(ctx, outer)?;
    let inner = outer.inset(cw, lh as u32);
    let mut y = inner.y;

    let abort_w = ctx.measure_text(chrome::SELECTOR_ABORT);
    ctx.label_fit(
        &chrome::SELECTOR_TITLE.to_uppercase(),
        inner.x,
        y,
        inner.w.saturating_sub(abort_w + cw),
        ctx.theme.accent,
    )?;
    ctx.label_colored(
        chrome::SELECTOR_ABORT,
        inner.right() - abort_w as i32,
        y,
        ctx.theme.error,
    )?;
    y += lh * 2;

    for line in &warning {
        ctx.label_fit(line, inner.x, y, inner.w, ctx.theme.warning)?;
        y += lh;
    }
    y += lh;

    for row in &view.rows {
        let (tag, tag_color) = if row.active {
            ("[ACTIVE]", ctx.theme.accent)
        } else {
            ("[LOAD]", ctx.theme.text_secondary)
        };
        let tag_w = ctx.measure_text(tag);
        let label_color = if row.active {
            ctx.theme.text_accent
        } else {
            ctx.theme.text_primary
        };
        ctx.label_fit(
            row.option.label,
            inner.x,
            y,
            inner.w.saturating_sub(tag_w + cw),
            label_color,
        )?;
        ctx.label_colored(tag, inner.right() - tag_w as i32, y, tag_color)?;
        let risk_color = if row.option.emphasized {
            ctx.theme.error
        } else {
            ctx.theme.text_secondary
        };
        let risk = format!("  Risk Level: {}", row.option.risk);
        ctx.label_fit(&risk, inner.x, y + lh, inner.w, risk_color)?;
        y += lh * 2;
    }
    y += lh;

    ctx.label_colored(chrome::SELECTOR_FOOTER_LEFT, inner.x, y, ctx.theme.text_secondary)?;
    let right_w = ctx.measure_text(chrome::SELECTOR_FOOTER_RIGHT);
    ctx.label_colored(
        chrome::SELECTOR_FOOTER_RIGHT,
        inner.right() - right_w as i32,
        y,
        ctx.theme.text_secondary,
    )
}
