//! Frame composition: the orchestrator's screen on top, the command console
//! strip below it.

use hwpm_core::backend::SdiBackend;
use hwpm_core::error::Result;
use hwpm_core::render::draw_screen;
use hwpm_ui::list_view::{ListItem, ListView};
use hwpm_ui::{DrawContext, Rect, Widget};

use crate::app_state::AppState;

pub const PROMPT: &str = "hwpm> ";

/// Draw one full frame into `backend`. Does not swap buffers.
pub fn draw_frame(state: &AppState, backend: &mut dyn SdiBackend) -> Result<()> {
    let config = &state.config;
    let area = Rect::new(0, 0, config.screen_width, config.screen_height)
        .snap(config.glyph_width, config.glyph_height);
    let (main, console) = area.split_bottom(config.console_lines * config.glyph_height);

    backend.clear(state.theme.background)?;
    let mut ctx = DrawContext::new(backend, &state.theme);
    draw_screen(&state.orchestrator.screen(), &mut ctx, main)?;
    draw_console(&state.output_lines, &mut ctx, console)
}

/// Divider on the first row, the tail of the scrollback, then the prompt.
fn draw_console(lines: &[String], ctx: &mut DrawContext<'_>, area: Rect) -> Result<()> {
    let lh = ctx.line_height();
    if area.h < lh * 2 {
        return Ok(());
    }
    ctx.backend
        .fill_rect(area.x, area.y, area.w, area.h, ctx.theme.surface)?;
    ctx.divider_h(area.x, area.y, area.w)?;

    let (body, prompt) = area.split_bottom(lh);
    let (_, body) = body.split_top(lh);
    let items = lines
        .iter()
        .map(|l| ListItem::new(l.as_str()).colored(ctx.theme.text_secondary))
        .collect();
    ListView::new(items)
        .following_tail()
        .draw(ctx, body.x, body.y, body.w, body.h)?;

    let accent = ctx.theme.text_accent;
    ctx.label_colored(PROMPT, prompt.x, prompt.y, accent)
}
