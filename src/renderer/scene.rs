//! Scene building
//!
//! Turns game state into a flat list of drawing commands. Building a scene
//! only reads the state; backends decide how to draw each command.

use crate::color::{ColorScheme, Rgba, colors};
use crate::sim::{GameState, Rect, Wobble};

/// Rows kept free above the moving block before the view scrolls
const HEADROOM_ROWS: f32 = 3.0;

/// Score overlay placement
const SCORE_POS: (f32, f32) = (20.0, 40.0);
const SCORE_SIZE: f32 = 24.0;

/// Shadow offset and block decoration sizes
const SHADOW_OFFSET: f32 = 2.0;
const HIGHLIGHT_HEIGHT: f32 = 5.0;
const BORDER_WIDTH: f32 = 2.0;

/// A single drawing operation in canvas pixels
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Vertical gradient filling an area
    Gradient {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        top: Rgba,
        bottom: Rgba,
    },
    /// Solid rectangle
    Fill(Rect),
    /// Rectangle outline of the given line width
    Stroke { rect: Rect, line_width: f32 },
    /// Text anchored at its baseline start
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        color: Rgba,
    },
}

/// Everything a scene is built from
#[derive(Debug, Clone, Copy)]
pub struct SceneView<'a> {
    pub state: &'a GameState,
    /// Game over sway, if one is playing or finished
    pub wobble: Option<&'a Wobble>,
    pub scheme: ColorScheme,
    /// Wall clock for time-based colors
    pub time_ms: f64,
}

/// Drawing commands for one frame, back to front
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub commands: Vec<DrawCommand>,
    /// How far the tower was shifted down to keep its top in view
    pub scroll: f32,
}

impl Scene {
    /// Non-text commands (what the GPU backend draws)
    pub fn shapes(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| !matches!(c, DrawCommand::Text { .. }))
    }

    /// Text commands (drawn as DOM overlay)
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Vertical shift keeping a few rows visible above the next block
pub fn scroll_offset(state: &GameState) -> f32 {
    let next_row = state.stack.next_row_y(&state.tuning);
    (HEADROOM_ROWS * state.tuning.block_height - next_row).max(0.0)
}

/// Build the frame for the given view
pub fn build(view: &SceneView) -> Scene {
    let state = view.state;
    let tuning = &state.tuning;
    let scroll = scroll_offset(state);

    let mut commands = Vec::with_capacity(state.stack.len() * 3 + 8);

    commands.push(DrawCommand::Gradient {
        x: 0.0,
        y: 0.0,
        width: tuning.canvas_width,
        height: tuning.canvas_height,
        top: colors::SKY_TOP,
        bottom: colors::SKY_BOTTOM,
    });

    for (i, block) in state.stack.iter().enumerate() {
        let dx = view.wobble.map_or(0.0, |w| w.offset(i));
        let mut rect = block.offset_x(dx);
        rect.y += scroll;
        push_block(&mut commands, rect, false);
    }

    if let Some(moving) = &state.moving {
        let mut rect = moving.rect();
        rect.y += scroll;
        if let Some(mode) = view.scheme.moving_override() {
            rect.color = mode.display(rect.color, view.time_ms);
        }
        push_block(&mut commands, rect, true);
    }

    commands.push(DrawCommand::Text {
        text: format!("Score: {}", state.score),
        x: SCORE_POS.0,
        y: SCORE_POS.1,
        size: SCORE_SIZE,
        color: colors::SCORE_TEXT,
    });

    Scene { commands, scroll }
}

/// Shadow, body, optional highlight, border
fn push_block(commands: &mut Vec<DrawCommand>, rect: Rect, moving: bool) {
    let shadow = Rect {
        x: rect.x + SHADOW_OFFSET,
        y: rect.y + SHADOW_OFFSET,
        color: colors::SHADOW,
        ..rect
    };
    commands.push(DrawCommand::Fill(shadow));
    commands.push(DrawCommand::Fill(rect));

    if moving {
        commands.push(DrawCommand::Fill(Rect {
            height: HIGHLIGHT_HEIGHT.min(rect.height),
            color: colors::HIGHLIGHT,
            ..rect
        }));
    }

    commands.push(DrawCommand::Stroke {
        rect: Rect {
            color: colors::BORDER,
            ..rect
        },
        line_width: BORDER_WIDTH,
    });
}
