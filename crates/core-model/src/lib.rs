//! Edit box model: editor state plus the geometry derived from it.
//!
//! `EditorModel` aggregates the pieces one editable field needs:
//! * `EditorState` (buffer, caret, selection, history) from `core-state`,
//! * the wrapped-row cache (`TextLayout`),
//! * edit box geometry and scroll position (`View`),
//! * mouse gesture bookkeeping (`PointerState`),
//! * the injected text measurer.
//!
//! Layout is recomputed lazily: mutations only bump the buffer revision (or
//! mark the cache dirty for measurer/width changes), and the next geometry
//! query rebuilds the rows. Without a measurer the model runs degraded: the
//! layout is one unwrapped row and translation falls back to `CellMeasure`.
//!
//! Instances share nothing; a host with many fields owns many models.

use core_config::ConfigFile;
use core_state::EditorState;
use core_text::Buffer;

pub mod coords;
pub mod layout;
pub mod measure;
pub mod pointer;
pub mod view;
pub mod wrap;

pub use coords::{VisualPos, line_col_to_offset, offset_to_line_col, offset_to_visual, visual_to_offset};
pub use layout::{LayoutOptions, TextLayout};
pub use measure::{CellMeasure, DEFAULT_LINE_HEIGHT, TextMeasure};
pub use pointer::PointerState;
pub use view::{RowRounding, View};
pub use wrap::{WrappedLine, wrap_buffer};

/// Behavior knobs, normally taken from `eclipse-edit.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelOptions {
    pub undo_limit: usize,
    pub multi_click_ms: u64,
    pub tab_spaces: usize,
    pub wheel_lines: u32,
    pub caret_width: u32,
    pub blink_ms: u64,
    pub layout: LayoutOptions,
}

impl ModelOptions {
    pub fn from_config(cfg: &ConfigFile) -> Self {
        Self {
            undo_limit: cfg.editor.undo_limit.max(1),
            multi_click_ms: cfg.editor.multi_click_ms,
            tab_spaces: cfg.editor.tab_spaces,
            wheel_lines: cfg.scroll.wheel_lines,
            caret_width: cfg.caret.width,
            blink_ms: cfg.caret.blink_ms,
            layout: LayoutOptions {
                line_spacing: cfg.layout.line_spacing,
                min_content_width: cfg.layout.min_content_width.max(1),
            },
        }
    }
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self::from_config(&ConfigFile::default())
    }
}

pub struct EditorModel {
    state: EditorState,
    layout: TextLayout,
    pub view: View,
    pub pointer: PointerState,
    /// Keyboard focus. Keyboard commands are ignored while false; the caret is hidden.
    pub focused: bool,
    options: ModelOptions,
    measure: Option<Box<dyn TextMeasure>>,
    fallback: CellMeasure,
}

impl EditorModel {
    pub fn new(buffer: Buffer, view: View, options: ModelOptions) -> Self {
        Self {
            state: EditorState::with_undo_limit(buffer, options.undo_limit),
            layout: TextLayout::new(),
            view,
            pointer: PointerState::default(),
            focused: true,
            options,
            measure: None,
            fallback: CellMeasure::default(),
        }
    }

    /// Model sized `width` x `height` with geometry and options from `cfg`.
    pub fn from_config(buffer: Buffer, cfg: &ConfigFile, width: u32, height: u32) -> Self {
        let view = View::new(width, height, cfg.layout.padding, cfg.layout.gutter_width);
        Self::new(buffer, view, ModelOptions::from_config(cfg))
    }

    pub fn with_measure(mut self, measure: impl TextMeasure + 'static) -> Self {
        self.set_measure(Some(Box::new(measure)));
        self
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Mutations through this borrow are picked up by the layout via the buffer revision.
    pub fn state_mut(&mut self) -> &mut EditorState {
        &mut self.state
    }

    pub fn options(&self) -> &ModelOptions {
        &self.options
    }

    pub fn has_measure(&self) -> bool {
        self.measure.is_some()
    }

    /// Swap the measurer (font change). Forces a relayout.
    pub fn set_measure(&mut self, measure: Option<Box<dyn TextMeasure>>) {
        self.measure = measure;
        self.layout.invalidate();
    }

    /// Measurer for coordinate translation: the injected one, else the cell fallback.
    pub fn measure(&self) -> &dyn TextMeasure {
        match &self.measure {
            Some(m) => m.as_ref(),
            None => &self.fallback,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let old_content = self.view.content_width();
        self.view.width = width;
        self.view.height = height;
        if self.view.content_width() != old_content {
            self.layout.invalidate();
        }
    }

    /// Rows as last computed; may be stale. Geometry queries use `ensure_layout`.
    pub fn layout(&self) -> &TextLayout {
        &self.layout
    }

    pub fn ensure_layout(&mut self) -> &TextLayout {
        let width = self.view.content_width();
        let opts = self.options.layout;
        self.layout
            .ensure(self.state.buffer(), width, self.measure.as_deref(), opts);
        &self.layout
    }

    pub fn line_height(&mut self) -> u32 {
        self.ensure_layout().line_height()
    }

    pub fn row_count(&mut self) -> usize {
        self.ensure_layout().row_count()
    }

    pub fn offset_visual(&mut self, offset: usize) -> VisualPos {
        self.ensure_layout();
        offset_to_visual(&self.layout, self.state.buffer(), self.measure(), offset)
    }

    pub fn caret_visual(&mut self) -> VisualPos {
        let caret = self.state.caret();
        self.offset_visual(caret)
    }

    pub fn row_x_to_offset(&mut self, row: usize, x: i32) -> usize {
        self.ensure_layout();
        visual_to_offset(&self.layout, self.state.buffer(), self.measure(), row, x)
    }

    /// Offset under an edit-box point.
    pub fn point_to_offset(&mut self, px: i32, py: i32, rounding: RowRounding) -> usize {
        let (lh, rows) = {
            let layout = self.ensure_layout();
            (layout.line_height(), layout.row_count())
        };
        let (row, x) = self.view.point_to_row_x(px, py, lh, rows, rounding);
        self.row_x_to_offset(row, x)
    }

    /// Scroll so the caret row is visible. Returns true if the view scrolled.
    pub fn ensure_caret_visible(&mut self) -> bool {
        let pos = self.caret_visual();
        let lh = self.layout.line_height();
        let rows = self.layout.row_count();
        self.view.ensure_visible(pos.y, lh, rows)
    }

    /// Clamp `scroll_y` after content shrank.
    pub fn clamp_scroll(&mut self) {
        let (lh, rows) = {
            let layout = self.ensure_layout();
            (layout.line_height(), layout.row_count())
        };
        self.view.scroll_y = self.view.scroll_y.min(self.view.max_scroll(rows, lh));
    }
}
