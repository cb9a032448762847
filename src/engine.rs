//! HeatGrid: the surface the command dispatcher calls into.
//!
//! The dispatcher hands over an already-resolved user id and raw command
//! text; this facade wires the session store, coordinate codec, grid, and
//! renderers together and hands back plain values, typed errors, or image
//! bytes. It performs no transport I/O and no persistence.

use anyhow::Result as RenderResult;
use log::debug;

use crate::core::Coordinate;
use crate::error::Result;
use crate::render::{Heatmap, TermView};
use crate::session::SessionStore;
use crate::types::UserId;

/// Grid/heatmap engine over a session store and a fixed renderer pair.
#[derive(Debug, Default)]
pub struct HeatGrid {
    sessions: SessionStore,
    heatmap: Heatmap,
    term_view: TermView,
}

impl HeatGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the user's grid with an all-zero matrix of side length `n`.
    ///
    /// Any previously recorded hits are discarded.
    pub fn set_grid_size(&self, user_id: UserId, n: usize) -> Result<()> {
        self.sessions.with_grid(user_id, |grid| grid.set_size(n))
    }

    /// Parse `raw_text` as a cell reference and record one hit there.
    ///
    /// Returns the cell's new count. Parsing happens inside the session
    /// guard so the coordinate is always validated against the live grid
    /// size, never a stale one.
    pub fn record_hit(&self, user_id: UserId, raw_text: &str) -> Result<u32> {
        self.sessions.with_grid(user_id, |grid| {
            let coord = Coordinate::parse(raw_text, grid.size())?;
            let count = grid.record_hit(coord);
            debug!(
                "user {user_id} hit {} (count {count})",
                coord.label()
            );
            Ok(count)
        })
    }

    /// Return the user's grid to default size, all zeros.
    pub fn reset_grid(&self, user_id: UserId) {
        self.sessions.reset(user_id);
    }

    /// Render the user's grid as PNG bytes.
    ///
    /// Infallible for any valid grid short of resource exhaustion, hence the
    /// untyped error: there is nothing a user can fix here.
    pub fn render_heatmap(&self, user_id: UserId) -> RenderResult<Vec<u8>> {
        self.sessions
            .with_grid(user_id, |grid| self.heatmap.render(grid.snapshot()))
    }

    /// Render the user's grid as an ANSI-colored terminal string.
    pub fn render_ansi(&self, user_id: UserId) -> String {
        self.sessions
            .with_grid(user_id, |grid| self.term_view.render(grid.snapshot()))
    }

    /// Owned copy of the user's count matrix as rows.
    pub fn counts(&self, user_id: UserId) -> Vec<Vec<u32>> {
        self.sessions.with_grid(user_id, |grid| grid.to_rows())
    }

    /// End the user's session, dropping their grid.
    pub fn end_session(&self, user_id: UserId) -> bool {
        self.sessions.remove(user_id)
    }
}
