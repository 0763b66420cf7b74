pub mod frame;

use std::io::{self, ErrorKind, Write};

use frame::RenderFrame;
use liblife::grid::Grid;
use tracing::warn;

/// Draws generations to a terminal, only touching the cells that changed since the last frame.
pub struct Renderer<W> {
    out: W,

    /// What the terminal currently shows, `None` when nothing trustworthy has been drawn yet.
    rendered: Option<Grid>,
}

impl<W> Renderer<W>
where
    W: Write,
{
    pub fn new(out: W) -> Self {
        Self {
            out,
            rendered: None,
        }
    }

    /// Like `draw`, only a closed pipe is reported; other failures are logged.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        let mut frame = RenderFrame::default();
        frame.clear_screen();

        self.rendered = None;
        match self.present(&frame) {
            Err(err) if err.kind() != ErrorKind::BrokenPipe => {
                warn!(?err, "Couldn't clear the screen");
                Ok(())
            }
            result => result,
        }
    }

    /// Draws every cell of `grid` that differs from what was drawn before and returns how many
    /// cells were drawn. Failed writes other than a closed pipe are logged and make the next call
    /// redraw the whole grid.
    pub fn draw(&mut self, grid: &Grid) -> io::Result<usize> {
        let mut frame = RenderFrame::default();

        for (cell_pos, cell) in grid.enumerate_cells() {
            let changed = match &self.rendered {
                Some(rendered) => rendered.cell(cell_pos) != Some(cell),
                None => true,
            };

            if changed {
                frame.draw_cell(cell_pos, cell);
            }
        }

        if frame.is_empty() {
            return Ok(0);
        }

        match self.present(&frame) {
            Ok(()) => {
                self.remember(grid);
                Ok(frame.drawn_cells())
            }
            Err(err) if err.kind() == ErrorKind::BrokenPipe => Err(err),
            Err(err) => {
                warn!(?err, "Couldn't write frame, redrawing everything next time");
                self.rendered = None;
                Ok(0)
            }
        }
    }

    /// Parks the cursor on the line below the grid.
    pub fn finish(&mut self, grid: &Grid) -> io::Result<()> {
        let mut frame = RenderFrame::default();
        frame.move_to(grid.height() + 1, 1);
        self.present(&frame)
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn present(&mut self, frame: &RenderFrame) -> io::Result<()> {
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }

    fn remember(&mut self, grid: &Grid) {
        match &mut self.rendered {
            Some(rendered) => rendered.clone_from(grid),
            None => self.rendered = Some(grid.clone()),
        }
    }
}
