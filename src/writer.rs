use std::io::Write;

/// Redraws a block of text in place on a terminal.
///
/// Remembers how many lines the previous frame occupied and, before writing
/// the next one, moves the cursor back up and clears to the end of the
/// screen.
///
/// ```rust,ignore
/// let mut frame = FrameWriter::new(std::io::stderr());
/// loop {
///     frame.redraw(&list.view())?;
///     std::thread::sleep(Duration::from_millis(100));
/// }
/// ```
pub struct FrameWriter<W: Write> {
    target: W,
    frame_lines: usize,
}

impl<W: Write> FrameWriter<W> {
    pub fn new(target: W) -> Self {
        Self {
            target,
            frame_lines: 0,
        }
    }

    /// Replaces the previous frame with `frame`.
    pub fn redraw(&mut self, frame: &str) -> Result<(), std::io::Error> {
        self.clear_frame()?;
        self.target.write_all(frame.as_bytes())?;
        self.frame_lines = frame.bytes().filter(|&b| b == b'\n').count();
        self.target.flush()
    }

    /// Erases the previous frame, leaving the cursor where it started.
    pub fn clear(&mut self) -> Result<(), std::io::Error> {
        self.clear_frame()?;
        self.target.flush()
    }

    /// Lines drawn by the last frame.
    pub fn frame_lines(&self) -> usize {
        self.frame_lines
    }

    /// Forgets the previous frame so the next one is drawn below it.
    pub fn detach(&mut self) {
        self.frame_lines = 0;
    }

    pub fn into_inner(self) -> W {
        self.target
    }

    fn clear_frame(&mut self) -> Result<(), std::io::Error> {
        if self.frame_lines > 0 {
            write!(self.target, "\r\x1b[{}A\x1b[2K\x1b[J", self.frame_lines)?;
        }
        self.frame_lines = 0;
        Ok(())
    }
}
