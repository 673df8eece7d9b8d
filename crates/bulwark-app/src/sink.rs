//! Frame consumers.

use std::io::Write;

use bulwark_sim::FrameSnapshot;

/// Receives every emitted frame. Must not hold on to or mutate the state.
pub trait FrameSink {
    fn emit(&mut self, frame: &FrameSnapshot) -> anyhow::Result<()>;
}

/// Writes one JSON object per frame, newline-delimited.
pub struct JsonLines<W> {
    out: W,
}

impl<W: Write> JsonLines<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for JsonLines<W> {
    fn emit(&mut self, frame: &FrameSnapshot) -> anyhow::Result<()> {
        serde_json::to_writer(&mut self.out, frame)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Collects frames in memory.
impl FrameSink for Vec<FrameSnapshot> {
    fn emit(&mut self, frame: &FrameSnapshot) -> anyhow::Result<()> {
        self.push(frame.clone());
        Ok(())
    }
}
