//! Frame sinks: where computed frames are handed off.

use contour_engine::{Frame, Point, SamplePoint};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Consumer of computed frames.
pub trait FrameSink {
    /// Accept frame number `index`.
    fn write_frame(&mut self, index: u64, frame: &Frame<'_>) -> anyhow::Result<()>;

    /// Flush anything buffered.
    fn finish(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// One serialised frame.
#[derive(Debug, Serialize)]
pub struct FrameRecord<'a> {
    pub frame: u64,
    pub time: f64,
    pub vertices: &'a [SamplePoint],
    pub isolines: &'a [Point],
}

impl<'a> FrameRecord<'a> {
    pub fn new(index: u64, frame: &Frame<'a>) -> Self {
        Self {
            frame: index,
            time: frame.time,
            vertices: frame.vertices,
            isolines: frame.isolines,
        }
    }
}

/// Writes each frame as one JSON object per line.
pub struct JsonLinesSink<W: Write> {
    writer: BufWriter<W>,
}

impl JsonLinesSink<File> {
    /// Create (or truncate) the output file.
    pub fn create(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file = File::create(path.as_ref())?;
        Ok(Self::new(file))
    }
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> anyhow::Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("failed to flush frame output: {}", e.error()))
    }
}

impl<W: Write> FrameSink for JsonLinesSink<W> {
    fn write_frame(&mut self, index: u64, frame: &Frame<'_>) -> anyhow::Result<()> {
        serde_json::to_writer(&mut self.writer, &FrameRecord::new(index, frame))?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Logs a one-line summary per frame and keeps running totals.
#[derive(Debug, Default)]
pub struct SummarySink {
    pub frames: u64,
    pub segments: u64,
}

impl FrameSink for SummarySink {
    fn write_frame(&mut self, index: u64, frame: &Frame<'_>) -> anyhow::Result<()> {
        self.frames += 1;
        self.segments += frame.segment_count() as u64;
        info!(
            frame = index,
            time = frame.time,
            vertices = frame.vertices.len(),
            segments = frame.segment_count(),
            "Frame"
        );
        Ok(())
    }
}
