use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub const WRITER_BUFFER_SIZE: usize = 256 * 1024;

/// Buffered sink for output records, one decimal value per line.
///
/// The file handle is owned by the writer; dropping it without calling
/// [`RecordWriter::finish`] still closes the file, but only `finish`
/// reports flush errors.
pub struct RecordWriter<W: Write> {
    writer: BufWriter<W>,
    records_written: usize,
}

impl RecordWriter<File> {
    /// Create (or truncate) `path` and write records into it.
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(file))
    }
}

impl<W: Write> RecordWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(WRITER_BUFFER_SIZE, inner),
            records_written: 0,
        }
    }

    pub fn write_value(&mut self, value: u32) -> io::Result<()> {
        writeln!(self.writer, "{}", value)?;
        self.records_written += 1;
        Ok(())
    }

    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Flush buffered records and hand back the underlying sink.
    pub fn finish(self) -> io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}
