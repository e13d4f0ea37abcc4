use std::{fs::File, io::{Write, BufWriter}, path::Path};

use located_error::prelude::*;

pub mod error;
pub use error::WriterError;

/// A generic line writer.
/// - source: Boxed `BufWriter` (can either handle file-writing, or stdout).
pub struct GenericWriter<'a> {
    source: BufWriter<Box<dyn Write + 'a>>
}

impl<'a> GenericWriter<'a> {
    /// Instantiate a new `Writer`, linked to a file, or to stdout if `path` is `None`.
    ///
    /// # Errors
    /// if `path` is either an invalid file, or the user does not have the proper
    /// UNIX permissions to write at this location.
    pub fn new(path: Option<impl AsRef<Path>>) -> Result<GenericWriter<'a>> {
        use WriterError::IOError;
        Ok(GenericWriter{ source: match path {
            Some(path) => {
                let loc_msg = || format!("While creating file '{}'", path.as_ref().display());
                let file = File::create(path.as_ref()).map_err(IOError).with_loc(loc_msg)?;
                BufWriter::new(Box::new(file))
            },
            None => BufWriter::new(Box::new(std::io::stdout()))
        }})
    }

    /// Write the contents of a generic iterator. One item = one line.
    ///
    /// # Errors
    /// - If any of the Items within `iter` fails to get written.
    pub fn write_iter<T, I>(&mut self, iter: T) -> Result<()>
    where   T: IntoIterator<Item = I>,
            I: std::fmt::Display,
    {
        for obj in iter {
            writeln!(self.source, "{obj}").map_err(WriterError::IOError).loc("While writing contents")?;
        }
        self.flush()
    }

    /// Write a single, already formatted block of text, as is.
    ///
    /// # Errors
    /// - If the underlying writer fails.
    pub fn write_str(&mut self, text: &str) -> Result<()> {
        self.source.write_all(text.as_bytes()).map_err(WriterError::IOError).loc("While writing contents")?;
        self.flush()
    }

    fn flush(&mut self) -> Result<()> {
        self.source.flush().map_err(WriterError::IOError).loc("While flushing buffer contents of Writer")
    }
}
