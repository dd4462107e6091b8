/*!
# IO

Utilities for reading and writing graphs.

The only supported format is the **EdgeList**-Format (see [`edge_list`]): a version tag, a
`weighted`/`unweighted` marker and one `from to [weight]` group per edge with 1-indexed vertices.

## Traits

- [`GraphReader`] and [`GraphWriter`] are implemented by configurable readers and writers.
- [`EdgeListRead`] and [`EdgeListWrite`] are shorthands using the default settings.

All functions of this module report failures as `std::io::Error`; malformed input yields
`ErrorKind::InvalidData`.
*/

pub mod edge_list;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Result, Write},
    path::Path,
};

pub use edge_list::*;

/// A configured parser for one text format; reads from any [`BufRead`] or directly from a file.
pub trait GraphReader<G> {
    /// Parses a complete graph from `reader`.
    ///
    /// # Errors
    /// Fails with `InvalidData` on malformed input and passes through read errors.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Opens `path` and parses it with [`GraphReader::try_read_graph`].
    ///
    /// # Errors
    /// Additionally fails if the file cannot be opened.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Counterpart of [`GraphReader`]
pub trait GraphWriter<G> {
    /// Serializes `graph` into `writer`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Creates (or truncates) `path` and writes `graph` into it; the buffer is flushed.
    ///
    /// # Errors
    /// Fails if the file cannot be created or written.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_graph(graph, &mut writer)?;
        writer.flush()
    }
}

/// Builds a `std::io::Error` of the given kind
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Returns early with an io error unless `$cond` holds
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Parses the next token of `$iterator`; returns `InvalidData` if it is missing or malformed
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let Some(next) = $iterator.next() else {
            return Err(io_error!(
                ErrorKind::InvalidData,
                format!("Premature end of input when parsing {}.", $name)
            ));
        };

        match next.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(io_error!(
                    ErrorKind::InvalidData,
                    format!("Invalid value {:?} found. Cannot parse {}.", next, $name)
                ));
            }
        }
    }};
}

use io_error;
use parse_next_value;
use raise_error_unless;
