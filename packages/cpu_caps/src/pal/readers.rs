//! Bounded-effort readers for kernel pseudo-files.
//!
//! Files under `/proc` and `/sys` are generated on the fly: metadata reports
//! no usable size and the contents cannot be memory-mapped. The only reliable
//! way to size one is to read it to the end, so the capability listing is
//! read in two passes (size probe, then allocate and fill).

use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Why a capability source could not be turned into bytes.
///
/// Neither variant is ever surfaced to callers of the public API; a failed
/// source degrades to "no signal" at the layer above.
#[derive(Debug, Error)]
pub(crate) enum SourceError {
    /// The pseudo-file does not exist or cannot be opened. Expected on
    /// kernels that do not expose the source at all.
    #[error("capability source is not available: {}", path.display())]
    NotAvailable {
        /// Path of the source that could not be opened.
        path: PathBuf,
    },

    /// The pseudo-file exists but reading it failed before any data arrived.
    #[error("failed reading capability source {}: {source}", path.display())]
    Read {
        /// Path of the source that failed.
        path: PathBuf,

        /// The underlying I/O error.
        source: io::Error,
    },
}

pub(crate) type Result<T> = std::result::Result<T, SourceError>;

/// Determines the size of a pseudo-file by reading it to the end.
///
/// A read failure mid-stream yields the byte count accumulated so far; only
/// a failure to open the file is an error.
pub(crate) fn probe_size(path: &Path) -> Result<usize> {
    let mut file = open(path)?;
    let mut scratch = [0_u8; 256];
    let mut total = 0_usize;

    loop {
        match file.read(&mut scratch) {
            Ok(0) => break,
            Ok(len) => total = total.saturating_add(len),
            Err(error) if error.kind() == ErrorKind::Interrupted => {}
            Err(_) => break,
        }
    }

    Ok(total)
}

/// Fills `buffer` from the start of the file at `path`, returning the number
/// of bytes obtained. Never reads past the end of `buffer`.
///
/// Interrupted reads are transparently resumed. A read failure after some
/// data has arrived yields the partial count; a failure before any data is
/// an error.
pub(crate) fn read_into(path: &Path, buffer: &mut [u8]) -> Result<usize> {
    let mut file = open(path)?;
    let mut count = 0_usize;

    while count < buffer.len() {
        let remainder = buffer
            .get_mut(count..)
            .expect("count never exceeds the buffer length");

        match file.read(remainder) {
            Ok(0) => break,
            Ok(len) => count = count.saturating_add(len),
            Err(error) if error.kind() == ErrorKind::Interrupted => {}
            Err(source) if count == 0 => {
                return Err(SourceError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
            Err(_) => break,
        }
    }

    Ok(count)
}

/// Reads an entire pseudo-file: size probe first, then a bounded fill.
///
/// If the file shrank between the two passes the result is truncated to what
/// the second pass obtained; if it grew, the extra content is not read.
pub(crate) fn read_whole(path: &Path) -> Result<Vec<u8>> {
    let size = probe_size(path)?;

    let mut contents = vec![0_u8; size];
    let len = read_into(path, &mut contents)?;
    contents.truncate(len);

    Ok(contents)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|_| SourceError::NotAvailable {
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn file_with_contents(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("failed to create temporary file");
        file.write_all(contents)
            .expect("failed to populate temporary file");
        file
    }

    #[test]
    fn missing_file_is_not_available() {
        let result = read_whole(Path::new("/nonexistent/cpu_caps/test/path"));

        assert!(matches!(result, Err(SourceError::NotAvailable { .. })));
    }

    #[test]
    fn probe_size_reports_length() {
        let file = file_with_contents(b"0-3\n");

        assert_eq!(probe_size(file.path()).unwrap(), 4);
    }

    #[test]
    fn probe_size_of_empty_file_is_zero() {
        let file = file_with_contents(b"");

        assert_eq!(probe_size(file.path()).unwrap(), 0);
    }

    #[test]
    fn read_into_is_bounded_by_buffer() {
        let file = file_with_contents(b"0123456789");

        let mut buffer = [0_u8; 4];
        let len = read_into(file.path(), &mut buffer).unwrap();

        assert_eq!(len, 4);
        assert_eq!(&buffer, b"0123");
    }

    #[test]
    fn read_into_reports_short_contents() {
        let file = file_with_contents(b"01");

        let mut buffer = [0_u8; 64];
        let len = read_into(file.path(), &mut buffer).unwrap();

        assert_eq!(len, 2);
        assert_eq!(buffer.get(..len).unwrap(), b"01");
    }

    #[test]
    fn read_whole_round_trips_contents() {
        let contents = b"processor\t: 0\nFeatures\t: half thumb\n";
        let file = file_with_contents(contents);

        assert_eq!(read_whole(file.path()).unwrap(), contents);
    }
}
