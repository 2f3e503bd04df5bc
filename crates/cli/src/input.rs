//! crates/cli/src/input.rs
//! Loading values from `--input` files and standard input.

use std::ffi::{OsStr, OsString};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

/// Failure to read one of the `--input` sources.
#[derive(Debug, Error)]
#[error("failed to read values from {source_name}: {error}")]
pub struct InputError {
    source_name: String,
    #[source]
    error: io::Error,
}

impl InputError {
    fn new(source_name: String, error: io::Error) -> Self {
        Self { source_name, error }
    }
}

/// Read every value listed in `inputs`, in order.
///
/// `-` names standard input. Empty records are skipped.
pub fn load_input_values(inputs: &[OsString], from0: bool) -> Result<Vec<Vec<u8>>, InputError> {
    let mut values = Vec::new();
    let mut stdin_handle: Option<io::Stdin> = None;

    for path in inputs {
        let before = values.len();
        let source_name = if path.as_os_str() == OsStr::new("-") {
            let stdin = stdin_handle.get_or_insert_with(io::stdin);
            let mut reader = stdin.lock();
            read_values_from_reader(&mut reader, from0, &mut values)
                .map_err(|error| InputError::new("standard input".to_owned(), error))?;
            "standard input".to_owned()
        } else {
            let path_buf = PathBuf::from(path);
            let display = format!("'{}'", path_buf.display());
            let file = File::open(&path_buf).map_err(|error| InputError::new(display.clone(), error))?;
            let mut reader = BufReader::new(file);
            read_values_from_reader(&mut reader, from0, &mut values)
                .map_err(|error| InputError::new(display.clone(), error))?;
            display
        };
        info!(
            target: "safenum::cli",
            source = %source_name,
            count = values.len() - before,
            "loaded input values"
        );
    }

    Ok(values)
}

/// Split `reader` into records, appending the non-empty ones to `values`.
///
/// Newline-terminated records lose a trailing `\r` as well; NUL-terminated
/// records are taken verbatim.
pub fn read_values_from_reader<R: BufRead>(
    reader: &mut R,
    from0: bool,
    values: &mut Vec<Vec<u8>>,
) -> io::Result<()> {
    let delimiter = if from0 { b'\0' } else { b'\n' };
    let mut buffer = Vec::new();
    loop {
        buffer.clear();
        let bytes_read = reader.read_until(delimiter, &mut buffer)?;
        if bytes_read == 0 {
            break;
        }

        if buffer.last() == Some(&delimiter) {
            buffer.pop();
        }
        if !from0 && buffer.last() == Some(&b'\r') {
            buffer.pop();
        }

        if !buffer.is_empty() {
            values.push(buffer.clone());
        }
    }

    Ok(())
}
