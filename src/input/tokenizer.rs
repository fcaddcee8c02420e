use std::ffi::OsString;
use std::io::{self, BufRead};
use std::os::unix::ffi::OsStringExt;

const DELIMITER: u8 = b' ';

/// Splits a line into its space-separated words.
///
/// Only the space byte separates tokens; there is no quoting or escaping.
/// Token bytes are kept as they are, whether or not they are valid UTF-8.
pub fn tokenize(line: &[u8]) -> Vec<OsString> {
    line.split(|&b| b == DELIMITER)
        .filter(|word| !word.is_empty())
        .map(|word| OsString::from_vec(word.to_vec()))
        .collect()
}

/// Reads one line, without its terminator. Returns `None` at end of input.
pub fn read_line<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Option<Vec<u8>>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }

    Ok(Some(buf))
}
