use std::io::{self, BufRead};

/// Iterator over the lines of a reader with permissive UTF-8 decoding.
///
/// Log files occasionally contain stray binary or mis-encoded bytes; those
/// must never abort a scan. Invalid sequences are replaced with U+FFFD and
/// the scan continues, which `BufRead::lines` cannot do (it fails the whole
/// line). Line terminators (`\n` or `\r\n`) are stripped.
pub struct LossyLines<R> {
    reader: R,
}

/// Wrap a buffered reader in a permissive line iterator.
pub fn lossy_lines<R: BufRead>(reader: R) -> LossyLines<R> {
    LossyLines { reader }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => {
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                    if buf.last() == Some(&b'\r') {
                        buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
