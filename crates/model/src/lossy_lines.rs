use std::io::{self, BufRead};

/// Like [`BufRead::lines`], but bytes that are not valid UTF-8 are replaced
/// with U+FFFD instead of failing the read. Exporters often write comments
/// and names in a local 8-bit encoding.
pub struct LossyLines<R> {
    reader: R,
    buffer: Vec<u8>,
}

pub fn lossy_lines<R: BufRead>(reader: R) -> LossyLines<R> {
    LossyLines {
        reader,
        buffer: Vec::new(),
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.clear();
        match self.reader.read_until(b'\n', &mut self.buffer) {
            Ok(0) => None,
            Ok(_) => {
                let line = self.buffer.strip_suffix(b"\n").unwrap_or(&self.buffer[..]);
                let line = line.strip_suffix(b"\r").unwrap_or(line);
                Some(Ok(String::from_utf8_lossy(line).into_owned()))
            }
            Err(err) => Some(Err(err)),
        }
    }
}
