use chunkdb_core::error::{Error, Result};

/// Windowing parameters for line-based chunking.
///
/// `chunk_size` is the number of lines per window, `overlap` the number
/// of lines shared between adjacent windows. Invariant:
/// `chunk_size > 0` and `overlap < chunk_size`, so the window always
/// advances by at least one line.
#[derive(Debug, Clone, Copy)]
pub struct ChunkerConfig {
    chunk_size: usize,
    overlap: usize,
}

impl ChunkerConfig {
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(Error::InvalidConfig(
                "chunk_size must be positive".to_string(),
            ));
        }
        if overlap >= chunk_size {
            return Err(Error::InvalidConfig(format!(
                "overlap ({overlap}) must be < chunk_size ({chunk_size})"
            )));
        }
        Ok(Self { chunk_size, overlap })
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn overlap(&self) -> usize {
        self.overlap
    }
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self { chunk_size: 50, overlap: 5 }
    }
}

/// One window of lines. Bounds are 1-based and inclusive.
#[derive(Debug, Clone)]
pub struct LineChunk {
    pub content: String,
    pub start_line: usize,
    pub end_line: usize,
}

/// Splits `content` into overlapping line windows.
///
/// Lines are produced by a naive split on `'\n'`: a trailing newline
/// yields a final empty line, and the empty string counts as a single
/// empty line. Consequently empty content yields exactly one chunk
/// covering lines 1-1. Windows start every `chunk_size - overlap`
/// lines; the last window may be shorter than `chunk_size`.
pub fn chunk_lines(content: &str, config: &ChunkerConfig) -> Vec<LineChunk> {
    let lines: Vec<&str> = content.split('\n').collect();
    let step = config.chunk_size() - config.overlap();
    let mut chunks = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let end = (i + config.chunk_size()).min(lines.len());
        chunks.push(LineChunk {
            content: lines[i..end].join("\n"),
            start_line: i + 1,
            end_line: end,
        });
        i += step;
    }

    chunks
}
