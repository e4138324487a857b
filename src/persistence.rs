// File: src/persistence.rs
use crate::error::{Result, SpellError};
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Reads a word list. Words may be separated by any whitespace.
pub fn load_word_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| SpellError::WordList {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.split_whitespace().map(str::to_string).collect())
}

/// Appends one word per line, creating the list if it does not exist yet.
/// A list whose last line is unterminated gets its newline first.
pub fn append_word(path: &Path, word: &str) -> Result<()> {
    let err = |source| SpellError::Append { path: path.to_path_buf(), source };
    let mut file =
        OpenOptions::new().create(true).read(true).append(true).open(path).map_err(err)?;

    let mut needs_newline = false;
    if file.metadata().map_err(err)?.len() > 0 {
        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1)).map_err(err)?;
        file.read_exact(&mut last).map_err(err)?;
        needs_newline = last[0] != b'\n';
    }
    if needs_newline {
        writeln!(file).map_err(err)?;
    }
    writeln!(file, "{word}").map_err(err)
}

pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| SpellError::Input {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `text` to `path` atomically: the content goes to a temp file in the
/// same directory which is then renamed over the target.
pub fn save_text(path: &Path, text: &str) -> Result<()> {
    let err = |source| SpellError::Output { path: path.to_path_buf(), source };
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir).map_err(err)?;

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(err)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        writer.write_all(text.as_bytes()).map_err(err)?;
        writer.flush().map_err(err)?;
    }
    temp_file.persist(path).map_err(|e| err(e.error))?;
    Ok(())
}
