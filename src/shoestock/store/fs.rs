use super::DataStore;
use crate::error::{Result, StockError};
use crate::format::{self, ParsedInventory, HEADER};
use crate::model::Shoe;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

/// True when the file is non-empty and its last byte is not a newline.
fn needs_leading_newline(file: &mut File) -> Result<bool> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::Start(len - 1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}

impl DataStore for FileStore {
    fn load(&self, strict: bool) -> Result<ParsedInventory> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StockError::FileNotFound(self.path.clone()));
            }
            Err(e) => return Err(StockError::Io(e)),
        };
        format::parse_inventory(&text, strict)
    }

    fn append(&mut self, shoe: &Shoe) -> Result<()> {
        self.ensure_parent()?;
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)?;

        let mut pending = String::new();
        if file.metadata()?.len() == 0 {
            log::debug!("{} is new, writing header", self.path.display());
            pending.push_str(HEADER);
            pending.push('\n');
        } else if needs_leading_newline(&mut file)? {
            pending.push('\n');
        }
        pending.push_str(&format::render_line(shoe));

        // Append mode writes at the end regardless of the read cursor.
        file.write_all(pending.as_bytes())?;
        file.flush()?;
        log::debug!("appended {} to {}", shoe.code, self.path.display());
        Ok(())
    }

    fn rewrite(&mut self, shoes: &[Shoe]) -> Result<()> {
        self.ensure_parent()?;
        let tmp = self.temp_path();
        {
            let mut writer = BufWriter::new(File::create(&tmp)?);
            writer.write_all(format::render_inventory(shoes).as_bytes())?;
            writer.flush()?;
        }
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(StockError::Io(e));
        }
        log::debug!(
            "rewrote {} with {} record(s)",
            self.path.display(),
            shoes.len()
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
