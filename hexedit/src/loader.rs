use crate::app::HexEditApp;
use std::fs;
use std::path::Path;

impl HexEditApp {
    /// Read a file from disk into the grid model wholesale.
    /// Any prior buffer and all caret/selection state are replaced.
    pub(crate) fn open_file(&mut self, path: &Path) {
        match fs::read(path) {
            Ok(bytes) => {
                self.model.load(bytes);
                self.file_name = Some(path.file_name().map_or_else(
                    || "Untitled".to_string(),
                    |n| n.to_string_lossy().into_owned(),
                ));
                self.file_path = Some(path.to_path_buf());
            }
            Err(err) => {
                self.error.replace(format!("Error opening file: {err}"));
            }
        }
    }

    /// Write the buffer back verbatim - raw bytes, no framing.
    pub(crate) fn save_file(&mut self, path: &Path) {
        if let Err(err) = fs::write(path, self.model.bytes()) {
            self.error.replace(format!("Error saving file: {err}"));
        } else {
            self.file_path = Some(path.to_path_buf());
        }
    }

    /// Drop the buffer and forget the file.
    pub(crate) fn close_file(&mut self) {
        self.model.load(Vec::new());
        self.file_name = None;
        self.file_path = None;
    }
}
