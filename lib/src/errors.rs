// Environmental failures: these abort a conversion run

use std::fmt;

#[derive(Debug)]
pub struct WorkbookReadError {
    pub file: String,
    pub reason: String,
}

impl fmt::Display for WorkbookReadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Failed to read workbook {}: {}", self.file, self.reason)
    }
}

impl std::error::Error for WorkbookReadError {}

#[derive(Debug)]
pub struct OutputWriteError {
    pub file: String,
}

impl fmt::Display for OutputWriteError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Failed to write Turtle output to {}", self.file)
    }
}

impl std::error::Error for OutputWriteError {}
