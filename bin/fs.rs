use ::log::debug;
use ::log::error;
use ::std::fs::read;
use ::std::path::Path;

pub(super) fn read_hint_stream(path: &Path) -> Option<Vec<u8>> {
    if !path.is_file() {
        error!("Not a file: {}", path.display());
        return None;
    }
    match read(path) {
        Ok(data) => {
            debug!("Read {} bytes from {}", data.len(), path.display());
            Some(data)
        }
        Err(err) => {
            error!("Failed to read {}. Error: {}", path.display(), err);
            None
        }
    }
}
