//! turning include uris into source text

use crate::error::{MyError, MyResult};
use derive_new::new;
#[cfg(test)]
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub trait Loader {
    /// the text behind `uri`, or a resource error naming it
    fn load(&self, uri: &str) -> MyResult<String>;
}

/// looks next to the working directory first, then under `root`
#[derive(Debug, Clone, new)]
pub struct FileLoader {
    pub root: PathBuf,
}

impl FileLoader {
    fn resolve(&self, uri: &str) -> PathBuf {
        let local = Path::new(uri);
        if local.is_file() {
            local.to_path_buf()
        } else {
            self.root.join(uri)
        }
    }
}

impl Loader for FileLoader {
    fn load(&self, uri: &str) -> MyResult<String> {
        let path = self.resolve(uri);
        log::debug!("loading {:?} from {:?}", uri, path);
        std::fs::read_to_string(&path)
            .map_err(|err| MyError::resource(format!("could not find {:?} ({:?}): {}", uri, path, err)))
    }
}

/// sources held in memory, keyed by uri
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader(pub HashMap<String, String>);

#[cfg(test)]
impl MemoryLoader {
    pub fn with(mut self, uri: impl Into<String>, data: impl Into<String>) -> Self {
        self.0.insert(uri.into(), data.into());
        self
    }
}

#[cfg(test)]
impl Loader for MemoryLoader {
    fn load(&self, uri: &str) -> MyResult<String> {
        self.0
            .get(uri)
            .cloned()
            .ok_or_else(|| MyError::resource(format!("could not find {:?} (in memory)", uri)))
    }
}
