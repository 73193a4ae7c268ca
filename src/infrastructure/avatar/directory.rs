use std::path::PathBuf;

use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::domain::{AvatarStrategy, NoAvatarUrl, UserIdentity};

/// URL path the avatar directory is served under
pub const DEFAULT_URL_PREFIX: &str = "/avatars/";

/// Strategy that looks for an uploaded file named after the user.
///
/// Files are named `<unique id><anything>`, e.g. `abc123.png`. The directory
/// is listed on every call so newly uploaded files are picked up at once.
#[derive(Debug, Clone)]
pub struct DirectoryLookupStrategy {
    directory: PathBuf,
    url_prefix: String,
}

impl DirectoryLookupStrategy {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            url_prefix: DEFAULT_URL_PREFIX.to_string(),
        }
    }

    pub fn with_url_prefix(mut self, url_prefix: impl Into<String>) -> Self {
        self.url_prefix = url_prefix.into();
        self
    }

    /// First file (by name) whose name starts with `unique_id`
    fn find_file(&self, unique_id: &str) -> Result<Option<String>, walkdir::Error> {
        let entries = WalkDir::new(&self.directory)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in entries {
            let entry = entry?;

            if entry.file_type().is_dir() {
                trace!("Ignoring directory: {:?}", entry.path());
                continue;
            }

            let Some(name) = entry.file_name().to_str() else {
                trace!("Ignoring non UTF-8 file name: {:?}", entry.path());
                continue;
            };

            if name.starts_with(unique_id) {
                return Ok(Some(name.to_string()));
            }
        }

        Ok(None)
    }
}

impl AvatarStrategy for DirectoryLookupStrategy {
    fn resolve(&self, identity: &dyn UserIdentity) -> Result<String, NoAvatarUrl> {
        let unique_id = identity.unique_id();
        if unique_id.is_empty() {
            return Err(NoAvatarUrl);
        }

        match self.find_file(unique_id) {
            Ok(Some(name)) => Ok(format!("{}{}", self.url_prefix, name)),
            Ok(None) => Err(NoAvatarUrl),
            Err(e) => {
                debug!(
                    directory = %self.directory.display(),
                    error = %e,
                    "Avatar directory could not be read"
                );
                Err(NoAvatarUrl)
            }
        }
    }

    fn strategy_name(&self) -> &'static str {
        "directory"
    }
}
