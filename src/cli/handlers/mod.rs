mod board;
mod dates;
mod init;
mod list;
mod suggest;
mod tui;
mod utils;

pub use board::handle_board;
pub use dates::handle_dates;
pub use init::handle_init;
pub use list::handle_list;
pub use suggest::{SuggestParams, handle_suggest};
pub use tui::handle_tui;

use crate::config::NexusConfig;
use crate::error::Result;
use crate::storage::Roadmap;
use std::path::Path;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: NexusConfig,
    pub roadmap: Roadmap,
}

impl CommandContext {
    /// Build the session roadmap from `seed` if given, else the configured
    /// seed file, else the built-in items.
    pub fn new(config: NexusConfig, root: &Path, seed: Option<&Path>) -> Result<Self> {
        let id_length = config.roadmap.id_length;
        let seed_path = seed
            .map(Path::to_path_buf)
            .or_else(|| config.seed_path(root));
        let roadmap = match seed_path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading seed file");
                Roadmap::from_seed_file(&path, id_length)?
            }
            None => Roadmap::seeded(id_length)?,
        };
        Ok(Self { config, roadmap })
    }
}
