mod recipe_source_port;
mod storage_port;
mod transport_port;

pub use recipe_source_port::RecipeSource;
pub use storage_port::Storage;
pub use transport_port::Transport;
