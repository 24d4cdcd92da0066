#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod layout;
pub mod layout_dump;
pub mod measure;
pub mod render;
pub mod schema;
pub mod theme;
mod transform;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, LayoutConfig, load_config};
pub use error::DialogError;
pub use layout::{FlowLayout, PlacedNode, layout_dialog};
pub use measure::{BoundaryCache, Measurer};
pub use render::render_svg;
pub use schema::parse_dialog;
pub use theme::Theme;
