#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod biome;
pub mod config;
pub mod export;
pub mod geometry;
pub mod grid;
pub mod input;
pub mod interaction;
pub mod panels;
pub mod raster;
pub mod renderer;
pub mod store;
pub mod tools;
pub mod viewport;

pub use app::GridMapperApp;
pub use config::{ConfigStore, GridConfig};
pub use geometry::{GridDimensions, Layout};
pub use grid::{GridKind, TileCoord, TileMatrix};
pub use interaction::CanvasController;
pub use renderer::GridRenderer;
pub use store::GridStore;
pub use tools::Tool;
pub use viewport::Viewport;
