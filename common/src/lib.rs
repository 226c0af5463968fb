//! Plot Tracker Common Library
//!
//! CLIとWeb(WASM)で共有される区画・畝のモデル、リデューサ、永続化

pub mod types;
pub mod error;
pub mod geometry;
pub mod reducer;
pub mod draw;
pub mod store;
pub mod session;
pub mod overlay;
pub mod config;
pub mod ids;

pub use types::{LatLng, Parcel, ParcelMeta, PlotState, Row, RowMeta, RowMetaPatch};
pub use error::{Error, Result};
pub use geometry::{find_enclosing_parcel, representative_point, Bounds};
pub use reducer::{reduce, Action};
pub use draw::{Draft, DrawController, DrawKind};
pub use store::{decode, decode_or_empty, encode, MemoryStore, StateStore};
pub use session::Session;
pub use overlay::{OverlayLoader, OverlayOutcome, OverlayPhase, OverlayTicket};
pub use config::MapConfig;
pub use ids::new_id;
