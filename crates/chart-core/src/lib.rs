// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the value store, axis scale and chart layout API.

pub mod animation;
pub mod axis;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod scale;
pub mod series;
pub mod store;
pub mod style;
pub mod types;

pub use animation::{RevealSchedule, RevealTimer};
pub use axis::{gridlines, step_for_range};
pub use chart::{BarChart, BarGeometry, BarLayout, GridStroke, GridlineMark, LineChart, LineLayout, LinePoint, Marker};
pub use error::ChartError;
pub use geometry::{CubicSegment, Point};
pub use scale::{ScaleModel, ValueScale};
pub use series::Series;
pub use store::{StoreEvent, SubscriptionId, ValueStore};
pub use style::{BarStyle, Color, LineStyle};
pub use types::DataPoint;
