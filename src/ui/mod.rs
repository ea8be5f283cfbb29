//! Header search controller and the state machines it coordinates.
//!
//! [`HeaderSearch`] owns the query text, the debounce gate, the generation
//! tracker and the results panel. [`ScrollController`] decides where the
//! search box is anchored as the page scrolls. Neither renders anything: they
//! return the transitions a view layer applies.

mod config;
mod frame;
mod navigation;
mod scroll;
mod search;
mod state;
mod visibility;

pub use config::{ScrollConfig, SearchTuning};
pub use frame::FrameCoalescer;
pub use navigation::{Highlight, HighlightMove, Navigation, ResultRow};
pub use scroll::{ScrollController, ScrollDirection, ScrollMeasurement, ScrollMode, ScrollState};
pub use state::{Activation, HeaderSearch};
pub use visibility::{PanelState, PanelTransition, PointerTarget, ResultVisibility};
