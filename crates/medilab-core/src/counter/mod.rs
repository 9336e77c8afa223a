//! Animated statistic counters
//!
//! Counters on the landing page ("500,000+ tests per year", "99.8% accuracy")
//! count up from zero with a decelerating curve once they scroll into view.
//!
//! # Layers
//!
//! ## Atoms
//! - `easing` - Pure easing curves (quartic ease-out by default)
//! - `timing` - Progress calculation and frame clocks
//! - `format` - Display formats and number rendering
//! - `cancel` - Cancellation token tied to an element's lifetime
//!
//! ## Molecules
//! - `target` - Typed counter description parsed from element attributes
//! - `animation` - Lazy frame producer combining the atoms
//! - `registry` - Single-shot start per element, driven by visibility
//!
//! # Usage
//!
//! ```
//! use medilab_core::counter::{animate, CounterSpec, DisplayFormat, ManualClock};
//!
//! let spec = CounterSpec::new(500_000, DisplayFormat::CommaPlus);
//! let frames: Vec<_> = animate(spec, 2000.0, ManualClock::new(16.0)).collect();
//! assert_eq!(frames.last().unwrap().text, "500,000+");
//! ```

// Atoms
pub mod cancel;
pub mod easing;
pub mod format;
pub mod timing;

// Molecules
pub mod animation;
pub mod registry;
pub mod target;

pub use animation::{animate, AnimationFrame, CounterAnimation};
pub use cancel::CancelToken;
pub use easing::{EasingType, EasingTypeExt};
pub use format::DisplayFormat;
pub use registry::{CounterRegistry, ElementId};
pub use target::{CounterAttributes, CounterSpec};
pub use timing::{FrameClock, ManualClock, SteadyClock};
