//! sparkbar
//!
//! A lightweight Rust library for rendering compact bar sparklines into HTML pages.
//! Pairs with the `sparkbar` CLI.
//!
//! ### Features
//! - Stacked or plain bar sparklines rendered to SVG or PNG
//! - Hover tooltips as a progress-bar list or a totals table
//! - Colour legend pinned to the chart's top-left corner
//! - Click-through regions that navigate to a per-point URL
//! - Fixed-width history padding for build-over-build dashboards
//!
//! ### Example
//! ```no_run
//! use sparkbar::{Offset, SeriesPoint, Sparkline, StaticPage, WidgetConfig};
//!
//! let config = WidgetConfig::new("history", 120, 20)
//!     .columns(["sql", "cache"])
//!     .push(SeriesPoint::new("build 41", [Some(3.0), Some(1.0)]).with_url("/build/41/"));
//!
//! let mut page = StaticPage::new("Build history");
//! page.add_container("history", Offset::new(40, 80));
//! let widget = Sparkline::create(config, &mut page)?;
//! println!("{}", widget.tooltip(0).unwrap_or_default());
//! page.write_to("history.html")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod error;
pub mod format;
pub mod history;
pub mod models;
pub mod page;
pub mod viz;
pub mod widget;

pub use error::{ConfigurationError, HostError, WidgetError};
pub use models::{SeriesPoint, TooltipStyle, WidgetConfig};
pub use page::StaticPage;
pub use widget::{Host, Location, Mount, Navigator, Offset, Sparkline};
