//! The sparkline widget: validate, render, wire tooltips, legend and click-through.

use crate::error::{HostError, WidgetError};
use crate::format::{legend, progress_list_tooltip, table_tooltip};
use crate::models::{TooltipStyle, WidgetConfig};
use crate::viz;
use log::{debug, info};

/// Page position in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Offset {
    pub left: i32,
    pub top: i32,
}

impl Offset {
    pub fn new(left: i32, top: i32) -> Self {
        Self { left, top }
    }
}

/// Where a host placed a widget: a handle for later removal plus the page offset of
/// the rendered canvas at the moment it was attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mount {
    pub id: usize,
    pub canvas: Offset,
}

/// One hoverable, possibly clickable, column of the chart as the host sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Position in the configured points; hosts tag the region element with it.
    pub index: usize,
    pub x: i32,
    pub width: u32,
    pub url: Option<String>,
    pub tooltip: String,
}

/// Everything a host needs to attach one sparkline.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    /// `<span class="sparkline">` wrapping the chart.
    pub html: String,
    pub width: u32,
    pub height: u32,
    pub regions: Vec<Region>,
}

/// The page a sparkline is attached to.
pub trait Host {
    /// Append `fragment` under the element `parent`.
    fn append(&mut self, parent: &str, fragment: Fragment) -> Result<Mount, HostError>;
    /// Insert `html` as the first child of a mounted sparkline.
    fn prepend(&mut self, mount: &Mount, html: String) -> Result<(), HostError>;
    fn remove(&mut self, mount: &Mount) -> Result<(), HostError>;
}

/// Full-page navigation target.
pub trait Navigator {
    fn assign(&mut self, url: &str);
}

/// Records the current page location, like `window.location`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub href: Option<String>,
}

impl Navigator for Location {
    fn assign(&mut self, url: &str) {
        self.href = Some(url.to_string());
    }
}

/// A constructed sparkline. Built once; changing data means building a new one.
#[derive(Debug, Clone)]
pub struct Sparkline {
    config: WidgetConfig,
    tooltips: Vec<String>,
    svg: String,
    html: String,
    legend: Option<String>,
    legend_position: Option<Offset>,
    mount: Mount,
}

impl Sparkline {
    /// Validate `config`, render it and attach it to `host`.
    pub fn create<H: Host + ?Sized>(config: WidgetConfig, host: &mut H) -> Result<Self, WidgetError> {
        config.validate()?;

        let svg = viz::render_svg(&config)?;
        let tooltips: Vec<String> = config
            .values
            .iter()
            .map(|point| {
                let fields = viz::region_fields(point, config.tooltip);
                match config.tooltip {
                    TooltipStyle::ProgressList => {
                        progress_list_tooltip(&point.title, &config.columns, &fields)
                    }
                    TooltipStyle::Table => table_tooltip(&point.title, &config.columns, &fields),
                }
            })
            .collect();

        let html = format!(
            r#"<span class="sparkline" style="height:{h}px;line-height:{h}px;">{svg}</span>"#,
            h = config.height,
        );
        let regions = viz::layout(&config)
            .into_iter()
            .map(|bar| Region {
                index: bar.region,
                x: bar.x,
                width: config.pitch(),
                url: config.values[bar.region].url.clone().filter(|u| !u.is_empty()),
                tooltip: tooltips[bar.region].clone(),
            })
            .collect();

        let mount = host.append(
            &config.parent,
            Fragment {
                html: html.clone(),
                width: config.width,
                height: config.height,
                regions,
            },
        )?;
        debug!("mounted sparkline {} at {:?}", mount.id, mount.canvas);

        // The legend is pinned to wherever the canvas sits right now and never moves.
        let (legend, legend_position) = match config.tooltip {
            TooltipStyle::ProgressList => {
                let pos = mount.canvas;
                let html = legend(&config.columns, Some(pos));
                host.prepend(&mount, html.clone())?;
                (Some(html), Some(pos))
            }
            TooltipStyle::Table => (None, None),
        };

        info!(
            "sparkline under '{}': {} regions, {} columns",
            config.parent,
            config.values.len(),
            config.columns.len()
        );
        Ok(Self {
            config,
            tooltips,
            svg,
            html,
            legend,
            legend_position,
            mount,
        })
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn mount(&self) -> &Mount {
        &self.mount
    }

    /// The chart as an SVG document.
    pub fn svg(&self) -> &str {
        &self.svg
    }

    /// Standalone markup: the legend (if any) followed by the sparkline container.
    pub fn markup(&self) -> String {
        format!("{}{}", self.legend.as_deref().unwrap_or_default(), self.html)
    }

    pub fn region_at(&self, x: i32) -> Option<usize> {
        viz::region_at(&self.config, x)
    }

    /// Tooltip markup for a region.
    pub fn tooltip(&self, region: usize) -> Option<&str> {
        self.tooltips.get(region).map(String::as_str)
    }

    /// Tooltip markup for the region under pixel column `x`.
    pub fn tooltip_at(&self, x: i32) -> Option<&str> {
        self.region_at(x).and_then(|r| self.tooltip(r))
    }

    /// Follow the clicked region's url. Returns `false` when there is nothing to follow.
    pub fn click<N: Navigator + ?Sized>(&self, region: usize, navigator: &mut N) -> bool {
        let Some(url) = self
            .config
            .values
            .get(region)
            .and_then(|p| p.url.as_deref())
            .filter(|u| !u.is_empty())
        else {
            return false;
        };
        debug!("region {region} clicked, navigating to {url}");
        navigator.assign(url);
        true
    }

    pub fn click_at<N: Navigator + ?Sized>(&self, x: i32, navigator: &mut N) -> bool {
        self.region_at(x)
            .is_some_and(|r| self.click(r, navigator))
    }

    /// Positioned legend markup, for `ProgressList` widgets.
    pub fn legend(&self) -> Option<&str> {
        self.legend.as_deref()
    }

    /// Page offset the legend was pinned to at construction.
    pub fn legend_position(&self) -> Option<Offset> {
        self.legend_position
    }

    /// Detach from the host page.
    pub fn remove<H: Host + ?Sized>(self, host: &mut H) -> Result<(), WidgetError> {
        host.remove(&self.mount)?;
        debug!("removed sparkline {}", self.mount.id);
        Ok(())
    }
}
