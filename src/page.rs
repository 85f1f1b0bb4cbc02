//! A static HTML page that can host sparklines.
//!
//! Hover tooltips are pure CSS and clicks are plain links, so the written file works
//! offline without any script.

use crate::error::HostError;
use crate::format::html_escape;
use crate::widget::{Fragment, Host, Mount, Offset};
use log::debug;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
struct Container {
    id: String,
    offset: Offset,
}

#[derive(Debug, Clone)]
struct Mounted {
    parent: String,
    fragment: Fragment,
    /// Absolutely positioned markup (the legend), in page coordinates.
    prelude: Vec<String>,
}

/// In-memory page with named, absolutely placed containers.
#[derive(Debug, Clone, Default)]
pub struct StaticPage {
    title: String,
    containers: Vec<Container>,
    mounted: BTreeMap<usize, Mounted>,
    next_id: usize,
}

impl StaticPage {
    pub fn new<T: Into<String>>(title: T) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Declare a container element at a page offset. Re-adding an id moves it.
    pub fn add_container<S: Into<String>>(&mut self, id: S, offset: Offset) -> &mut Self {
        let id = id.into();
        match self.containers.iter_mut().find(|c| c.id == id) {
            Some(c) => c.offset = offset,
            None => self.containers.push(Container { id, offset }),
        }
        self
    }

    /// Number of sparklines currently attached.
    pub fn len(&self) -> usize {
        self.mounted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mounted.is_empty()
    }

    fn container(&self, id: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == id)
    }

    /// Render the whole document.
    pub fn render(&self) -> String {
        let mut preludes = String::new();
        let mut body = String::new();
        for container in &self.containers {
            let _ = write!(
                body,
                r#"<div id="{id}" class="spark-host" style="left:{l}px;top:{t}px;">"#,
                id = html_escape(&container.id),
                l = container.offset.left,
                t = container.offset.top,
            );
            for m in self.mounted.values().filter(|m| m.parent == container.id) {
                // Hoisted so their page coordinates are not offset by the container.
                for p in &m.prelude {
                    preludes.push_str(p);
                }
                body.push_str(&render_mounted(&m.fragment));
            }
            body.push_str("</div>");
        }

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
{preludes}
{body}
</body>
</html>
"#,
            title = html_escape(&self.title),
            css = inline_css(),
        )
    }

    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), HostError> {
        fs::write(path.as_ref(), self.render())?;
        debug!("wrote page to {}", path.as_ref().display());
        Ok(())
    }
}

impl Host for StaticPage {
    fn append(&mut self, parent: &str, fragment: Fragment) -> Result<Mount, HostError> {
        let container = self
            .container(parent)
            .ok_or_else(|| HostError::UnknownParent(parent.to_string()))?;
        // Sparklines are inline: each one starts where its siblings end.
        let siblings: u32 = self
            .mounted
            .values()
            .filter(|m| m.parent == parent)
            .map(|m| m.fragment.width)
            .sum();
        let canvas = Offset::new(
            container.offset.left + siblings as i32,
            container.offset.top,
        );

        let id = self.next_id;
        self.next_id += 1;
        self.mounted.insert(
            id,
            Mounted {
                parent: parent.to_string(),
                fragment,
                prelude: Vec::new(),
            },
        );
        Ok(Mount { id, canvas })
    }

    fn prepend(&mut self, mount: &Mount, html: String) -> Result<(), HostError> {
        let m = self
            .mounted
            .get_mut(&mount.id)
            .ok_or(HostError::NotMounted(mount.id))?;
        m.prelude.insert(0, html);
        Ok(())
    }

    fn remove(&mut self, mount: &Mount) -> Result<(), HostError> {
        self.mounted
            .remove(&mount.id)
            .map(|_| ())
            .ok_or(HostError::NotMounted(mount.id))
    }
}

fn render_mounted(fragment: &Fragment) -> String {
    let mut out = format!(
        r#"<span class="spark-wrap" style="width:{}px;height:{}px;">{}"#,
        fragment.width, fragment.height, fragment.html
    );
    for r in &fragment.regions {
        let style = format!("left:{}px;width:{}px;", r.x, r.width);
        let tip = format!(r#"<div class="sparktooltip">{}</div>"#, r.tooltip);
        match &r.url {
            Some(url) => {
                let _ = write!(
                    out,
                    r#"<a class="region" data-region="{}" href="{}" style="{style}">{tip}</a>"#,
                    r.index,
                    html_escape(url)
                );
            }
            None => {
                let _ = write!(
                    out,
                    r#"<span class="region" data-region="{}" style="{style}">{tip}</span>"#,
                    r.index
                );
            }
        }
    }
    out.push_str("</span>");
    out
}

fn inline_css() -> &'static str {
    r#"
body { margin: 0; font-family: sans-serif; font-size: 12px; }
.spark-host { position: absolute; white-space: nowrap; }
.spark-wrap { position: relative; display: inline-block; vertical-align: top; }
.sparkline { display: inline-block; }
.region { position: absolute; top: 0; bottom: 0; display: block; }
.region .sparktooltip { display: none; position: absolute; top: 100%; left: 0; z-index: 10;
    background: #fff; border: 1px solid #ccc; padding: 4px 8px; white-space: nowrap; }
.region:hover .sparktooltip { display: block; }
.sparktooltip h4 { margin: 0 0 4px; }
.sparktooltip ul { list-style: none; margin: 0; padding: 0; }
.sparktooltip caption { font-weight: bold; text-align: left; }
.sparktooltip th { text-align: left; padding-right: 8px; }
.progressbar { position: relative; width: 200px; height: 16px; margin: 2px 0; background: #eee; }
.progressbar div { height: 100%; background: #08c; }
.progressbar span { position: absolute; left: 4px; top: 0; line-height: 16px; }
.legend { list-style: none; margin: 0; padding: 0; font-size: 10px; pointer-events: none; }
.legend span { display: inline-block; width: 8px; height: 8px; }
"#
}
