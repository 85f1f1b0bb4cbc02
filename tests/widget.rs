use sparkbar::widget::{Fragment, Host, Mount, Navigator, Offset};
use sparkbar::{
    ConfigurationError, HostError, Location, SeriesPoint, Sparkline, StaticPage, TooltipStyle,
    WidgetConfig, WidgetError,
};

fn sample_config() -> WidgetConfig {
    WidgetConfig::new("history", 60, 20)
        .bars(4, 1)
        .columns(["sql", "cache"])
        .push(SeriesPoint::new("build 1", [Some(1.0), Some(2.0)]).with_url("/foo"))
        .push(SeriesPoint::new("build 2", [Some(0.5), Some(0.25)]))
        .push(SeriesPoint::blank())
}

fn page() -> StaticPage {
    let mut page = StaticPage::new("test");
    page.add_container("history", Offset::new(100, 40));
    page
}

/// Host that records every call, standing in for a live page.
#[derive(Default)]
struct RecordingHost {
    appended: Vec<(String, Fragment)>,
    prepended: Vec<String>,
    removed: Vec<usize>,
}

impl Host for RecordingHost {
    fn append(&mut self, parent: &str, fragment: Fragment) -> Result<Mount, HostError> {
        self.appended.push((parent.to_string(), fragment));
        Ok(Mount {
            id: self.appended.len() - 1,
            canvas: Offset::new(7, 9),
        })
    }

    fn prepend(&mut self, _mount: &Mount, html: String) -> Result<(), HostError> {
        self.prepended.push(html);
        Ok(())
    }

    fn remove(&mut self, mount: &Mount) -> Result<(), HostError> {
        self.removed.push(mount.id);
        Ok(())
    }
}

#[derive(Default)]
struct CountingNavigator(Vec<String>);

impl Navigator for CountingNavigator {
    fn assign(&mut self, url: &str) {
        self.0.push(url.to_string());
    }
}

#[test]
fn tooltip_lists_columns_in_legend_order() {
    let mut page = page();
    let w = Sparkline::create(sample_config(), &mut page).unwrap();
    let tip = w.tooltip(0).unwrap();
    // sql=1, cache=2, total=3
    assert!(tip.starts_with("<h4>build 1</h4><ul>"));
    let sql = tip.find("sql (1)").unwrap();
    let cache = tip.find("cache (2)").unwrap();
    assert!(sql < cache);
    assert!(tip.contains(r#"width:33%;"></div><span>sql (1)"#));
    assert!(tip.contains(r#"width:66%;"></div><span>cache (2)"#));
}

#[test]
fn tooltip_displays_rounded_values() {
    let cfg = WidgetConfig::new("history", 20, 10)
        .columns(["a", "b"])
        .push(SeriesPoint::new("p", [Some(0.12345), Some(1.0 / 3.0)]));
    let w = Sparkline::create(cfg, &mut page()).unwrap();
    let tip = w.tooltip(0).unwrap();
    assert!(tip.contains("a (0.123)"));
    assert!(tip.contains("b (0.333)"));
}

#[test]
fn blank_region_has_no_data() {
    let w = Sparkline::create(sample_config(), &mut page()).unwrap();
    assert_eq!(w.tooltip(2), Some("(No data)"));
    assert_eq!(w.tooltip(3), None);
}

#[test]
fn tooltip_at_resolves_pixel_columns() {
    let w = Sparkline::create(sample_config(), &mut page()).unwrap();
    assert_eq!(w.region_at(6), Some(1));
    assert_eq!(w.tooltip_at(6), w.tooltip(1));
    assert_eq!(w.tooltip_at(15), None);
}

#[test]
fn click_with_url_navigates() {
    let w = Sparkline::create(sample_config(), &mut page()).unwrap();
    let mut location = Location::default();
    assert!(w.click(0, &mut location));
    assert_eq!(location.href.as_deref(), Some("/foo"));
}

#[test]
fn click_without_url_is_a_no_op() {
    let w = Sparkline::create(sample_config(), &mut page()).unwrap();
    let mut nav = CountingNavigator::default();
    assert!(!w.click(1, &mut nav));
    assert!(!w.click(2, &mut nav));
    assert!(!w.click(99, &mut nav));
    assert!(!w.click_at(-3, &mut nav));
    assert!(nav.0.is_empty());

    let mut cfg = sample_config();
    cfg.values[1].url = Some(String::new());
    let w = Sparkline::create(cfg, &mut page()).unwrap();
    assert!(!w.click(1, &mut nav));
    assert!(nav.0.is_empty());
}

#[test]
fn click_at_pixel_uses_region() {
    let w = Sparkline::create(sample_config(), &mut page()).unwrap();
    let mut nav = CountingNavigator::default();
    assert!(w.click_at(3, &mut nav));
    assert_eq!(nav.0, vec!["/foo".to_string()]);
}

#[test]
fn legend_is_pinned_to_canvas_offset() {
    let mut host = RecordingHost::default();
    let w = Sparkline::create(sample_config(), &mut host).unwrap();
    assert_eq!(w.legend_position(), Some(Offset::new(7, 9)));
    let legend = w.legend().unwrap();
    assert!(legend.starts_with(
        r#"<ul class="legend" style="position:absolute;left:7px;top:9px;">"#
    ));
    assert!(legend.contains(r#"<li><span style="background-color:#3366cc;"></span> sql</li>"#));
    assert!(legend.contains(r#"<li><span style="background-color:#dc3912;"></span> cache</li>"#));
    assert_eq!(host.prepended, vec![legend.to_string()]);
    assert!(w.markup().starts_with(legend));
}

#[test]
fn container_is_sized_and_appended_to_parent() {
    let mut host = RecordingHost::default();
    let w = Sparkline::create(sample_config(), &mut host).unwrap();
    let (parent, fragment) = &host.appended[0];
    assert_eq!(parent, "history");
    assert!(fragment
        .html
        .starts_with(r#"<span class="sparkline" style="height:20px;line-height:20px;">"#));
    assert!(fragment.html.contains("<svg"));
    assert_eq!(fragment.regions.len(), 3);
    assert_eq!(fragment.regions[0].url.as_deref(), Some("/foo"));
    assert_eq!(fragment.regions[1].x, 5);
    assert_eq!(fragment.regions[2].tooltip, "(No data)");
    w.remove(&mut host).unwrap();
    assert_eq!(host.removed, vec![0]);
}

#[test]
fn table_style_offsets_fields_and_has_no_legend() {
    // one value per column; the table row for A reads the second field
    let cfg = WidgetConfig::new("history", 20, 10)
        .columns(["A", "B"])
        .tooltip(TooltipStyle::Table)
        .push(SeriesPoint::new("t", [Some(2.0), Some(4.0)]));
    let mut host = RecordingHost::default();
    let w = Sparkline::create(cfg, &mut host).unwrap();
    assert_eq!(
        w.tooltip(0).unwrap(),
        "<table><caption>t</caption><tr><th>Total</th><td>6</td></tr>\
         <tr><th>A</th><td>4</td></tr><tr><th>B</th><td>0</td></tr></table>"
    );
    assert!(w.legend().is_none());
    assert!(host.prepended.is_empty());
    assert!(w.svg().to_ascii_lowercase().contains("#0088cc"));
}

#[test]
fn table_style_rejects_a_separate_total() {
    let cfg = WidgetConfig::new("history", 20, 10)
        .columns(["A", "B"])
        .tooltip(TooltipStyle::Table)
        .push(SeriesPoint::new("t", [Some(6.0), Some(2.0), Some(4.0)]));
    let mut host = RecordingHost::default();
    let err = Sparkline::create(cfg, &mut host).unwrap_err();
    assert!(matches!(
        err,
        WidgetError::Config(ConfigurationError::ColumnMismatch {
            point: 0,
            expected: 2,
            found: 3,
        })
    ));
    assert!(host.appended.is_empty());
}

#[test]
fn oversized_layout_is_rejected_before_mounting() {
    let mut host = RecordingHost::default();
    let cfg = sample_config().bars(u32::MAX, 1);
    let err = Sparkline::create(cfg, &mut host).unwrap_err();
    assert!(matches!(
        err,
        WidgetError::Config(ConfigurationError::TooLarge { field: "barWidth", .. })
    ));

    let mut cfg = WidgetConfig::new("history", 60, 20).bars(16_384, 16_384);
    cfg.values = vec![SeriesPoint::blank(); 70_000];
    let err = Sparkline::create(cfg, &mut host).unwrap_err();
    assert!(matches!(
        err,
        WidgetError::Config(ConfigurationError::SpanOverflow { regions: 70_000, .. })
    ));
    assert!(host.appended.is_empty());
}

#[test]
fn empty_series_renders_flat_chart() {
    let cfg = WidgetConfig::new("history", 20, 10).columns(["a"]);
    let w = Sparkline::create(cfg, &mut page()).unwrap();
    assert!(w.svg().contains("</svg>"));
    assert_eq!(w.tooltip(0), None);
    assert_eq!(w.region_at(0), None);
}

#[test]
fn mismatched_columns_fail_fast() {
    let cfg = sample_config().push(SeriesPoint::new("short", [Some(1.0)]));
    let err = Sparkline::create(cfg, &mut page()).unwrap_err();
    assert!(matches!(
        err,
        WidgetError::Config(ConfigurationError::ColumnMismatch {
            point: 3,
            expected: 2,
            found: 1,
        })
    ));
}

#[test]
fn missing_parent_is_reported() {
    let mut cfg = sample_config();
    cfg.parent = "elsewhere".into();
    let err = Sparkline::create(cfg, &mut page()).unwrap_err();
    assert!(matches!(err, WidgetError::Host(HostError::UnknownParent(_))));
}

#[test]
fn widgets_are_independent() {
    let mut page = page();
    let a = Sparkline::create(sample_config(), &mut page).unwrap();
    let b = Sparkline::create(sample_config(), &mut page).unwrap();
    assert_ne!(a.mount().id, b.mount().id);
    assert_eq!(b.legend_position(), Some(Offset::new(160, 40)));
    a.remove(&mut page).unwrap();
    assert_eq!(page.len(), 1);
    assert!(b.click(0, &mut Location::default()));
}
