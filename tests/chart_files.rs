use std::fs;
use std::path::PathBuf;
use sparkbar::viz;
use sparkbar::{SeriesPoint, TooltipStyle, WidgetConfig};

fn sample_config(style: TooltipStyle) -> WidgetConfig {
    let mut cfg = WidgetConfig::new("p", 60, 24).bars(5, 2).columns(["a", "b"]).tooltip(style);
    for (i, v) in [0.2, 0.9, 1.7, 0.0].iter().enumerate() {
        let values = match style {
            TooltipStyle::ProgressList => vec![Some(*v), Some(v / 2.0)],
            TooltipStyle::Table => vec![Some(v / 2.0), Some(v / 2.0)],
        };
        cfg = cfg.push(SeriesPoint { title: format!("p{i}"), url: None, values });
    }
    cfg.push(SeriesPoint::blank())
}

fn write_and_check(cfg: &WidgetConfig, name: &str) {
    let dir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join(name);
    viz::render_to_path(cfg, &path).unwrap();
    let meta = fs::metadata(&path).expect("file created");
    assert!(meta.len() > 0, "chart has content");
}

#[test]
fn svg_and_png_files_are_written() {
    for style in [TooltipStyle::ProgressList, TooltipStyle::Table] {
        let cfg = sample_config(style);
        write_and_check(&cfg, "chart.svg");
        write_and_check(&cfg, "chart.png");
    }
}

#[test]
fn plain_bars_use_bar_colour() {
    let svg = viz::render_svg(&sample_config(TooltipStyle::Table)).unwrap().to_ascii_lowercase();
    assert!(svg.contains("#0088cc"));
    assert!(!svg.contains("#3366cc"));
}

#[test]
fn range_grows_with_tall_stacks() {
    let cfg = sample_config(TooltipStyle::ProgressList);
    let bars = viz::layout(&cfg);
    let range = viz::value_range(&bars);
    assert_eq!(range.min, 0.0);
    assert!((range.max - 2.55).abs() < 1e-9);
}
