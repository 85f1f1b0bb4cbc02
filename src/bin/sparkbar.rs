use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use sparkbar::history::pad_history;
use sparkbar::{Location, Offset, Sparkline, StaticPage, WidgetConfig, viz};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "sparkbar",
    version,
    about = "Render bar sparklines with tooltips, a legend and click-through links"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a configuration into a standalone HTML page (and optionally a chart image).
    Render(RenderArgs),
    /// Print the tooltip markup of one region.
    Tooltip(TooltipArgs),
    /// Print the url a click on one region navigates to (nothing if none).
    Click(ClickArgs),
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Widget configuration (JSON).
    #[arg(short, long)]
    config: PathBuf,
    /// Pad or trim the series to this many regions, oldest first.
    #[arg(long)]
    pad: Option<usize>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    input: ConfigArgs,
    /// Output HTML page.
    #[arg(long)]
    out: PathBuf,
    /// Also write the bare chart to this path (.svg or .png).
    #[arg(long)]
    chart: Option<PathBuf>,
    /// Page title.
    #[arg(long, default_value = "Sparkline")]
    title: String,
    /// Page offset of the parent container, as LEFT,TOP.
    #[arg(long, default_value = "16,16", value_parser = parse_offset)]
    offset: Offset,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false, id = "target")]
struct Target {
    /// Region index.
    #[arg(long)]
    region: Option<usize>,
    /// Pixel column within the chart.
    #[arg(long)]
    x: Option<i32>,
}

#[derive(Args, Debug)]
struct TooltipArgs {
    #[command(flatten)]
    input: ConfigArgs,
    #[command(flatten)]
    target: Target,
}

#[derive(Args, Debug)]
struct ClickArgs {
    #[command(flatten)]
    input: ConfigArgs,
    #[command(flatten)]
    target: Target,
}

fn parse_offset(s: &str) -> Result<Offset, String> {
    let (l, t) = s
        .split_once(',')
        .ok_or_else(|| format!("invalid offset '{s}', expected LEFT,TOP"))?;
    let left = l.trim().parse::<i32>().map_err(|e| e.to_string())?;
    let top = t.trim().parse::<i32>().map_err(|e| e.to_string())?;
    Ok(Offset::new(left, top))
}

fn load(args: &ConfigArgs) -> Result<WidgetConfig> {
    let mut config = WidgetConfig::from_json_file(&args.config)?;
    if let Some(n) = args.pad {
        config.values = pad_history(config.values, n);
    }
    Ok(config)
}

/// Build the widget on a scratch page holding only its parent.
fn build(config: WidgetConfig, offset: Offset, title: &str) -> Result<(Sparkline, StaticPage)> {
    let mut page = StaticPage::new(title);
    page.add_container(config.parent.clone(), offset);
    let widget = Sparkline::create(config, &mut page)?;
    Ok((widget, page))
}

fn region(widget: &Sparkline, target: &Target) -> Result<usize> {
    match (target.region, target.x) {
        (Some(r), _) if r < widget.config().values.len() => Ok(r),
        (Some(r), _) => anyhow::bail!("region {} out of range", r),
        (None, Some(x)) => widget
            .region_at(x)
            .ok_or_else(|| anyhow::anyhow!("no region at x={}", x)),
        (None, None) => anyhow::bail!("pass --region or --x"),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Tooltip(args) => cmd_tooltip(args),
        Command::Click(args) => cmd_click(args),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let config = load(&args.input)?;
    if let Some(chart) = args.chart.as_ref() {
        config.validate()?;
        viz::render_to_path(&config, chart)?;
        eprintln!("Wrote chart to {}", chart.display());
    }
    let regions = config.values.len();
    let (_widget, page) = build(config, args.offset, &args.title)?;
    page.write_to(&args.out)?;
    eprintln!("Wrote {} regions to {}", regions, args.out.display());
    Ok(())
}

fn cmd_tooltip(args: TooltipArgs) -> Result<()> {
    let (widget, _) = build(load(&args.input)?, Offset::default(), "")?;
    let r = region(&widget, &args.target)?;
    println!("{}", widget.tooltip(r).unwrap_or_default());
    Ok(())
}

fn cmd_click(args: ClickArgs) -> Result<()> {
    let (widget, _) = build(load(&args.input)?, Offset::default(), "")?;
    let r = region(&widget, &args.target)?;
    let mut location = Location::default();
    if widget.click(r, &mut location)
        && let Some(href) = location.href
    {
        println!("{href}");
    }
    Ok(())
}
