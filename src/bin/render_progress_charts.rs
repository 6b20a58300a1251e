use std::fs;
use std::path::PathBuf;

use progress_charts::api::{ChartSet, LineChartRenderer, LineChartStyle, ResizeCoordinator, presets};
use progress_charts::core::Viewport;
use progress_charts::render::CairoRenderer;
use progress_charts::telemetry::init_default_tracing;
use tracing::info;

const DEFAULT_WIDTH: u32 = 600;
const DEFAULT_HEIGHT: u32 = 300;

#[derive(Debug)]
struct CliArgs {
    config_path: Option<PathBuf>,
    viewport: Viewport,
    out_dir: PathBuf,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let chart_set = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            ChartSet::from_json_compat_str(&raw).map_err(|err| err.to_string())?
        }
        None => ChartSet::new(LineChartStyle::default(), presets::dashboard_charts()),
    };

    fs::create_dir_all(&args.out_dir).map_err(|err| {
        format!(
            "failed to create output dir `{}`: {err}",
            args.out_dir.display()
        )
    })?;

    let renderer = LineChartRenderer::new(chart_set.style).map_err(|err| err.to_string())?;
    let mut coordinator = ResizeCoordinator::new(renderer);
    for chart in &chart_set.charts {
        let surface = CairoRenderer::new(1, 1).map_err(|err| err.to_string())?;
        coordinator
            .register(chart, args.viewport, surface)
            .map_err(|err| format!("chart `{}`: {err}", chart.id))?;
    }

    let report = coordinator.attach();
    if let Some((id, err)) = report.failed.first() {
        return Err(format!("chart `{id}` failed to render: {err}"));
    }

    for id in &report.rendered {
        let Some(surface) = coordinator.surface(id) else {
            continue;
        };
        let path = args.out_dir.join(format!("{id}.png"));
        surface.write_png(&path).map_err(|err| err.to_string())?;
        info!(chart = %id, path = %path.display(), "wrote chart png");
        println!("{}", path.display());
    }

    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut config_path = None;
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;
    let mut out_dir = PathBuf::from(".");

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--width" => width = parse_dimension(args.next(), "--width")?,
            "--height" => height = parse_dimension(args.next(), "--height")?,
            "--out-dir" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --out-dir".to_owned())?;
                out_dir = PathBuf::from(value);
            }
            "-h" | "--help" => {
                println!(
                    "usage: render_progress_charts [--config <chart-set.json>] \
                     [--width <px>] [--height <px>] [--out-dir <dir>]"
                );
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument `{other}`")),
        }
    }

    Ok(CliArgs {
        config_path,
        viewport: Viewport::new(width, height),
        out_dir,
    })
}

fn parse_dimension(value: Option<String>, flag: &str) -> Result<u32, String> {
    let value = value.ok_or_else(|| format!("missing value for {flag}"))?;
    match value.parse::<u32>() {
        Ok(px) if px > 0 => Ok(px),
        _ => Err(format!("{flag} must be a positive integer, got `{value}`")),
    }
}
