use std::env;
use std::fs;
use std::path::PathBuf;

use foundation::math::Projection;
use render::{ColorScheme, FrameBudget, LegendCache, MapView, PaletteConfig, RenderMode};
use survey::SurveyDescriptor;
use tools::export::export_png;
use tools::synth::{DEMO_BODY, DEMO_BODY_NAME, demo_survey};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let mut args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(usage());
    }

    let cmd = args[1].clone();
    args.drain(0..2);

    match cmd.as_str() {
        "render" => cmd_render(args),
        "legend" => cmd_legend(args),
        "survey" => cmd_survey(args),
        _ => Err(usage()),
    }
}

fn usage() -> String {
    concat!(
        "usage: surveymap <command>\n",
        "\n",
        "  render <out_dir> [--width N] [--height N] [--projection rectangular|kavrayskiy|polar]\n",
        "         [--mode elevation|slope|biome] [--grey] [--center LON,LAT] [--budget ROWS]\n",
        "      render the demo survey progressively and export a PNG\n",
        "  legend <out_dir> [--min METERS] [--max METERS] [--grey]\n",
        "      export the elevation legend strip for a value range\n",
        "  survey <out.json>\n",
        "      write the demo survey descriptor as JSON\n",
    )
    .to_string()
}

fn cmd_render(args: Vec<String>) -> Result<(), String> {
    if args.is_empty() {
        return Err(usage());
    }
    let out_dir = PathBuf::from(&args[0]);

    let mut width: u32 = 720;
    let mut height: u32 = 0;
    let mut projection = Projection::Rectangular;
    let mut mode = RenderMode::Elevation;
    let mut scheme = ColorScheme::Color;
    let mut center: Option<(f64, f64)> = None;
    let mut budget_rows: u32 = 30;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--width" => width = parse_value(&args, &mut i, "--width")?,
            "--height" => height = parse_value(&args, &mut i, "--height")?,
            "--projection" => {
                let name: String = parse_value(&args, &mut i, "--projection")?;
                projection = parse_projection(&name)?;
            }
            "--mode" => {
                let name: String = parse_value(&args, &mut i, "--mode")?;
                mode = parse_mode(&name)?;
            }
            "--grey" => scheme = ColorScheme::Grayscale,
            "--center" => {
                let raw: String = parse_value(&args, &mut i, "--center")?;
                center = Some(parse_center(&raw)?);
            }
            "--budget" => budget_rows = parse_value(&args, &mut i, "--budget")?,
            other => return Err(format!("unknown arg: {other}\n\n{}", usage())),
        }
        i += 1;
    }
    if budget_rows == 0 {
        return Err("--budget must be at least 1 row".to_string());
    }

    let data = demo_survey();
    let palette = PaletteConfig {
        scheme,
        ..PaletteConfig::default()
    };

    let mut view = MapView::new(DEMO_BODY, 1440);
    view.set_size(width, height);
    view.set_projection(projection);
    view.set_mode(mode);
    if let Some((lon, lat)) = center {
        view.center_on(lon, lat);
    }

    info!(
        width = view.width(),
        height = view.height(),
        projection = %projection,
        mode = %mode,
        "rendering demo survey"
    );

    // One budgeted slice per simulated frame, the way a host render loop
    // would drive the view.
    let mut frames = 0u64;
    while !view.is_complete() {
        let mut budget = FrameBudget::new(budget_rows);
        let rows = view.advance_with_budget(&data, &palette, &mut budget);
        frames += 1;
        debug!(frame = frames, rows, "advanced");
    }
    info!(frames, "render complete");

    let Some(buffer) = view.buffer() else {
        return Err("render produced no buffer".to_string());
    };
    let path = export_png(buffer, &out_dir, DEMO_BODY_NAME, mode, scheme, projection)
        .map_err(|e| format!("export: {e}"))?;
    info!(path = %path.display(), "map saved");
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_legend(args: Vec<String>) -> Result<(), String> {
    if args.is_empty() {
        return Err(usage());
    }
    let out_dir = PathBuf::from(&args[0]);

    let mut min = -1500.0f64;
    let mut max = 9000.0f64;
    let mut scheme = ColorScheme::Color;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--min" => min = parse_value(&args, &mut i, "--min")?,
            "--max" => max = parse_value(&args, &mut i, "--max")?,
            "--grey" => scheme = ColorScheme::Grayscale,
            other => return Err(format!("unknown arg: {other}\n\n{}", usage())),
        }
        i += 1;
    }

    let palette = PaletteConfig {
        scheme,
        ..PaletteConfig::default()
    };
    let mut cache = LegendCache::new();
    let strip = cache.legend(min, max, scheme, &palette);

    let mut img = image::RgbaImage::new(strip.len() as u32, 1);
    for (x, color) in strip.iter().enumerate() {
        img.put_pixel(x as u32, 0, image::Rgba(color.to_bytes()));
    }

    let grey = match scheme {
        ColorScheme::Grayscale => "-grey",
        ColorScheme::Color => "",
    };
    fs::create_dir_all(&out_dir).map_err(|e| format!("create {out_dir:?}: {e}"))?;
    let path = out_dir.join(format!("legend_{min}_{max}{grey}.png"));
    img.save(&path).map_err(|e| format!("png encode: {e}"))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_survey(args: Vec<String>) -> Result<(), String> {
    if args.is_empty() {
        return Err(usage());
    }
    let out_path = PathBuf::from(&args[0]);

    let descriptor = SurveyDescriptor::from_survey(&demo_survey(), DEMO_BODY_NAME);
    let payload = serde_json::to_string_pretty(&descriptor).map_err(|e| format!("json: {e}"))?;
    fs::write(&out_path, payload).map_err(|e| format!("write {out_path:?}: {e}"))?;
    eprintln!("wrote {}", out_path.display());
    Ok(())
}

fn parse_value<T: std::str::FromStr>(
    args: &[String],
    i: &mut usize,
    flag: &str,
) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    *i += 1;
    let Some(raw) = args.get(*i) else {
        return Err(format!("{flag} requires a value"));
    };
    raw.parse()
        .map_err(|e| format!("{flag}: invalid value {raw:?}: {e}"))
}

fn parse_projection(name: &str) -> Result<Projection, String> {
    match name.to_ascii_lowercase().as_str() {
        "rectangular" => Ok(Projection::Rectangular),
        "kavrayskiy" | "kavrayskiyvii" => Ok(Projection::KavrayskiyVii),
        "polar" => Ok(Projection::Polar),
        _ => Err(format!("unknown projection: {name}")),
    }
}

fn parse_mode(name: &str) -> Result<RenderMode, String> {
    match name.to_ascii_lowercase().as_str() {
        "elevation" => Ok(RenderMode::Elevation),
        "slope" => Ok(RenderMode::Slope),
        "biome" => Ok(RenderMode::Biome),
        _ => Err(format!("unknown mode: {name}")),
    }
}

fn parse_center(raw: &str) -> Result<(f64, f64), String> {
    let Some((lon, lat)) = raw.split_once(',') else {
        return Err(format!("--center expects LON,LAT, got {raw:?}"));
    };
    let lon: f64 = lon
        .trim()
        .parse()
        .map_err(|e| format!("--center longitude: {e}"))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|e| format!("--center latitude: {e}"))?;
    Ok((lon, lat))
}
