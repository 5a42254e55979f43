use anyhow::{Context, Result};
use backdrop_engine::logging::{init_logging, LoggingConfig};
use backdrop_kit::prelude::*;

/// Logical size every sample is laid out at.
const SAMPLE_SIZE: (f32, f32) = (160.0, 64.0);

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let density = parse_density(std::env::args().nth(1))?;
    log::info!("rendering samples at density {}", density.scale());

    let bounds = Rect::from_size(density.to_px(SAMPLE_SIZE.0), density.to_px(SAMPLE_SIZE.1));

    for (name, style) in samples() {
        let mut drawable = style.to_drawable(DrawableConfig { density });
        drawable.set_bounds(bounds);
        let mut drawn = DrawList::new();
        drawable.draw(&mut drawn);

        let mut layer = style.to_layer(density);
        layer.layout(bounds);
        let mut layered = DrawList::new();
        layer.draw(&mut layered);

        println!("── {name}");
        println!("  drawable:");
        print_list(&drawn);
        println!("  layer:");
        print_list(&layered);
    }

    Ok(())
}

fn parse_density(arg: Option<String>) -> Result<Density> {
    let Some(arg) = arg else {
        return Ok(Density::IDENTITY);
    };

    let scale: f32 = arg
        .parse()
        .with_context(|| format!("density must be a number, got {arg:?}"))?;
    anyhow::ensure!(scale.is_finite() && scale > 0.0, "density must be positive, got {scale}");

    Ok(Density::new(scale))
}

fn samples() -> Vec<(&'static str, BackgroundStyle)> {
    let sunset = [
        GradientStop::new(Color::from_argb_u32(0xFFFF_7E5F), 0.0),
        GradientStop::new(Color::from_argb_u32(0xFFFE_B47B), 1.0),
    ];
    let ocean = [
        GradientStop::new(Color::from_argb_u32(0xFF2B_5876), 0.0),
        GradientStop::new(Color::from_argb_u32(0xFF4E_4376), 0.5),
        GradientStop::new(Color::from_argb_u32(0xFF00_C9FF), 1.0),
    ];

    vec![
        ("flat card", BackgroundStyle::new().fill(Color::from_argb_u32(0xFFFA_FAFA)).rounded(CornerRadius::all(8.0))),
        (
            "gradient tab",
            BackgroundStyle::new()
                .gradient(sunset, 45.0)
                .rounded(CornerRadius::new(16.0, 16.0, 0.0, 0.0)),
        ),
        (
            "dashed outline",
            BackgroundStyle::new()
                .border(2.0, Color::from_argb_u32(0xFF61_6161))
                .dashed(6.0, 3.0)
                .rounded(CornerRadius::all(4.0)),
        ),
        (
            "gradient border",
            BackgroundStyle::new()
                .fill(Color::WHITE)
                .border(3.0, Color::BLACK)
                .border_gradient(ocean, 90.0)
                .rounded(CornerRadius::new(24.0, 2.0, 2.0, 24.0)),
        ),
    ]
}

fn print_list(list: &DrawList) {
    if list.is_empty() {
        println!("    (nothing)");
    }

    for cmd in list.items() {
        match cmd {
            DrawCmd::Fill(fill) => {
                println!("    fill   {}  with {}", describe_path(&fill.path), describe_paint(&fill.paint));
            }
            DrawCmd::Stroke(stroke) => {
                let dash = stroke
                    .style
                    .dash
                    .map(|d| format!(" dash {}/{}", d.on, d.off))
                    .unwrap_or_default();
                println!(
                    "    stroke {}  width {}{dash}  with {}",
                    describe_path(&stroke.path),
                    stroke.style.width,
                    describe_paint(&stroke.paint),
                );
            }
        }
    }
}

fn describe_path(path: &Path) -> String {
    let radii: Vec<String> = path.arcs().map(|a| format!("{:.1}", a.radius)).collect();
    if radii.is_empty() {
        format!("rect ({} vertices)", path.vertex_count())
    } else {
        format!("rounded [{}]", radii.join(", "))
    }
}

fn describe_paint(paint: &Paint) -> String {
    match paint {
        Paint::Solid(c) => {
            let (r, g, b, a) = c.to_straight();
            format!("rgba({:.2}, {:.2}, {:.2}, {:.2})", r, g, b, a)
        }
        Paint::LinearGradient(g) => format!(
            "gradient ({:.1}, {:.1}) -> ({:.1}, {:.1}), {} stops",
            g.start.x,
            g.start.y,
            g.end.x,
            g.end.y,
            g.stops.len()
        ),
    }
}
