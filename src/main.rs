use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{debug, info};
use planar_shapes::geometries::{point, AxisRect, Point, Polygon, Rectangle, Shape, ShapeCollection, Square};
use planar_shapes::report::ShapeReport;

#[derive(Parser)]
#[command(name = "planar-shapes")]
#[command(about = "Measure, report and scale 2D shapes about a shared pivot")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Report and scale the built-in demo scene
    Demo {
        #[command(flatten)]
        scaling: ScalingArgs,
    },
    /// Report and scale shapes given on the command line
    Scale {
        #[command(flatten)]
        scaling: ScalingArgs,

        /// Shapes as `rect:W,H,CX,CY`, `square:X,Y,SIZE` or `poly:X1,Y1;X2,Y2;...`
        #[arg(required = true)]
        shapes: Vec<String>,
    },
}

#[derive(clap::Args)]
struct ScalingArgs {
    /// Pivot x coordinate
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pivot_x: f64,

    /// Pivot y coordinate
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pivot_y: f64,

    /// Uniform scale factor
    #[arg(short, long, default_value_t = 1.5)]
    factor: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    info!("Starting planar-shapes v{}", planar_shapes::VERSION);

    match cli.command {
        Commands::Demo { scaling } => {
            info!("Building demo scene");
            report_and_scale(demo_scene()?, &scaling)
        }
        Commands::Scale { scaling, shapes } => {
            let shapes = shapes
                .iter()
                .map(String::as_str)
                .map(parse_shape)
                .collect::<Result<ShapeCollection>>()?;
            report_and_scale(shapes, &scaling)
        }
    }
}

fn report_and_scale(mut shapes: ShapeCollection, scaling: &ScalingArgs) -> Result<()> {
    println!("{}", ShapeReport::new(&shapes));

    let pivot = point(scaling.pivot_x, scaling.pivot_y);
    info!(
        "Scaling {} shapes by {} about ({}, {})",
        shapes.len(),
        scaling.factor,
        pivot.x,
        pivot.y
    );
    shapes.scale_isotropic(pivot, scaling.factor);

    print!("{}", ShapeReport::new(&shapes));
    Ok(())
}

fn demo_scene() -> Result<ShapeCollection> {
    let mut shapes = ShapeCollection::new();
    shapes.push(Rectangle::from_rect(AxisRect::new(6.0, 7.0, point(11.0, 2.0))));
    shapes.push(Rectangle::from_corners(point(1.0, 2.0), point(4.0, 7.0)));
    shapes.push(Square::from_rect(AxisRect::new(5.0, 2.0, point(0.0, 0.0))));
    shapes.push(Square::new(point(2.0, -1.0), 10.0));
    shapes.push(Polygon::new(vec![
        point(0.0, 0.0),
        point(0.0, 5.0),
        point(7.0, 5.0),
        point(7.0, 0.0),
    ])?);
    shapes.push(Polygon::new(vec![
        point(-2.0, 2.0),
        point(-1.0, 5.0),
        point(2.0, 8.0),
        point(5.0, 7.0),
        point(6.0, 4.0),
        point(4.0, 1.0),
        point(0.0, 0.0),
    ])?);
    Ok(shapes)
}

fn parse_numbers(values: &str) -> Result<Vec<f64>> {
    values
        .split(',')
        .map(|v| {
            v.trim()
                .parse::<f64>()
                .with_context(|| format!("invalid number '{}'", v))
        })
        .collect()
}

fn parse_point(values: &str) -> Result<Point> {
    match parse_numbers(values)?.as_slice() {
        [x, y] => Ok(point(*x, *y)),
        other => bail!("expected a point 'X,Y', got {} numbers", other.len()),
    }
}

fn parse_shape(spec: &str) -> Result<Shape> {
    let (kind, body) = spec
        .split_once(':')
        .with_context(|| format!("shape '{}' is missing a 'kind:' prefix", spec))?;

    let shape: Shape = match kind {
        "rect" => match parse_numbers(body)?.as_slice() {
            [w, h, cx, cy] => Rectangle::new(*w, *h, point(*cx, *cy)).into(),
            _ => bail!("rectangle '{}' needs W,H,CX,CY", spec),
        },
        "square" => match parse_numbers(body)?.as_slice() {
            [x, y, size] => Square::new(point(*x, *y), *size).into(),
            _ => bail!("square '{}' needs X,Y,SIZE", spec),
        },
        "poly" => {
            let vertices = body
                .split(';')
                .map(parse_point)
                .collect::<Result<Vec<_>>>()?;
            Polygon::new(vertices)
                .with_context(|| format!("cannot build polygon '{}'", spec))?
                .into()
        }
        other => bail!("unknown shape kind '{}'", other),
    };

    debug!("Parsed {:?}", shape);
    Ok(shape)
}
