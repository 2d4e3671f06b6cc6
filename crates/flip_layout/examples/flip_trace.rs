//! Flip Trace - headless walk through a page flip
//!
//! Lays out a list of labelled pages, scrolls it in fixed steps and prints,
//! for every step, which pages are attached, at what rotation, and how many
//! draw commands the frame recorded.
//!
//! Run with: cargo run -p flip_layout --example flip_trace -- --axis horizontal --items 4
//! Logs: RUST_LOG=flip_layout=trace cargo run -p flip_layout --example flip_trace

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use flip_core::{Color, DrawCommand, DrawContext, Point, Rect, RecordingContext, Size, TextStyle};
use flip_layout::prelude::*;
use flip_layout::RenderPlan;

#[derive(Parser, Debug)]
#[command(name = "flip_trace", about = "Trace a flip list frame by frame")]
struct Args {
    /// TOML file with a flip config (axis, camera_distance)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Scroll axis, overrides the config file
    #[arg(long)]
    axis: Option<Axis>,

    /// Number of pages
    #[arg(long, default_value_t = 3)]
    items: usize,

    /// Scroll delta per step, in pixels
    #[arg(long, default_value_t = 20)]
    step: i32,

    #[arg(long, default_value_t = 320.0)]
    width: f32,

    #[arg(long, default_value_t = 200.0)]
    height: f32,
}

const PALETTE: [u32; 4] = [0xE74C3C, 0x3498DB, 0x2ECC71, 0xF1C40F];

struct Card {
    title: String,
    color: Color,
}

impl FlipContent for Card {
    fn draw(&self, ctx: &mut dyn DrawContext, frame: Rect) {
        ctx.fill_rect(frame, self.color);
        let origin = Point::new(frame.center().x - 24.0, frame.center().y);
        ctx.draw_text(&self.title, origin, &TextStyle::new(32.0).with_color(Color::WHITE));
    }
}

fn load_config(args: &Args) -> Result<FlipConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            FlipConfig::from_toml_str(&source)?
        }
        None => FlipConfig::default(),
    };
    if let Some(axis) = args.axis {
        config.axis = axis;
    }
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let size = Size::new(args.width, args.height);

    let pool = RecyclingPool::new(
        || Card {
            title: String::new(),
            color: Color::BLACK,
        },
        |card: &mut Card, index| {
            card.title = format!("{:02}", index + 1);
            card.color = Color::from_hex(PALETTE[index % PALETTE.len()]);
        },
    );

    let mut list = FlipCoordinator::new(config, pool)?;
    list.on_layout(args.items, Viewport::new(size));
    tracing::info!(
        axis = ?config.axis,
        items = args.items,
        max_offset = list.max_offset(),
        "flip list ready"
    );

    let step = args.step.max(1);
    let mut ctx = RecordingContext::new(size);
    loop {
        ctx.clear();
        list.draw(&mut ctx);
        print_frame(&list, ctx.commands());

        if list.offset() >= list.max_offset() {
            break;
        }
        let remaining = list.max_offset() - list.offset();
        list.scroll_by(step.min(remaining));
    }

    let stats = list.pool().stats();
    println!(
        "pool: created {} bound {} released {}",
        stats.created, stats.bound, stats.released
    );
    Ok(())
}

fn print_frame(list: &FlipCoordinator<RecyclingPool<Card>>, commands: &[DrawCommand]) {
    let Some(frame) = list.frame() else {
        println!("offset {:>5}  (empty)", list.offset());
        return;
    };

    let pages: Vec<String> = list
        .attached()
        .iter()
        .map(|a| {
            let plan = match RenderPlan::new(&a.spec, a.spec.bounds) {
                RenderPlan::Empty => "empty",
                RenderPlan::Flat => "flat",
                RenderPlan::Folding { .. } => "folding",
                RenderPlan::Folded { .. } => "folded",
            };
            format!("{}@{}° {}", a.content().title, a.spec.degree, plan)
        })
        .collect();

    println!(
        "offset {:>5}  angle {:>3}°  {:<8}  [{}]  {} commands",
        list.offset(),
        frame.angle_degrees,
        format!("{:?}", frame.phase()),
        pages.join(", "),
        commands.len()
    );
}
