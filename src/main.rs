//! `vantage-probe`: orbit a camera from the command line, cast a ray through
//! a pixel, and optionally draw a cube off-screen.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glam::Vec3;
use vantage::camera::{ray_from_screen_pos, CameraMover};
use vantage::gpu::{RenderContext, ViewBinding, MESH_SHADER};
use vantage::options::Options;
use vantage::primitives::{Cube, MeshVertex};
use vantage::scene::DisplayMode;
use vantage::VantageError;

/// Position an orbit camera, cast a ray through a pixel, and optionally
/// draw a cube off-screen.
#[derive(Debug, Parser)]
#[command(name = "vantage-probe", version)]
struct Cli {
    /// Options TOML to start from (defaults otherwise).
    #[arg(long)]
    options: Option<PathBuf>,

    /// Write a default options file to PATH and exit.
    #[arg(long, value_name = "PATH")]
    write_defaults: Option<PathBuf>,

    /// Yaw around the anchor, in degrees.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    yaw: f32,

    /// Pitch around the anchor, in degrees.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pitch: f32,

    /// Move toward the anchor by this distance.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    zoom: f32,

    /// Translate the anchor.
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    pan: Option<Vec<f32>>,

    /// Use the orthographic projection.
    #[arg(long)]
    ortho: bool,

    /// Pixel to cast a ray through (defaults to the viewport center).
    #[arg(long, num_args = 2, value_names = ["X", "Y"])]
    screen: Option<Vec<f32>>,

    /// Viewport size in pixels.
    #[arg(long, num_args = 2, value_names = ["W", "H"], default_values_t = [800u32, 600])]
    viewport: Vec<u32>,

    /// Draw the cube into an off-screen framebuffer.
    #[arg(long)]
    render: bool,

    /// Shading used by `--render`.
    #[arg(long, value_enum, default_value_t = DisplayArg::Normals)]
    display_mode: DisplayArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DisplayArg {
    Position,
    Normals,
    TexCoords,
    VertexColor,
    ShapeColor,
    White,
}

impl From<DisplayArg> for DisplayMode {
    fn from(arg: DisplayArg) -> Self {
        match arg {
            DisplayArg::Position => Self::Position,
            DisplayArg::Normals => Self::Normals,
            DisplayArg::TexCoords => Self::TexCoords,
            DisplayArg::VertexColor => Self::VertexColor,
            DisplayArg::ShapeColor => Self::ShapeColor,
            DisplayArg::White => Self::White,
        }
    }
}

fn build_mover(cli: &Cli, options: &Options, viewport: (u32, u32)) -> CameraMover {
    let mut mover = options.build_mover();
    mover.camera_mut().resize(viewport.0, viewport.1);
    if cli.ortho {
        mover.camera_mut().set_using_orthographic(true);
    }
    if let Some(pan) = cli.pan.as_deref() {
        mover.pan(Vec3::from_slice(pan));
    }
    mover.yaw(cli.yaw);
    mover.pitch(cli.pitch);
    mover.zoom(cli.zoom);
    mover
}

fn probe(cli: &Cli, mover: &CameraMover, viewport: (u32, u32)) {
    let camera = mover.camera();
    let (w, h) = (viewport.0 as f32, viewport.1 as f32);
    let (x, y) = match cli.screen.as_deref() {
        Some([x, y]) => (*x, *y),
        _ => (w * 0.5, h * 0.5),
    };

    log::info!(
        "{} camera: eye {:?}, look {:?}, up {:?}",
        if camera.is_orthographic() { "orthographic" } else { "perspective" },
        camera.eye_vec(),
        camera.look_vec(),
        camera.up_vec()
    );
    log::info!(
        "yaw {:.3} rad, pitch {:.3} rad, offset {:.3}, anchor {:?}",
        mover.yaw_radians(),
        mover.pitch_radians(),
        mover.offset_from_anchor(),
        mover.anchor_point()
    );

    let ray = ray_from_screen_pos(camera, x, y, w, h);
    log::info!(
        "ray through ({x}, {y}): origin {:?}, direction {:?}",
        ray.origin(),
        ray.direction()
    );
    match mover.intersect_plane_at_anchor(&ray) {
        Some(hit) => log::info!("anchor plane hit at {hit:?}"),
        None => log::info!("ray misses the anchor plane"),
    }
}

async fn render_cube(
    mover: &CameraMover,
    viewport: (u32, u32),
    mode: DisplayMode,
) -> Result<(), VantageError> {
    let context = RenderContext::new_headless().await?;
    let framebuffer = context.create_framebuffer(viewport)?;
    let program = context.create_program("Mesh Shader", MESH_SHADER)?;
    let vertex_array = context.create_vertex_array(
        &program,
        MeshVertex::STRIDE,
        &MeshVertex::elements(),
    )?;

    let mut view = ViewBinding::new(&context.device, mover.camera());
    view.update_display(&context.queue, mode, [0.8, 0.8, 0.8, 1.0]);
    let pipeline = context.create_pipeline(
        "Mesh Pipeline",
        &program,
        &vertex_array,
        &[view.layout()],
    )?;

    let cube = Cube::new();
    let vbo = context.create_vbo("Cube Vertices", &cube.vertices());
    let ibo = context.create_ibo("Cube Indices", cube.indices());

    let mut encoder = context.create_encoder();
    {
        let mut pass = framebuffer.begin_pass(&mut encoder);
        pass.set_pipeline(&pipeline);
        pass.set_bind_group(0, view.bind_group(), &[]);
        vertex_array.draw(&mut pass, &vbo, Some(&ibo), 0..cube.indices().len() as u32);
    }
    context.submit(encoder);

    log::info!(
        "drew {} triangles into {}x{} framebuffer ({mode:?})",
        cube.indices().len() / 3,
        framebuffer.width(),
        framebuffer.height()
    );
    Ok(())
}

fn run(cli: &Cli) -> Result<(), VantageError> {
    if let Some(path) = &cli.write_defaults {
        return Options::default().save(path);
    }

    let options = match &cli.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    let viewport = match cli.viewport.as_slice() {
        [w, h] => (*w, *h),
        _ => (800, 600),
    };

    let mover = build_mover(cli, &options, viewport);
    probe(cli, &mover, viewport);

    if cli.render {
        pollster::block_on(render_cube(&mover, viewport, cli.display_mode.into()))?;
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
