use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use rational_rt::cli::Args;
use rational_rt::colour::*;
use rational_rt::logger::init_logger;
use rational_rt::{Plane, Point3, Renderer, Scene, Sphere, Vec3};

fn demo_scene(scene: &mut Scene) -> Result<()> {
    scene
	.add(Plane::new(Point3::new(0.0, 0.0, -1.0), Vec3::Z)?.with_colour(GREY))
	.add(Sphere::new(Point3::ORIGIN, 1.0)?.with_colour(RED))
	.add(Sphere::new(Point3::new(-2.2, 1.5, -0.3), 0.7)?.with_colour(GREEN))
	.add(Sphere::new(Point3::new(2.0, 2.5, 0.2), 1.2)?.with_colour(BLUE))
	.add(Sphere::new(Point3::new(0.6, -2.0, -0.7), 0.3)?.with_colour(YELLOW));
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let mut scene = Scene::new();
    scene
	.from(args.from.0)
	.at(args.at.0)
	.set_background(args.background.0);

    if args.spheres.is_empty() {
	info!("no spheres given, drawing the demo scene");
	demo_scene(&mut scene).context("building the demo scene")?;
    } else {
	for sphere in &args.spheres {
	    scene.add(sphere.build().with_context(|| format!("invalid sphere {:?}", sphere))?);
	}
    }

    let mut renderer = Renderer::new(&scene, args.render_config());
    renderer.render().context("rendering")?;
    renderer
	.save(&args.output)
	.with_context(|| format!("saving {}", args.output.display()))?;
    Ok(())
}
