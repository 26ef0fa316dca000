use std::{fs, process};

use anyhow::{bail, Context, Result};

use dancefloor::{
    floor::{formation::FormationSource, DancerRef},
    svg,
};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

const RENDER_USAGE: &str = "dancefloor render <formation.json> <output.svg>";
const ROTATE_USAGE: &str =
    "dancefloor rotate <formation.json> <angle> <label>[,<label>...] <output.svg>";

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);

    match args.next().as_deref() {
        Some("render") => {
            let source_path = args.next().context(RENDER_USAGE)?;
            let output_path = args.next().context(RENDER_USAGE)?;
            render(&source_path, &output_path, None)
        }
        Some("rotate") => {
            let source_path = args.next().context(ROTATE_USAGE)?;
            let angle: f64 = args
                .next()
                .context(ROTATE_USAGE)?
                .parse()
                .context("angle must be a number of quarter turns")?;
            let labels = args.next().context(ROTATE_USAGE)?;
            let output_path = args.next().context(ROTATE_USAGE)?;
            render(&source_path, &output_path, Some((angle, labels)))
        }
        _ => bail!(
            "Dance floor renderer — draws square dance formations as SVG\n\nUsage:\n  {RENDER_USAGE}\n  {ROTATE_USAGE}"
        ),
    }
}

fn render(source_path: &str, output_path: &str, turn: Option<(f64, String)>) -> Result<()> {
    let source_json =
        fs::read_to_string(source_path).with_context(|| format!("Failed to read {source_path}"))?;
    let source: FormationSource = serde_json::from_str(&source_json)
        .with_context(|| format!("Failed to parse {source_path}"))?;

    let (mut floor, mut registry) = source.build()?;

    if let Some((angle, labels)) = turn {
        let selection: Vec<DancerRef> = labels.split(',').map(DancerRef::from).collect();
        floor.rotate(angle, &selection)?;
    }

    floor.render(&mut registry, &source.surface.id)?;
    let surface = registry
        .get(&source.surface.id)
        .context("surface disappeared after render")?;

    let svg_text = svg::document(surface);
    fs::write(output_path, &svg_text)
        .with_context(|| format!("Failed to write {output_path}"))?;

    eprintln!(
        "Rendered {} dancers from {} -> {}",
        floor.dancers().len(),
        source_path,
        output_path,
    );

    Ok(())
}
