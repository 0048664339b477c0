use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;

use sweatdrop_engine::Rect;
use sweatdrop_engine::logging::{LoggingConfig, init_logging};
use sweatdrop_engine::paint::GradientDef;
use sweatdrop_engine::scene::DrawList;
use sweatdrop_gen::{GenerationOptions, assemble, generate};

const SEED_ENV_VAR: &str = "SWEATDROP_SEED";
const DEFAULT_SEED: u64 = 0x5eed;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let seed = read_seed()?;
    log::info!("seed {seed:#x}");

    // Both variants share one document, so their gradient ids are namespaced.
    let runs = [
        GenerationOptions::ellipse().with_id_namespace("sweat"),
        GenerationOptions::teardrop().with_id_namespace("teardrop"),
    ];

    let mut rng = StdRng::seed_from_u64(seed);
    for options in &runs {
        let drops = generate(options, &mut rng)
            .with_context(|| format!("generating `{}`", options.variant.group_label()))?;
        let mut list = assemble(options, &drops)?;
        report(&mut list);
    }

    Ok(())
}

fn read_seed() -> anyhow::Result<u64> {
    match std::env::var(SEED_ENV_VAR) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{SEED_ENV_VAR}=`{raw}` is not a u64")),
        Err(_) => Ok(DEFAULT_SEED),
    }
}

fn report(list: &mut DrawList) {
    let radial = list
        .gradients()
        .iter()
        .filter(|g| matches!(g, GradientDef::Radial(_)))
        .count();
    log::info!(
        "{}: {} drops, {} gradients ({} radial)",
        list.label(),
        list.groups().len(),
        list.gradients().len(),
        radial
    );

    let groups: Vec<String> = list.groups().iter().map(|g| g.label.clone()).collect();
    let mut extent: Option<Rect> = None;
    for item in list.iter_in_paint_order() {
        let bb = item.shape.bounding_box();
        extent = Some(extent.map_or(bb, |e| e.union(bb)));
        log::debug!(
            "  {} {:<9} [{:.1}, {:.1}, {:.1}, {:.1}] blend {}",
            groups[item.key.group as usize],
            item.key.layer.as_str(),
            bb.x0,
            bb.y0,
            bb.x1,
            bb.y1,
            item.shape.blend_mode
        );
    }

    if let Some(e) = extent {
        log::info!("  extent {:.1} x {:.1} at ({:.1}, {:.1})", e.width(), e.height(), e.x0, e.y0);
    }
}
