use anyhow::Result;
use oceanchat_core::models::FloatRegistry;

use crate::cli::FloatsArgs;
use crate::output::OutputWriter;
use crate::output_types::{FloatOutput, FloatsOutput};
use crate::render;

pub fn execute(args: FloatsArgs, output: &OutputWriter) -> Result<()> {
    let registry = FloatRegistry::default();

    if output.is_json() {
        return output.result(&FloatsOutput {
            floats: registry
                .records
                .iter()
                .map(|r| FloatOutput {
                    id: r.id.clone(),
                    lat: r.lat,
                    lon: r.lon,
                    region: r.region.clone(),
                })
                .collect(),
            geojson: args.geojson.then(|| registry.to_feature_collection()),
        });
    }

    output.section("Mock ARGO Floats");
    render::render_floats(&registry, output);

    if args.geojson {
        output.section("GeoJSON");
        output.result(&registry.to_feature_collection())?;
    }

    Ok(())
}
