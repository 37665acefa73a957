use anyhow::Result;
use oceanchat_core::config::LayeredConfig;

use crate::cli::ConfigArgs;
use crate::output::OutputWriter;
use crate::output_types::{ConfigEntryOutput, ConfigOutput};

pub fn execute(_args: ConfigArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let map = config.to_inspection_map();

    let mut entries: Vec<ConfigEntryOutput> = map
        .into_iter()
        .map(|(key, (value, source))| ConfigEntryOutput {
            key,
            value,
            source: format!("{:?}", source),
        })
        .collect();
    entries.sort_by(|a, b| a.key.cmp(&b.key));

    if output.is_json() {
        return output.result(&ConfigOutput { entries });
    }

    output.section("Effective Configuration");
    for entry in &entries {
        output.kv(&entry.key, format!("{} ({})", entry.value, entry.source));
    }

    Ok(())
}
