use std::path::Path;
use std::time::Instant;

use anyhow::{Context, bail};
use elastigroup_integrations::models::Group;
use elastigroup_integrations::registry::{self, FieldRegistry};
use elastigroup_integrations::{GroupWrapper, IntegrationsConfig, ResourceData, setup_fields};
use log::info;

const USAGE: &str = "usage: elastigroup-integrations <validate|create|update|read> <input.json> [settings.json]";

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, input) = match args.as_slice() {
        [command, input, ..] => (command.as_str(), Path::new(input)),
        _ => bail!(USAGE),
    };

    let registry = load_registry(args.get(2).map(Path::new))?;
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let start = Instant::now();
    let output = match command {
        "validate" | "create" | "update" => {
            let data = ResourceData::from_json_str(&content)
                .with_context(|| format!("invalid resource data in {}", input.display()))?;
            registry.validate_all(&data)?;

            let mut wrapper = GroupWrapper::new();
            if command == "update" {
                registry.update_all(&mut wrapper, &data)?;
            } else {
                registry.create_all(&mut wrapper, &data)?;
            }
            serde_json::to_string_pretty(wrapper.group())?
        }
        "read" => {
            let group: Group = serde_json::from_str(&content)
                .with_context(|| format!("invalid group in {}", input.display()))?;
            let mut data = ResourceData::new();
            registry.read_all(&GroupWrapper::from_group(group), &mut data)?;
            serde_json::to_string_pretty(&data.into_value())?
        }
        other => bail!("unknown command {other:?}\n{USAGE}"),
    };

    info!("Ran {command} over {} field(s) in {:?}", registry.len(), start.elapsed());
    println!("{output}");
    Ok(())
}

fn load_registry(settings: Option<&Path>) -> anyhow::Result<&'static FieldRegistry> {
    let Some(path) = settings else {
        return Ok(registry::global()?);
    };
    let config = IntegrationsConfig::from_json_file(path)
        .with_context(|| format!("failed to load settings from {}", path.display()))?;
    Ok(registry::install(setup_fields(&config)?)?)
}
