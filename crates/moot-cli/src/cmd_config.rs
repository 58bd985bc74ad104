use moot_backend::BackendConfig;

pub fn show(config: &BackendConfig) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
