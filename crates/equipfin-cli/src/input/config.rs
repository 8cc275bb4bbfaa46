use equipfin_core::FinancingConfig;
use log::debug;

use super::file;

/// Load the financing config from `path`, or the storefront defaults when absent.
///
/// `.yaml`/`.yml` files are parsed as YAML, everything else as JSON.
pub fn load(path: Option<&str>) -> Result<FinancingConfig, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        debug!("no --config given; using default financing presets");
        return Ok(FinancingConfig::default());
    };

    let (canonical, contents) = file::read_text(path)?;
    let is_yaml = canonical
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let config: FinancingConfig = if is_yaml {
        serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e))?
    } else {
        serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e))?
    };
    config.validate()?;

    debug!("loaded financing config from {}", canonical.display());
    Ok(config)
}
