use serde_json::Value;

use equipfin_core::FinancingConfig;

pub fn run_plans(config: &FinancingConfig) -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(config)?)
}
