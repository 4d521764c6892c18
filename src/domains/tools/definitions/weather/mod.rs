//! NWS weather tools.
//!
//! - `alerts`: active alerts for a state (`get_weatheralerts`)
//! - `forecast`: next forecast periods for a coordinate pair (`get_weatherforecast`)
//! - `nws`: the API client and response models both tools share

pub mod alerts;
pub mod forecast;
pub mod nws;

/// Separator placed between formatted alert or forecast blocks.
pub const BLOCK_SEPARATOR: &str = "\n---\n";

pub use alerts::WeatherAlertsTool;
pub use forecast::WeatherForecastTool;
pub use nws::NwsClient;
