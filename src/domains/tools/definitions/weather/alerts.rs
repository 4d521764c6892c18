//! Weather alerts tool.

use tracing::{info, warn};

use super::BLOCK_SEPARATOR;
use super::nws::{AlertProperties, NwsClient, text_or};
use crate::domains::tools::{
    ToolDescriptor, ToolHandler, ToolInvocation, ToolProperty, error_payload,
};

/// Weather alerts tool implementation.
#[derive(Debug, Clone)]
pub struct WeatherAlertsTool {
    nws: NwsClient,
}

impl WeatherAlertsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_weatheralerts";

    pub const DESCRIPTOR: ToolDescriptor = ToolDescriptor {
        name: Self::NAME,
        description: "Get the weather alerts of the state",
        properties: &[ToolProperty::string(
            "state",
            "State of weather alerts such as NJ or NY",
        )
        .required()],
    };

    /// Returned when the call fails or the body has no `features`.
    pub const NO_DATA: &'static str = "Unable to fetch alerts or no alerts found.";

    /// Returned when `features` is empty.
    pub const NO_ALERTS: &'static str = "No active alerts for this state.";

    pub fn new(nws: NwsClient) -> Self {
        Self { nws }
    }

    /// Fetch and format the active alerts for a state code.
    pub async fn alerts_for(&self, state: &str) -> String {
        info!("Fetching weather alerts for: {}", state);

        // A failed fetch and a body without `features` read the same.
        let features = match self.nws.active_alerts(state).await {
            Ok(collection) => collection.features,
            Err(_) => None,
        };

        match features {
            None => Self::NO_DATA.to_string(),
            Some(features) if features.is_empty() => Self::NO_ALERTS.to_string(),
            Some(features) => features
                .iter()
                .map(|f| format_alert(&f.properties))
                .collect::<Vec<_>>()
                .join(BLOCK_SEPARATOR),
        }
    }
}

fn format_alert(props: &AlertProperties) -> String {
    format!(
        "Event: {}\nArea: {}\nSeverity: {}\nDescription: {}\nInstructions: {}",
        text_or(&props.event, "Unknown"),
        text_or(&props.area_desc, "Unknown"),
        text_or(&props.severity, "Unknown"),
        text_or(&props.description, "No description available"),
        text_or(&props.instruction, "No specific instructions provided"),
    )
}

#[async_trait::async_trait]
impl ToolHandler for WeatherAlertsTool {
    fn descriptor(&self) -> ToolDescriptor {
        Self::DESCRIPTOR
    }

    async fn handle(&self, context: &str) -> String {
        let state = ToolInvocation::parse(Self::NAME, context)
            .and_then(|inv| inv.require("state").map(str::to_string));

        match state {
            Ok(state) => self.alerts_for(&state).await,
            Err(e) => {
                warn!("{}", e);
                error_payload(e.to_string())
            }
        }
    }
}
