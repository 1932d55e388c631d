//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::ProvisionUseCase;
use crate::config::StaticConfig;
use crate::domain::ports::ProvisionEventSink;
use crate::infrastructure::{AwsCliClient, ConsoleEventSink, ContainerTransformConverter, JsonEventSink};
use crate::ui::UiContext;

/// Type alias for the concrete ProvisionUseCase with all dependencies
pub type ConcreteProvisionUseCase = ProvisionUseCase<ContainerTransformConverter, AwsCliClient>;

/// Create a provision use case with all dependencies wired up
///
/// The converter and the resource client both take their program and
/// arguments from `config`.
pub fn create_provision_use_case(config: &StaticConfig) -> ConcreteProvisionUseCase {
    let converter = ContainerTransformConverter::from_config(&config.converter);
    let client = AwsCliClient::from_config(&config.aws);

    ProvisionUseCase::new(converter, client, config.clone())
}

/// Event sink for the requested output mode
pub fn create_event_sink(ui: &UiContext) -> Box<dyn ProvisionEventSink> {
    if ui.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stdout(ui))
    }
}
