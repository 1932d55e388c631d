//! Console Event Sink
//!
//! One progress line per completed step. With `-v`, each line is followed
//! by the identifiers the step produced.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::entities::CreatedResource;
use crate::domain::ports::{ProvisionEvent, ProvisionEventSink};
use crate::ui::{ColoredText, Icon, UiContext};

/// Event sink that prints human-readable progress
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    color: bool,
    unicode: bool,
    verbose: u8,
}

impl ConsoleEventSink {
    pub fn stdout(ui: &UiContext) -> Self {
        Self::with_writer(io::stdout(), ui.color, ui.unicode, ui.verbose)
    }

    pub fn with_writer<W: Write + Send + 'static>(
        writer: W,
        color: bool,
        unicode: bool,
        verbose: u8,
    ) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            color,
            unicode,
            verbose,
        }
    }

    fn write_line(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }

    fn detail(&self, text: String) -> String {
        format!(
            "  {} {}",
            Icon::Arrow.colored(self.color, self.unicode),
            ColoredText::dim(text).render(self.color)
        )
    }

    fn resource_detail(&self, resource: &CreatedResource) -> String {
        match &resource.id {
            Some(id) if id != &resource.name => {
                self.detail(format!("{} {}: {}", resource.kind, resource.name, id))
            }
            _ => self.detail(format!("{} {}", resource.kind, resource.handle())),
        }
    }
}

impl ProvisionEventSink for ConsoleEventSink {
    fn on_event(&self, event: ProvisionEvent) {
        match event {
            ProvisionEvent::Started {
                compose_file,
                cluster_name,
                service_name,
            } => {
                if self.verbose > 0 {
                    self.write_line(&format!(
                        "{} Provisioning {} on {} from {}",
                        Icon::Progress.colored(self.color, self.unicode),
                        ColoredText::info(service_name).bold().render(self.color),
                        ColoredText::info(cluster_name).render(self.color),
                        compose_file.display()
                    ));
                }
            }

            ProvisionEvent::StepCompleted { step, resource } => {
                self.write_line(&format!(
                    "{} {}",
                    Icon::Success.colored(self.color, self.unicode),
                    step.completion_message()
                ));
                if let Some(resource) = resource.filter(|_| self.verbose > 0) {
                    self.write_line(&self.resource_detail(&resource));
                }
            }

            ProvisionEvent::InstancesLaunched { subnet, count } => {
                if self.verbose > 0 {
                    self.write_line(&self.detail(format!("{} instance(s) in {}", count, subnet)));
                }
            }

            // Reported by the caller together with the orphaned resources
            ProvisionEvent::Failed { .. } => {}

            ProvisionEvent::Completed { resources } => {
                if self.verbose > 0 {
                    self.write_line(&ColoredText::success(format!(
                        "{} resource(s) created.",
                        resources.len()
                    ))
                    .render(self.color));
                }
            }
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbose > 0
    }
}
