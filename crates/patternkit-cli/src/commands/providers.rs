//! `patternkit providers` — email then SMS through one provider family.

use patternkit_adapters::factory_for;
use patternkit_core::application::NotificationService;

use crate::{cli::ProvidersArgs, error::CliResult, output::OutputManager};

pub fn execute(args: ProvidersArgs, output: &OutputManager) -> CliResult<()> {
    let factory = factory_for(args.provider);
    let service = NotificationService::new(factory.as_ref());
    let deliveries = service.send_notification(&args.email, &args.phone, &args.message)?;

    if output.is_json() {
        return output.json(&deliveries);
    }

    output.header(&format!("Provider: {}", service.provider().label()))?;
    for delivery in &deliveries {
        output.success(&delivery.to_string())?;
    }
    Ok(())
}
