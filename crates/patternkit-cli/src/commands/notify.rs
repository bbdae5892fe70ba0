//! `patternkit notify` — one message through one channel.

use patternkit_adapters::creator_for;

use crate::{cli::NotifyArgs, error::CliResult, output::OutputManager};

pub fn execute(args: NotifyArgs, output: &OutputManager) -> CliResult<()> {
    let delivery = creator_for(args.channel).send_notification(&args.message)?;

    if output.is_json() {
        return output.json(&delivery);
    }

    output.success(&delivery.to_string())?;
    Ok(())
}
