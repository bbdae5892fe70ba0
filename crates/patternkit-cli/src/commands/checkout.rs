//! `patternkit checkout` — charge an amount through a payment processor.

use patternkit_adapters::{DirectPaymentProcessor, ExternalPaymentAdapter};
use patternkit_core::prelude::*;

use crate::{
    cli::{CheckoutArgs, ProcessorKind},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(args: CheckoutArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let currency = match &args.currency {
        Some(code) => Currency::new(code)?,
        None => config.currency().with_cli_context(|| "checkout.currency")?,
    };

    if args.processor == ProcessorKind::External && has_sub_cent_part(args.amount) {
        output.warning(&format!(
            "{} will be charged as {:.2}",
            args.amount, args.amount
        ))?;
    }

    let receipt = CheckoutService::new(processor(args.processor))
        .with_currency(currency)
        .checkout(args.amount)?;

    if output.is_json() {
        return output.json(&receipt);
    }

    output.success(&receipt.to_string())?;
    Ok(())
}

fn has_sub_cent_part(amount: f64) -> bool {
    amount.is_finite() && ((amount * 100.0).round() - amount * 100.0).abs() > 1e-6
}

fn processor(kind: ProcessorKind) -> Box<dyn PaymentProcessor> {
    match kind {
        ProcessorKind::External => Box::new(ExternalPaymentAdapter::default()),
        ProcessorKind::Direct => Box::new(DirectPaymentProcessor),
    }
}
