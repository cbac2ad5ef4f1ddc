// ============================================================================
// Basic Usage Example
// ============================================================================

use scaled_money::prelude::*;

fn main() -> Result<(), MoneyError> {
    println!("=== Scaled Money Example ===\n");

    // Add values at different scales
    let usd = iso::USD.to_currency::<NativeCalculator>();
    let price = NativeMoney::new(8499, usd.clone())?; // $84.99
    let fee = NativeMoney::with_scale(1250, usd, 3)?; // $1.250

    let subtotal = add(&price, &fee)?;
    println!(
        "Subtotal: {} minor units at scale {} ({})",
        subtotal.amount(),
        subtotal.scale(),
        subtotal.currency().code()
    );

    // Tip of 18.5%, then back to cents
    let tip = multiply(&subtotal, &ScaledAmount::new(185, 3))?;
    let total = transform_scale(&add(&subtotal, &tip)?, &2, RoundingMode::HalfEven)?;
    println!("Total with tip: {} cents", total.amount());

    // Split three ways; shares always sum to the total
    println!("\n=== Allocation ===");
    let shares = allocate(&total, &[1, 1, 1])?;
    for (index, share) in shares.iter().enumerate() {
        println!("  Diner {}: {} cents", index + 1, share.amount());
    }

    let weighted = allocate(&total, &[50, 30, 20])?;
    println!("\nWeighted 50/30/20:");
    for share in &weighted {
        let units = to_units(share)?;
        println!("  ${}.{:02}", units[0], units[1]);
    }

    // Convert into EUR and into a non-decimal currency
    println!("\n=== Conversion ===");
    let eur = convert(
        &total,
        iso::EUR.to_currency::<NativeCalculator>(),
        &ExchangeRate::new(89, 2).with_source("USD"),
        RoundingMode::HalfEven,
    )?;
    println!("EUR: {} cents", eur.amount());

    let mga = convert(
        &NativeMoney::from_minor(100, &iso::USD),
        iso::MGA.to_currency::<NativeCalculator>(),
        &ExchangeRate::new(4512, 0),
        RoundingMode::HalfEven,
    )?;
    let units = to_units(&mga)?;
    println!("MGA: {} ariary {} iraimbilanja", units[0], units[1]);

    // Currency safety
    if let Err(err) = add(&total, &eur) {
        println!("\nAdding USD to EUR: {}", err);
    }

    // A configured engine: commercial rounding, trimmed results
    println!("\n=== Configured Engine ===");
    let engine = MoneyEngine::<NativeCalculator>::new(
        EngineConfig::commercial().with_trimmed_results(),
    )?;

    let halved = engine.divide(&NativeMoney::from_minor(5, &iso::USD), &2)?;
    println!("5 cents / 2 (half away from zero): {}", halved.amount());

    let trimmed = engine.add(&price, &fee)?;
    println!(
        "Engine sum: {} at scale {} (trimmed from scale 3)",
        trimmed.amount(),
        trimmed.scale()
    );

    // Same engine on arbitrary-precision integers
    let big = MoneyEngine::<BigIntCalculator>::default();
    let huge = BigMoney::from_minor(i64::MAX, &iso::USD);
    let doubled = big.add(&huge, &huge)?;
    println!("\nBigInt: {} + {} = {}", huge.amount(), huge.amount(), doubled.amount());

    Ok(())
}
