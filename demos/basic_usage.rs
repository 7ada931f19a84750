// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_context::prelude::*;

fn main() {
    println!("=== Decimal Context Example ===\n");

    // Strict (GDA) value from the Decimal32 preset
    let mut x = Big::with_context(Context::DECIMAL32);
    x.set_parts(123_456_785u64, 4, false);
    println!("Raw result:      {}", x);

    x.finalize(ResultKind::Exact);
    println!("Rounded (7 dig): {}", x);
    println!("Conditions:      {}", x.context.conditions);
    println!("Error:           {:?}\n", x.context.err);

    // Every rounding mode on the same tie
    println!("Rounding 2.5 and -2.5 to one digit:");
    for mode in RoundingMode::ALL {
        let ctx = Context::new(OperatingMode::Strict)
            .with_precision(1)
            .with_rounding_mode(mode);

        let mut pos = Big::with_context(ctx.clone());
        pos.set_parts(25u64, 1, false).round();
        let mut neg = Big::with_context(ctx);
        neg.set_parts(25u64, 1, true).round();

        println!(
            "  {:<14} {:>3} {:>3}",
            mode.to_string(),
            pos.to_string(),
            neg.to_string()
        );
    }

    // Traps promote conditions into errors
    println!("\nTrapping Inexact:");
    let mut trapped = Big::with_context(Context::DECIMAL64.with_traps(Condition::INEXACT));
    trapped.set_parts(12_345_678_901_234_567u64, 0, false).round();
    match trapped.context.status() {
        Ok(()) => println!("  no error"),
        Err(err) => println!("  error: {}", err),
    }

    // Special values print differently per operating mode
    println!("\nSpecial values:");
    for ctx in [Context::default(), Context::DECIMAL64] {
        let mode = ctx.operating_mode;
        let mut inf = Big::with_context(ctx.clone());
        inf.set_inf(true);
        let mut nan = Big::with_context(ctx);
        // sNaN only exists in strict mode
        nan.set_nan(mode == OperatingMode::Strict);
        println!("  {:<10} {} {}", mode.to_string(), inf, nan);
    }

    println!("\n=== Example Complete ===");
}
