use clap::Args;
use pomotimer_core::input::{max_break_minutes, Durations};

#[derive(Args)]
pub struct ResolveArgs {
    /// Raw focus field text
    #[arg(long, default_value = "25", allow_hyphen_values = true)]
    focus: String,
    /// Raw break field text
    #[arg(long = "break", default_value = "5", allow_hyphen_values = true)]
    break_text: String,
}

pub fn run(args: ResolveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let durations = Durations::resolve(&args.focus, &args.break_text);
    let out = serde_json::json!({
        "focus_min": durations.focus_min,
        "break_min": durations.break_min,
        "max_break_min": max_break_minutes(durations.focus_min),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
