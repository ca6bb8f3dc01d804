use std::fmt::Write;
use std::path::Path;

use anyhow::Context;

use crate::config;
use crate::validate;
use crate::view::{SwapInputs, SwapViewModel, SwapViewState};

/// Entry point for the `render` command.
pub fn run(path: &Path, config_path: Option<&Path>, format: &str) -> anyhow::Result<()> {
    let inputs = validate::load_and_validate(path).map_err(|errs| {
        anyhow::anyhow!(
            "Cannot render invalid snapshot:\n{}",
            errs.iter()
                .map(|e| format!("  - {e}"))
                .collect::<Vec<_>>()
                .join("\n")
        )
    })?;
    let config = config::load(config_path).with_context(|| match config_path {
        Some(p) => format!("loading config {}", p.display()),
        None => "loading default config".to_string(),
    })?;

    let mut vm = SwapViewModel::new(config);
    let state = vm.update(&inputs);

    match format {
        "text" => {
            print!("{}", render_text(&inputs, state));
            Ok(())
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(state)?);
            Ok(())
        }
        other => anyhow::bail!("Unknown format '{other}'. Use 'text' or 'json'."),
    }
}

/// Plain-text rendering of the screen, one row per line.
pub fn render_text(inputs: &SwapInputs, state: &SwapViewState) -> String {
    let mut out = String::new();
    let on_off = |disabled: bool| if disabled { "disabled" } else { "enabled" };

    let _ = writeln!(out, "Swap {} -> {}", inputs.token_in, inputs.token_out);
    let _ = writeln!(out, "  Header buttons:   {}", on_off(state.header_buttons_disabled));
    let _ = writeln!(out, "  Amount in:        {}", inputs.current_in);
    let _ = writeln!(out, "  Amount out:       {}", inputs.current_out);
    if let Some(err) = &inputs.input_error {
        let _ = writeln!(out, "  Input error:      {err}");
    }

    match &state.estimate {
        Some(panel) => {
            let _ = writeln!(out, "  Rate:             {}", panel.rate_row);
            if let Some(fee) = &panel.provider_fee {
                let _ = writeln!(out, "  Provider fee:     {fee}");
            }
            if let Some(impact) = &panel.price_impact {
                let _ = writeln!(
                    out,
                    "  Price impact:     {impact} ({:?})",
                    panel.price_impact_tier
                );
            }
            if let Some(min) = &panel.minimum_received {
                let _ = writeln!(out, "  Minimum received: {min}");
            }
            let _ = writeln!(out, "  Routing source:   {}", panel.routing_source);
            if !panel.route.is_empty() {
                let hops: Vec<&str> = panel.route.iter().map(|h| h.label.as_str()).collect();
                let _ = writeln!(out, "  Route:            {}", hops.join(" -> "));
            }
        }
        None => {
            let _ = writeln!(out, "  Estimate:         {}", state.display_rate);
        }
    }

    for button in &state.buttons {
        let mut line = format!("  [{:?}] {}", button.action, on_off(button.disabled));
        if button.loading {
            line.push_str(", loading");
        }
        if let Some(params) = &button.approve {
            let _ = write!(line, " (approve {} {})", params.amount, params.symbol);
        }
        let _ = writeln!(out, "{line}");
    }

    out
}
