use crate::cli::args::CliArgs;
use crate::output::OutputFormat;
use crate::table::SelectAllPolicy;

pub fn validate(args: &CliArgs) -> Result<(), String> {
    if let Some(raw) = args.url.as_deref() {
        reqwest::Url::parse(raw.trim()).map_err(|e| format!("invalid --url '{raw}': {e}"))?;
    }
    if let Some(timeout) = args.timeout {
        if timeout == 0 {
            return Err("invalid timeout, expected positive integer".to_string());
        }
    }
    if let Some(raw) = args.format.as_deref() {
        OutputFormat::parse(raw)
            .ok_or_else(|| format!("invalid --format '{raw}', expected text or json"))?;
    }
    if let Some(raw) = args.select_all_policy.as_deref() {
        SelectAllPolicy::parse(raw).ok_or_else(|| {
            format!("invalid --select-all-policy '{raw}', expected page-size or visible-rows")
        })?;
    }
    if args.color && args.no_color {
        return Err("use either --color or --no-color, not both".to_string());
    }
    Ok(())
}
