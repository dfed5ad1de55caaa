//! Interactive configuration prompts.
//!
//! Used when `generate` runs without `--config`. Every prompt has a
//! default, so the collected document has the same shape a batch-mode
//! document would; resolution and defaulting happen in
//! [`crate::config::resolve_config`] either way.

use std::io::{self, BufRead, Write};

use serde_json::{json, Value};

/// Collect a configuration document from interactive prompts on stdin.
pub fn collect_config() -> anyhow::Result<Value> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Interactive site configuration (press Enter to accept defaults)\n");

    let name = prompt(&mut lines, "Company name", "")?;
    let industry = prompt(&mut lines, "Industry (plumbing, hvac, electrical, roofing, landscaping, cleaning, general)", "general")?;
    let email = prompt(&mut lines, "Contact email", "")?;
    let phone = prompt(&mut lines, "Phone number", "")?;
    let street = prompt(&mut lines, "Street address", "")?;
    let city = prompt(&mut lines, "City", "")?;
    let state = prompt(&mut lines, "State", "")?;
    let zip = prompt(&mut lines, "ZIP code", "")?;
    let license = prompt(&mut lines, "License number", "")?;
    let years = prompt(&mut lines, "Years in business", "0")?;
    let primary_color = prompt(&mut lines, "Primary brand color", "#1d4ed8")?;
    let logo = prompt(&mut lines, "Logo file path (optional)", "")?;
    let areas = prompt(&mut lines, "Service areas (comma separated)", "")?;

    let areas: Vec<String> = areas
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    Ok(json!({
        "company": {
            "name": name,
            "email": email,
            "phone": phone,
            "street": street,
            "city": city.clone(),
            "state": state,
            "zip": zip,
            "license": license,
            "years_in_business": years.parse::<u32>().unwrap_or(0),
        },
        "industry": {"slug": industry},
        "branding": {"primary_color": primary_color, "logo": logo},
        "service_area": {"areas": areas, "primary_city": city},
    }))
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
    default: &str,
) -> io::Result<String> {
    if default.is_empty() {
        print!("{label}: ");
    } else {
        print!("{label} [{default}]: ");
    }
    io::stdout().flush()?;

    let answer = lines.next().transpose()?.unwrap_or_default();
    let answer = answer.trim();
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer.to_string())
    }
}
