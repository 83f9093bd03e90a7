//! Human-readable rendering of API results.

use std::fmt::Write;

use bdfd_api::{Argument, Info, NodeTier};

/// Multi-line description of one function or callback.
pub fn info(info: &Info) -> String {
    let mut out = String::new();
    let premium = if info.premium() { "yes" } else { "no" };
    let _ = writeln!(out, "{}", info.tag());
    if !info.description().is_empty() {
        let _ = writeln!(out, "  {}", info.description());
    }
    let _ = writeln!(out, "  Intents: {}", info.intents());
    let _ = writeln!(out, "  Premium: {premium}");

    match info.args() {
        None => {}
        Some([]) => {
            let _ = writeln!(out, "  Arguments: none");
        }
        Some(args) => {
            let _ = writeln!(out, "  Arguments:");
            for arg in args {
                let _ = writeln!(out, "    {}", argument(arg));
            }
        }
    }

    out
}

/// One-line summary of an argument.
pub fn argument(arg: &Argument) -> String {
    let mut line = format!("{}: {}", arg.name, arg.kind);
    if arg.required {
        line.push_str(" (required)");
    }
    if arg.repeatable == Some(true) {
        line.push_str(" (repeatable)");
    }
    if let Some(values) = &arg.enum_data {
        let _ = write!(line, " [{}]", values.join(", "));
    }
    if let Some(description) = arg.description.as_deref().filter(|d| !d.is_empty()) {
        let _ = write!(line, " - {description}");
    }
    line
}

/// A tier heading followed by one line per node.
pub fn tier(tier: &NodeTier) -> String {
    let mut out = format!("{} ({} nodes)\n", tier.name, tier.stats.len());
    for node in &tier.stats {
        let _ = writeln!(out, "  {}", node.text);
    }
    out
}
