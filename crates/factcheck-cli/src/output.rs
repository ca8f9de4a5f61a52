//! Rendering a `ResultView` for the terminal.

use std::fmt::Write;

use factcheck_view::ResultView;

use crate::cli::OutputFormat;

pub fn render(view: &ResultView<'_>, format: OutputFormat, pretty: bool) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(view),
        OutputFormat::Json => serde_json::to_string(view),
        OutputFormat::Text => Ok(render_text(view)),
    }
}

/// Plain-text card list. Empty derived values are left out.
pub fn render_text(view: &ResultView<'_>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Claim: {}", view.claim);
    let _ = writeln!(out, "Confidence: {}%", view.confidence);
    let _ = write!(out, "Domains: {}", view.unique_domains);
    if let Some(coverage) = view.coverage {
        let _ = write!(out, " (coverage {coverage})");
    }
    out.push('\n');
    if let Some(notes) = view.notes {
        let _ = writeln!(out, "Notes: {notes}");
    }

    if view.sources.is_empty() {
        out.push_str("No sources found.\n");
        return out;
    }

    for (index, source) in view.sources.iter().enumerate() {
        let _ = write!(out, "\n[{}] {}", index + 1, source.headline);
        if source.trusted {
            out.push_str(" [trusted]");
        }
        out.push('\n');

        let mut meta = Vec::new();
        if let Some(domain) = source.display_domain.as_deref() {
            meta.push(domain.to_string());
        }
        if let Some(language) = source.source.language.as_deref() {
            meta.push(language.to_string());
        }
        if source.has_published() {
            meta.push(source.published.clone());
        }
        if !meta.is_empty() {
            let _ = writeln!(out, "    {}", meta.join(" • "));
        }

        let _ = writeln!(out, "    {}", source.stance_label);
        if let Some(nli) = source.nli {
            let summary = nli.summary();
            if !summary.is_empty() {
                let _ = writeln!(out, "    {summary}");
            }
        }
        if source.has_snippet() {
            let _ = writeln!(out, "    \"{}\"", source.snippet);
        }
    }
    out
}
