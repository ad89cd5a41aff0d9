//! Terminal rendering of the forecast form.

use std::io::{self, Write};

use client::FormView;

pub const TITLE: &str = "Sales Revenue Forecaster";
pub const PROMPT: &str = "Ad Spend ($): ";

/// Writes the busy indicator, error region and result region of `view`.
pub fn render_view<W: Write>(view: &FormView, out: &mut W) -> io::Result<()> {
    if view.busy {
        writeln!(out, "{}", view.submit_label)?;
    }
    if let Some(error) = &view.error {
        writeln!(out, "Error: {}", error)?;
    }
    if let Some(result) = &view.result {
        writeln!(out, "Forecast Results")?;
        writeln!(out, "  Predicted Revenue: {}", result.predicted_revenue)?;
        writeln!(out, "  Confidence Score:  {}", result.confidence_score)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use client::{BUSY_LABEL, ResultView, SUBMIT_LABEL};

    fn rendered(view: &FormView) -> String {
        let mut out = Vec::new();
        render_view(view, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_result() {
        let view = FormView {
            input: "4938".to_string(),
            submit_label: SUBMIT_LABEL,
            busy: false,
            error: None,
            result: Some(ResultView {
                predicted_revenue: "$12,345.60".to_string(),
                confidence_score: "87.3%".to_string(),
            }),
        };

        assert_eq!(
            rendered(&view),
            "Forecast Results\n  Predicted Revenue: $12,345.60\n  Confidence Score:  87.3%\n"
        );
    }

    #[test]
    fn test_render_busy() {
        let view = FormView {
            input: "100".to_string(),
            submit_label: BUSY_LABEL,
            busy: true,
            error: None,
            result: None,
        };

        assert_eq!(rendered(&view), "Forecasting...\n");
    }

    #[test]
    fn test_render_error() {
        let view = FormView {
            input: "100".to_string(),
            submit_label: SUBMIT_LABEL,
            busy: false,
            error: Some("Failed to get prediction".to_string()),
            result: None,
        };

        assert_eq!(rendered(&view), "Error: Failed to get prediction\n");
    }
}
