//! Layout of marked-up titles.
//!
//! Bold runs are drawn in the accent color; the default egui fonts carry a
//! single weight, so color carries the emphasis.

use eframe::egui;
use egui::text::{LayoutJob, TextFormat};
use egui::{Align, Color32, FontId};
use kibou::{StyledTitle, ThemeColors, TitleRun};

/// Builds a centered layout job for `title` at `size` points.
///
/// # Arguments
/// * `title` - Parsed title markup
/// * `size` - Font size, usually from the active breakpoint
/// * `colors` - Site palette; `text_strong` for plain runs, `accent` for bold
pub fn title_job(title: &StyledTitle, size: f32, colors: &ThemeColors) -> LayoutJob {
    styled_job(title, FontId::proportional(size), colors.text_strong, colors.accent)
}

/// Layout job with explicit plain and bold colors.
pub fn styled_job(title: &StyledTitle, font_id: FontId, plain: Color32, bold: Color32) -> LayoutJob {
    let mut job = LayoutJob {
        halign: Align::Center,
        ..Default::default()
    };

    for run in title.runs() {
        match run {
            TitleRun::Text { text, bold: is_bold } => {
                let format = TextFormat {
                    font_id: font_id.clone(),
                    color: if *is_bold { bold } else { plain },
                    ..Default::default()
                };
                job.append(text, 0.0, format);
            }
            TitleRun::LineBreak => {
                job.append(
                    "\n",
                    0.0,
                    TextFormat {
                        font_id: font_id.clone(),
                        color: plain,
                        ..Default::default()
                    },
                );
            }
        }
    }

    job
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_runs_take_the_bold_color() {
        let title = StyledTitle::parse("LPK <b>KIBOU</b><br>GENIUS");
        let job = styled_job(&title, FontId::proportional(20.0), Color32::WHITE, Color32::YELLOW);

        assert_eq!(job.text, "LPK KIBOU\nGENIUS");
        let colors: Vec<Color32> = job.sections.iter().map(|s| s.format.color).collect();
        assert_eq!(
            colors,
            vec![Color32::WHITE, Color32::YELLOW, Color32::WHITE, Color32::WHITE]
        );
    }
}
