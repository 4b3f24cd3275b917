use crate::catalog::services::{DropdownView, DropdownViewModel};
use crate::ports::outbound::DropdownPresenter;
use owo_colors::OwoColorize;

/// StderrDropdownPresenter renders each dropdown as one line on stderr
///
/// The selected value is highlighted, locked dropdowns carry a lock marker
/// and dropdowns whose selection was just cleared are flagged.
pub struct StderrDropdownPresenter;

impl StderrDropdownPresenter {
    pub fn new() -> Self {
        Self
    }

    fn render_line(view: &DropdownView) -> String {
        let options = if view.options.is_empty() {
            "(no compatible option)".dimmed().to_string()
        } else {
            view.options
                .iter()
                .map(|option| {
                    if view.selected.as_deref() == Some(option.as_str()) {
                        format!("[{}]", option).cyan().bold().to_string()
                    } else {
                        option.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        };

        let mut line = format!("   {:<12} All {}", view.dimension.display_name(), options);
        if view.locked {
            line.push_str(" 🔒");
        }
        if view.reset {
            line.push_str(&format!(" {}", "↺ reset".yellow()));
        }
        line
    }
}

impl Default for StderrDropdownPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl DropdownPresenter for StderrDropdownPresenter {
    fn render(&self, model: &DropdownViewModel) {
        eprintln!("🎛  Filters:");
        for view in &model.views {
            eprintln!("{}", Self::render_line(view));
        }
        if !model.combination_valid {
            eprintln!("{}", "   No project matches this combination".yellow());
        }
    }
}

/// SilentDropdownPresenter discards dropdown renders.
pub struct SilentDropdownPresenter;

impl DropdownPresenter for SilentDropdownPresenter {
    fn render(&self, _model: &DropdownViewModel) {}
}
