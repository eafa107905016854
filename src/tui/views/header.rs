//! Step indicator

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::tui::app::App;
use crate::wizard::WizardStep;

/// Render the header with the active step highlighted
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let titles = WizardStep::ALL
        .iter()
        .map(|step| format!("{}. {}", step.number(), step.title()));

    let tabs = Tabs::new(titles)
        .select(app.step().number() - 1)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Coggnify X ")
                .title_style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}
