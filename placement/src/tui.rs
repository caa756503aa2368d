// BSD 3-Clause License
//
// Copyright (c) 2025, BlackPortal ○
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this
//    list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
//    this list of conditions and the following disclaimer in the documentation
//    and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its
//    contributors may be used to endorse or promote products derived from
//    this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

//! Terminal front end: four tabs mirroring the classroom presentation, a
//! control panel for the new student and a CGPA vs DSA scatter plot.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::warn;
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Axis, Block, Borders, Cell, Chart, Dataset as ChartDataset, GraphType, Paragraph, Row,
        Table, Tabs, Wrap,
    },
};

use crate::content;
use crate::dataset::{Dataset, FEATURE_NAMES, LABEL_NAME, Outcome};
use crate::errors::SessionError;
use crate::predictor::{CGPA_RANGE, DSA_RANGE, MOCK_RANGE, PROJECTS_RANGE};
use crate::session::{Control, K_MAX, K_MIN, Session};

const MODEL_TAB: usize = 3;
const PAGE_STEPS: i64 = 10;
const FOOTER_HELP: &str =
    "q: Quit  Tab/1-4: Switch tab  Up/Down: Select  Left/Right: Adjust  Enter: Predict  r: Reload";

fn cleared_style() -> Style {
    Style::default().fg(Color::Red)
}

fn not_cleared_style() -> Style {
    Style::default().fg(Color::Blue)
}

fn outcome_style(outcome: Outcome) -> Style {
    match outcome {
        Outcome::Clear => cleared_style(),
        Outcome::NotClear => not_cleared_style(),
    }
}

pub struct Header;

impl Header {
    fn render(f: &mut Frame, area: Rect) {
        let text = vec![
            Line::from(Span::styled(content::TITLE, Style::default().add_modifier(Modifier::BOLD))),
            Line::from(content::SUBTITLE),
            Line::from(Span::styled(content::PRESENTATION_DATE, Style::default().fg(Color::Cyan))),
        ];
        let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::BOTTOM));
        f.render_widget(paragraph, area);
    }
}

pub struct Sidebar;

impl Sidebar {
    fn render(f: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(content::TEAM_LEADER), Line::from(""), Line::from("Members:")];
        lines.extend(content::TEAM_MEMBERS.iter().map(|m| Line::from(*m)));
        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(content::TEAM_HEADER))
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::White));
        f.render_widget(paragraph, area);
    }
}

pub struct ProblemTab;

impl ProblemTab {
    fn render(f: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let mut definition = Vec::new();
        for paragraph in content::PROBLEM_TEXT {
            definition.push(Line::from(paragraph));
            definition.push(Line::from(""));
        }
        let left = Paragraph::new(definition)
            .block(Block::default().borders(Borders::ALL).title(content::PROBLEM_HEADER))
            .wrap(Wrap { trim: true });
        f.render_widget(left, columns[0]);

        let mut problem_type = vec![
            Line::from(Span::styled(content::PROBLEM_TYPE, Style::default().fg(Color::Green))),
            Line::from(""),
        ];
        problem_type.extend(content::PROBLEM_TYPE_TEXT.iter().map(|l| Line::from(*l)));
        let right = Paragraph::new(problem_type)
            .block(Block::default().borders(Borders::ALL).title(content::PROBLEM_TYPE_HEADER))
            .wrap(Wrap { trim: true });
        f.render_widget(right, columns[1]);
    }
}

pub struct DatasetTab;

impl DatasetTab {
    fn render(f: &mut Frame, area: Rect, dataset: &Dataset) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let mut header_cells = vec![Cell::from("#")];
        header_cells.extend(FEATURE_NAMES.iter().map(|name| Cell::from(*name)));
        header_cells.push(Cell::from(LABEL_NAME));
        let header = Row::new(header_cells).style(Style::default().add_modifier(Modifier::BOLD));

        let rows = dataset.records().iter().enumerate().map(|(i, r)| {
            Row::new(vec![
                Cell::from(i.to_string()),
                Cell::from(format!("{:.2}", r.cgpa)),
                Cell::from(r.dsa_problems.to_string()),
                Cell::from(r.projects.to_string()),
                Cell::from(r.mock_score.to_string()),
                Cell::from(r.outcome.label().to_string()).style(outcome_style(r.outcome)),
            ])
        });
        let widths = [
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Length(13),
            Constraint::Length(9),
            Constraint::Length(11),
            Constraint::Length(8),
        ];
        let title = format!("{} ({} Samples)", content::DATASET_HEADER, dataset.len());
        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(table, chunks[0]);

        f.render_widget(Paragraph::new(dataset.summary().to_string()), chunks[1]);
    }
}

pub struct ChallengesTab;

impl ChallengesTab {
    fn render(f: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled(content::CHALLENGES_INTRO, Style::default().fg(Color::Red))),
            Line::from(""),
        ];
        for challenge in content::CHALLENGES {
            lines.push(Line::from(challenge));
            lines.push(Line::from(""));
        }
        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(content::CHALLENGES_HEADER))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }
}

pub struct ControlPanel;

impl ControlPanel {
    fn render(f: &mut Frame, area: Rect, session: &Session, selected: Control) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(5)])
            .split(area);

        let profile = session.profile();
        let mut lines: Vec<Line<'_>> = Control::ALL
            .iter()
            .map(|&control| {
                let (value, bounds) = match control {
                    Control::K => (session.k().to_string(), format!("{}..{}", K_MIN, K_MAX)),
                    Control::Cgpa => (
                        format!("{:.2}", profile.cgpa()),
                        format!("{:.1}..{:.1}", CGPA_RANGE.start(), CGPA_RANGE.end()),
                    ),
                    Control::DsaProblems => (
                        profile.dsa_problems().to_string(),
                        format!("{}..{}", DSA_RANGE.start(), DSA_RANGE.end()),
                    ),
                    Control::Projects => (
                        profile.projects().to_string(),
                        format!("{}..{}", PROJECTS_RANGE.start(), PROJECTS_RANGE.end()),
                    ),
                    Control::MockScore => (
                        profile.mock_score().to_string(),
                        format!("{}..{}", MOCK_RANGE.start(), MOCK_RANGE.end()),
                    ),
                };
                let (marker, style) = if control == selected {
                    ("> ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                } else {
                    ("  ", Style::default().fg(Color::White))
                };
                Line::from(vec![
                    Span::styled(format!("{}{}: ", marker, control.label()), style),
                    Span::styled(value, style.add_modifier(Modifier::BOLD)),
                    Span::styled(format!("  [{}]", bounds), Style::default().fg(Color::DarkGray)),
                ])
            })
            .collect();

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("[ {} ]  (Enter)", content::PREDICT_BUTTON),
            Style::default().fg(Color::Black).bg(Color::Gray),
        )));
        if let Ok(accuracy) = session.model().training_accuracy(session.dataset()) {
            lines.push(Line::from(""));
            lines.push(Line::from(format!(
                "Training accuracy (k = {}): {:.1}%",
                session.k(),
                accuracy * 100.0
            )));
        }

        let controls = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(content::TEST_STUDENT_HEADER));
        f.render_widget(controls, chunks[0]);

        let result = match session.prediction() {
            Some(prediction) => vec![
                Line::from(Span::styled(
                    prediction.outcome.to_string(),
                    outcome_style(prediction.outcome).add_modifier(Modifier::BOLD),
                )),
                Line::from(format!(
                    "{} of {} nearest past students cleared",
                    prediction.cleared_votes,
                    prediction.k()
                )),
            ],
            None => vec![Line::from(Span::styled(
                "Press Enter to predict",
                Style::default().fg(Color::DarkGray),
            ))],
        };
        let metric = Paragraph::new(result)
            .block(Block::default().borders(Borders::ALL).title(content::PREDICTION_LABEL));
        f.render_widget(metric, chunks[1]);
    }
}

/// Points of the CGPA vs DSA scatter plot.
#[derive(Debug, Default, PartialEq)]
pub struct ScatterPoints {
    pub cleared: Vec<(f64, f64)>,
    pub not_cleared: Vec<(f64, f64)>,
    /// Nearest neighbors of the last prediction, if any.
    pub neighbors: Vec<(f64, f64)>,
    pub new_student: (f64, f64),
}

impl ScatterPoints {
    pub fn from_session(session: &Session) -> Self {
        let records = session.dataset().records();
        let point = |i: usize| (records[i].cgpa, f64::from(records[i].dsa_problems));

        let (cleared, not_cleared): (Vec<usize>, Vec<usize>) =
            (0..records.len()).partition(|&i| records[i].outcome == Outcome::Clear);
        let neighbors: Vec<(f64, f64)> = session
            .prediction()
            .map(|p| p.neighbors.iter().map(|n| point(n.index)).collect())
            .unwrap_or_default();
        let profile = session.profile();

        ScatterPoints {
            cleared: cleared.into_iter().map(point).collect(),
            not_cleared: not_cleared.into_iter().map(point).collect(),
            neighbors,
            new_student: (profile.cgpa(), f64::from(profile.dsa_problems())),
        }
    }
}

pub struct ScatterPlot;

impl ScatterPlot {
    fn render(f: &mut Frame, area: Rect, session: &Session) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let points = ScatterPoints::from_session(session);
        let new_student = [points.new_student];

        let mut datasets = vec![
            ChartDataset::default()
                .name("Cleared")
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(cleared_style())
                .data(&points.cleared),
            ChartDataset::default()
                .name("Not Cleared")
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(not_cleared_style())
                .data(&points.not_cleared),
        ];
        if !points.neighbors.is_empty() {
            datasets.push(
                ChartDataset::default()
                    .name("Nearest")
                    .marker(Marker::Braille)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(Color::Green))
                    .data(&points.neighbors),
            );
        }
        datasets.push(
            ChartDataset::default()
                .name("New Student")
                .marker(Marker::Block)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Color::Yellow))
                .data(&new_student),
        );

        let x_bounds = [*CGPA_RANGE.start(), *CGPA_RANGE.end()];
        let y_bounds = [f64::from(*DSA_RANGE.start()), f64::from(*DSA_RANGE.end())];

        let chart = Chart::new(datasets)
            .block(Block::default().borders(Borders::ALL).title(content::PLOT_HEADER))
            .x_axis(
                Axis::default()
                    .title("CGPA")
                    .style(Style::default().fg(Color::White))
                    .bounds(x_bounds)
                    .labels(vec![Span::raw("0"), Span::raw("5"), Span::raw("10")]),
            )
            .y_axis(
                Axis::default()
                    .title("DSA Problems")
                    .style(Style::default().fg(Color::White))
                    .bounds(y_bounds)
                    .labels(vec![Span::raw("0"), Span::raw("250"), Span::raw("500")]),
            );
        f.render_widget(chart, chunks[0]);

        let caption =
            Paragraph::new(content::PLOT_CAPTION).style(Style::default().fg(Color::DarkGray));
        f.render_widget(caption, chunks[1]);
    }
}

pub struct App {
    session: Session,
    selected_tab: usize,
    selected_control: Control,
    status: Option<String>,
}

impl App {
    pub fn new(session: Session) -> Self {
        App { session, selected_tab: 0, selected_control: Control::K, status: None }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    pub fn selected_tab(&self) -> usize {
        self.selected_tab
    }

    pub fn select_tab(&mut self, tab: usize) {
        self.selected_tab = tab.min(content::TAB_TITLES.len() - 1);
    }

    pub fn selected_control(&self) -> Control {
        self.selected_control
    }

    /// Last rejected action, shown in the footer until the next successful one.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn apply<F>(&mut self, action: F)
    where
        F: FnOnce(&mut Session) -> Result<(), SessionError>,
    {
        match action(&mut self.session) {
            Ok(()) => self.status = None,
            Err(e) => {
                warn!("{}", e);
                self.status = Some(e.to_string());
            }
        }
    }

    /// Applies one key press. Returns `false` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let tabs = content::TAB_TITLES.len();
        let control = self.selected_control;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Tab => self.selected_tab = (self.selected_tab + 1) % tabs,
            KeyCode::BackTab => self.selected_tab = (self.selected_tab + tabs - 1) % tabs,
            KeyCode::Char(c @ '1'..='4') => self.select_tab(c as usize - '1' as usize),
            KeyCode::Char('r') => self.apply(|s| s.reload()),
            _ if self.selected_tab != MODEL_TAB => {}
            KeyCode::Up => self.selected_control = control.prev(),
            KeyCode::Down => self.selected_control = control.next(),
            KeyCode::Left | KeyCode::Char('-') => self.apply(|s| s.adjust(control, -1)),
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
                self.apply(|s| s.adjust(control, 1))
            }
            KeyCode::PageDown => self.apply(|s| s.adjust(control, -PAGE_STEPS)),
            KeyCode::PageUp => self.apply(|s| s.adjust(control, PAGE_STEPS)),
            KeyCode::Enter | KeyCode::Char('p') => self.apply(|s| s.predict().map(|_| ())),
            _ => {}
        }
        true
    }

    pub fn render(&self, f: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Length(3), // Tabs
                Constraint::Min(0),    // Body
                Constraint::Length(1), // Footer
            ])
            .split(f.area());

        Header::render(f, rows[0]);

        let tabs = Tabs::new(content::TAB_TITLES.iter().copied())
            .block(Block::default().borders(Borders::ALL))
            .select(self.selected_tab)
            .style(Style::default().fg(Color::White))
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
        f.render_widget(tabs, rows[1]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(28), Constraint::Min(0)])
            .split(rows[2]);
        Sidebar::render(f, body[0]);

        match self.selected_tab {
            0 => ProblemTab::render(f, body[1]),
            1 => DatasetTab::render(f, body[1], self.session.dataset()),
            2 => ChallengesTab::render(f, body[1]),
            _ => {
                let block = Block::default().borders(Borders::TOP).title(content::MODEL_HEADER);
                let inner = block.inner(body[1]);
                f.render_widget(block, body[1]);
                let columns = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
                    .split(inner);
                ControlPanel::render(f, columns[0], &self.session, self.selected_control);
                ScatterPlot::render(f, columns[1], &self.session);
            }
        }

        let footer = match &self.status {
            Some(message) => {
                Paragraph::new(message.as_str()).style(Style::default().fg(Color::Red))
            }
            None => Paragraph::new(FOOTER_HELP).style(Style::default().fg(Color::DarkGray)),
        };
        f.render_widget(footer, rows[3]);
    }

    fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && !self.handle_key(key) {
                        return Ok(());
                    }
                }
            }
        }
    }
}

fn enter_alternate_screen() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Leaves raw mode and the alternate screen when terminal setup failed.
fn restore_terminal_on_err<T>(result: io::Result<T>) -> io::Result<T> {
    if result.is_err() {
        if let Err(e) = disable_raw_mode() {
            warn!("Failed to leave raw mode: {}", e);
        }
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, LeaveAlternateScreen) {
            warn!("Failed to leave alternate screen: {}", e);
        }
    }
    result
}

/// Runs the interactive front end until the user quits and hands the session back.
pub fn init_tui(session: Session) -> io::Result<Session> {
    enable_raw_mode()?;
    let mut terminal = restore_terminal_on_err(enter_alternate_screen())?;

    let mut app = App::new(session);
    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.map(|()| app.into_session())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::SyntheticDatasetConfig;
    use crate::session::DEFAULT_K;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        App::new(Session::new(SyntheticDatasetConfig::new(), DEFAULT_K).unwrap())
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn render_text(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn tabs_and_header_displayed() {
        let app = app();
        let text = render_text(&app, 160, 40);
        assert!(text.contains("Activity 1: Supervised Learning Review"));
        assert!(text.contains("1c: Dummy Dataset"));
        assert!(text.contains("Interactive KNN Model"));
        assert!(text.contains("Team Leader: Bibek Nandi"));
        assert!(text.contains("a. Define the Problem"));
    }

    #[test]
    fn dataset_tab_shows_summary() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        let text = render_text(&app, 160, 45);
        assert!(text.contains("DSA_Problems"));
        assert!(text.contains(&app.session().dataset().summary().to_string()));
    }

    #[test]
    fn challenges_tab() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        let text = render_text(&app, 160, 40);
        assert!(text.contains("Key Technical Hurdles"));
    }

    #[test]
    fn model_tab_predicts_on_enter() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        let text = render_text(&app, 160, 40);
        assert!(text.contains("Press Enter to predict"));
        assert!(text.contains("Spatial Distribution"));

        assert!(press(&mut app, KeyCode::Enter));
        let outcome = app.session().prediction().unwrap().outcome;
        let text = render_text(&app, 160, 40);
        assert_eq!(outcome, Outcome::Clear);
        assert!(text.contains("CLEAR"));
        assert!(!text.contains("NOT CLEAR"));
        assert!(text.contains("2 of 3 nearest past students cleared"));
        assert!(text.contains(content::MODEL_HEADER));
    }

    #[test]
    fn controls_only_react_on_model_tab() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        assert_eq!(app.session().k(), 3);

        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.session().k(), 5);

        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_control(), Control::Cgpa);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.session().profile().cgpa(), 7.4);
        assert!(app.status().is_none());
    }

    #[test]
    fn failed_setup_error_is_returned() {
        let result: io::Result<()> =
            restore_terminal_on_err(Err(io::Error::new(io::ErrorKind::Other, "no tty")));
        let err = result.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert_eq!(err.to_string(), "no tty");
        assert_eq!(restore_terminal_on_err(Ok(7)).unwrap(), 7);
    }

    #[test]
    fn tab_navigation_and_quit() {
        let mut app = app();
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.selected_tab(), 3);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.selected_tab(), 0);
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert!(!press(&mut app, KeyCode::Esc));
    }

    #[test]
    fn scatter_points_follow_session() {
        let mut app = app();
        let points = ScatterPoints::from_session(app.session());
        assert_eq!(points.cleared.len() + points.not_cleared.len(), 30);
        assert!(points.neighbors.is_empty());
        assert_eq!(points.new_student, (7.5, 250.0));

        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Enter);
        let points = ScatterPoints::from_session(app.session());
        assert_eq!(points.neighbors.len(), 3);
    }
}
