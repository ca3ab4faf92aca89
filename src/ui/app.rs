//! Main TUI application state and logic

use crate::algorithms::Algorithm;
use crate::config::Config;
use crate::input::{self, InputError, SimulationInput};
use crate::navigator::Simulation;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which form field receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Array,
    Target,
}

impl FormField {
    /// The other field
    pub fn toggle(self) -> Self {
        match self {
            FormField::Array => FormField::Target,
            FormField::Target => FormField::Array,
        }
    }
}

/// Raw contents of the input form
#[derive(Debug, Clone, PartialEq)]
pub struct InputForm {
    pub algorithm: Algorithm,
    pub array: String,
    pub target: String,
    pub focused: FormField,
    /// Validation message from the last rejected submission
    pub error: Option<String>,
}

impl InputForm {
    pub fn new(algorithm: Algorithm) -> Self {
        InputForm {
            algorithm,
            array: String::new(),
            target: String::new(),
            focused: FormField::Array,
            error: None,
        }
    }

    fn focused_text_mut(&mut self) -> &mut String {
        match self.focused {
            FormField::Array => &mut self.array,
            FormField::Target => &mut self.target,
        }
    }

    fn switch_field(&mut self) {
        if self.algorithm.needs_target() {
            self.focused = self.focused.toggle();
        }
    }

    /// Validate the current field contents
    pub fn validate(&self) -> Result<SimulationInput, InputError> {
        input::validate(self.algorithm, &self.array, Some(&self.target))
    }
}

/// What the app is currently showing
#[derive(Debug)]
pub enum Screen {
    AlgorithmList,
    Input(InputForm),
    Simulator(Simulation),
}

/// The main application state
pub struct App {
    /// The active screen, owning its form or simulation
    pub screen: Screen,

    /// Highlighted entry on the algorithm list
    pub selected: usize,

    /// Form that started the running simulation, for editing it again
    pub last_form: Option<InputForm>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Delay between steps in auto-play mode
    pub play_interval: Duration,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create an app on the algorithm list, preselecting the configured algorithm
    pub fn new(config: &Config) -> Self {
        let selected = config
            .algorithm
            .and_then(|algorithm| Algorithm::ALL.iter().position(|a| *a == algorithm))
            .unwrap_or(0);

        App {
            screen: Screen::AlgorithmList,
            selected,
            last_form: None,
            should_quit: false,
            status_message: String::from("Choose an algorithm"),
            is_playing: false,
            play_interval: config.play_interval,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Show the input form for `algorithm`
    pub fn open_form(&mut self, algorithm: Algorithm) {
        self.is_playing = false;
        self.screen = Screen::Input(InputForm::new(algorithm));
        self.status_message = format!("Enter input for {}", algorithm.title());
    }

    /// Fill the open form and submit it, as if typed by the user
    pub fn prefill_form(&mut self, array: &str, target: Option<&str>) {
        if let Screen::Input(form) = &mut self.screen {
            form.array = array.to_string();
            form.target = target.unwrap_or_default().to_string();
        }
        self.submit_form();
    }

    /// Validate the open form and start a simulation on success
    fn submit_form(&mut self) {
        let Screen::Input(form) = &mut self.screen else {
            return;
        };

        let input = match form.validate() {
            Ok(input) => input,
            Err(e) => {
                tracing::warn!(algorithm = form.algorithm.slug(), error = %e, "Input rejected");
                form.error = Some(e.to_string());
                self.status_message = "Invalid input".to_string();
                return;
            }
        };

        match Simulation::start(&input) {
            Ok(simulation) => {
                form.error = None;
                self.last_form = Some(form.clone());
                self.status_message = "Ready!".to_string();
                self.screen = Screen::Simulator(simulation);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to start simulation");
                form.error = Some(e.to_string());
            }
        }
    }

    /// Return to the algorithm list, discarding any simulation
    fn back_to_list(&mut self) {
        self.is_playing = false;
        self.last_form = None;
        self.screen = Screen::AlgorithmList;
        self.status_message = "Choose an algorithm".to_string();
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= self.play_interval {
                self.play_tick();
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn play_tick(&mut self) {
        let Screen::Simulator(simulation) = &mut self.screen else {
            self.is_playing = false;
            return;
        };
        if simulation.forward() {
            self.status_message = "Playing...".to_string();
        } else {
            // No more steps available
            self.is_playing = false;
            self.status_message = "Playback complete".to_string();
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        // Main area plus status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Left: interactive pane(s) | Right: theory
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(pane_area);

        match &self.screen {
            Screen::AlgorithmList => {
                super::panes::render_menu_pane(frame, columns[0], self.selected);
                super::panes::render_theory_pane(frame, columns[1], self.selected_algorithm());
                super::panes::render_status_bar(
                    frame,
                    status_area,
                    &self.status_message,
                    None,
                    false,
                    &[("↑/↓", "select"), ("↵", "open"), ("q", "quit")],
                );
            }
            Screen::Input(form) => {
                super::panes::render_form_pane(frame, columns[0], form);
                super::panes::render_theory_pane(frame, columns[1], form.algorithm);
                super::panes::render_status_bar(
                    frame,
                    status_area,
                    &self.status_message,
                    None,
                    false,
                    &[("⇥", "field"), ("↵", "start"), ("esc", "back")],
                );
            }
            Screen::Simulator(simulation) => {
                self.render_simulator(frame, columns[0], simulation);
                super::panes::render_theory_pane(frame, columns[1], simulation.algorithm());
                super::panes::render_status_bar(
                    frame,
                    status_area,
                    &self.status_message,
                    Some((simulation.position(), simulation.total_steps())),
                    self.is_playing,
                    &[
                        ("←/→", "step"),
                        ("⎵", "play"),
                        ("↵ / ⌫", "end/start"),
                        ("n", "new input"),
                        ("esc", "back"),
                        ("q", "quit"),
                    ],
                );
            }
        }
    }

    fn render_simulator(&self, frame: &mut Frame, area: Rect, simulation: &Simulation) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(area);

        let step = simulation.current();
        let title = format!("{} Simulation", simulation.algorithm().title());
        super::panes::render_array_pane(frame, rows[0], &title, step);
        super::panes::render_explanation_pane(frame, rows[1], &step.explanation(), step.is_done());
    }

    fn selected_algorithm(&self) -> Algorithm {
        Algorithm::ALL[self.selected.min(Algorithm::ALL.len() - 1)]
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::AlgorithmList => self.handle_list_key(key),
            Screen::Input(_) => self.handle_form_key(key),
            Screen::Simulator(_) => self.handle_simulator_key(key),
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        let count = Algorithm::ALL.len();
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = (self.selected + count - 1) % count;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1) % count;
            }
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(n) = c.to_digit(10).map(|n| n as usize) {
                    if n <= count {
                        self.selected = n - 1;
                        self.open_form(self.selected_algorithm());
                    }
                }
            }
            KeyCode::Enter => {
                self.open_form(self.selected_algorithm());
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            self.submit_form();
            return;
        }
        if key.code == KeyCode::Esc {
            self.back_to_list();
            return;
        }

        let Screen::Input(form) = &mut self.screen else {
            return;
        };
        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                form.switch_field();
            }
            KeyCode::Backspace => {
                form.focused_text_mut().pop();
            }
            KeyCode::Char(c) => {
                form.focused_text_mut().push(c);
            }
            _ => {}
        }
    }

    fn handle_simulator_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Esc | KeyCode::Char('b') => {
                self.back_to_list();
            }
            KeyCode::Char('n') => {
                self.is_playing = false;
                let form = self
                    .last_form
                    .take()
                    .unwrap_or_else(|| InputForm::new(self.current_algorithm()));
                self.status_message = format!("Enter input for {}", form.algorithm.title());
                self.screen = Screen::Input(form);
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(self.play_interval)
                            .unwrap_or(Instant::now());
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            _ => self.handle_navigation_key(key),
        }
    }

    fn handle_navigation_key(&mut self, key: KeyEvent) {
        let Screen::Simulator(simulation) = &mut self.screen else {
            return;
        };

        let message = match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                if simulation.backward() {
                    "Stepped backward".to_string()
                } else {
                    "Already at the first step".to_string()
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if simulation.forward() {
                    "Stepped forward".to_string()
                } else {
                    "Already at the last step".to_string()
                }
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                let n = c.to_digit(10).unwrap_or(1);
                let stepped = (0..n).take_while(|_| simulation.forward()).count();
                format!("Stepped forward {} step(s)", stepped)
            }
            KeyCode::Enter => {
                simulation.jump_to_end();
                "Jumped to end".to_string()
            }
            KeyCode::Backspace => {
                simulation.jump_to_start();
                "Jumped to start".to_string()
            }
            _ => return,
        };
        self.is_playing = false;
        self.status_message = message;
    }

    fn current_algorithm(&self) -> Algorithm {
        match &self.screen {
            Screen::AlgorithmList => self.selected_algorithm(),
            Screen::Input(form) => form.algorithm,
            Screen::Simulator(simulation) => simulation.algorithm(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn simulation(app: &App) -> &Simulation {
        match &app.screen {
            Screen::Simulator(simulation) => simulation,
            other => panic!("Expected simulator, got {:?}", other),
        }
    }

    #[test]
    fn test_list_wraps_around() {
        let mut app = App::new(&Config::default());
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_algorithm(), Algorithm::BubbleSort);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_algorithm(), Algorithm::LinearSearch);
    }

    #[test]
    fn test_configured_algorithm_is_preselected() {
        let config = Config {
            algorithm: Some(Algorithm::BinarySearch),
            ..Config::default()
        };
        let app = App::new(&config);
        assert_eq!(app.selected_algorithm(), Algorithm::BinarySearch);
    }

    #[test]
    fn test_typing_and_submitting_starts_a_simulation() {
        let mut app = App::new(&Config::default());
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "4, 2, 7, 1, 9");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "7");
        press(&mut app, KeyCode::Enter);

        let sim = simulation(&app);
        assert_eq!(sim.algorithm(), Algorithm::LinearSearch);
        assert_eq!(sim.total_steps(), 3);
    }

    #[test]
    fn test_invalid_input_stays_on_form_with_error() {
        let mut app = App::new(&Config::default());
        press(&mut app, KeyCode::Char('2'));
        type_text(&mut app, "3, 1, 2");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "1");
        press(&mut app, KeyCode::Enter);

        match &app.screen {
            Screen::Input(form) => {
                assert_eq!(form.algorithm, Algorithm::BinarySearch);
                let error = form.error.as_deref().unwrap();
                assert!(error.starts_with("Binary search needs a sorted array"));
            }
            other => panic!("Expected input form, got {:?}", other),
        }
    }

    #[test]
    fn test_bubble_sort_form_ignores_target_field() {
        let mut app = App::new(&Config::default());
        app.open_form(Algorithm::BubbleSort);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "5, 1, 4, 2, 8");
        press(&mut app, KeyCode::Enter);
        assert_eq!(simulation(&app).algorithm(), Algorithm::BubbleSort);
    }

    #[test]
    fn test_navigation_keys_saturate() {
        let mut app = App::new(&Config::default());
        app.open_form(Algorithm::LinearSearch);
        app.prefill_form("1, 2, 3", Some("9"));

        press(&mut app, KeyCode::Left);
        assert_eq!(app.status_message, "Already at the first step");
        assert_eq!(simulation(&app).position(), 0);

        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.status_message, "Stepped forward 3 step(s)");
        press(&mut app, KeyCode::Right);
        assert_eq!(app.status_message, "Already at the last step");
        assert_eq!(simulation(&app).position(), 3);

        press(&mut app, KeyCode::Backspace);
        assert!(simulation(&app).at_start());
        press(&mut app, KeyCode::Enter);
        assert!(simulation(&app).at_end());
    }

    #[test]
    fn test_new_input_reopens_previous_form() {
        let mut app = App::new(&Config::default());
        app.open_form(Algorithm::BubbleSort);
        app.prefill_form("3, 2, 1", None);
        press(&mut app, KeyCode::Char('n'));

        match &app.screen {
            Screen::Input(form) => assert_eq!(form.array, "3, 2, 1"),
            other => panic!("Expected input form, got {:?}", other),
        }
    }

    #[test]
    fn test_escape_discards_simulation() {
        let mut app = App::new(&Config::default());
        app.open_form(Algorithm::BubbleSort);
        app.prefill_form("3, 2, 1", None);
        press(&mut app, KeyCode::Esc);

        assert!(matches!(app.screen, Screen::AlgorithmList));
        assert!(app.last_form.is_none());
    }

    #[test]
    fn test_play_tick_stops_at_the_end() {
        let mut app = App::new(&Config::default());
        app.open_form(Algorithm::LinearSearch);
        app.prefill_form("5", Some("5"));
        app.is_playing = true;
        app.play_tick();

        assert!(!app.is_playing);
        assert_eq!(app.status_message, "Playback complete");
    }

    #[test]
    fn test_every_screen_renders() {
        let mut terminal = Terminal::new(TestBackend::new(120, 32)).unwrap();
        let mut app = App::new(&Config::default());
        terminal.draw(|f| app.render(f)).unwrap();

        app.open_form(Algorithm::BinarySearch);
        terminal.draw(|f| app.render(f)).unwrap();

        app.prefill_form("1, 3, 5, 7, 9, 11, 13", Some("3"));
        terminal.draw(|f| app.render(f)).unwrap();
        assert_eq!(simulation(&app).total_steps(), 2);
    }
}
