//! Interactive event management menu
//!
//! The menu is a two-state machine: it keeps reading choices while
//! [`MenuState::Running`] and stops once the user picks exit. Every iteration
//! runs inside an error boundary that reports the error and returns to the
//! menu, except for fatal console errors which end the loop.

use tracing::{Level, event};

use crate::{
    config::Config,
    domain::{
        constant::{menu, text},
        error::AppError,
        event::{EventFactory, EventKind},
        registry::EventRegistry
    },
    ports::ui::Console
};

/// Menu loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Exited
}

/// The interactive menu, owning the registry and the id sequence for this run
pub struct Menu<C> {
    console:         C,
    factory:         EventFactory,
    registry:        EventRegistry,
    verbose_details: bool
}

impl<C: Console> Menu<C> {
    pub fn new(console: C, config: &Config) -> Self {
        Self {
            console,
            factory: EventFactory::starting_at(config.first_id),
            registry: EventRegistry::new(),
            verbose_details: config.verbose_details
        }
    }

    pub fn registry(&self) -> &EventRegistry {
        &self.registry
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Print the banner and process choices until the user exits.
    ///
    /// Returns an error only for fatal console conditions such as end of input.
    pub fn run(&mut self) -> Result<(), AppError> {
        event!(Level::INFO, event = menu::MENU_STARTED);
        self.console.write_line(text::BANNER)?;

        let mut state = MenuState::Running;
        while state == MenuState::Running {
            state = self.step()?;
        }

        event!(Level::INFO, event = menu::MENU_EXITED, registered = self.registry.len());
        Ok(())
    }

    /// Run one menu iteration inside the error boundary
    pub fn step(&mut self) -> Result<MenuState, AppError> {
        match self.dispatch() {
            Ok(state) => Ok(state),
            Err(err) => {
                let reported = self.report(&err);
                if err.is_fatal() {
                    return Err(err);
                }
                reported?;
                Ok(MenuState::Running)
            }
        }
    }

    fn report(&mut self, err: &AppError) -> Result<(), AppError> {
        let message = match err {
            AppError::Capacity(e) => format!("Capacity error: {}", e),
            AppError::InputFormat(e) => format!("Input format error: {}", e),
            other => format!("Unexpected error: {}", other)
        };

        event!(Level::WARN, event = menu::ERROR_REPORTED, fatal = err.is_fatal(), error = %err);
        self.console.write_line(&message)
    }

    fn show_menu(&mut self) -> Result<(), AppError> {
        self.console.write_line("")?;
        for line in [text::MENU_HEADER, text::MENU_ADD_WORKSHOP, text::MENU_ADD_SEMINAR, text::MENU_VIEW_ALL, text::MENU_EXIT]
        {
            self.console.write_line(line)?;
        }
        Ok(())
    }

    fn dispatch(&mut self) -> Result<MenuState, AppError> {
        self.show_menu()?;
        let choice = self.console.read_int(text::MENU_PROMPT)?;
        event!(Level::DEBUG, event = menu::CHOICE_RECEIVED, choice);

        match choice {
            1 => self.add_workshop()?,
            2 => self.add_seminar()?,
            3 => self.view_all()?,
            4 => {
                self.console.write_line(text::GOODBYE)?;
                return Ok(MenuState::Exited);
            }
            other => {
                event!(Level::WARN, event = menu::CHOICE_INVALID, choice = other);
                self.console.write_line(&format!("Invalid menu choice: {}. Please choose 1-4.", other))?;
            }
        }

        Ok(MenuState::Running)
    }

    fn add_workshop(&mut self) -> Result<(), AppError> {
        let result = self.try_add_workshop();
        self.settle_add(EventKind::Workshop, result)
    }

    fn add_seminar(&mut self) -> Result<(), AppError> {
        let result = self.try_add_seminar();
        self.settle_add(EventKind::Seminar, result)
    }

    /// Capacity and fatal errors go to the caller; anything else is reported here.
    fn settle_add(&mut self, kind: EventKind, result: Result<(), AppError>) -> Result<(), AppError> {
        match result {
            Err(err) if !matches!(err, AppError::Capacity(_)) && !err.is_fatal() => {
                event!(Level::WARN, event = menu::ADD_FAILED, kind = %kind, error = %err);
                self.console.write_line(&format!("Failed to add {}: {}", kind.label().to_lowercase(), err))
            }
            other => other
        }
    }

    fn try_add_workshop(&mut self) -> Result<(), AppError> {
        let name = self.console.read_string(text::WORKSHOP_NAME_PROMPT)?;
        let capacity = self.console.read_int(text::CAPACITY_PROMPT)?;
        let topic = self.console.read_string(text::WORKSHOP_TOPIC_PROMPT)?;
        let company = self.console.read_string(text::COMPANY_PROMPT)?;

        let workshop = self.factory.workshop(&name, capacity, &topic, &company)?;
        self.registry.append(workshop);
        self.console.write_line(text::WORKSHOP_ADDED)
    }

    fn try_add_seminar(&mut self) -> Result<(), AppError> {
        let name = self.console.read_string(text::SEMINAR_NAME_PROMPT)?;
        let capacity = self.console.read_int(text::CAPACITY_PROMPT)?;
        let speaker = self.console.read_string(text::SPEAKER_PROMPT)?;

        let seminar = self.factory.seminar(&name, capacity, &speaker)?;
        self.registry.append(seminar);
        self.console.write_line(text::SEMINAR_ADDED)
    }

    fn view_all(&mut self) -> Result<(), AppError> {
        if self.registry.is_empty() {
            return self.console.write_line(text::NO_EVENTS);
        }

        self.console.write_line(text::SUMMARY_HEADER)?;
        for registered in &self.registry {
            self.console.write_line(&registered.summary())?;
        }
        self.console.write_line(text::SUMMARY_FOOTER)?;

        let answer = self.console.read_string(text::DETAIL_PROMPT)?;
        if !answer.starts_with(['y', 'Y']) {
            return Ok(());
        }

        self.console.write_line(text::DETAIL_HEADER)?;
        for registered in &self.registry {
            for line in registered.detail(self.verbose_details) {
                self.console.write_line(&line)?;
            }
            self.console.write_line(text::DETAIL_DIVIDER)?;
        }

        Ok(())
    }
}
