// /app.rs
use crate::actions::{self, GameAction};
use crate::catalog::Catalog;
use crate::context::Context;
use crate::error::{AppError, Result};
use crate::message::{Message, MessageLog};
use crate::player::PlayerState;
use crate::settings::Settings;
use crate::tui::{Tui, TuiEvent};
use crate::ui::{Component, ComponentEnum, MainMenu};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::{SeedableRng, rngs::StdRng};
use std::time::Instant;

pub enum Action {
    Quit,
    SwitchComponent(ComponentEnum),
    Game(GameAction),
    Notify(Message),
}

pub struct App {
    // Application state and control flow
    running: bool,
    component: ComponentEnum,

    // --- Global information
    settings: Settings,
    catalog: &'static Catalog,

    // --- Session state, dropped on exit
    player: PlayerState,
    rng: StdRng,
    messages: MessageLog,
}

impl App {
    pub fn new(settings: Settings) -> Result<Self> {
        let catalog = Catalog::builtin();
        catalog.validate()?;

        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let player = PlayerState::new(settings.player_name.clone());
        log::info!(
            "New session for {} in {}",
            player.name,
            player.current_location()
        );

        Ok(Self {
            running: true,
            component: ComponentEnum::from(MainMenu::default()),
            settings,
            catalog,
            player,
            rng,
            messages: MessageLog::new(),
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = Tui::new()?
            .tick_rate(self.settings.tick_rate)
            .frame_rate(self.settings.frame_rate);

        tui.enter()?; // Starts event handler, enters raw mode, enters alternate screen

        while self.running {
            tui.draw(|frame| {
                let context = Context {
                    player: &self.player,
                    catalog: self.catalog,
                    messages: &self.messages,
                    settings: &self.settings,
                    now: Instant::now(),
                };
                self.component
                    .render(frame.area(), frame.buffer_mut(), &context)
            })?;

            // `tui.next().await` blocks till next event
            let event = tui.next().await.ok_or(AppError::EventChannelClosed)?;
            self.handle_tui_event(event);
        }

        tui.exit()?; // stops event handler, exits raw mode, exits alternate screen
        Ok(())
    }

    fn handle_tui_event(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.on_key(key_event)
            }
            TuiEvent::Error => log::warn!("Failed to read terminal event"),
            TuiEvent::Key(_)
            | TuiEvent::Init
            | TuiEvent::Tick
            | TuiEvent::Render
            | TuiEvent::Resize(_, _) => {}
        }
    }

    pub fn on_key(&mut self, key_event: KeyEvent) {
        if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.handle_action(Action::Quit);
            return;
        }

        let context = Context {
            player: &self.player,
            catalog: self.catalog,
            messages: &self.messages,
            settings: &self.settings,
            now: Instant::now(),
        };
        if let Some(action) = self.component.on_key(key_event, &context) {
            self.handle_action(action)
        };
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.quit(),
            Action::SwitchComponent(component) => self.component = component,
            Action::Game(game_action) => {
                let message =
                    actions::apply(&mut self.player, self.catalog, &game_action, &mut self.rng);
                self.messages.push(message);
            }
            Action::Notify(message) => self.messages.push(message),
        }
    }

    fn quit(&mut self) {
        log::info!(
            "Session over: {} exp, {} strains in stash",
            self.player.experience(),
            self.player.inventory().len()
        );
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    pub fn component(&self) -> &ComponentEnum {
        &self.component
    }
}
