// src/gui/app.rs
use std::{
    error::Error,
    sync::mpsc::{self, Receiver, Sender},
    time::Instant,
};

use chrono::Local;
use eframe::egui;

use crate::{
    config::{
        options::SourceOptions,
        state::{AppState, GuiState},
    },
    fetch::{self, LoadOutcome},
    intent::Intent,
    present::Presenter,
    schedule::LoadTicket,
    session::Session,
};

use super::presenter::{GuiPresenter, PanelFocus};

pub fn run(options: eframe::NativeOptions, source: SourceOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Provider Directory",
        options,
        Box::new(|cc| Ok(Box::new(App::new(cc.egui_ctx.clone(), source)))),
    )?;
    Ok(())
}

pub struct App {
    // UI-only state (tab, search box buffer)
    pub state: AppState,

    // single source of truth for data, controls and timers
    pub session: Session,

    // workers send finished loads here
    tx: Sender<LoadOutcome>,
    rx: Receiver<LoadOutcome>,
    ctx: egui::Context,

    // transient footer message ("Copied to clipboard")
    pub notice: Option<String>,
    pub panel: PanelFocus,
}

impl App {
    pub fn new(ctx: egui::Context, source: SourceOptions) -> Self {
        let mut state = AppState::default();
        state.options.source = source;
        state.gui = GuiState {
            search_text: state.options.view.search.clone(),
            ..GuiState::default()
        };

        let (tx, rx) = mpsc::channel();
        let session = Session::new(state.options.view.clone());

        logf!("Init: source={} timeout={:?}", state.options.source.url, state.options.source.timeout);

        let mut app = Self {
            state,
            session,
            tx,
            rx,
            ctx,
            notice: None,
            panel: PanelFocus::default(),
        };
        if let Some(ticket) = app.session.start(Instant::now()) {
            app.spawn_load(ticket);
        }
        app
    }

    fn spawn_load(&mut self, ticket: LoadTicket) {
        let ctx = self.ctx.clone();
        let spawned = fetch::spawn_load(
            ticket,
            self.state.options.source.clone(),
            self.tx.clone(),
            move || ctx.request_repaint(),
        );
        if let Err(e) = spawned {
            loge!("Load: could not start worker for #{}: {}", ticket.id, e);
            self.session.finish_load(LoadOutcome { ticket, result: Err(e) }, Local::now());
        }
    }

    /// Apply finished loads in arrival order.
    fn drain_loads(&mut self) {
        while let Ok(outcome) = self.rx.try_recv() {
            self.session.finish_load(outcome, Local::now());
        }
    }

    fn apply(&mut self, intents: Vec<Intent>) {
        let now = Instant::now();
        for intent in intents {
            if let Some(ticket) = self.session.handle(intent, now) {
                self.spawn_load(ticket);
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_loads();

        let now = Instant::now();
        if let Some(ticket) = self.session.tick(now) {
            self.spawn_load(ticket);
        }

        let intents = {
            let view = self.session.view_model();
            let mut presenter = GuiPresenter {
                ctx,
                gui: &mut self.state.gui,
                notice: &mut self.notice,
                panel: &mut self.panel,
            };
            match presenter.present(&view) {
                Ok(intents) => intents,
                Err(never) => match never {},
            }
        };
        self.apply(intents);

        if let Some(wait) = self.session.next_wake(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        logf!("Exit: stopping timers");
        self.session.stop();
    }
}
