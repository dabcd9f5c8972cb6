use eframe::egui;
use poll_promise::Promise;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::embed;
use crate::selection::{SelectionController, View};
use crate::Result;

use super::components::{Header, StatusBar};
use super::grid_view::{GridAction, GridView};
use super::player_view::{PlayerAction, PlayerView};
use super::styles;

pub struct HubApp {
    config: Config,
    catalog: Catalog,
    selection: SelectionController,
    grid_view: GridView,
    player_view: PlayerView,
    search_input: String,
    status_message: String,
    fullscreen: bool,
    loading_catalog: bool,
    catalog_promise: Option<Promise<Result<Catalog>>>,
}

impl HubApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        styles::setup_custom_style(&cc.egui_ctx);
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let config = Config::load().unwrap_or_default();
        let fullscreen = config.start_fullscreen;

        let mut app = Self {
            config,
            catalog: Catalog::default(),
            selection: SelectionController::default(),
            grid_view: GridView::default(),
            player_view: PlayerView::default(),
            search_input: String::new(),
            status_message: String::new(),
            fullscreen,
            loading_catalog: false,
            catalog_promise: None,
        };
        app.load_catalog();
        app
    }

    /// Kick off the one-time catalog load on a background thread. Fire and
    /// forget: no timeout, no retry, no cancellation.
    fn load_catalog(&mut self) {
        if self.loading_catalog {
            return;
        }

        self.loading_catalog = true;
        let config = self.config.clone();
        self.catalog_promise = Some(Promise::spawn_thread("catalog-load", move || {
            Catalog::load(&config)
        }));
    }

    fn go_home(&mut self) {
        self.selection.clear(&mut self.catalog);
        self.search_input.clear();
    }
}

impl eframe::App for HubApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for catalog loading completion
        if let Some(promise) = &self.catalog_promise {
            if let Some(result) = promise.ready() {
                match result {
                    Ok(catalog) => {
                        log::info!("Catalog ready with {} games", catalog.len());
                        self.catalog = catalog.clone();
                    }
                    Err(e) => {
                        // Degrade to an empty grid; the failure is only
                        // surfaced for diagnostics.
                        log::warn!("Failed to load catalog: {}", e);
                        self.status_message = format!("Failed to load catalog: {}", e);
                    }
                }
                self.loading_catalog = false;
                self.catalog_promise = None;
            }
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            let events = Header::show(ui, &mut self.search_input);
            ui.add_space(6.0);

            if events.home_clicked {
                self.go_home();
            }
            if events.query_changed {
                self.catalog.set_query(self.search_input.clone());
            }
            if events.fullscreen_clicked {
                self.fullscreen = !self.fullscreen;
                ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(self.fullscreen));
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.selection.view() {
                View::Grid => {
                    if let Some(action) =
                        self.grid_view.ui(ui, &self.catalog, self.loading_catalog)
                    {
                        match action {
                            GridAction::Select(id) => self.selection.select(&self.catalog, &id),
                        }
                    }
                }
                View::Player => {
                    if let Some(action) = self.player_view.ui(ui, &self.catalog, &self.selection) {
                        match action {
                            PlayerAction::Close => self.go_home(),
                            PlayerAction::Select(id) => self.selection.select(&self.catalog, &id),
                            PlayerAction::OpenInBrowser => {
                                if let Some(game) = self.selection.selected(&self.catalog) {
                                    match embed::open_in_browser(game) {
                                        Ok(()) => {
                                            self.status_message =
                                                format!("Opened {} in your browser", game.title);
                                        }
                                        Err(e) => {
                                            self.status_message =
                                                format!("Failed to open {}: {}", game.title, e);
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // Status bar at bottom
            let mut clear_status = false;
            StatusBar::show(ui, &self.status_message, &mut clear_status);
            if clear_status {
                self.status_message.clear();
            }
        });

        // Request repaint for the pending catalog load
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
