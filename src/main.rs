use clap::Parser;
use playhub::{
    catalog::Catalog,
    cli::{Cli, Commands},
    config::Config,
    embed, Result,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = Config::load()?;
    log::debug!("Configuration loaded");

    match cli.command {
        // Launch GUI when no command is provided
        None => run_gui(&config),

        Some(command) => match command {
            Commands::List { query } => {
                let mut catalog = load_catalog(&config);
                if let Some(query) = query {
                    catalog.set_query(query);
                }

                let games = catalog.filtered_games();
                if games.is_empty() {
                    println!("No games found");
                } else {
                    println!("Catalog:");
                    println!("========");
                    for game in games {
                        println!("  {} - {}", game.id, game.title);
                    }
                }
            }

            Commands::Info { id } => {
                let catalog = load_catalog(&config);

                match catalog.get(&id) {
                    Some(game) => {
                        println!("Game Information:");
                        println!("=================");
                        println!("Id: {}", game.id);
                        println!("Title: {}", game.title);
                        println!("Description: {}", game.description);
                        println!("Thumbnail: {}", game.thumbnail);
                        println!("Play URL: {}", game.iframe_url);
                    }
                    None => {
                        eprintln!("Game not found: {}", id);
                        std::process::exit(1);
                    }
                }
            }

            Commands::Open { id } => {
                let catalog = load_catalog(&config);

                match catalog.get(&id) {
                    Some(game) => match embed::open_in_browser(game) {
                        Ok(()) => println!("Opened {} in your browser", game.title),
                        Err(e) => {
                            eprintln!("Failed to open game: {}", e);
                            std::process::exit(1);
                        }
                    },
                    None => {
                        eprintln!("Game not found: {}", id);
                        std::process::exit(1);
                    }
                }
            }

            Commands::Status => {
                let catalog = Catalog::load_or_empty(&config);

                println!("PlayHub Status");
                println!("==============");
                println!();
                println!("Version: {}", env!("CARGO_PKG_VERSION"));
                println!("Games in catalog: {}", catalog.len());
                println!();
                println!("Configuration:");
                match &config.catalog_path {
                    Some(path) => println!("  Catalog: {:?}", path),
                    None => println!("  Catalog: bundled"),
                }
                println!("  Log Level: {}", config.log_level);
                println!();

                if let Ok(config_path) = Config::config_path() {
                    println!("Config Path: {:?}", config_path);
                }

                if let Ok(data_dir) = Config::data_dir() {
                    println!("Data Directory: {:?}", data_dir);
                }
            }

            Commands::Gui => run_gui(&config),
        },
    }

    Ok(())
}

fn load_catalog(config: &Config) -> Catalog {
    match Catalog::load(config) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Failed to load catalog: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_gui(config: &Config) {
    use playhub::gui::HubApp;

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([config.window_width, config.window_height])
        .with_min_inner_size([640.0, 480.0])
        .with_title("PlayHub");
    if config.start_fullscreen {
        viewport = viewport.with_fullscreen(true);
    }

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "PlayHub",
        native_options,
        Box::new(|cc| Ok(Box::new(HubApp::new(cc)))),
    ) {
        eprintln!("Failed to run GUI: {}", e);
        std::process::exit(1);
    }
}
