//! Nourish CLI
//!
//! Terminal driver for the Nourish Naturally dashboard:
//! - Browse the dashboard views and their panels
//! - Look up translations and switch the interface language
//! - Resolve a location into a region
//! - Run the simulated report scan and meal analysis
//! - Sign in and out, inspect and update the account

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use nourish::auth::{
    AuthGate, GoTrueClient, IdentityProvider, PasswordOutcome, PasswordUpdatePage,
};
use nourish::config::{generate_default_config, Config};
use nourish::dashboard::{navigation_items, DashboardShell, DashboardView};
use nourish::i18n::{Language, LocalizationStore};
use nourish::location::{BigDataCloudGeocoder, Coordinates, FixedGeolocator, LocationProbe};
use nourish::panels::disease_lookup::ConditionKind;
use nourish::panels::document_scanner::UploadedFile;
use nourish::panels::{
    DiseaseLookupPanel, DocumentScannerPanel, Immediate, NutritionTrackerPanel, PanelState,
    ScopeGuard, TokioDelay, Work,
};
use nourish::routes::Route;
use nourish::storage::{FilePreferences, PreferenceStore};
use nourish::toast::ToastQueue;
use std::path::{Path, PathBuf};
use std::rc::Rc;

#[derive(Parser)]
#[command(name = "nourish")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Nourish Naturally wellness dashboard")]
#[command(long_about = "Nourish Naturally in the terminal.\nBrowse diet plans, look up conditions, analyse meals and manage your account.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Resolve simulated analyses immediately instead of waiting
    #[arg(long, global = true)]
    pub instant: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the dashboard views
    Views,

    /// Show one dashboard view
    Open {
        /// View slug (e.g., overview, regional-diet, community)
        view: DashboardView,
    },

    /// Translate a key in the active language
    T {
        /// Translation key (e.g., nav.dashboard)
        key: String,
    },

    /// Show or change the interface language
    Language {
        #[command(subcommand)]
        action: LanguageAction,
    },

    /// Resolve the configured (or given) position into a region
    Locate {
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,
    },

    /// Search diseases and disorders
    Lookup {
        /// Name or category to search for (empty lists everything)
        #[arg(default_value = "")]
        query: String,
        /// Search disorders instead of diseases
        #[arg(long)]
        disorders: bool,
        /// Show full details of the first match
        #[arg(long)]
        details: bool,
    },

    /// Analyse a medical report
    Scan {
        /// PDF, JPG or PNG file
        path: PathBuf,
    },

    /// Analyse a meal photo
    Track {
        /// Image file
        path: PathBuf,
    },

    /// Sign in with email and password
    SignIn {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },

    /// Sign out of the current session
    SignOut,

    /// Show the signed-in user
    Whoami,

    /// Set a new password for the signed-in user
    UpdatePassword {
        #[arg(short, long)]
        password: String,
        #[arg(long)]
        confirm: String,
    },

    /// Email a password reset link
    Recover {
        #[arg(short, long)]
        email: String,
        /// Where the reset link should land
        #[arg(long)]
        redirect_to: Option<String>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum LanguageAction {
    /// List supported languages
    List,
    /// Print the active language
    Get,
    /// Switch the active language
    Set {
        /// Language code (en, hi, mr, gu, te, bn)
        code: String,
    },
}

/// Shared handles every command can use
struct App {
    config: Config,
    storage: Rc<dyn PreferenceStore>,
    i18n: Rc<LocalizationStore>,
    instant: bool,
}

impl App {
    fn new(config: Config, instant: bool) -> anyhow::Result<Self> {
        let storage: Rc<dyn PreferenceStore> = Rc::new(
            FilePreferences::open_in(&config.storage.data_dir)
                .with_context(|| format!("opening preferences in {}", config.storage.data_dir))?,
        );
        let i18n = Rc::new(LocalizationStore::restore_or(
            Rc::clone(&storage),
            config.i18n.default_language,
        ));
        Ok(Self {
            config,
            storage,
            i18n,
            instant,
        })
    }

    fn identity(&self) -> anyhow::Result<GoTrueClient> {
        Ok(GoTrueClient::new(
            self.config.identity.to_client_config(),
            Rc::clone(&self.storage),
        )?)
    }

    fn work(&self) -> Box<dyn Work> {
        if self.instant {
            Box::new(Immediate)
        } else {
            Box::new(TokioDelay)
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    nourish::logging::init(&config.logging);

    if let Commands::Config { output } = &cli.command {
        return write_config(output.as_deref());
    }

    let app = App::new(config, cli.instant)?;

    match cli.command {
        Commands::Views => {
            for item in navigation_items() {
                println!(
                    "{:<18} {:<24} {}",
                    item.view.slug(),
                    app.i18n.t(item.label_key),
                    item.description
                );
            }
        }

        Commands::Open { view } => open_view(&app, view).await?,

        Commands::T { key } => println!("{}", app.i18n.t(&key)),

        Commands::Language { action } => match action {
            LanguageAction::List => {
                let active = app.i18n.language();
                for lang in Language::ALL {
                    let marker = if lang == active { "*" } else { " " };
                    println!("{} {}  {} ({})", marker, lang.code(), lang.native_name(), lang.name());
                }
            }
            LanguageAction::Get => println!("{}", app.i18n.language()),
            LanguageAction::Set { code } => {
                let lang = app.i18n.set_language_code(&code)?;
                println!("Language set to {} ({})", lang.native_name(), lang.code());
            }
        },

        Commands::Locate { lat, lon } => {
            let coords = match (lat, lon) {
                (Some(lat), Some(lon)) => Coordinates::new(lat, lon),
                (None, None) => app.config.location.coordinates().context(
                    "no position: pass --lat and --lon or set [location] in the config",
                )?,
                _ => bail!("--lat and --lon must be given together"),
            };

            let geocoder = BigDataCloudGeocoder::new(app.config.geocoding.to_client_config())?;
            let probe = LocationProbe::new(Rc::new(FixedGeolocator::new(coords)), Rc::new(geocoder));
            probe.request_location().await;

            match (probe.location(), probe.error()) {
                (Some(location), _) => {
                    println!("{}", location.label());
                    if let Some(region) = &location.region {
                        println!("Region: {}", region);
                    }
                }
                (None, Some(e)) => bail!("location error {}: {}", e.code(), e),
                (None, None) => bail!("no location resolved"),
            }
        }

        Commands::Lookup {
            query,
            disorders,
            details,
        } => {
            let mut panel = DiseaseLookupPanel::new();
            if disorders {
                panel.set_tab(ConditionKind::Disorder);
            }
            panel.set_query(query);

            let results = panel.results();
            if results.is_empty() {
                println!("No matches");
            }
            for condition in &results {
                println!(
                    "{:<28} {:<20} {}",
                    condition.name, condition.category, condition.severity
                );
            }

            if details {
                if let Some(condition) = results.first() {
                    println!("\n{}\n{}", condition.name, condition.description);
                    print_list("Symptoms", condition.symptoms);
                    print_list("Causes", condition.causes);
                    print_list("Prevention", condition.prevention);
                    print_list("Treatment", condition.treatment);
                    print_list("Dietary recommendations", condition.dietary);
                }
            }
        }

        Commands::Scan { path } => {
            let file = uploaded_file(&path)?;
            let guard = ScopeGuard::new();
            let mut panel = DocumentScannerPanel::new(guard.scope());

            println!("Analyzing {} ({})...", file.name, file.size_label());
            panel.upload(file)?.run(app.work().as_ref()).await;

            let report = panel.report().context("analysis did not complete")?;
            println!("{} ({}) - {}", report.report_type, report.date, report.overall_status);
            for finding in report.findings {
                println!(
                    "  {:<24} {:<12} {:<16} {}",
                    finding.parameter,
                    finding.value,
                    finding.normal_range,
                    finding.status.label()
                );
            }
            print_list("Recommendations", report.recommendations);
        }

        Commands::Track { path } => {
            let file = uploaded_file(&path)?;
            let guard = ScopeGuard::new();
            let mut panel = NutritionTrackerPanel::new(guard.scope());

            println!("Analyzing {}...", file.name);
            panel.upload_image(file.name).run(app.work().as_ref()).await;

            let report = panel.report().context("analysis did not complete")?;
            println!(
                "{} ({}% confidence), {}",
                report.food_name, report.confidence, report.portion_size
            );
            println!(
                "{} kcal | protein {}g | carbs {}g | fat {}g | health score {}",
                report.total_calories,
                report.protein.amount,
                report.carbs.amount,
                report.fat.amount,
                report.health_score
            );
            print_list("Benefits", report.benefits);
            print_list("Watch out for", report.concerns);
        }

        Commands::SignIn { email, password } => {
            let client = app.identity()?;
            let session = client.sign_in_with_password(&email, &password).await?;
            println!(
                "Signed in as {}",
                session.user.email.as_deref().unwrap_or(&session.user.id)
            );
        }

        Commands::SignOut => {
            let client = app.identity()?;
            let toasts = ToastQueue::new();
            let gate = AuthGate::start(&client, toasts.clone()).await;
            if gate.session().is_none() {
                println!("Not signed in");
                return Ok(());
            }
            if !gate.sign_out(&client).await {
                let message = toasts
                    .latest()
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| "Sign out failed".to_string());
                bail!(message);
            }
            println!("Signed out");
        }

        Commands::Whoami => {
            let client = app.identity()?;
            match client.get_session().await? {
                Some(session) => {
                    let user = &session.user;
                    println!("{}", user.email.as_deref().unwrap_or(&user.id));
                    if let Some(name) = user.display_name() {
                        println!("Name: {}", name);
                    }
                }
                None => println!("Not signed in (redirect to {})", Route::SignIn.path()),
            }
        }

        Commands::UpdatePassword { password, confirm } => {
            let client = app.identity()?;
            let toasts = ToastQueue::new();
            let page = PasswordUpdatePage::mount(&client);
            match page.submit(&client, &toasts, &password, &confirm).await {
                PasswordOutcome::Updated => println!("Your password has been updated successfully"),
                PasswordOutcome::Invalid(e) => bail!(e),
                PasswordOutcome::Failed(message) => bail!(message),
            }
        }

        Commands::Recover { email, redirect_to } => {
            let client = app.identity()?;
            client
                .request_password_recovery(&email, redirect_to.as_deref())
                .await?;
            println!("Check {} for a password reset link", email);
        }

        Commands::Config { output } => write_config(output.as_deref())?,
    }

    Ok(())
}

async fn open_view(app: &App, view: DashboardView) -> anyhow::Result<()> {
    let user = match app.identity() {
        Ok(client) => client.current_session().map(|s| s.user),
        Err(e) => {
            tracing::debug!("Identity client unavailable: {}", e);
            None
        }
    };

    let mut shell = DashboardShell::new(user, Rc::clone(&app.i18n));
    if view == DashboardView::RegionalDiet {
        if let Some(coords) = app.config.location.coordinates() {
            let geocoder = BigDataCloudGeocoder::new(app.config.geocoding.to_client_config())?;
            let probe =
                LocationProbe::new(Rc::new(FixedGeolocator::new(coords)), Rc::new(geocoder));
            probe.request_location().await;
            shell.set_location(probe.location());
        }
    }
    shell.set_active_view(view);

    let item = view.nav_item();
    println!("== {} ==", app.i18n.t(item.label_key));

    match shell.panel() {
        PanelState::Overview(panel) => {
            println!("{}", panel.greeting());
            for stat in panel.stats() {
                println!("  {:<14} {:<8} {}", stat.label, stat.value, stat.detail);
            }
            for rec in panel.recommendations() {
                println!("  * {}: {}", rec.title, rec.detail);
            }
        }
        PanelState::PersonalizedDiet(_) => {
            println!("Fill in your health profile in the web app to generate a plan.");
        }
        PanelState::RegionalDiet(panel) => {
            for region in panel.regions() {
                let marker = if panel.is_selected(region) { "*" } else { " " };
                let (shown, more) = region.specialty_preview();
                let more = if more > 0 { format!(" +{} more", more) } else { String::new() };
                println!(
                    "{} {} {:<12} {:<14} {}{}",
                    marker,
                    region.emoji,
                    region.name,
                    region.cuisine,
                    shown.join(", "),
                    more
                );
            }
        }
        PanelState::OrganSpecific(panel) => {
            for organ in panel.organs() {
                println!("  {:<16} {}", organ.name, organ.short_description());
            }
            let organ = panel.selected();
            println!("\n{}: {}", organ.name, organ.description);
            print_list("Eat more", organ.good_foods);
            print_list("Avoid", organ.avoid_foods);
        }
        PanelState::DocumentScanner(_) => {
            println!("Use `nourish scan <file>` to analyse a report (PDF, JPG, PNG, up to 10MB).");
        }
        PanelState::DiseaseLookup(panel) => {
            for condition in panel.results() {
                println!("  {:<28} {}", condition.name, condition.category);
            }
        }
        PanelState::NutritionTracker(_) => {
            println!("Use `nourish track <image>` to analyse a meal photo.");
        }
        PanelState::Community(panel) => {
            for post in panel.feed() {
                println!("  [{}] {} - {} ({})", post.category, post.title, post.author, post.time);
            }
            println!("\nTrending: {}", panel.trending_topics().join(" "));
        }
        PanelState::Profile(panel) => {
            println!("{} ({})", panel.display_name(), panel.initials());
            if !panel.email().is_empty() {
                println!("{}", panel.email());
            }
            println!(
                "Language: {} | Achievements: {}/{}",
                panel.language().native_name(),
                panel.earned_count(),
                panel.achievements().len()
            );
        }
    }

    Ok(())
}

fn uploaded_file(path: &Path) -> anyhow::Result<UploadedFile> {
    let metadata =
        std::fs::metadata(path).with_context(|| format!("reading {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .context("path has no file name")?;
    Ok(UploadedFile::new(name, metadata.len()))
}

fn print_list(title: &str, items: &[&str]) {
    if items.is_empty() {
        return;
    }
    println!("{}:", title);
    for item in items {
        println!("  - {}", item);
    }
}

fn write_config(output: Option<&Path>) -> anyhow::Result<()> {
    let content = generate_default_config();
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            println!("Config written to {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}
