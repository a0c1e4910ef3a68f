use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use homefinder::components::{FilterField, FilterPanel, Footer, Navbar};
use homefinder::forms::{ContactField, PropertyField};
use homefinder::pages::{
    Confirm, CreatePropertyPage, EditPropertyPage, HomePage, LoginPage, MyPropertiesPage,
    PropertyDetailsPage, RegisterPage,
};
use homefinder::{ApiClient, App, Config, LocalStorage, Route, Session};
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "homefinder")]
#[command(about = "Browse, save and manage HomeFinder property listings")]
#[command(version)]
struct Cli {
    /// Backend base URL (overrides HOMEFINDER_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse listings
    Home {
        #[command(flatten)]
        filters: FilterArgs,

        /// Add this property to your favorites
        #[arg(long)]
        favorite: Option<i64>,
    },

    /// Log in with the email you registered
    Login { email: String },

    /// Create an account and log in
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,
    },

    /// Forget the current user
    Logout,

    /// Show one listing, optionally sending the owner a message
    Property {
        id: i64,

        /// Submit the contact form
        #[arg(long)]
        contact: bool,

        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        phone: String,

        #[arg(long, default_value = "")]
        message: String,
    },

    /// Listings you own
    MyProperties {
        /// Delete this listing
        #[arg(long)]
        delete: Option<i64>,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Listings you saved
    MyFavorites,

    /// Create a new listing
    Create {
        #[command(flatten)]
        listing: ListingArgs,
    },

    /// Change an existing listing
    Edit {
        id: i64,

        #[command(flatten)]
        listing: ListingArgs,
    },

    /// Render any route, e.g. `/property/3`
    Open { path: String },
}

/// Filter inputs; values are passed through as typed
#[derive(Args, Default)]
struct FilterArgs {
    #[arg(long)]
    type_id: Option<String>,
    #[arg(long)]
    min_beds: Option<String>,
    #[arg(long)]
    max_beds: Option<String>,
    #[arg(long)]
    min_baths: Option<String>,
    #[arg(long)]
    max_baths: Option<String>,
    #[arg(long)]
    min_garage: Option<String>,
    #[arg(long)]
    max_garage: Option<String>,
    #[arg(long)]
    min_price: Option<String>,
    #[arg(long)]
    max_price: Option<String>,
}

impl FilterArgs {
    fn into_panel(self) -> FilterPanel {
        let mut panel = FilterPanel::default();
        let values = [
            (FilterField::TypeId, self.type_id),
            (FilterField::MinBeds, self.min_beds),
            (FilterField::MaxBeds, self.max_beds),
            (FilterField::MinBaths, self.min_baths),
            (FilterField::MaxBaths, self.max_baths),
            (FilterField::MinGarage, self.min_garage),
            (FilterField::MaxGarage, self.max_garage),
            (FilterField::MinPrice, self.min_price),
            (FilterField::MaxPrice, self.max_price),
        ];
        for (field, value) in values {
            if let Some(value) = value {
                panel.set(field, value);
            }
        }
        panel
    }
}

/// Listing form inputs; only the ones given are changed
#[derive(Args)]
struct ListingArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    price: Option<String>,
    #[arg(long)]
    location: Option<String>,
    #[arg(long)]
    bedrooms: Option<String>,
    #[arg(long)]
    bathrooms: Option<String>,
    #[arg(long)]
    garage: Option<String>,
    #[arg(long)]
    image_url: Option<String>,
    #[arg(long)]
    type_id: Option<String>,
}

impl ListingArgs {
    fn fields(self) -> Vec<(PropertyField, String)> {
        [
            (PropertyField::Title, self.title),
            (PropertyField::Description, self.description),
            (PropertyField::Price, self.price),
            (PropertyField::Location, self.location),
            (PropertyField::Bedrooms, self.bedrooms),
            (PropertyField::Bathrooms, self.bathrooms),
            (PropertyField::Garage, self.garage),
            (PropertyField::ImageUrl, self.image_url),
            (PropertyField::TypeId, self.type_id),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}

/// Ask on the terminal; anything but `y`/`yes` declines
fn ask(message: &str) -> bool {
    print!("{message} [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    info!("🏠 HomeFinder using {}", config.api_url);

    let api = ApiClient::new(&config).context("Failed to create HTTP client")?;
    let storage = LocalStorage::open(&config.storage_path).await?;
    let session = Session::restore(storage);

    let assume_yes = matches!(cli.command, Some(Commands::MyProperties { yes: true, .. }));
    let confirm: Box<dyn Confirm> = if assume_yes {
        Box::new(|_: &str| true)
    } else {
        Box::new(ask)
    };
    let mut app = App::new(api, session, confirm);

    let output = match cli.command.unwrap_or(Commands::Home {
        filters: FilterArgs::default(),
        favorite: None,
    }) {
        Commands::Home { filters, favorite } => {
            let panel = filters.into_panel();
            let mut page = HomePage::mount_with(app.api(), app.session(), panel).await;
            if let Some(property_id) = favorite {
                page.toggle_favorite(app.api(), app.session(), property_id).await;
            }
            format!("{}\n\n{}\n\n{}", Navbar::new(app.session()), page, Footer)
        }
        Commands::Login { email } => {
            let (api, session) = app.parts();
            let outcome = LoginPage::new(email).submit(api, session).await;
            app.follow(outcome).await
        }
        Commands::Register { name, email } => {
            let (api, session) = app.parts();
            let outcome = RegisterPage::new(name, email).submit(api, session).await;
            app.follow(outcome).await
        }
        Commands::Logout => {
            let outcome = app.logout().await?;
            app.follow(outcome).await
        }
        Commands::Property {
            id,
            contact,
            name,
            email,
            phone,
            message,
        } => {
            let mut page = PropertyDetailsPage::mount(app.api(), id).await;
            if contact {
                page.toggle_contact_form();
                page.change_contact_field(ContactField::Name, name);
                page.change_contact_field(ContactField::Email, email);
                page.change_contact_field(ContactField::Phone, phone);
                page.change_contact_field(ContactField::Message, message);
                page.submit_contact(app.api()).await;
            }
            page.to_string()
        }
        Commands::MyProperties { delete, .. } => match delete {
            Some(property_id) => {
                let mut page = MyPropertiesPage::mount(app.api(), app.session()).await;
                let outcome = page
                    .delete(app.api(), app.session(), property_id, app.confirm())
                    .await;
                match outcome.notice {
                    Some(notice) => format!("{notice}\n\n{page}"),
                    None => page.to_string(),
                }
            }
            None => app.visit(Route::MyProperties).await,
        },
        Commands::MyFavorites => app.visit(Route::MyFavorites).await,
        Commands::Create { listing } => {
            let mut page = CreatePropertyPage::mount(app.api()).await;
            for (field, value) in listing.fields() {
                page.set(field, value);
            }
            let outcome = page.submit(app.api(), app.session()).await;
            app.follow(outcome).await
        }
        Commands::Edit { id, listing } => match EditPropertyPage::mount(app.api(), id).await {
            Ok(mut page) => {
                for (field, value) in listing.fields() {
                    page.set(field, value);
                }
                let outcome = page.submit(app.api()).await;
                app.follow(outcome).await
            }
            Err(outcome) => app.follow(outcome).await,
        },
        Commands::Open { path } => {
            let route: Route = path.parse()?;
            app.visit(route).await
        }
    };

    println!("{output}");
    Ok(())
}
