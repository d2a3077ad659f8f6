//! Command-line driver for the account and recipe core.
//!
//! Each run starts from the demo data held in memory; nothing persists
//! between runs. Results are printed to stdout as JSON and logs go to stderr.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Context, Result, eyre};
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use sanjibook::config::PolicySettings;
use sanjibook::domain::ports::{LoginService, UserLookup};
use sanjibook::domain::validation::{Candidate, RegistrationValidator};
use sanjibook::domain::{
    Authenticator, Credentials, Error, RecipeCatalogueService, SessionLoginService,
};
use sanjibook::outbound::Argon2PasswordHasher;
use sanjibook::outbound::memory::{
    InMemoryRecipeRepository, InMemoryUserRepository, seed_demo_data,
};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sanjibook", about = "Validate accounts, log in and browse recipes", version)]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check a registration form and list every rejected field.
    ValidateRegistration(RegistrationArgs),
    /// Log in as one of the demo accounts.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// List demo recipes.
    Recipes {
        /// Only recipes created by the account with this email.
        #[arg(long, value_name = "email")]
        owner: Option<String>,
        /// Only recipes whose name contains this text.
        #[arg(long, value_name = "text")]
        search: Option<String>,
    },
}

/// Registration form fields. Not `Debug`, since it carries passwords.
#[derive(clap::Args)]
struct RegistrationArgs {
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    password: String,
    #[arg(long, default_value = "")]
    password_confirmation: String,
    #[arg(long, default_value = "")]
    given_name: String,
    #[arg(long, default_value = "")]
    family_name: String,
    /// Birth date as `dd/mm/yyyy`.
    #[arg(long, default_value = "")]
    birth_date: String,
    #[arg(long, default_value = "")]
    sex: String,
    #[arg(long)]
    accept_terms: bool,
}

impl From<RegistrationArgs> for Candidate {
    fn from(args: RegistrationArgs) -> Self {
        Self {
            email: args.email,
            password: args.password,
            password_confirmation: args.password_confirmation,
            given_name: args.given_name,
            family_name: args.family_name,
            birth_date: args.birth_date,
            sex: args.sex,
            terms_accepted: args.accept_terms,
        }
    }
}

struct Demo {
    users: Arc<InMemoryUserRepository>,
    recipes: Arc<InMemoryRecipeRepository>,
    hasher: Arc<Argon2PasswordHasher>,
}

impl Demo {
    fn seeded() -> Result<Self> {
        let demo = Self {
            users: Arc::new(InMemoryUserRepository::new()),
            recipes: Arc::new(InMemoryRecipeRepository::new()),
            hasher: Arc::new(Argon2PasswordHasher::default()),
        };
        seed_demo_data(demo.users.as_ref(), demo.recipes.as_ref(), demo.hasher.as_ref())
            .wrap_err("failed to seed demo data")?;
        Ok(demo)
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    let settings = PolicySettings::load_from_iter([OsString::from("sanjibook")])
        .wrap_err("failed to load policy settings")?;

    match args.command {
        Command::ValidateRegistration(form) => validate_registration(form, &settings),
        Command::Login { email, password } => login(email, password),
        Command::Recipes { owner, search } => list_recipes(owner.as_deref(), search.as_deref()),
    }
}

fn validate_registration(form: RegistrationArgs, settings: &PolicySettings) -> Result<()> {
    let validator = RegistrationValidator::new(Arc::new(DefaultClock), settings.policy());
    let (valid, summary) = registration_summary(&validator, &Candidate::from(form));
    print_json(&summary)?;
    if valid {
        Ok(())
    } else {
        Err(eyre!("registration form rejected"))
    }
}

fn registration_summary(validator: &RegistrationValidator, candidate: &Candidate) -> (bool, Value) {
    let errors = validator.validate(candidate);
    let policy = validator.policy();
    let summary = json!({
        "valid": errors.is_empty(),
        "errors": errors,
        "policy": {
            "minimumAgeYears": policy.minimum_age_years,
            "minimumPasswordLength": policy.minimum_password_length,
            "enforcePasswordLength": policy.enforce_password_length,
        },
    });
    (errors.is_empty(), summary)
}

fn login(email: String, password: String) -> Result<()> {
    let demo = Demo::seeded()?;
    let service = SessionLoginService::new(
        Authenticator::new(demo.users, demo.hasher),
        Arc::new(DefaultClock),
    );
    match service.login(&Credentials::new(email, password)) {
        Ok(session) => print_json(&json!({
            "userId": session.user_id(),
            "email": session.user().email(),
            "role": session.user().role(),
            "startedAt": session.started_at(),
        })),
        Err(err) => report(&err),
    }
}

fn list_recipes(owner: Option<&str>, search: Option<&str>) -> Result<()> {
    let demo = Demo::seeded()?;
    let catalogue = RecipeCatalogueService::new(Arc::clone(&demo.recipes));

    let found = match search {
        Some(fragment) => catalogue.find_by_name(fragment),
        None => catalogue.list_all(),
    };
    let mut recipes = match found {
        Ok(recipes) => recipes,
        Err(err) => return report(&err),
    };

    if let Some(email) = owner {
        let owner = demo
            .users
            .find_by_email(email)
            .wrap_err("failed to look up recipe owner")?
            .ok_or_else(|| eyre!("no account is registered under {email}"))?;
        recipes.retain(|recipe| recipe.is_owned_by(owner.id()));
    }

    print_json(&recipes)
}

fn report(err: &Error) -> Result<()> {
    print_json(err)?;
    Err(eyre!("{}", err.message()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).wrap_err("failed to render output")?;
    println!("{rendered}");
    Ok(())
}
