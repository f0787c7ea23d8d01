//! Runs one parsed command against the configured backend.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use tokio::runtime::Runtime;
use tracing::warn;

use storefront::admin::{
    CategoryEditor, ConfirmDialogState, ContactEditor, ContactTab, StatusKind, StatusLine,
};
use storefront::api::ApiClient;
use storefront::catalog::{load_preview_file, CategoryItem, CategorySource, LoadOrigin};
use storefront::cli::{CategoriesAction, Command, ContactAction};
use storefront::config::ConfigStore;
use storefront::contact::{submit_lead, ContactData, ContactField, LeadForm};
use storefront::mvi::Reducer;
use storefront::services::{
    display_value, PricingMode, ServicesData, ServicesIntent, ServicesReducer, ServicesState,
};
use storefront::testimonials::{self, TestimonialsData, TestimonialsSource, NO_REVIEWS};
use storefront::theme::ThemeProvider;
use storefront::ui::{self, Showcase};

pub fn run(command: Command, store: &ConfigStore, runtime: &Runtime) -> Result<()> {
    let config = store.get();
    let client = ApiClient::from_config(&config)?;

    match command {
        Command::Browse { preview } => {
            let source = match preview {
                Some(path) => CategorySource::Preview(load_preview_file(&path)?),
                None => CategorySource::Remote(client.clone()),
            };
            let showcase = Showcase {
                source,
                client,
                theme: ThemeProvider::new(config.display.theme),
                carousel: config.carousel.clone(),
                fallback_on_error: config.catalog.fallback_on_error,
            };
            ui::run(showcase, runtime.handle().clone()).context("terminal showcase failed")
        }
        Command::Categories { action } => {
            runtime.block_on(categories(action, &client, config.catalog.fallback_on_error))
        }
        Command::Contact { action } => runtime.block_on(contact(action, &client)),
        Command::Services { mode } => runtime.block_on(services(mode, &client)),
        Command::Testimonials { preview } => {
            let source = match preview {
                Some(path) => TestimonialsSource::Preview(testimonials::load_preview_file(&path)?),
                None => TestimonialsSource::Remote(client),
            };
            print_testimonials(&runtime.block_on(source.load()));
            Ok(())
        }
    }
}

async fn categories(action: CategoriesAction, client: &ApiClient, fallback: bool) -> Result<()> {
    match action {
        CategoriesAction::List => {
            let load = CategorySource::Remote(client.clone()).load(fallback).await?;
            if load.origin == LoadOrigin::Fallback {
                eprintln!("Backend unavailable, showing built-in categories.");
            }
            print_categories(&load.items);
            Ok(())
        }
        CategoriesAction::Add(args) => {
            let mut editor = loaded_category_editor(client).await?;
            let item = editor.add(args.into())?;
            println!("Added '{}' ({})", item.title, item.id);
            editor.save(client).await;
            finish(editor.status())
        }
        CategoriesAction::Remove { id, yes } => {
            let mut editor = loaded_category_editor(client).await?;
            if !editor.request_delete(&id) {
                bail!("No category with id '{id}'");
            }
            if !confirm(editor.dialog(), yes)? {
                editor.cancel();
                println!("Cancelled.");
                return Ok(());
            }
            editor.confirm(client).await;
            editor.save(client).await;
            finish(editor.status())
        }
        CategoriesAction::Reset { yes } => {
            let mut editor = CategoryEditor::default();
            editor.request_reset(client);
            finish(editor.status())?;
            if !confirm(editor.dialog(), yes)? {
                editor.cancel();
                println!("Cancelled.");
                return Ok(());
            }
            editor.confirm(client).await;
            finish(editor.status())?;
            print_categories(editor.items());
            Ok(())
        }
    }
}

async fn loaded_category_editor(client: &ApiClient) -> Result<CategoryEditor> {
    let mut editor = CategoryEditor::default();
    editor.load(client).await;
    finish(editor.status())?;
    Ok(editor)
}

async fn contact(action: ContactAction, client: &ApiClient) -> Result<()> {
    match action {
        ContactAction::Show => {
            let data = client.fetch_contact().await.unwrap_or_else(|err| {
                warn!(error = %err, "Error fetching contact info, showing defaults");
                ContactData::default()
            });
            print_contact(&data);
            Ok(())
        }
        ContactAction::Set { field, value } => {
            let mut editor = ContactEditor::default();
            editor.load(client).await;
            finish(editor.status())?;
            editor.set(field, value);
            editor.save(client).await;
            finish(editor.status())
        }
        ContactAction::Reset { yes } => {
            let mut editor = ContactEditor::default();
            editor.request_reset(client);
            finish(editor.status())?;
            if !confirm(editor.dialog(), yes)? {
                editor.cancel();
                println!("Cancelled.");
                return Ok(());
            }
            editor.confirm(client).await;
            finish(editor.status())?;
            print_contact(editor.data());
            Ok(())
        }
        ContactAction::Messages => {
            let mut editor = ContactEditor::default();
            editor.open_tab(ContactTab::Messages, client).await;
            finish(editor.status())?;
            if editor.messages().is_empty() {
                println!("No messages yet.");
            }
            for message in editor.messages() {
                println!("{}  {} <{}>", message.created_date(), message.name, message.email);
                if !message.phone.is_empty() {
                    println!("    phone: {}", message.phone);
                }
                println!("    {}", message.message);
            }
            Ok(())
        }
        ContactAction::Send(args) => {
            let mut form = LeadForm::from(args);
            let notification = submit_lead(client, &mut form).await;
            if notification.is_success() {
                println!("{}", notification.message);
                Ok(())
            } else {
                bail!(notification.message)
            }
        }
    }
}

async fn services(mode: PricingMode, client: &ApiClient) -> Result<()> {
    let data = client.fetch_services().await.unwrap_or_else(|err| {
        warn!(error = %err, "Error fetching services");
        ServicesData::default()
    });

    let state = ServicesReducer::reduce(ServicesState::Loading, ServicesIntent::Loaded { data });
    let state = ServicesReducer::reduce(state, ServicesIntent::SetMode { mode });
    let ServicesState::Ready { data, mode, .. } = state else {
        return Ok(());
    };

    println!("{}", mode.heading().to_uppercase());
    println!("{}", mode.tagline());
    println!();

    let offer = data.offer(mode);
    println!("[{}] {}% {}", offer.badge_text, offer.discount_percentage, offer.title);
    println!("  {}", offer.description);
    for perk in [&offer.perk1, &offer.perk2, &offer.perk3] {
        println!("  - {}: {}", perk.title, perk.desc);
    }
    println!("  {}", offer.terms);
    println!();

    let products = data.products(mode);
    println!("{} PRODUCTS", products.len());
    for product in products {
        let detail = match mode {
            PricingMode::Retail => format!(
                "{}  stock {}  rating {}",
                product.price.as_deref().unwrap_or("-"),
                display_value(&product.stock),
                product.rating.map_or_else(|| "-".to_string(), |r| format!("{r:.1}")),
            ),
            PricingMode::Wholesale => format!(
                "{}  moq {}  margin {}",
                product.price.as_deref().unwrap_or("-"),
                product.moq.as_deref().unwrap_or("-"),
                product.margin.as_deref().unwrap_or("-"),
            ),
        };
        println!("  {:<28} {:<16} {}", product.name, product.category, detail);
    }
    Ok(())
}

fn print_testimonials(data: &TestimonialsData) {
    let hero = &data.hero;
    println!("[{}]", hero.badge);
    println!("{} {}", hero.title, hero.title_highlight);
    println!("{}", hero.subtitle);
    println!();

    if data.has_reviews() {
        for review in &data.reviews {
            println!(
                "  {:<20} {:<24} {}",
                review.name,
                review.role.to_uppercase(),
                "★".repeat(usize::from(review.stars()))
            );
            println!("    \"{}\"", review.text);
        }
    } else {
        println!("  {NO_REVIEWS}");
    }
    println!();

    let spotlight = &data.spotlight;
    println!("[{}]", spotlight.badge);
    println!("\"{}\"", spotlight.quote);
    println!("{}", spotlight.description);
    println!("- {}, {}", spotlight.name, spotlight.role);
    println!();

    let cta = &data.cta;
    println!("{} {}  [{}]", cta.title, cta.title_highlight, cta.button_text);
}

fn print_categories(items: &[CategoryItem]) {
    for (position, item) in items.iter().enumerate() {
        println!(
            "{:>2}. {} {:<24} {:<16} {:>4} products  {}",
            position + 1,
            item.icon.glyph(),
            item.title,
            item.id,
            item.count,
            item.badge
        );
    }
}

fn print_contact(data: &ContactData) {
    for field in ContactField::ALL {
        println!("{:<16} {}", field.label(), data.get(field));
    }
}

/// Turns the editor's status line into the command's outcome.
fn finish(status: &StatusLine) -> Result<()> {
    match status.current() {
        Some(status) if status.kind == StatusKind::Error => bail!(status.message.clone()),
        Some(status) => {
            println!("{}", status.message);
            Ok(())
        }
        None => Ok(()),
    }
}

/// Shows the dialog on the terminal and reads y/N from stdin.
fn confirm(dialog: &ConfirmDialogState, assume_yes: bool) -> Result<bool> {
    let ConfirmDialogState::Open { title, message, .. } = dialog else {
        return Ok(false);
    };
    if assume_yes {
        return Ok(true);
    }

    let mut stdout = io::stdout();
    writeln!(stdout, "{title}")?;
    write!(stdout, "{message} [y/N] ")?;
    stdout.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
