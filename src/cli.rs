//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::admin::CategoryDraft;
use crate::catalog::{CategoryIcon, ACCENT_OPTIONS, GRADIENT_OPTIONS};
use crate::config::Config;
use crate::contact::{ContactField, LeadForm};
use crate::services::PricingMode;
use crate::theme::Theme;

#[derive(Debug, Parser)]
#[command(name = "storefront", version, about = "Storefront showcase and content admin")]
pub struct Cli {
    /// Config file (default: the user config dir's storefront/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override `api.base_url`
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Override `display.theme`
    #[arg(long, global = true)]
    pub theme: Option<Theme>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Terminal carousel showcase
    Browse {
        /// Show categories from a JSON file instead of the API
        #[arg(long)]
        preview: Option<PathBuf>,
    },
    /// Manage the shop-by-category list
    Categories {
        #[command(subcommand)]
        action: CategoriesAction,
    },
    /// Contact info and submitted leads
    Contact {
        #[command(subcommand)]
        action: ContactAction,
    },
    /// Retail or wholesale product list with the current offer
    Services {
        #[arg(long, default_value_t = PricingMode::Retail)]
        mode: PricingMode,
    },
    /// Customer reviews, founder spotlight and call to action
    Testimonials {
        /// Show content from a JSON file instead of the API
        #[arg(long)]
        preview: Option<PathBuf>,
    },
}

#[derive(Debug, Subcommand)]
pub enum CategoriesAction {
    List,
    /// Append a category and save the list
    Add(AddCategory),
    /// Remove a category and save the list
    Remove {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Restore the server's default categories
    Reset {
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Args)]
pub struct AddCategory {
    /// Identifier; lowercased, spaces become dashes
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub title: String,
    /// Image URL or path
    #[arg(long)]
    pub img: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, default_value = "")]
    pub badge: String,
    #[arg(long, default_value_t = 0)]
    pub count: u32,
    #[arg(long, default_value_t = CategoryIcon::CarFront)]
    pub icon: CategoryIcon,
    #[arg(long, default_value = GRADIENT_OPTIONS[0])]
    pub color: String,
    #[arg(long, default_value = ACCENT_OPTIONS[0])]
    pub accent: String,
}

impl From<AddCategory> for CategoryDraft {
    fn from(args: AddCategory) -> Self {
        CategoryDraft {
            id: args.id,
            title: args.title,
            img: args.img,
            description: args.description,
            badge: args.badge,
            count: args.count,
            icon: args.icon,
            color: args.color,
            accent: args.accent,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ContactAction {
    Show,
    /// Change one field and save
    Set { field: ContactField, value: String },
    Reset {
        #[arg(long)]
        yes: bool,
    },
    /// List submitted leads
    Messages,
    /// Submit a lead through the public form
    Send(SendLead),
}

#[derive(Debug, Args)]
pub struct SendLead {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long)]
    pub message: String,
}

impl From<SendLead> for LeadForm {
    fn from(args: SendLead) -> Self {
        LeadForm {
            name: args.name,
            email: args.email,
            phone: args.phone,
            message: args.message,
        }
    }
}

impl Cli {
    /// Applies `--api-url` and `--theme` on top of the loaded file.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.api_url {
            config.api.base_url = url.clone();
        }
        if let Some(theme) = self.theme {
            config.display.theme = theme;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_with_defaults() {
        let cli = Cli::parse_from([
            "storefront", "categories", "add", "--id", "Soft Toys", "--title", "Soft Toys",
            "--img", "/bear.png",
        ]);
        let Command::Categories {
            action: CategoriesAction::Add(add),
        } = cli.command
        else {
            panic!("expected categories add");
        };
        let draft = CategoryDraft::from(add);
        assert_eq!(draft.icon, CategoryIcon::CarFront);
        assert_eq!(draft.color, GRADIENT_OPTIONS[0]);
    }

    #[test]
    fn global_overrides_apply() {
        let cli = Cli::parse_from([
            "storefront",
            "services",
            "--mode",
            "wholesale",
            "--api-url",
            "http://localhost:5000/api",
            "--theme",
            "light",
        ]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.api.base_url, "http://localhost:5000/api");
        assert_eq!(config.display.theme, Theme::Light);
        assert!(matches!(
            cli.command,
            Command::Services {
                mode: PricingMode::Wholesale
            }
        ));
    }

    #[test]
    fn contact_set_accepts_snake_case_field() {
        let cli = Cli::parse_from(["storefront", "contact", "set", "hours_sunday", "Closed"]);
        assert!(matches!(
            cli.command,
            Command::Contact {
                action: ContactAction::Set {
                    field: ContactField::HoursSunday,
                    ..
                }
            }
        ));
    }

    #[test]
    fn testimonials_takes_preview_file() {
        let cli = Cli::parse_from(["storefront", "testimonials", "--preview", "reviews.json"]);
        let Command::Testimonials { preview } = cli.command else {
            panic!("expected testimonials");
        };
        assert_eq!(preview, Some(PathBuf::from("reviews.json")));
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["storefront", "services", "--mode", "bulk"]).is_err());
    }
}
