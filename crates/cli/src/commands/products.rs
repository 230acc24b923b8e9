//! `bo-cli products ...`

use clap::Subcommand;

use backoffice_admin::models::ProductForm;
use backoffice_admin::pages::ProductsPage;
use backoffice_core::ProductId;

use super::{CommandError, records};

#[derive(Subcommand)]
pub enum ProductAction {
    /// Add a product
    Add {
        #[arg(short, long)]
        name: String,

        /// Price with `.` thousands separators (e.g. 150.000)
        #[arg(short, long)]
        price: String,

        /// Category (`figure`, `keychain`, `t-shirt`)
        #[arg(short, long)]
        category: String,

        /// Image URL
        #[arg(short, long)]
        image: Option<String>,
    },
    /// Replace fields of an existing product
    Update {
        id: ProductId,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        price: Option<String>,

        #[arg(short, long)]
        category: Option<String>,

        /// New image URL; an empty string removes the image
        #[arg(short, long)]
        image: Option<String>,
    },
    /// Load a product into the form and print it
    Edit { id: ProductId },
    /// Delete a product
    Delete { id: ProductId },
    /// List products
    List {
        /// Search by name
        #[arg(short, long)]
        query: Option<String>,

        /// Only this category
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Only this price range (`low`, `medium`, `high`)
        #[arg(short = 'r', long, default_value = "all")]
        price_range: String,

        /// Zero-based page index
        #[arg(short, long, default_value_t = 0)]
        page: usize,
    },
}

/// Run a products command.
///
/// # Errors
///
/// Returns `CommandError` if the action fails.
pub fn run(page: &mut ProductsPage, action: ProductAction) -> Result<(), CommandError> {
    match action {
        ProductAction::Add {
            name,
            price,
            category,
            image,
        } => {
            let form = ProductForm::new(name, price, category).with_image(image.unwrap_or_default());
            records::add(page, form)
        }
        ProductAction::Update {
            id,
            name,
            price,
            category,
            image,
        } => records::update(page, id, |form| {
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(price) = price {
                form.price = price;
            }
            if let Some(category) = category {
                form.category = category;
            }
            if let Some(image) = image {
                form.image = image;
            }
        }),
        ProductAction::Edit { id } => records::edit(page, id),
        ProductAction::Delete { id } => records::delete(page, id),
        ProductAction::List {
            query,
            category,
            price_range,
            page: index,
        } => records::list(
            page,
            query,
            &[
                ("category", category.as_str()),
                ("price_range", price_range.as_str()),
            ],
            index,
        ),
    }
}
