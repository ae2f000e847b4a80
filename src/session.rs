//! Interactive session loop.
//!
//! A [`Session`] owns the store connection and the console for the life of
//! the process and is handed to every workflow. The loop shows the menu, maps
//! the operator's token to a [`MenuAction`], runs the matching workflow and
//! starts over until the quit token (or end of input) is read.

use crate::{
    console::Console,
    errors::{Error, Result},
    workflows,
};
use sea_orm::DatabaseConnection;
use std::io::{BufRead, ErrorKind, Write};
use tracing::{error, info};

/// Every action the main menu offers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    /// List categories with descriptions
    DisplayCategories,
    /// Create a category
    AddCategory,
    /// Show one category and its products
    DisplayCategoryProducts,
    /// Show every category with its products
    DisplayAllCategoryProducts,
    /// Create a product
    AddProduct,
    /// Edit a product field by field
    EditProduct,
    /// List products, optionally filtered by status
    DisplayProducts,
    /// Show every field of one product
    DisplayProduct,
    /// Edit a category field by field
    EditCategory,
    /// Leave the session
    Quit,
}

impl MenuAction {
    /// Menu entries in display order; `Quit` is shown separately.
    pub const WORKFLOWS: [Self; 9] = [
        Self::DisplayCategories,
        Self::AddCategory,
        Self::DisplayCategoryProducts,
        Self::DisplayAllCategoryProducts,
        Self::AddProduct,
        Self::EditProduct,
        Self::DisplayProducts,
        Self::DisplayProduct,
        Self::EditCategory,
    ];

    /// Maps operator input to an action. Digits must match exactly; the quit
    /// token is case-insensitive. Anything else maps to `None`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let action = match token {
            "1" => Self::DisplayCategories,
            "2" => Self::AddCategory,
            "3" => Self::DisplayCategoryProducts,
            "4" => Self::DisplayAllCategoryProducts,
            "5" => Self::AddProduct,
            "6" => Self::EditProduct,
            "7" => Self::DisplayProducts,
            "8" => Self::DisplayProduct,
            "9" => Self::EditCategory,
            quit if quit.eq_ignore_ascii_case("q") => Self::Quit,
            _ => return None,
        };
        Some(action)
    }

    /// The token that selects this action.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::DisplayCategories => "1",
            Self::AddCategory => "2",
            Self::DisplayCategoryProducts => "3",
            Self::DisplayAllCategoryProducts => "4",
            Self::AddProduct => "5",
            Self::EditProduct => "6",
            Self::DisplayProducts => "7",
            Self::DisplayProduct => "8",
            Self::EditCategory => "9",
            Self::Quit => "q",
        }
    }

    /// Menu text for this action.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DisplayCategories => "Display Categories",
            Self::AddCategory => "Add Category",
            Self::DisplayCategoryProducts => "Display Category and related Products",
            Self::DisplayAllCategoryProducts => "Display all Categories related Products",
            Self::AddProduct => "Add Product",
            Self::EditProduct => "Edit Product",
            Self::DisplayProducts => "Display all Products",
            Self::DisplayProduct => "Display specific Product",
            Self::EditCategory => "Edit Category",
            Self::Quit => "Quit",
        }
    }
}

/// Context shared by every workflow for one interactive run
pub struct Session<R, W> {
    db: DatabaseConnection,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session over an open connection and a console.
    pub const fn new(db: DatabaseConnection, console: Console<R, W>) -> Self {
        Self { db, console }
    }

    /// The store connection.
    pub const fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// The console, for prompting and printing.
    pub const fn console(&mut self) -> &mut Console<R, W> {
        &mut self.console
    }

    /// Splits the session into its connection and console so a workflow can
    /// await queries while holding the console.
    pub const fn parts(&mut self) -> (&DatabaseConnection, &mut Console<R, W>) {
        (&self.db, &mut self.console)
    }

    /// Runs the menu loop until the operator quits or input ends.
    ///
    /// Workflow failures are logged and the loop carries on. Only console I/O
    /// failures end the session early.
    pub async fn run(&mut self) -> Result<()> {
        info!("Program started");
        loop {
            self.show_menu()?;
            let Some(input) = self.console.read_line()? else {
                info!("Input closed");
                break;
            };
            self.console.clear()?;
            info!("Option {input} selected");

            match MenuAction::from_token(&input) {
                Some(MenuAction::Quit) => break,
                Some(action) => match self.dispatch(action).await {
                    Ok(()) => {}
                    Err(Error::Io(e)) if e.kind() == ErrorKind::UnexpectedEof => {
                        info!("Input closed");
                        break;
                    }
                    Err(Error::Io(e)) => return Err(Error::Io(e)),
                    Err(e) => report(&e),
                },
                None => {}
            }
            self.console.blank_line()?;
        }
        info!("Program ended");
        Ok(())
    }

    /// Runs the workflow for a single action.
    pub async fn dispatch(&mut self, action: MenuAction) -> Result<()> {
        match action {
            MenuAction::DisplayCategories => workflows::category::display_categories(self).await,
            MenuAction::AddCategory => workflows::category::add_category(self).await,
            MenuAction::DisplayCategoryProducts => {
                workflows::category::display_category_products(self).await
            }
            MenuAction::DisplayAllCategoryProducts => {
                workflows::category::display_all_category_products(self).await
            }
            MenuAction::AddProduct => workflows::product::add_product(self).await,
            MenuAction::EditProduct => workflows::product::edit_product(self).await,
            MenuAction::DisplayProducts => workflows::product::display_products(self).await,
            MenuAction::DisplayProduct => workflows::product::display_product(self).await,
            MenuAction::EditCategory => workflows::category::edit_category(self).await,
            MenuAction::Quit => Ok(()),
        }
    }

    fn show_menu(&mut self) -> Result<()> {
        for action in MenuAction::WORKFLOWS {
            self.console
                .say(format_args!("{}) {}", action.token(), action.label()))?;
        }
        self.console.say("\"q\" to quit")
    }
}

/// Logs a workflow failure, one line per violation for validation errors.
fn report(error: &Error) {
    match error {
        Error::Validation { violations } => {
            for violation in violations {
                error!("{violation}");
            }
        }
        other => error!("{other}"),
    }
}
