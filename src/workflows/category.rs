//! Category workflows.

use super::{FieldEdit, parse_optional_text, parse_text, print_id_table, prompt_edit, read_id};
use crate::{
    core::category::{self, CategoryOrder, NewCategory},
    entities,
    errors::{Error, Result},
    session::Session,
    validation::{self, Violation},
};
use sea_orm::DatabaseConnection;
use std::io::{BufRead, Write};
use tracing::info;

/// Lists every category by name with its description.
pub async fn display_categories<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    let (db, console) = session.parts();
    let categories = category::list_categories(db, CategoryOrder::Name).await?;
    console.say(format_args!("{} records returned", categories.len()))?;
    for item in &categories {
        console.say(format_args!(
            "{} - {}",
            item.name,
            item.description.as_deref().unwrap_or_default()
        ))?;
    }
    Ok(())
}

/// Prompts for a name and description and inserts the category if it passes
/// the field rules and the name is not taken.
pub async fn add_category<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    let (db, console) = session.parts();
    let name = console.ask("Enter Category Name:")?;
    let description = console.ask("Enter the Category Description:")?;

    let candidate = entities::category::Model {
        id: 0,
        name,
        description: (!description.is_empty()).then_some(description),
    };
    let mut violations = validation::check(&candidate);
    // Duplicate names are only looked up once the field rules pass.
    if violations.is_empty() && category::category_name_exists(db, &candidate.name).await? {
        violations.push(Violation::name_exists());
    }
    if !violations.is_empty() {
        console.clear()?;
        return Err(Error::Validation { violations });
    }

    let added = category::insert_category(db, NewCategory {
        name: candidate.name,
        description: candidate.description,
    })
    .await?;
    info!("Category added - {}", added.name);
    Ok(())
}

/// Lets the operator pick a category and shows it with its products.
pub async fn display_category_products<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
) -> Result<()> {
    let (db, console) = session.parts();
    let categories = category::list_categories(db, CategoryOrder::Id).await?;
    console.say("Select the category whose products you want to display:")?;
    for item in &categories {
        console.say(format_args!("{}) {}", item.id, item.name))?;
    }

    let id = read_id(console, "Enter CategoryID:", "CategoryID")?;
    let (found, products) = category::get_category_with_products(db, id)
        .await?
        .ok_or(Error::CategoryNotFound { id })?;
    console.say(format_args!(
        "{} - {}",
        found.name,
        found.description.as_deref().unwrap_or_default()
    ))?;
    for product in &products {
        console.say(&product.name)?;
    }
    Ok(())
}

/// Shows every category with its products indented underneath.
pub async fn display_all_category_products<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
) -> Result<()> {
    let (db, console) = session.parts();
    for (item, products) in category::list_categories_with_products(db).await? {
        console.say(&item.name)?;
        for product in &products {
            console.say(format_args!("\t{}", product.name))?;
        }
    }
    Ok(())
}

/// Edits a category's name and description, then saves the whole record.
pub async fn edit_category<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    let (db, console) = session.parts();
    let categories = category::list_categories(db, CategoryOrder::Id).await?;
    print_id_table(
        console,
        "CategoryID",
        "CategoryName",
        categories.iter().map(|c| (c.id, c.name.as_str())),
    )?;

    let id = read_id(console, "Enter CategoryID:", "CategoryID")?;
    let mut record = category::get_category(db, id)
        .await?
        .ok_or(Error::CategoryNotFound { id })?;

    let name = prompt_edit(console, "CategoryName", parse_text)?;
    let name = vet_name(db, &record, name).await?;
    name.apply("CategoryName", &mut record.name);

    let description = prompt_edit(console, "CategoryDescription", parse_optional_text)?;
    description.apply("CategoryDescription", &mut record.description);

    category::update_category(db, record).await?;
    info!("CategoryID {id} updated");
    Ok(())
}

/// Applies the creation rules to an edited name: field rules, and uniqueness
/// against every other category.
async fn vet_name(
    db: &DatabaseConnection,
    record: &entities::category::Model,
    edit: FieldEdit<String>,
) -> Result<FieldEdit<String>> {
    let name = match edit {
        FieldEdit::Set(name) => name,
        other => return Ok(other),
    };
    let candidate = entities::category::Model {
        name,
        ..record.clone()
    };
    let mut violations: Vec<Violation> = validation::check(&candidate)
        .into_iter()
        .filter(|v| v.field == "name")
        .collect();
    if violations.is_empty()
        && candidate.name != record.name
        && category::category_name_exists(db, &candidate.name).await?
    {
        violations.push(Violation::name_exists());
    }
    if violations.is_empty() {
        Ok(FieldEdit::Set(candidate.name))
    } else {
        Ok(FieldEdit::refuse("CategoryName", &violations))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::panic)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_display_categories_counts_and_orders() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_category(&db, "Seafood").await?;
        category::insert_category(&db, NewCategory {
            name: "Beverages".to_string(),
            description: Some("Soft drinks".to_string()),
        })
        .await?;
        let mut session = scripted_session(db, &[]);

        display_categories(&mut session).await?;

        let output = session_output(&mut session);
        assert_eq!(
            output,
            "2 records returned\nBeverages - Soft drinks\nSeafood - Test category\n"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_add_category_stores_name_and_description() -> Result<()> {
        let db = setup_test_db().await?;
        let mut session = scripted_session(db, &["Confections", "Desserts and candies"]);

        add_category(&mut session).await?;

        let stored = category::get_category_by_name(session.db(), "Confections")
            .await?
            .unwrap();
        assert_eq!(stored.description.as_deref(), Some("Desserts and candies"));
        assert!(category::category_name_exists(session.db(), "Confections").await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_add_category_duplicate_name_reports_name_exists() -> Result<()> {
        let db = setup_test_db().await?;
        let existing = create_test_category(&db, "Produce").await?;
        let mut session = scripted_session(db, &["Produce", "Another description"]);

        let result = add_category(&mut session).await;

        let violations = match result {
            Err(Error::Validation { violations }) => violations,
            other => panic!("expected a validation error, got {other:?}"),
        };
        assert_eq!(violations, vec![Violation::name_exists()]);
        let all = category::list_categories(session.db(), CategoryOrder::Id).await?;
        assert_eq!(all, vec![existing]);
        Ok(())
    }

    #[tokio::test]
    async fn test_add_category_reports_every_violation() -> Result<()> {
        let db = setup_test_db().await?;
        let mut session = scripted_session(db, &["", ""]);

        let result = add_category(&mut session).await;

        let violations = match result {
            Err(Error::Validation { violations }) => violations,
            other => panic!("expected a validation error, got {other:?}"),
        };
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "name");
        assert!(
            category::list_categories(session.db(), CategoryOrder::Id)
                .await?
                .is_empty()
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_add_category_skips_name_lookup_when_rules_fail() -> Result<()> {
        let db = setup_test_db().await?;
        // Stored without going through the field rules.
        let too_long = "Dairy and Cheese Products";
        create_test_category(&db, too_long).await?;
        let mut session = scripted_session(db, &[too_long, ""]);

        let result = add_category(&mut session).await;

        let violations = match result {
            Err(Error::Validation { violations }) => violations,
            other => panic!("expected a validation error, got {other:?}"),
        };
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "name");
        assert!(!violations.contains(&Violation::name_exists()));
        Ok(())
    }

    #[tokio::test]
    async fn test_display_category_products() -> Result<()> {
        let (db, supplier, category) = setup_with_references().await?;
        create_test_product(&db, "Chang", supplier.id, category.id).await?;
        create_test_product(&db, "Chai", supplier.id, category.id).await?;
        let id = category.id.to_string();
        let mut session = scripted_session(db, &[&id]);

        display_category_products(&mut session).await?;

        let output = session_output(&mut session);
        assert!(output.contains(&format!("{}) Test Category", category.id)));
        assert!(output.ends_with("Test Category - Test category\nChai\nChang\n"));
        Ok(())
    }

    #[tokio::test]
    async fn test_display_category_products_unknown_id() -> Result<()> {
        let db = setup_test_db().await?;
        let mut session = scripted_session(db, &["77"]);
        let result = display_category_products(&mut session).await;
        assert!(matches!(result, Err(Error::CategoryNotFound { id: 77 })));
        Ok(())
    }

    #[tokio::test]
    async fn test_display_category_products_malformed_id() -> Result<()> {
        let db = setup_test_db().await?;
        let mut session = scripted_session(db, &["seven"]);
        let result = display_category_products(&mut session).await;
        assert!(matches!(
            result,
            Err(Error::InvalidInput {
                field: "CategoryID",
                ..
            })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_display_all_category_products() -> Result<()> {
        let (db, supplier, category) = setup_with_references().await?;
        create_test_category(&db, "Empty").await?;
        create_test_product(&db, "Chai", supplier.id, category.id).await?;
        let mut session = scripted_session(db, &[]);

        display_all_category_products(&mut session).await?;

        assert_eq!(session_output(&mut session), "Test Category\n\tChai\nEmpty\n");
        Ok(())
    }

    #[tokio::test]
    async fn test_edit_category_declining_everything_keeps_record() -> Result<()> {
        let db = setup_test_db().await?;
        let original = create_test_category(&db, "Grains").await?;
        let id = original.id.to_string();
        let mut session = scripted_session(db, &[&id, "n", "n"]);

        edit_category(&mut session).await?;

        let stored = category::get_category(session.db(), original.id).await?.unwrap();
        assert_eq!(stored, original);
        Ok(())
    }

    #[tokio::test]
    async fn test_edit_category_updates_fields() -> Result<()> {
        let db = setup_test_db().await?;
        let original = create_test_category(&db, "Grains").await?;
        let id = original.id.to_string();
        let mut session = scripted_session(db, &[&id, "y", "Grains/Cereals", "Y", "Breads"]);

        edit_category(&mut session).await?;

        let stored = category::get_category(session.db(), original.id).await?.unwrap();
        assert_eq!(stored.name, "Grains/Cereals");
        assert_eq!(stored.description.as_deref(), Some("Breads"));
        Ok(())
    }

    #[tokio::test]
    async fn test_edit_category_refuses_taken_name_but_keeps_going() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_category(&db, "Meat/Poultry").await?;
        let original = create_test_category(&db, "Seafood").await?;
        let id = original.id.to_string();
        let mut session = scripted_session(db, &[&id, "y", "Meat/Poultry", "y", "Fish"]);

        edit_category(&mut session).await?;

        let stored = category::get_category(session.db(), original.id).await?.unwrap();
        assert_eq!(stored.name, "Seafood");
        assert_eq!(stored.description.as_deref(), Some("Fish"));
        Ok(())
    }

    #[tokio::test]
    async fn test_edit_category_unknown_id_aborts() -> Result<()> {
        let db = setup_test_db().await?;
        let mut session = scripted_session(db, &["5"]);
        let result = edit_category(&mut session).await;
        assert!(matches!(result, Err(Error::CategoryNotFound { id: 5 })));
        Ok(())
    }
}
