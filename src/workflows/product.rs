//! Product workflows.

use super::{
    FieldEdit, or_blank, parse_id, parse_optional_text, parse_price, parse_text, parse_units,
    print_id_table, prompt_edit, read_id,
};
use crate::{
    core::{
        category::{self, CategoryOrder},
        product::{self, NewProduct, ProductFilter, ProductOrder},
        supplier,
    },
    entities,
    errors::{Error, Result},
    session::Session,
    validation::{self, Violation},
};
use sea_orm::DatabaseConnection;
use std::io::{BufRead, Write};
use tracing::info;

/// Creates a product after checking, in order, the supplier, the category and
/// the name. A bad supplier or category answer ends the workflow before any
/// further prompt.
pub async fn add_product<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    let (db, console) = session.parts();

    let suppliers = supplier::list_suppliers(db).await?;
    print_id_table(
        console,
        "SupplierId",
        "CompanyName",
        suppliers.iter().map(|s| (s.id, s.company_name.as_str())),
    )?;
    let supplier_id = read_id(console, "Enter SupplierID:", "SupplierID")?;
    if !supplier::supplier_exists(db, supplier_id).await? {
        return Err(Error::SupplierNotFound { id: supplier_id });
    }

    let categories = category::list_categories(db, CategoryOrder::Id).await?;
    print_id_table(
        console,
        "CategoryID",
        "CategoryName",
        categories.iter().map(|c| (c.id, c.name.as_str())),
    )?;
    let category_id = read_id(console, "Enter CategoryID:", "CategoryID")?;
    if !category::category_exists(db, category_id).await? {
        return Err(Error::CategoryNotFound { id: category_id });
    }

    let name = console.ask("Enter Product Name:")?;
    console.clear()?;
    let candidate = entities::product::Model {
        id: 0,
        name,
        supplier_id,
        category_id,
        quantity_per_unit: None,
        unit_price: None,
        units_in_stock: None,
        units_on_order: None,
        reorder_level: None,
        discontinued: false,
    };
    let mut violations = validation::check(&candidate);
    if violations.is_empty() && product::product_name_exists(db, &candidate.name).await? {
        violations.push(Violation::name_exists());
    }
    if !violations.is_empty() {
        return Err(Error::Validation { violations });
    }

    let added = product::insert_product(db, NewProduct {
        name: candidate.name,
        supplier_id,
        category_id,
    })
    .await?;
    info!("Product added - {} (ID: {})", added.name, added.id);
    Ok(())
}

/// Offers every mutable product field for editing, then saves the whole
/// record once. A bad answer for one field is logged and leaves that field
/// as it was; the remaining fields are still offered.
pub async fn edit_product<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    let (db, console) = session.parts();

    let products = product::list_products(db, ProductFilter::All, ProductOrder::Id).await?;
    print_id_table(
        console,
        "ProductId",
        "ProductName",
        products.iter().map(|p| (p.id, p.name.as_str())),
    )?;
    let id = read_id(console, "Enter ProductID:", "ProductID")?;
    let mut record = product::get_product(db, id)
        .await?
        .ok_or(Error::ProductNotFound { id })?;

    let name = prompt_edit(console, "ProductName", parse_text)?;
    let name = vet_name(db, &record, name).await?;
    name.apply("ProductName", &mut record.name);

    let mut supplier_edit = prompt_edit(console, "SupplierID", parse_id)?;
    if let FieldEdit::Set(supplier_id) = supplier_edit {
        if !supplier::supplier_exists(db, supplier_id).await? {
            supplier_edit = FieldEdit::refuse("SupplierID", &[Violation::new(
                "supplier_id",
                format!("No supplier with id {supplier_id}"),
            )]);
        }
    }
    supplier_edit.apply("SupplierID", &mut record.supplier_id);

    let mut category_edit = prompt_edit(console, "CategoryID", parse_id)?;
    if let FieldEdit::Set(category_id) = category_edit {
        if !category::category_exists(db, category_id).await? {
            category_edit = FieldEdit::refuse("CategoryID", &[Violation::new(
                "category_id",
                format!("No category with id {category_id}"),
            )]);
        }
    }
    category_edit.apply("CategoryID", &mut record.category_id);

    let quantity = prompt_edit(console, "QuantityPerUnit", parse_optional_text)?;
    let quantity = vet_quantity_per_unit(&record, quantity);
    quantity.apply("QuantityPerUnit", &mut record.quantity_per_unit);

    prompt_edit(console, "UnitPrice", parse_price)?.apply("UnitPrice", &mut record.unit_price);
    prompt_edit(console, "UnitsInStock", parse_units)?
        .apply("UnitsInStock", &mut record.units_in_stock);
    prompt_edit(console, "UnitsOnOrder", parse_units)?
        .apply("UnitsOnOrder", &mut record.units_on_order);
    prompt_edit(console, "ReorderLevel", parse_units)?
        .apply("ReorderLevel", &mut record.reorder_level);

    // Toggles the stored flag, not the in-memory copy.
    if console.confirm("Edit Discontinued - y or n?")? {
        let stored = product::get_product(db, id)
            .await?
            .ok_or(Error::ProductNotFound { id })?;
        record.discontinued = !stored.discontinued;
        info!("Discontinued updated");
    }
    console.clear()?;

    product::update_product(db, record).await?;
    info!("ProductID {id} updated");
    Ok(())
}

/// Offers the all / discontinued / active sub-menu and lists the matching
/// products by name. Any other answer returns to the main menu.
pub async fn display_products<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    let (db, console) = session.parts();
    console.say("1) Display Products")?;
    console.say("2) Display discontinued Products")?;
    console.say("3) Display active Products")?;
    let choice = console.ask("Enter any other key to quit to previous menu")?;
    console.clear()?;
    info!("Product display option {choice} selected");

    let filter = match choice.as_str() {
        "1" => ProductFilter::All,
        "2" => ProductFilter::Discontinued,
        "3" => ProductFilter::Active,
        _ => return Ok(()),
    };
    let products = product::list_products(db, filter, ProductOrder::Name).await?;
    console.say(format_args!("{} records returned", products.len()))?;
    for item in &products {
        console.say(&item.name)?;
    }
    Ok(())
}

/// Shows every field of one product.
pub async fn display_product<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    let (db, console) = session.parts();
    let id = read_id(console, "Enter ProductID", "ProductID")?;
    let item = product::get_product(db, id)
        .await?
        .ok_or(Error::ProductNotFound { id })?;

    console.say(format_args!("ProductID: {}", item.id))?;
    console.say(format_args!("ProductName: {}", item.name))?;
    console.say(format_args!("SupplierID: {}", item.supplier_id))?;
    console.say(format_args!("CategoryID: {}", item.category_id))?;
    console.say(format_args!(
        "QuantityPerUnit: {}",
        or_blank(item.quantity_per_unit.as_ref())
    ))?;
    console.say(format_args!(
        "UnitPrice: {}",
        item.unit_price
            .map(|price| format!("${price:.2}"))
            .unwrap_or_default()
    ))?;
    console.say(format_args!(
        "UnitsInStock: {}",
        or_blank(item.units_in_stock.as_ref())
    ))?;
    console.say(format_args!(
        "UnitsOnOrder: {}",
        or_blank(item.units_on_order.as_ref())
    ))?;
    console.say(format_args!(
        "ReorderLevel: {}",
        or_blank(item.reorder_level.as_ref())
    ))?;
    console.say(format_args!("Discontinued: {}", item.discontinued))?;
    Ok(())
}

/// Applies the creation rules to an edited name: field rules, and uniqueness
/// against every other product.
async fn vet_name(
    db: &DatabaseConnection,
    record: &entities::product::Model,
    edit: FieldEdit<String>,
) -> Result<FieldEdit<String>> {
    let name = match edit {
        FieldEdit::Set(name) => name,
        other => return Ok(other),
    };
    let candidate = entities::product::Model {
        name,
        ..record.clone()
    };
    let mut violations = violations_for(&candidate, "name");
    if violations.is_empty()
        && candidate.name != record.name
        && product::product_name_exists(db, &candidate.name).await?
    {
        violations.push(Violation::name_exists());
    }
    if violations.is_empty() {
        Ok(FieldEdit::Set(candidate.name))
    } else {
        Ok(FieldEdit::refuse("ProductName", &violations))
    }
}

fn vet_quantity_per_unit(
    record: &entities::product::Model,
    edit: FieldEdit<Option<String>>,
) -> FieldEdit<Option<String>> {
    let quantity = match edit {
        FieldEdit::Set(quantity) => quantity,
        other => return other,
    };
    let candidate = entities::product::Model {
        quantity_per_unit: quantity,
        ..record.clone()
    };
    let violations = violations_for(&candidate, "quantity_per_unit");
    if violations.is_empty() {
        FieldEdit::Set(candidate.quantity_per_unit)
    } else {
        FieldEdit::refuse("QuantityPerUnit", &violations)
    }
}

fn violations_for(candidate: &entities::product::Model, field: &str) -> Vec<Violation> {
    validation::check(candidate)
        .into_iter()
        .filter(|v| v.field == field)
        .collect()
}
