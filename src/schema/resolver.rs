/// GraphQL resolvers for list and relation fields
///
/// - `sheets` / `composers` root lists with page/pageSize pagination
/// - `Sheet.Composer`: lookup by the sheet's safe composer name
/// - `Composer.Sheets`: paginated sheets scoped to the parent composer
///
/// Relations resolve lazily, one store call per parent row that asks for them.

use crate::catalog::{CatalogStore, Composer, Pagination, Sheet};
use crate::schema::types::{COMPOSER_TYPE, SHEET_TYPE};

use async_graphql::dynamic::{Field, FieldFuture, FieldValue, InputValue, ObjectAccessor, TypeRef};
use std::sync::Arc;

/// Shared store handle as stored in the schema data
pub type StoreHandle = Arc<dyn CatalogStore>;

/// Add the optional `page` and `pageSize` arguments to a list field
fn with_pagination_arguments(field: Field) -> Field {
    field
        .argument(InputValue::new("page", TypeRef::named(TypeRef::INT)))
        .argument(InputValue::new("pageSize", TypeRef::named(TypeRef::INT)))
}

/// Read `page`/`pageSize` from field arguments; absent or null means unset
fn pagination_from_args(args: &ObjectAccessor<'_>) -> async_graphql::Result<Pagination> {
    let page = optional_int(args, "page")?;
    let page_size = optional_int(args, "pageSize")?;
    Ok(Pagination::from_args(page, page_size))
}

fn optional_int(args: &ObjectAccessor<'_>, name: &str) -> async_graphql::Result<Option<i64>> {
    match args.get(name) {
        Some(value) if !value.is_null() => Ok(Some(value.i64()?)),
        _ => Ok(None),
    }
}

/// Create the root `sheets(page, pageSize): [Sheet]` field
pub fn create_sheets_resolver() -> Field {
    let field = Field::new("sheets", TypeRef::named_list(SHEET_TYPE), |ctx| {
        FieldFuture::new(async move {
            let pagination = pagination_from_args(&ctx.args)?;
            let store = ctx.data::<StoreHandle>()?;

            let page = store.list_sheets(&pagination, None).await?;

            Ok(Some(FieldValue::list(
                page.rows.into_iter().map(FieldValue::owned_any),
            )))
        })
    })
    .description("List of Sheets");

    with_pagination_arguments(field)
}

/// Create the root `composers(page, pageSize): [Composer]` field
pub fn create_composers_resolver() -> Field {
    let field = Field::new("composers", TypeRef::named_list(COMPOSER_TYPE), |ctx| {
        FieldFuture::new(async move {
            let pagination = pagination_from_args(&ctx.args)?;
            let store = ctx.data::<StoreHandle>()?;

            let page = store.list_composers(&pagination).await?;

            Ok(Some(FieldValue::list(
                page.rows.into_iter().map(FieldValue::owned_any),
            )))
        })
    })
    .description("List of Composers");

    with_pagination_arguments(field)
}

/// Create the `Sheet.Composer` relation field
pub fn create_sheet_composer_resolver() -> Field {
    Field::new("Composer", TypeRef::named(COMPOSER_TYPE), |ctx| {
        FieldFuture::new(async move {
            let sheet = ctx.parent_value.try_downcast_ref::<Sheet>()?;
            let store = ctx.data::<StoreHandle>()?;

            let composer = store.find_composer_by_safe_name(&sheet.safe_composer).await?;
            if composer.is_none() {
                tracing::debug!(
                    "No composer '{}' for sheet '{}'",
                    sheet.safe_composer,
                    sheet.safe_sheet_name
                );
            }

            Ok(composer.map(FieldValue::owned_any))
        })
    })
    .description("Composer of this sheet, looked up by its safe name")
}

/// Create the `Composer.Sheets(page, pageSize)` relation field
pub fn create_composer_sheets_resolver() -> Field {
    let field = Field::new("Sheets", TypeRef::named_list(SHEET_TYPE), |ctx| {
        FieldFuture::new(async move {
            let composer = ctx.parent_value.try_downcast_ref::<Composer>()?;
            let pagination = pagination_from_args(&ctx.args)?;
            let store = ctx.data::<StoreHandle>()?;

            let page = store
                .list_sheets(&pagination, Some(composer.safe_name.as_str()))
                .await?;

            Ok(Some(FieldValue::list(
                page.rows.into_iter().map(FieldValue::owned_any),
            )))
        })
    })
    .description("Sheets by this composer");

    with_pagination_arguments(field)
}
