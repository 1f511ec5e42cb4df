/// GraphQL object types for the catalog
///
/// Column fields project straight from the parent row (`Sheet` or `Composer`
/// carried as an owned `FieldValue`). Relation fields come from `resolver`.

use crate::catalog::{Composer, Sheet};
use crate::schema::resolver::{create_composer_sheets_resolver, create_sheet_composer_resolver};
use crate::schema::scalars::{datetime_value, DATETIME_SCALAR};

use async_graphql::dynamic::{Field, FieldFuture, FieldValue, Object, TypeRef};
use async_graphql::Value;
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub const SHEET_TYPE: &str = "Sheet";
pub const COMPOSER_TYPE: &str = "Composer";

/// Field whose value is computed from the parent row alone.
///
/// `None` from `project` resolves to null.
fn column<T, F>(name: &str, type_ref: TypeRef, project: F) -> Field
where
    T: Send + Sync + 'static,
    F: Fn(&T) -> Option<Value> + Send + Sync + 'static,
{
    let project = Arc::new(project);

    Field::new(name, type_ref, move |ctx| {
        let project = Arc::clone(&project);
        FieldFuture::new(async move {
            let parent = ctx.parent_value.try_downcast_ref::<T>()?;
            Ok(Some((*project)(parent).map_or(FieldValue::NULL, FieldValue::value)))
        })
    })
}

fn string_column<T, F>(name: &str, project: F) -> Field
where
    T: Send + Sync + 'static,
    F: Fn(&T) -> Option<&str> + Send + Sync + 'static,
{
    column(name, TypeRef::named(TypeRef::STRING), move |parent: &T| {
        project(parent).map(|s| Value::String(s.to_string()))
    })
}

fn datetime_column<T, F>(name: &str, project: F) -> Field
where
    T: Send + Sync + 'static,
    F: Fn(&T) -> Option<&DateTime<Utc>> + Send + Sync + 'static,
{
    column(name, TypeRef::named(DATETIME_SCALAR), move |parent: &T| {
        project(parent).map(datetime_value)
    })
}

/// GraphQL `Int` field over a 64-bit column.
///
/// Values outside the 32-bit range are a field error rather than a
/// non-conforming number.
fn int_column<T, F>(name: &str, project: F) -> Field
where
    T: Send + Sync + 'static,
    F: Fn(&T) -> Option<i64> + Send + Sync + 'static,
{
    let project = Arc::new(project);
    let field_name = name.to_string();

    Field::new(name, TypeRef::named(TypeRef::INT), move |ctx| {
        let project = Arc::clone(&project);
        let field_name = field_name.clone();
        FieldFuture::new(async move {
            let parent = ctx.parent_value.try_downcast_ref::<T>()?;
            let Some(value) = (*project)(parent) else {
                return Ok(Some(FieldValue::NULL));
            };

            let value = i32::try_from(value).map_err(|_| {
                async_graphql::Error::new(format!(
                    "{} value {} does not fit in a GraphQL Int",
                    field_name, value
                ))
            })?;

            Ok(Some(FieldValue::value(Value::Number(value.into()))))
        })
    })
}

/// Build the `Sheet` object type
pub fn sheet_type() -> Object {
    Object::new(SHEET_TYPE)
        .description("A sheet of music")
        .field(string_column("SheetName", |s: &Sheet| Some(s.sheet_name.as_str())))
        .field(string_column("SafeSheetName", |s: &Sheet| Some(s.safe_sheet_name.as_str())))
        .field(string_column("ComposerName", |s: &Sheet| Some(s.composer.as_str())))
        .field(string_column("SafeComposerName", |s: &Sheet| Some(s.safe_composer.as_str())))
        .field(string_column("InformationText", |s: &Sheet| s.information_text.as_deref()))
        .field(string_column("PdfUrl", |s: &Sheet| s.pdf_url.as_deref()))
        .field(column(
            "Tags",
            TypeRef::named_list(TypeRef::STRING),
            |s: &Sheet| {
                Some(Value::List(
                    s.tags.iter().map(|tag| Value::String(tag.clone())).collect(),
                ))
            },
        ))
        .field(datetime_column("CreatedAt", |s: &Sheet| s.created_at.as_ref()))
        .field(datetime_column("UpdatedAt", |s: &Sheet| s.updated_at.as_ref()))
        .field(datetime_column("ReleaseDate", |s: &Sheet| s.release_date.as_ref()))
        .field(int_column("UploaderID", |s: &Sheet| s.uploader_id))
        .field(create_sheet_composer_resolver())
}

/// Build the `Composer` object type
pub fn composer_type() -> Object {
    Object::new(COMPOSER_TYPE)
        .description("A composer, keyed by safe name")
        .field(string_column("SafeName", |c: &Composer| Some(c.safe_name.as_str())))
        .field(string_column("Name", |c: &Composer| Some(c.name.as_str())))
        .field(string_column("PortraitURL", |c: &Composer| c.portrait_url.as_deref()))
        .field(string_column("Epoch", |c: &Composer| c.epoch.as_deref()))
        .field(datetime_column("CreatedAt", |c: &Composer| c.created_at.as_ref()))
        .field(datetime_column("UpdatedAt", |c: &Composer| c.updated_at.as_ref()))
        .field(create_composer_sheets_resolver())
}
