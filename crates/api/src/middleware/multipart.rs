use axum::extract::{FromRequest, Multipart, Request, multipart::Field};
use shared::{
    domain::requests::{CreateItemRequest, UpdateItemRequest, UploadedImage},
    errors::{HttpError, ServiceError},
};
use std::collections::HashMap;

pub const IMAGE_FIELD: &str = "itemImage";

/// Per-file cap for buffered uploads, installed as a request extension.
#[derive(Debug, Clone, Copy)]
pub struct UploadLimit(pub usize);

impl Default for UploadLimit {
    fn default() -> Self {
        Self(10 * 1024 * 1024)
    }
}

fn upload_error(message: impl std::fmt::Display) -> HttpError {
    HttpError::BadRequest(format!("File upload error: {message}"))
}

/// The item form: text fields keyed by name plus the optional `itemImage`
/// file, fully buffered in memory.
#[derive(Debug, Default)]
pub struct ItemForm {
    fields: HashMap<String, String>,
    image: Option<UploadedImage>,
}

impl<S> FromRequest<S> for ItemForm
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let limit = req
            .extensions()
            .get::<UploadLimit>()
            .copied()
            .unwrap_or_default();

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|rejection| upload_error(rejection.body_text()))?;

        let mut form = ItemForm::default();

        while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if name == IMAGE_FIELD {
                form.image = read_file(field, limit).await?;
            } else {
                let value = field.text().await.map_err(upload_error)?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }
}

async fn read_file(
    mut field: Field<'_>,
    limit: UploadLimit,
) -> Result<Option<UploadedImage>, HttpError> {
    let file_name = field.file_name().unwrap_or_default().to_string();
    let content_type = field.content_type().map(str::to_string);

    let mut bytes = Vec::new();
    while let Some(chunk) = field.chunk().await.map_err(upload_error)? {
        if bytes.len() + chunk.len() > limit.0 {
            return Err(upload_error(format!(
                "File too large, the limit is {} bytes",
                limit.0
            )));
        }
        bytes.extend_from_slice(&chunk);
    }

    // Browsers send an empty part when no file was picked.
    if file_name.is_empty() && bytes.is_empty() {
        return Ok(None);
    }

    Ok(Some(UploadedImage {
        file_name,
        content_type,
        bytes,
    }))
}

fn parse_number<T: std::str::FromStr>(field: &str, value: &str) -> Result<T, HttpError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| HttpError::from(ServiceError::validation(format!("{field} must be a number"))))
}

impl ItemForm {
    fn text(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    fn number<T: std::str::FromStr>(&mut self, name: &str) -> Result<Option<T>, HttpError> {
        match self.text(name) {
            Some(value) if !value.trim().is_empty() => parse_number(name, &value).map(Some),
            _ => Ok(None),
        }
    }

    // "NaN" and "inf" parse as f64.
    fn price(&mut self) -> Result<Option<f64>, HttpError> {
        match self.number::<f64>("itemPrice")? {
            Some(price) if !price.is_finite() => Err(HttpError::from(ServiceError::validation(
                "itemPrice must be a number",
            ))),
            price => Ok(price),
        }
    }

    pub fn into_create_request(mut self) -> Result<CreateItemRequest, HttpError> {
        let item_price = self.price()?;
        let item_qty = self.number::<i64>("itemQty")?;

        Ok(CreateItemRequest {
            item_name: self.text("itemName").unwrap_or_default(),
            item_category: self.text("itemCategory").unwrap_or_default(),
            item_price: item_price.ok_or_else(|| {
                HttpError::from(ServiceError::validation("itemPrice must be a number"))
            })?,
            item_qty: item_qty.ok_or_else(|| {
                HttpError::from(ServiceError::validation("itemQty must be a number"))
            })?,
            item_description: self.text("itemDescription").unwrap_or_default(),
            image: self.image,
        })
    }

    pub fn into_update_request(mut self) -> Result<UpdateItemRequest, HttpError> {
        Ok(UpdateItemRequest {
            item_name: self.text("itemName"),
            item_category: self.text("itemCategory"),
            item_price: self.price()?,
            item_qty: self.number("itemQty")?,
            item_description: self.text("itemDescription"),
            image: self.image,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> ItemForm {
        ItemForm {
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            image: None,
        }
    }

    #[test]
    fn create_request_parses_numbers() {
        let req = form(&[
            ("itemName", "Latte"),
            ("itemCategory", "Hot Beverages"),
            ("itemPrice", "5.49"),
            ("itemQty", " 75 "),
            ("itemDescription", "Milky"),
        ])
        .into_create_request()
        .unwrap();

        assert_eq!(req.item_name, "Latte");
        assert_eq!(req.item_price, 5.49);
        assert_eq!(req.item_qty, 75);
        assert!(req.image.is_none());
    }

    #[test]
    fn create_request_rejects_bad_price() {
        let err = form(&[("itemName", "Latte"), ("itemPrice", "cheap"), ("itemQty", "1")])
            .into_create_request()
            .unwrap_err();

        match err {
            HttpError::BadRequest(msg) => assert_eq!(msg, "itemPrice must be a number"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_finite_prices_are_rejected_on_create_and_update() {
        for price in ["NaN", "inf", "-infinity"] {
            let create = form(&[("itemName", "Latte"), ("itemPrice", price), ("itemQty", "1")])
                .into_create_request()
                .unwrap_err();
            let update = form(&[("itemPrice", price)])
                .into_update_request()
                .unwrap_err();

            for err in [create, update] {
                match err {
                    HttpError::BadRequest(msg) => assert_eq!(msg, "itemPrice must be a number"),
                    other => panic!("unexpected error for {price}: {other:?}"),
                }
            }
        }
    }

    #[test]
    fn update_request_leaves_missing_fields_unset() {
        let req = form(&[("itemQty", "3"), ("itemPrice", "")])
            .into_update_request()
            .unwrap();

        assert_eq!(req.item_qty, Some(3));
        assert_eq!(req.item_price, None);
        assert_eq!(req.item_name, None);
    }
}
