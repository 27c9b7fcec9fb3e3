use crate::{
    abstract_trait::{DynItemQueryRepository, InvoiceServiceTrait},
    domain::responses::{ApiResponse, InvoiceResponse},
    errors::ServiceError,
    model::Item as ItemModel,
    utils::{Method, OperationTracer},
};
use askama::Template;
use async_trait::async_trait;
use chrono::{DateTime, Local};
use opentelemetry::KeyValue;
use printpdf::{BuiltinFont, Mm, PdfDocument};
use prometheus_client::registry::Registry;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;
use tracing::{error, info};

#[derive(Debug)]
pub struct InvoiceLine {
    pub item_name: String,
    pub item_category: String,
    pub item_qty: i64,
    pub item_price: String,
    pub total_price: String,
}

#[derive(Template)]
#[template(path = "invoice.txt")]
pub struct InvoiceTemplate {
    pub date: String,
    pub lines: Vec<InvoiceLine>,
    pub grand_total: String,
}

impl InvoiceTemplate {
    pub fn build(items: &[ItemModel], generated_at: DateTime<Local>) -> Self {
        let mut grand_total = 0.0;
        let lines = items
            .iter()
            .map(|item| {
                let line_total = item.item_qty as f64 * item.item_price;
                grand_total += line_total;
                InvoiceLine {
                    item_name: clip(&item.item_name, 23),
                    item_category: clip(&item.item_category, 17),
                    item_qty: item.item_qty,
                    item_price: format!("{:.2}", item.item_price),
                    total_price: format!("{line_total:.2}"),
                }
            })
            .collect();

        Self {
            date: generated_at.format("%Y %B %d").to_string(),
            lines,
            grand_total: format!("{grand_total:.2}"),
        }
    }
}

fn clip(value: &str, width: usize) -> String {
    value.chars().take(width).collect()
}

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;
const FONT_SIZE: f32 = 9.0;
const LINE_HEIGHT: f32 = 5.0;

/// Lays the rendered report out on A4 pages in Courier, one text line per row.
pub fn render_pdf(title: &str, text: &str) -> Result<Vec<u8>, ServiceError> {
    let pdf_error = |e: printpdf::Error| ServiceError::Pdf(format!("{e:?}"));

    let (doc, page, layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "report");
    let font = doc.add_builtin_font(BuiltinFont::Courier).map_err(pdf_error)?;

    let mut current = doc.get_page(page).get_layer(layer);
    let mut y = PAGE_HEIGHT - MARGIN;

    for line in text.lines() {
        if y < MARGIN {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "report");
            current = doc.get_page(page).get_layer(layer);
            y = PAGE_HEIGHT - MARGIN;
        }
        current.use_text(line, FONT_SIZE, Mm(MARGIN), Mm(y), &font);
        y -= LINE_HEIGHT;
    }

    doc.save_to_bytes().map_err(pdf_error)
}

pub fn invoice_file_name(generated_at: DateTime<Local>) -> String {
    format!(
        "Item_Management_{}_doc.pdf",
        generated_at.format("%Y_%B_%d_%H_%M_%S")
    )
}

pub struct InvoiceService {
    item_query: DynItemQueryRepository,
    docs_dir: PathBuf,
    server_address: String,
    tracer: OperationTracer,
}

pub struct InvoiceServiceDeps {
    pub item_query: DynItemQueryRepository,
    pub docs_dir: PathBuf,
    pub server_address: String,
    pub registry: Arc<Mutex<Registry>>,
}

impl InvoiceService {
    pub async fn new(deps: InvoiceServiceDeps) -> Self {
        Self {
            item_query: deps.item_query,
            docs_dir: deps.docs_dir,
            server_address: deps.server_address,
            tracer: OperationTracer::new("invoice-service", deps.registry).await,
        }
    }

    async fn render_to_disk(&self, items: &[ItemModel]) -> Result<String, ServiceError> {
        let now = Local::now();
        let text = InvoiceTemplate::build(items, now).render()?;
        let pdf = render_pdf("Item Management Report", &text)?;
        let filename = invoice_file_name(now);

        tokio::fs::create_dir_all(&self.docs_dir).await?;
        tokio::fs::write(self.docs_dir.join(&filename), pdf).await?;

        Ok(filename)
    }
}

#[async_trait]
impl InvoiceServiceTrait for InvoiceService {
    async fn generate_invoice(&self) -> Result<ApiResponse<InvoiceResponse>, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self
            .tracer
            .start("GenerateInvoice", vec![KeyValue::new("component", "invoice")]);

        let items = match self.item_query.find_all().await {
            Ok(items) => items,
            Err(e) => {
                error!("❌ Failed to load items for invoice: {e}");
                self.tracer
                    .complete_error(&tracing_ctx, method, "Failed to load items");
                return Err(ServiceError::Repo(e));
            }
        };

        let filename = match self.render_to_disk(&items).await {
            Ok(filename) => filename,
            Err(e) => {
                error!("❌ Failed to write invoice: {e}");
                self.tracer
                    .complete_error(&tracing_ctx, method, "Failed to write invoice");
                return Err(e);
            }
        };

        info!("🧾 Generated invoice {filename} with {} lines", items.len());
        self.tracer
            .complete_success(&tracing_ctx, method, "Invoice generated");

        Ok(ApiResponse::success(
            "Invoice generated successfully",
            InvoiceResponse {
                filepath: format!("{}/docs/{filename}", self.server_address),
                filename,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{repository::ItemRepository, store::InMemoryDocumentStore};
    use chrono::{TimeZone, Utc};

    fn item(name: &str, qty: i64, price: f64) -> ItemModel {
        let now = Utc::now();
        ItemModel {
            id: name.to_lowercase(),
            item_name: name.to_string(),
            item_category: "Hot Beverages".to_string(),
            item_price: price,
            item_qty: qty,
            item_description: String::new(),
            item_image: None,
            is_s3_image: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn file_name_uses_month_names() {
        let at = Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 1).unwrap();
        assert_eq!(
            invoice_file_name(at),
            "Item_Management_2024_March_07_09_05_01_doc.pdf"
        );
    }

    #[test]
    fn lines_multiply_quantity_by_price() {
        let at = Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 1).unwrap();
        let template = InvoiceTemplate::build(
            &[item("Espresso", 2, 3.5), item("Mocha", 3, 4.25)],
            at,
        );

        assert_eq!(template.lines[0].total_price, "7.00");
        assert_eq!(template.lines[1].total_price, "12.75");
        assert_eq!(template.grand_total, "19.75");
        assert_eq!(template.date, "2024 March 07");

        let text = template.render().unwrap();
        assert!(text.contains("Espresso"));
        assert!(text.lines().any(|l| l.starts_with("Grand Total") && l.ends_with("19.75")));
    }

    #[test]
    fn long_names_are_clipped_to_their_column() {
        let at = Local.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let text = InvoiceTemplate::build(
            &[item("Iced Caramel Macchiato With Oat Milk", 1, 1.0)],
            at,
        )
        .render()
        .unwrap();

        let row = text.lines().find(|l| l.starts_with("1 ")).unwrap();
        assert!(row.contains("Iced Caramel Macchiato "));
        assert!(!row.contains("Oat Milk"));
        assert_eq!(row.chars().count(), 72);
    }

    #[test]
    fn long_reports_span_several_pages() {
        let text = (0..120)
            .map(|i| format!("line {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let pdf = render_pdf("Item Management Report", &text).unwrap();

        assert!(pdf.starts_with(b"%PDF"));
        let single = render_pdf("Item Management Report", "line 0").unwrap();
        assert!(pdf.len() > single.len());
    }

    #[tokio::test]
    async fn invoice_is_written_to_the_docs_dir() {
        let dir = tempfile::tempdir().unwrap();
        let items = ItemRepository::new(Arc::new(InMemoryDocumentStore::new()), "Items");
        items
            .command
            .create_item(&item("Espresso", 2, 3.99))
            .await
            .unwrap();

        let service = InvoiceService::new(InvoiceServiceDeps {
            item_query: items.query,
            docs_dir: dir.path().join("docs"),
            server_address: "http://localhost:8070".to_string(),
            registry: Arc::new(Mutex::new(Registry::default())),
        })
        .await;

        let invoice = service.generate_invoice().await.unwrap().data;

        assert!(invoice.filename.starts_with("Item_Management_"));
        assert_eq!(
            invoice.filepath,
            format!("http://localhost:8070/docs/{}", invoice.filename)
        );

        assert!(invoice.filename.ends_with("_doc.pdf"));

        let written = std::fs::read(dir.path().join("docs").join(&invoice.filename)).unwrap();
        assert!(written.starts_with(b"%PDF"));
    }
}
