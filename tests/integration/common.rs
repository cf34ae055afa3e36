//! Shared fixtures: shop pages and brochure PDFs

use lopdf::{dictionary, Document, Object, ObjectId, StringFormat};
use std::io::Write;
use tempfile::NamedTempFile;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A single product page in the shop's markup
pub fn product_page(code: &str, price: &str, unit: &str) -> String {
    format!(
        r#"<html><head><title>{code}</title></head><body>
        <div class="product-meta">
            <span class="text-gray-500">Прод. код:</span>
            <span class="font-semibold">{code}</span>
        </div>
        <div id="product-buy-card" class="rounded-lg">
            <div class="flex items-end gap-1">
                <span class="text-3xl font-bold">{price}</span>
                <span class="text-base">{unit}</span>
            </div>
        </div>
        </body></html>"#
    )
}

/// A detail page that has the product code but no price block
pub fn page_without_price(code: &str) -> String {
    format!(
        r#"<html><body>
        <div><span>Прод. код:</span><span>{code}</span></div>
        <p>Out of stock</p>
        </body></html>"#
    )
}

/// A listing page with one card per href
pub fn grid_page(hrefs: &[&str]) -> String {
    let cards: String = hrefs
        .iter()
        .enumerate()
        .map(|(i, href)| {
            format!(
                r#"<div class="flex flex-col relative">
                    <img src="/img/{i}.jpg">
                    <a title="Product {i}" href="{href}">Product {i}</a>
                </div>"#
            )
        })
        .collect();

    format!(
        r#"<html><body>
        <h1>Promotions</h1>
        <div class="grid place-items-center gap-4">{cards}</div>
        </body></html>"#
    )
}

/// Serves `body` with status 200 at `route`
pub async fn mount_page(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

/// Serves an empty response with `status` at `route`
pub async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Builds a one-page brochure whose Link annotations point at `uris`
pub fn brochure_with_links(uris: &[String]) -> NamedTempFile {
    let mut doc = Document::with_version("1.5");
    let pages_id: ObjectId = doc.new_object_id();

    let annots: Vec<Object> = uris
        .iter()
        .map(|uri| {
            doc.add_object(dictionary! {
                "Type" => "Annot",
                "Subtype" => "Link",
                "Rect" => vec![0.into(), 0.into(), 100.into(), 20.into()],
                "A" => dictionary! {
                    "S" => "URI",
                    "URI" => Object::String(uri.as_bytes().to_vec(), StringFormat::Literal),
                },
            })
            .into()
        })
        .collect();

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        "Annots" => annots,
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("failed to save test PDF");

    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(&buf).expect("write PDF");
    file.flush().expect("flush PDF");
    file
}
