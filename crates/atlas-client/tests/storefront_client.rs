//! Integration tests for `StorefrontClient` against a local `wiremock` server.

use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use atlas_client::{ClientError, StorefrontClient};
use atlas_core::{MenuPlacement, ProductFilters, VariantId};
use rust_decimal::Decimal;

fn test_client(server: &MockServer) -> StorefrontClient {
    StorefrontClient::with_base_url(&server.uri(), "new2", 5, "atlas-test/0.1")
        .expect("failed to build test StorefrontClient")
}

fn product_body() -> serde_json::Value {
    json!({
        "data": {
            "product": {
                "id": 42,
                "title": "Denim jacket",
                "images": [{"id": 1, "url": "https://cdn.example/42.jpg"}],
                "price": 2_000_000,
                "discount": 25,
                "total_quantity": 3,
                "status": "available",
                "varieties": [
                    {"id": 501, "quantity": 3, "attributes": [
                        {"name": "tarh", "pivot": {"value": "Blue"}},
                        {"name": "sizeClothes", "pivot": {"value": "L"}}
                    ]}
                ]
            },
            "relatedProducts": []
        }
    })
}

// ---------------------------------------------------------------------------
// Product detail
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_product_decodes_and_normalizes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/front/products/42"))
        .and(query_param("version", "new2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_body()))
        .expect(1)
        .mount(&server)
        .await;

    let product = test_client(&server).fetch_product("42").await.unwrap();

    assert_eq!(product.title, "Denim jacket");
    assert_eq!(product.final_price(), Decimal::from(1_500_000));
    assert_eq!(product.varieties[0].id, VariantId(501));
}

#[tokio::test]
async fn fetch_product_null_product_is_missing_product() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/front/products/9"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"product": null}})),
        )
        .mount(&server)
        .await;

    let err = test_client(&server).fetch_product("9").await.unwrap_err();
    assert!(
        matches!(err, ClientError::MissingProduct { ref product_id } if product_id == "9"),
        "expected MissingProduct, got: {err:?}"
    );
    assert!(err.is_not_found());
}

#[tokio::test]
async fn fetch_product_404_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/front/products/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = test_client(&server).fetch_product("404").await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound { .. }), "got: {err:?}");
}

#[tokio::test]
async fn fetch_product_500_is_unexpected_status_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/front/products/1"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let err = test_client(&server).fetch_product("1").await.unwrap_err();
    assert!(
        matches!(err, ClientError::UnexpectedStatus { status: 500, .. }),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_product_invalid_json_is_deserialize_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/front/products/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = test_client(&server).fetch_product("1").await.unwrap_err();
    assert!(matches!(err, ClientError::Deserialize { .. }), "got: {err:?}");
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn fetch_product_skips_malformed_varieties() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/front/products/31"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "product": {
                    "id": 31,
                    "price": 500_000,
                    "varieties": [
                        {"id": 1, "quantity": "3", "attributes": [
                            {"name": "tarh", "pivot": {"value": "Olive"}},
                            {"name": "sizePants", "pivot": {"value": 32}}
                        ]},
                        {"quantity": 5},
                        {"id": 2, "quantity": 1, "attributes": [
                            {"name": "tarh", "pivot": {"value": ["Sand"]}},
                            {"name": "sizePants", "pivot": {"value": 34}}
                        ]}
                    ]
                }
            }
        })))
        .mount(&server)
        .await;

    let product = test_client(&server).fetch_product("31").await.unwrap();

    assert_eq!(product.title, "");
    assert_eq!(product.varieties.len(), 2);
    assert_eq!(product.varieties[0].quantity, 3);
    assert_eq!(product.varieties[1].design(), None);
    assert_eq!(product.varieties[1].attribute_value("sizePants"), Some("34"));
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_listing_sends_filters_and_omits_blank_ones() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/front/products"))
        .and(query_param("version", "new2"))
        .and(query_param("page", "1"))
        .and(query_param("color", "red"))
        .and(query_param("available", "1"))
        .and(query_param("min_price", "0"))
        .and(query_param_is_missing("title"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "priceFilter": {"min_price": 100, "max_price": 900},
                "products": {"current_page": 1, "last_page": 4, "data": [
                    {"id": 1, "title": "Red scarf"}
                ]}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filters = ProductFilters {
        color: Some("red".to_string()),
        title: Some(String::new()),
        available: true,
        ..ProductFilters::default()
    };
    let page = test_client(&server).fetch_listing(&filters, 1).await.unwrap();

    assert_eq!(page.bounds.last, 4);
    assert_eq!(page.products[0].title, "Red scarf");
}

#[tokio::test]
async fn fetch_listing_without_data_is_missing_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/front/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .fetch_listing(&ProductFilters::default(), 1)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::MissingData { .. }), "got: {err:?}");
}

// ---------------------------------------------------------------------------
// Facets and content
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_categories_reads_bare_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/front/get-categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "root", "children": [
                {"id": 2, "title": "Men", "image": "/men.jpg"},
                {"id": 3, "title": "Sale"}
            ]}
        ])))
        .mount(&server)
        .await;

    let roots = test_client(&server).fetch_categories().await.unwrap();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].children.len(), 2);
}

#[tokio::test]
async fn fetch_color_ranges_normalizes_values() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/front/color-ranges"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"colorRanges": [{"id": 1, "title": "Black", "hex": "#000"}]}
        })))
        .mount(&server)
        .await;

    let colors = test_client(&server).fetch_color_ranges().await.unwrap();
    assert_eq!(colors[0].value, "#000");
}

#[tokio::test]
async fn fetch_sliders_reads_nested_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/front/sliders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"response": {"sliders": [
                {"id": 1, "group": "header", "status": 1},
                {"id": 2, "group": "header-mobile", "status": 0}
            ]}}
        })))
        .mount(&server)
        .await;

    let slides = test_client(&server).fetch_sliders().await.unwrap();
    assert_eq!(slides.len(), 2);
    assert!(slides[0].status);
    assert!(!slides[1].status);
}

#[tokio::test]
async fn home_sections_default_to_empty_when_response_missing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/front/most-sales"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .mount(&server)
        .await;

    let products = test_client(&server).fetch_most_sales().await.unwrap();
    assert!(products.is_empty());
}

#[tokio::test]
async fn fetch_menu_uses_placement_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/all/menus/footer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"menus": [{"id": 1, "title": "About us", "link": "/about"}]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let menus = test_client(&server)
        .fetch_menu(MenuPlacement::Footer)
        .await
        .unwrap();
    assert_eq!(menus[0].title, "About us");
}

#[tokio::test]
async fn fetch_posts_respects_success_flag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/front/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "data": {"posts": {"data": [{"id": 1, "title": "Ignored"}]}}
        })))
        .mount(&server)
        .await;

    assert!(test_client(&server).fetch_posts().await.unwrap().is_none());
}

#[tokio::test]
async fn fetch_posts_collects_all_lists() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/front/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "posts": {"data": [{"id": 1, "title": "Autumn lookbook"}]},
                "mostViews": [{"id": 2, "title": "Sizing guide"}],
                "category": [{"id": 5, "name": "Style"}]
            }
        })))
        .mount(&server)
        .await;

    let feed = test_client(&server).fetch_posts().await.unwrap().unwrap();
    assert_eq!(feed.posts[0].title, "Autumn lookbook");
    assert_eq!(feed.most_viewed[0].id, 2);
    assert_eq!(feed.categories[0].name, "Style");
}
