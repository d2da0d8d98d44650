use pretty_assertions::assert_eq;
use tests::prelude::*;

fn hits(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| json!({ "_id": i.to_string(), "_score": 1.0, "_source": {} }))
        .collect()
}

fn meta(total: u64) -> Value {
    json!({ "hits": { "total": total, "max_score": 1.0, "hits": [] } })
}

#[test]
fn defaults_to_first_page_and_configured_size() {
    let db = blog();
    let results = db.hydrate_elastic_result("Post", hits(25), &meta(60)).unwrap();

    let page = results.paginate(None, None).unwrap();

    assert_eq!(page.current_page(), 1);
    assert_eq!(page.per_page(), 25);
    assert_eq!(page.total(), 60);
    assert_eq!(page.last_page(), 3);
    assert_eq!(page.len(), 25);
    assert!(page.has_more_pages());
    assert_eq!(page.path(), None);
    assert_eq!(page.hits(), results.hits());
}

#[test]
fn page_size_from_config() {
    let db = blog_with(Config {
        page_size: 10,
        ..Config::default()
    });
    let results = db.hydrate_elastic_result("Post", hits(10), &meta(35)).unwrap();

    let page = results.into_page(None, None).unwrap();
    assert_eq!(page.per_page(), 10);
    assert_eq!(page.last_page(), 4);
}

#[test]
fn current_page_from_request_url() {
    let db = blog();
    let results = db.hydrate_elastic_result("Post", hits(10), &meta(30)).unwrap();
    let context = db
        .page_context("https://blog.example/search?q=rust&page=2")
        .unwrap();

    let page = results.paginate(Some(10), Some(&context)).unwrap();

    assert_eq!(page.current_page(), 2);
    assert_eq!(page.first_item(), Some(11));
    assert_eq!(page.last_item(), Some(20));
    assert_eq!(
        page.next_page_url().as_deref(),
        Some("https://blog.example/search?page=3")
    );
    assert_eq!(
        page.previous_page_url().as_deref(),
        Some("https://blog.example/search?page=1")
    );
}

#[test]
fn custom_page_parameter() {
    let db = blog_with(Config {
        page_name: "p".to_string(),
        ..Config::default()
    });
    let results = db.hydrate_elastic_result("Post", hits(5), &meta(15)).unwrap();
    let context = db.page_context("/posts?p=3").unwrap();

    let page = results.paginate(Some(5), Some(&context)).unwrap();

    assert_eq!(page.current_page(), 3);
    assert!(!page.has_more_pages());
    assert_eq!(page.url(1).as_deref(), Some("/posts?p=1"));
}

#[test]
fn explicit_context() {
    let db = blog();
    let results = db.hydrate_elastic_result("Post", hits(2), &meta(2)).unwrap();
    let context = PageContext::new().page(4).path("/search");

    let page = results.paginate(Some(2), Some(&context)).unwrap();
    assert_eq!(page.current_page(), 4);
    assert_eq!(page.url(0).as_deref(), Some("/search?page=1"));
}

#[test]
fn needs_total_hits() {
    let db = blog();
    let results = db.hydrate_elastic_result("Post", hits(2), &Value::Null).unwrap();

    assert!(results.paginate(None, None).unwrap_err().is_invalid_meta());
}
