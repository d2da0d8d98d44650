use pretty_assertions::assert_eq;
use tests::prelude::*;

fn response() -> Value {
    json!({
        "took": 7,
        "timed_out": false,
        "_shards": { "total": 2, "successful": 2, "skipped": 0, "failed": 0 },
        "hits": {
            "total": 240,
            "max_score": 3.5,
            "hits": [
                { "_id": "1", "_score": 3.5, "_source": { "title": "first" } },
                { "_id": "2", "_score": 2.0, "_source": { "title": "second" } },
                { "_id": "1", "_score": 1.0, "_source": { "title": "first again" } },
            ],
        },
        "aggregations": { "by_author": { "buckets": [{ "key": 3, "doc_count": 12 }] } },
    })
}

#[test]
fn hydrate_response_body() {
    let db = blog();

    let results = db.hydrate_response("Post", &response()).unwrap();

    // Hit order, duplicates kept.
    let titles: Vec<_> = results
        .iter()
        .map(|post| post.get("title").unwrap().as_str().unwrap())
        .collect();
    assert_eq!(titles, ["first", "second", "first again"]);
    assert_eq!(results[2].score, Some(1.0));

    assert_eq!(results.total_hits().unwrap(), 240);
    assert_eq!(results.max_score(), Some(3.5));
    assert_eq!(results.took(), Some(7));
    assert!(!results.timed_out());
    assert_eq!(
        results.shards(),
        Some(&json!({ "total": 2, "successful": 2, "skipped": 0, "failed": 0 }))
    );
    assert_eq!(results.hits().unwrap()["hits"].as_array().unwrap().len(), 3);
    assert_eq!(
        results.aggregation("by_author").unwrap()["buckets"][0]["doc_count"],
        json!(12)
    );
}

#[test]
fn hydrate_elastic_result_with_explicit_hits() {
    let db = blog();
    let body = response();
    let hits = body["hits"]["hits"].as_array().unwrap().clone();

    let results = db.hydrate_elastic_result("Post", hits, &body).unwrap();

    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|post| post.is_document));
}

#[test]
fn empty_hits_keep_metadata() {
    let db = blog();
    let meta = json!({ "took": 1, "hits": { "total": 17, "max_score": null, "hits": [] } });

    let results = db.hydrate_elastic_result("Post", vec![], &meta).unwrap();

    assert!(results.is_empty());
    assert_eq!(results.total_hits().unwrap(), 17);
    assert_eq!(results.max_score(), None);
    assert!(results.aggregations().is_empty());
}

#[test]
fn total_in_object_form() {
    let db = blog();
    let meta = json!({ "hits": { "total": { "value": 10000, "relation": "gte" }, "hits": [] } });

    let results = db.hydrate_response("Post", &meta).unwrap();

    assert_eq!(results.total_hits().unwrap(), 10000);
}

#[test]
fn without_metadata() {
    let db = blog();

    for meta in [Value::Null, json!({}), json!([])] {
        let results = db.hydrate_elastic_result("Post", vec![], &meta).unwrap();

        assert!(results.total_hits().unwrap_err().is_invalid_meta());
        assert_eq!(results.took(), None);
        assert_eq!(results.shards(), None);
        assert_eq!(results.hits(), None);
        assert!(!results.timed_out());
        assert!(results.aggregations().is_empty());
    }
}

#[test]
fn set_meta_replaces_metadata() {
    let db = blog();
    let mut results = db
        .hydrate_elastic_result("Post", vec![], &json!({ "took": 3, "hits": { "total": 1 } }))
        .unwrap();

    results.set_meta(elastic_hydrate::Meta::from_value(&json!({ "timed_out": true })).unwrap());

    assert!(results.timed_out());
    assert_eq!(results.took(), None);
    assert!(results.total_hits().is_err());
}

#[test]
fn malformed_metadata_fails() {
    let db = blog();

    let err = db
        .hydrate_elastic_result("Post", vec![], &json!({ "aggregations": "none" }))
        .unwrap_err();
    assert!(err.is_invalid_meta());

    let err = db
        .hydrate_elastic_result("Post", vec![], &json!([{ "took": 1 }]))
        .unwrap_err();
    assert!(err.is_invalid_meta());

    let err = db
        .hydrate_response("Post", &json!({ "hits": { "hits": {} } }))
        .unwrap_err();
    assert!(err.is_invalid_meta());
}

#[test]
fn into_items_keeps_order() {
    let db = blog();

    let ids: Vec<_> = db
        .hydrate_response("Post", &response())
        .unwrap()
        .into_iter()
        .map(|post| post.key().unwrap())
        .collect();

    assert_eq!(ids, [Key::Int(1), Key::Int(2), Key::Int(1)]);
}
