use pretty_assertions::assert_eq;
use tests::prelude::*;

fn hit() -> Value {
    json!({
        "_id": "1",
        "_score": 1.0,
        "_source": { "title": "Hello", "author": null, "comments": null },
    })
}

#[test]
fn dropped_by_default() {
    let db = blog();
    assert_eq!(db.config().null_relations, NullRelations::Drop);

    let post = db.new_from_hit("Post", hit()).unwrap();

    assert_eq!(post.get("author"), None);
    assert_eq!(post.get("comments"), None);
    assert!(!post.relation_loaded("author"));
    assert!(!post.relation_loaded("comments"));
    assert_eq!(post.get("title"), Some(&json!("Hello")));
}

#[test]
fn matched_against_no_children() {
    let db = blog_with(Config {
        null_relations: NullRelations::MatchEmpty,
        ..Config::default()
    });

    let post = db.new_from_hit("Post", hit()).unwrap();

    assert_eq!(post.get("author"), None);
    assert_eq!(post.get("comments"), None);
    assert_eq!(post.relation("author"), Some(&Loaded::One(None)));
    assert_eq!(post.relation("comments"), Some(&Loaded::Many(vec![])));
}

#[test]
fn policy_applies_to_nested_relations() {
    let mut builder = Hydrator::builder();
    for model in blog_models() {
        builder.register(model);
    }
    let db = builder
        .null_relations(NullRelations::MatchEmpty)
        .build()
        .unwrap();

    let post = db
        .new_from_hit(
            "Post",
            json!({ "_score": 1.0, "_source": { "comments": [{ "id": 1, "author": null }] } }),
        )
        .unwrap();

    let comment = &post.many("comments")[0];
    assert_eq!(comment.relation("author"), Some(&Loaded::One(None)));
}
