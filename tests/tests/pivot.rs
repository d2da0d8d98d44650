use pretty_assertions::assert_eq;
use tests::prelude::*;

#[test]
fn belongs_to_many_attaches_pivot_records() {
    let db = blog();

    let post = db
        .new_from_hit(
            "Post",
            json!({
                "_id": "1",
                "_score": 1.0,
                "_source": {
                    "tags": [
                        { "id": 5, "name": "rust", "pivot": { "post_id": 1, "tag_id": 5, "weight": 2 } },
                        { "id": 6, "name": "search", "pivot": { "post_id": 1, "tag_id": 6 } },
                    ],
                },
            }),
        )
        .unwrap();

    let tags = post.many("tags");
    assert_eq!(tags.len(), 2);

    let pivot = tags[0].pivot().unwrap();
    assert_eq!(pivot.table, "post_tag");
    assert!(pivot.exists);
    assert_eq!(pivot.get("weight"), Some(&json!(2)));

    // Moved off the plain attributes.
    assert_eq!(tags[0].get("pivot"), None);
    assert_eq!(tags[0].get("name"), Some(&json!("rust")));
}

#[test]
fn pivot_of_another_parent_is_not_attached() {
    let db = blog();

    let post = db
        .new_from_hit(
            "Post",
            json!({
                "_id": "1",
                "_score": 1.0,
                "_source": {
                    "tags": [
                        { "id": 5, "pivot": { "post_id": "1", "tag_id": 5 } },
                        { "id": 6, "pivot": { "post_id": 2, "tag_id": 6 } },
                        { "id": 7 },
                    ],
                },
            }),
        )
        .unwrap();

    let ids: Vec<_> = post.many("tags").iter().map(|tag| tag.key().unwrap()).collect();
    assert_eq!(ids, [Key::Int(5), Key::Int(7)]);
    assert_eq!(post.many("tags")[1].pivot(), None);
}

#[test]
fn pivot_of_another_related_record_is_not_attached() {
    let db = blog();

    let post = db
        .new_from_hit(
            "Post",
            json!({
                "_id": "1",
                "_score": 1.0,
                "_source": {
                    "tags": [
                        { "id": 5, "pivot": { "post_id": 1, "tag_id": "5" } },
                        { "id": 6, "pivot": { "post_id": 1, "tag_id": 8 } },
                    ],
                },
            }),
        )
        .unwrap();

    let ids: Vec<_> = post.many("tags").iter().map(|tag| tag.key().unwrap()).collect();
    assert_eq!(ids, [Key::Int(5)]);
}

#[test]
fn custom_related_pivot_key() {
    let db = models!(
        ModelDef::new("User").relation(
            RelationDef::belongs_to_many("roles", "Role")
                .related_pivot_key("role")
                .related_key("slug"),
        ),
        ModelDef::new("Role"),
    );

    let user = db
        .new_from_hit(
            "User",
            json!({
                "_id": "9",
                "_score": 1.0,
                "_source": {
                    "roles": [
                        { "id": 1, "slug": "admin", "pivot": { "user_id": 9, "role": "admin" } },
                        { "id": 2, "slug": "editor", "pivot": { "user_id": 9, "role": "admin" } },
                    ],
                },
            }),
        )
        .unwrap();

    let roles = user.many("roles");
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].get("slug"), Some(&json!("admin")));
}

#[test]
fn null_pivot_is_an_empty_record() {
    let db = blog();

    let post = db
        .new_from_hit(
            "Post",
            json!({ "_score": 1.0, "_source": { "tags": [{ "id": 5, "pivot": null }] } }),
        )
        .unwrap();

    let pivot = post.many("tags")[0].pivot().unwrap();
    assert!(pivot.attributes.is_empty());
}

#[test]
fn custom_join_table() {
    let db = models!(
        ModelDef::new("User").relation(
            RelationDef::belongs_to_many("roles", "Role")
                .table("role_user")
                .foreign_key("member_id"),
        ),
        ModelDef::new("Role"),
    );

    let user = db
        .new_from_hit(
            "User",
            json!({
                "_id": "9",
                "_score": 1.0,
                "_source": { "roles": [{ "id": 1, "pivot": { "member_id": 9 } }] },
            }),
        )
        .unwrap();

    assert_eq!(user.many("roles")[0].pivot().unwrap().table, "role_user");
}

#[test]
fn pivot_without_join_table_fails() {
    let db = blog();

    let err = db
        .new_from_hit(
            "Post",
            json!({ "_score": 1.0, "_source": { "comments": [{ "id": 1, "pivot": {} }] } }),
        )
        .unwrap_err();

    assert!(err.root().is_invalid_pivot());
    assert_eq!(
        err.to_string(),
        "relation `Post.comments`: model `Comment` has a `pivot` attribute but was not loaded through a belongs-to-many relation"
    );
}

#[test]
fn pivot_on_a_top_level_hit_fails() {
    let db = blog();

    let err = db
        .new_from_hit("Tag", json!({ "_score": 1.0, "_source": { "pivot": {} } }))
        .unwrap_err();

    assert!(err.is_invalid_pivot());
}

#[test]
fn malformed_pivot_fails() {
    let db = blog();

    let err = db
        .new_from_hit(
            "Post",
            json!({ "_score": 1.0, "_source": { "tags": [{ "id": 5, "pivot": [1] }] } }),
        )
        .unwrap_err();

    assert!(err.root().is_invalid_record());
}
