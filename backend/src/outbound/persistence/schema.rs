//! Diesel table definitions for the blog schema.
//!
//! These definitions must match `migrations/` exactly. Regenerate them with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Post authors.
    authors (id) {
        id -> Int8,
        first_name -> Varchar,
        last_name -> Varchar,
        email_address -> Varchar,
    }
}

diesel::table! {
    /// Tag captions, at most 20 characters.
    tags (id) {
        id -> Int8,
        caption -> Varchar,
    }
}

diesel::table! {
    /// Blog posts. `slug` is unique through `posts_slug_key`.
    posts (id) {
        id -> Int8,
        title -> Varchar,
        excerpt -> Varchar,
        image_name -> Nullable<Varchar>,
        date -> Timestamptz,
        slug -> Varchar,
        content -> Text,
        author_id -> Int8,
    }
}

diesel::table! {
    /// Many-to-many link between posts and tags.
    post_tags (post_id, tag_id) {
        post_id -> Int8,
        tag_id -> Int8,
    }
}

diesel::table! {
    /// Reader comments; removed together with their post.
    comments (id) {
        id -> Int8,
        user_name -> Varchar,
        user_mail -> Varchar,
        text -> Text,
        post_id -> Int8,
    }
}

diesel::joinable!(posts -> authors (author_id));
diesel::joinable!(post_tags -> posts (post_id));
diesel::joinable!(post_tags -> tags (tag_id));
diesel::joinable!(comments -> posts (post_id));

diesel::allow_tables_to_appear_in_same_query!(authors, tags, posts, post_tags, comments);
