//! Shared builders for domain unit tests.

use chrono::{DateTime, TimeZone, Utc};

use super::{Author, AuthorId, Comment, CommentId, EmailAddress, Post, PostId, Slug};

pub(crate) fn author() -> Author {
    Author {
        id: AuthorId::new(1),
        first_name: "John".to_owned(),
        last_name: "Doe".to_owned(),
        email_address: EmailAddress::new("john@example.com").expect("fixture email"),
    }
}

pub(crate) fn published_at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, day, 9, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

pub(crate) fn post(id: i64, slug: &str) -> Post {
    Post {
        id: PostId::new(id),
        title: format!("Post {id}"),
        excerpt: format!("Excerpt {id}"),
        image_name: None,
        date: published_at(1),
        slug: Slug::new(slug).expect("fixture slug"),
        content: "Content long enough to validate".to_owned(),
        author: author(),
    }
}

pub(crate) fn comment(id: i64, post_id: i64) -> Comment {
    Comment {
        id: CommentId::new(id),
        user_name: "Test User".to_owned(),
        user_mail: EmailAddress::new("test@example.com").expect("fixture email"),
        text: format!("Comment {id}"),
        post_id: PostId::new(post_id),
    }
}
