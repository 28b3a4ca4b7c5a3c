use chrono::{DateTime, Utc};

#[derive(Clone, Debug)]
pub struct Post {
    title: String,
    author: String,
    date: DateTime<Utc>,
    text: String,
    image_id: String,
    comments: Vec<Comment>,
}

impl Post {
    pub fn new(title: &str,
               author: &str,
               date: DateTime<Utc>,
               text: &str,
               image_id: &str,
               comments: Vec<Comment>)
               -> Post {
        Post {
            title: title.to_string(),
            author: author.to_string(),
            date: date,
            text: text.to_string(),
            image_id: image_id.to_string(),
            comments: comments,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn date(&self) -> &DateTime<Utc> {
        &self.date
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn image_id(&self) -> &str {
        &self.image_id
    }

    /// Top-level comments only; replies hang off each `Comment`.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }
}

/// A remark on a post. Replies have the same shape, so a thread is a tree.
#[derive(Clone, Debug)]
pub struct Comment {
    author: String,
    text: String,
    replies: Vec<Comment>,
}

impl Comment {
    pub fn new(author: &str, text: &str) -> Comment {
        Comment::with_replies(author, text, vec![])
    }

    pub fn with_replies(author: &str, text: &str, replies: Vec<Comment>) -> Comment {
        Comment {
            author: author.to_string(),
            text: text.to_string(),
            replies: replies,
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn replies(&self) -> &[Comment] {
        &self.replies
    }

    pub fn has_replies(&self) -> bool {
        !self.replies.is_empty()
    }
}
