//! HTML pages. Every page is wrapped in the shared `layout`, and all
//! dynamic text goes through maud's escaping.

use chrono::{DateTime, Utc};
use maud::{html, Markup, DOCTYPE};

use crate::model::{Comment, Post};

pub const SITE_NAME: &'static str = "Hermes blog";
pub const ASSIGNMENT: &'static str = "Lab work assignment";
pub const FOOTER: &'static str = "Ekaterina Baranova, group 231-352";
pub const LATEST_POSTS: &'static str = "Latest posts";
pub const ABOUT: &'static str = "About the author";
pub const NOT_FOUND: &'static str = "404 Not Found";

const DATE_FORMAT: &'static str = "%d.%m.%Y в %H:%M";
const STYLESHEET: &'static str =
    "https://cdn.jsdelivr.net/npm/bootstrap@4.6.2/dist/css/bootstrap.min.css";

/// `DD.MM.YYYY в HH:MM`
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn image_url(image_id: &str) -> String {
    format!("/static/images/{}", image_id)
}

fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | " (SITE_NAME) }
                link rel="stylesheet" href=(STYLESHEET);
            }
            body {
                nav class="navbar navbar-expand-lg navbar-dark bg-dark" {
                    div class="container" {
                        a class="navbar-brand" href="/" { (SITE_NAME) }
                        ul class="navbar-nav ml-auto" {
                            li class="nav-item" { a class="nav-link" href="/" { "Home" } }
                            li class="nav-item" { a class="nav-link" href="/posts" { "Posts" } }
                            li class="nav-item" { a class="nav-link" href="/about" { "About" } }
                        }
                    }
                }
                main class="container my-4" {
                    (content)
                }
                footer class="py-4 bg-dark text-white-50" {
                    div class="container text-center" {
                        small { (FOOTER) }
                    }
                }
            }
        }
    }
}

pub fn index() -> Markup {
    layout("Home", html! {
        h1 { (ASSIGNMENT) }
        p class="lead" {
            "Build a small blog with a home page, a list of posts, a page for every post "
            "with its comments and an about page."
        }
        ul {
            li { "Posts are kept in memory and listed newest first." }
            li { "Every post shows its image, date, text and comment thread." }
            li { "A missing post answers with a 404 page." }
        }
        a class="btn btn-primary" href="/posts" { "Read the blog" }
    })
}

pub fn posts(posts: &[Post]) -> Markup {
    layout(LATEST_POSTS, html! {
        h1 class="my-4" { (LATEST_POSTS) }
        @for (index, post) in posts.iter().enumerate() {
            div class="card mb-4" {
                img class="card-img-top" src=(image_url(post.image_id())) alt=(post.title());
                div class="card-body" {
                    h2 class="card-title" { (post.title()) }
                    p class="card-text" { (post.text()) }
                    a class="btn btn-primary" href={ "/posts/" (index) } { "Read more" }
                }
                div class="card-footer text-muted" {
                    (format_date(post.date())) ", " (post.author())
                }
            }
        }
    })
}

pub fn post(post: &Post) -> Markup {
    let comment_count = post.comments().len();
    layout(post.title(), html! {
        h1 class="mt-4" { (post.title()) }
        p class="lead" { "by " (post.author()) }
        div class="card mb-4" {
            img class="card-img-top" src=(image_url(post.image_id())) alt=(post.title());
            div class="card-body" {
                p class="card-text" { (post.text()) }
            }
            div class="card-footer text-muted" {
                "Posted " (format_date(post.date()))
            }
        }
        div class="card my-4" {
            h5 class="card-header" { "Leave a comment" }
            div class="card-body" {
                form {
                    div class="form-group" {
                        textarea class="form-control" rows="3" name="text" {}
                    }
                    button type="submit" class="btn btn-primary" { "Submit" }
                }
            }
        }
        h5 class="mb-4" { "Comments: " (comment_count) }
        @for comment in post.comments() {
            (comment_block(comment))
        }
    })
}

fn comment_block(comment: &Comment) -> Markup {
    html! {
        div class="media mb-4" {
            div class="media-body" {
                h5 class="mt-0" { (comment.author()) }
                p { (comment.text()) }
                @if comment.has_replies() {
                    div class="replies mt-4" {
                        @for reply in comment.replies() {
                            (comment_block(reply))
                        }
                    }
                }
            }
        }
    }
}

pub fn about() -> Markup {
    layout(ABOUT, html! {
        h1 class="my-4" { (ABOUT) }
        p { (FOOTER) }
        p {
            "A student project about routing and templates: a handful of posts, "
            "rendered server side, with no database behind them."
        }
    })
}

pub fn not_found() -> Markup {
    layout(NOT_FOUND, html! {
        h1 class="my-4" { (NOT_FOUND) }
        p { "The requested page does not exist." }
        a href="/" { "Back to the home page" }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Post {
        let date = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 0).unwrap();
        Post::new("A <b>bold</b> title",
                  "Ann",
                  date,
                  "Body text",
                  "cover.jpg",
                  vec![Comment::with_replies("Bob", "Top", vec![Comment::new("Cid", "Nested")])])
    }

    #[test]
    fn date_uses_day_month_year() {
        let date = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 0).unwrap();
        assert_eq!(format_date(&date), "07.03.2024 в 09:05");
    }

    #[test]
    fn post_page_escapes_markup() {
        let html = post(&sample()).into_string();
        assert!(html.contains("A &lt;b&gt;bold&lt;/b&gt; title"));
        assert!(!html.contains("<b>bold</b>"));
    }

    #[test]
    fn post_page_renders_nested_replies() {
        let html = post(&sample()).into_string();
        assert!(html.contains("Bob"));
        assert!(html.contains("Cid"));
        assert!(html.contains("Nested"));
        assert_eq!(html.matches("media mb-4").count(), 2);
    }

    #[test]
    fn post_page_counts_top_level_comments_only() {
        let html = post(&sample()).into_string();
        assert!(html.contains("Comments: 1"));
    }

    #[test]
    fn image_points_at_static_images() {
        let html = post(&sample()).into_string();
        assert!(html.contains(r#"<img class="card-img-top" src="/static/images/cover.jpg""#));
    }

    #[test]
    fn every_page_carries_the_footer() {
        for page in vec![index(), posts(&[sample()]), post(&sample()), about(), not_found()] {
            assert!(page.into_string().contains(FOOTER));
        }
    }

    #[test]
    fn posts_list_links_by_position() {
        let html = posts(&[sample(), sample()]).into_string();
        assert!(html.contains(r#"href="/posts/0""#));
        assert!(html.contains(r#"href="/posts/1""#));
    }
}
