use chrono::{DateTime, TimeZone, Utc};
use crate::error::BlogError;
use crate::model::{Comment, Post};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<DateTime<Utc>, BlogError> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .ok_or_else(|| {
            BlogError::InvalidDate(format!("{:04}-{:02}-{:02} {:02}:{:02}",
                                           year, month, day, hour, minute))
        })
}

/// The fixed set of posts the blog is started with, in no particular order.
pub fn posts() -> Result<Vec<Post>, BlogError> {
    Ok(vec![
        Post::new("Morning in the old town",
                  "Marina Sokolova",
                  at(2024, 10, 14, 8, 30)?,
                  "Cobblestones still wet from the night rain, the bakery on the corner \
                   already open and a tram crawling up the hill. Some streets are best \
                   seen before anyone else wakes up.",
                  "2f1c6d3e-old-town.jpg",
                  vec![Comment::with_replies("Pavel Orlov",
                                             "Which bakery is it? I want to go there too.",
                                             vec![Comment::new("Marina Sokolova",
                                                               "The one next to the clock tower, \
                                                                it opens at seven.")]),
                       Comment::new("Irina Belova", "Lovely photos, the light is perfect."),
                       Comment::with_replies("Denis Kuznetsov",
                                             "Did you walk all the way from the station?",
                                             vec![Comment::new("Marina Sokolova",
                                                               "Yes, about forty minutes."),
                                                  Comment::new("Pavel Orlov",
                                                               "Worth every minute.")])]),
        Post::new("Learning to bake sourdough",
                  "Alexei Volkov",
                  at(2024, 7, 2, 19, 5)?,
                  "Three failed loaves later the starter finally behaves. The trick was \
                   a warmer spot in the kitchen and a lot more patience than I expected.",
                  "8b0e4a71-sourdough.jpg",
                  vec![Comment::new("Olga Smirnova", "Patience is the secret ingredient."),
                       Comment::with_replies("Igor Fedorov",
                                             "How often do you feed the starter?",
                                             vec![Comment::new("Alexei Volkov",
                                                               "Twice a day while it is active.")])]),
        Post::new("A weekend on the lake",
                  "Svetlana Morozova",
                  at(2024, 8, 21, 17, 45)?,
                  "No signal, a borrowed canoe and a thermos of tea. We paddled to the \
                   far shore and back and did not check the time once.",
                  "c94d2b18-lake.jpg",
                  vec![Comment::new("Nikita Lebedev", "Sounds like exactly what I need.")]),
        Post::new("Notes from a first hackathon",
                  "Dmitry Popov",
                  at(2024, 5, 11, 23, 10)?,
                  "Forty hours, four people, one half-working prototype. We did not win, \
                   but the demo ran without crashing and that felt like a victory.",
                  "51aa7f0c-hackathon.jpg",
                  vec![]),
        Post::new("Reading list for autumn",
                  "Elena Pavlova",
                  at(2024, 10, 3, 12, 0)?,
                  "Long evenings call for long books. This year the pile by the window \
                   holds two classics, a travel memoir and a field guide to mushrooms.",
                  "e07b95d6-books.jpg",
                  vec![Comment::new("Anna Kozlova", "Adding the memoir to my list."),
                       Comment::new("Sergei Novikov", "The field guide is a great pick.")]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn there_are_five_seed_posts() {
        assert_eq!(posts().unwrap().len(), 5);
    }

    #[test]
    fn impossible_date_is_rejected() {
        match at(2024, 2, 30, 12, 0) {
            Err(BlogError::InvalidDate(ref what)) => assert_eq!(what, "2024-02-30 12:00"),
            other => panic!("expected InvalidDate, got {:?}", other),
        }
        assert!(at(2024, 2, 29, 12, 0).is_ok());
    }

    #[test]
    fn seed_text_needs_no_escaping() {
        fn plain(s: &str) -> bool {
            !s.contains(|c: char| c == '&' || c == '<' || c == '>' || c == '"' || c == '\'')
        }
        fn comments_plain(comments: &[Comment]) -> bool {
            comments
                .iter()
                .all(|c| plain(c.author()) && plain(c.text()) && comments_plain(c.replies()))
        }
        for post in posts().unwrap() {
            assert!(plain(post.title()) && plain(post.author()) && plain(post.text()));
            assert!(comments_plain(post.comments()));
        }
    }
}
