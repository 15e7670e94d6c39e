//! Motivational reference quotes, seeded once when the quote table is created.

use chrono::{Datelike as _, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::ids::now_millis;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default = "now_millis")]
    pub created_at: i64,
}

/// Seed list written on first database creation: (text, author).
pub const SEED_QUOTES: &[(&str, Option<&str>)] = &[
    ("The best way to predict the future is to create it.", Some("Peter Drucker")),
    ("The future belongs to those who believe in the beauty of their dreams.", Some("Eleanor Roosevelt")),
    ("Success is not final, failure is not fatal: It is the courage to continue that counts.", Some("Winston S. Churchill")),
    ("The only way to do great work is to love what you do.", Some("Steve Jobs")),
    ("Believe you can and you're halfway there.", Some("Theodore Roosevelt")),
    ("The harder I work, the luckier I get.", Some("Samuel Goldwyn")),
    ("It always seems impossible until it's done.", Some("Nelson Mandela")),
    ("The mind is everything. What you think you become.", Some("Buddha")),
    ("Strive not to be a success, but rather to be of value.", Some("Albert Einstein")),
    ("The greatest glory in living lies not in never falling, but in rising every time we fall.", Some("Nelson Mandela")),
    ("The only limit to our realization of tomorrow will be our doubts of today.", Some("Franklin D. Roosevelt")),
    ("Do not wait for a leader; do it alone, person to person.", Some("Mother Teresa")),
    ("The journey of a thousand miles begins with a single step.", Some("Lao Tzu")),
    ("What you get by achieving your goals is not as important as what you become by achieving your goals.", Some("Zig Ziglar")),
    ("The difference between ordinary and extraordinary is that little extra.", Some("Jimmy Johnson")),
    ("Your time is limited, don't waste it living someone else's life.", Some("Steve Jobs")),
    ("The best revenge is massive success.", Some("Frank Sinatra")),
    ("If you want to achieve greatness stop asking for permission.", Some("Anonymous")),
    ("Things work out best for those who make the best of how things work out.", Some("John Wooden")),
    ("To live a creative life, we must lose our fear of being wrong.", Some("Joseph Chilton Pearce")),
    ("If you are not willing to risk the usual, you will have to settle for the ordinary.", Some("Jim Rohn")),
    ("All our dreams can come true, if we have the courage to pursue them.", Some("Walt Disney")),
    ("Don't be afraid to give up the good to go for the great.", Some("John D. Rockefeller")),
    ("I find that the harder I work, the more luck I seem to have.", Some("Thomas Jefferson")),
    ("Success is walking from failure to failure with no loss of enthusiasm.", Some("Winston Churchill")),
    ("The starting point of all achievement is desire.", Some("Napoleon Hill")),
    ("The only place where success comes before work is in the dictionary.", Some("Vidal Sassoon")),
    ("The best way to appreciate your job is to imagine yourself without one.", Some("Oscar Wilde")),
    ("You miss 100% of the shots you don't take.", Some("Wayne Gretzky")),
    ("If you want to lift yourself up, lift up someone else.", Some("Booker T. Washington")),
    ("The only person you are destined to become is the person you decide to be.", Some("Ralph Waldo Emerson")),
    ("Go confidently in the direction of your dreams. Live the life you have imagined.", Some("Henry David Thoreau")),
    ("What's money? A man is a success if he gets up in the morning and goes to bed at night and in between does what he wants to do.", Some("Bob Dylan")),
    ("Twenty years from now you will be more disappointed by the things that you didn't do than by the ones you did do.", Some("Mark Twain")),
    ("Build your own dreams, or someone else will hire you to build theirs.", Some("Farrah Gray")),
    ("The most difficult thing is the decision to act, the rest is merely tenacity.", Some("Amelia Earhart")),
    ("Every strike brings me closer to the next home run.", Some("Babe Ruth")),
    ("Definiteness of purpose is the starting point of all achievement.", Some("W. Clement Stone")),
    ("Life is 10% what happens to me and 90% of how I react to it.", Some("Charles R. Swindoll")),
    ("Your true success in life begins only when you commit to an exciting goal that is bigger than you are.", Some("Brian Tracy")),
];

/// Deterministic pick for a calendar day, so the same quote shows all day.
#[must_use]
pub fn quote_of_the_day(quotes: &[Quote], day: NaiveDate) -> Option<&Quote> {
    if quotes.is_empty() {
        return None;
    }
    let day_number = usize::try_from(day.num_days_from_ce()).unwrap_or_default();
    quotes.get(day_number % quotes.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(id: &str) -> Quote {
        Quote { id: id.to_owned(), text: id.to_owned(), author: None, created_at: 0 }
    }

    #[test]
    fn seed_list_has_authors_and_no_blank_text() {
        assert_eq!(SEED_QUOTES.len(), 40);
        assert!(SEED_QUOTES.iter().all(|(text, _)| !text.trim().is_empty()));
    }

    #[test]
    fn quote_of_the_day_is_stable_within_a_day_and_rotates() {
        let quotes = vec![quote("a"), quote("b"), quote("c")];
        let day = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let next = day.succ_opt().unwrap();
        let first = quote_of_the_day(&quotes, day).unwrap();
        assert_eq!(quote_of_the_day(&quotes, day).unwrap().id, first.id);
        assert_ne!(quote_of_the_day(&quotes, next).unwrap().id, first.id);
    }

    #[test]
    fn quote_of_the_day_handles_empty_table() {
        assert!(quote_of_the_day(&[], NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()).is_none());
    }
}
