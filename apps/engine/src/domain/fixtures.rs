//! Bulk-seed deck for demos and first-run sessions.

use crate::domain::card::{Card, Category, Difficulty, Frequency, LocalizedText, NewCard};
use crate::domain::partner::PartnerId;
use crate::errors::domain::DomainError;

/// Build the starter deck of household cards, all unassigned.
///
/// Intended for first-run seeding and test scenarios; user decks replace or
/// extend it through the card service.
pub fn starter_deck() -> Result<Vec<Card>, DomainError> {
    let specs: [(&str, &str, Category, Difficulty, Frequency, u16); 12] = [
        (
            "Dishes",
            "שטיפת כלים",
            Category::DailyGrind,
            Difficulty::Easy,
            Frequency::Daily,
            20,
        ),
        (
            "Laundry",
            "כביסה",
            Category::DailyGrind,
            Difficulty::Medium,
            Frequency::Weekly,
            45,
        ),
        (
            "Grocery run",
            "קניות",
            Category::DailyGrind,
            Difficulty::Medium,
            Frequency::Weekly,
            60,
        ),
        (
            "School pickup",
            "איסוף מבית הספר",
            Category::Kids,
            Difficulty::Easy,
            Frequency::Daily,
            30,
        ),
        (
            "Bedtime routine",
            "השכבה",
            Category::Kids,
            Difficulty::Hard,
            Frequency::Daily,
            40,
        ),
        (
            "Homework help",
            "עזרה בשיעורי בית",
            Category::Kids,
            Difficulty::Medium,
            Frequency::Daily,
            30,
        ),
        (
            "Bathroom deep clean",
            "ניקוי יסודי של האמבטיה",
            Category::Home,
            Difficulty::Hard,
            Frequency::Weekly,
            50,
        ),
        (
            "Take out trash",
            "הוצאת זבל",
            Category::Home,
            Difficulty::Easy,
            Frequency::Daily,
            5,
        ),
        (
            "Garden watering",
            "השקיית הגינה",
            Category::Home,
            Difficulty::Easy,
            Frequency::Weekly,
            15,
        ),
        (
            "Date night planning",
            "תכנון ערב זוגי",
            Category::Magic,
            Difficulty::Medium,
            Frequency::Monthly,
            30,
        ),
        (
            "Birthday gifts",
            "מתנות יום הולדת",
            Category::Magic,
            Difficulty::Medium,
            Frequency::Occasional,
            45,
        ),
        (
            "Fix the squeaky door",
            "תיקון הדלת החורקת",
            Category::Wild,
            Difficulty::Easy,
            Frequency::Occasional,
            25,
        ),
    ];

    specs
        .into_iter()
        .map(|(en, he, category, difficulty, frequency, minutes)| {
            Card::create(
                NewCard {
                    category,
                    title: LocalizedText::new(en, he),
                    description: LocalizedText::default(),
                    details: LocalizedText::default(),
                    is_custom: false,
                    tags: Vec::new(),
                    difficulty,
                    frequency,
                    time_estimate: minutes,
                },
                PartnerId::A,
            )
        })
        .collect()
}
