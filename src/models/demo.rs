//! Demo data served by the in-memory data source

use super::{Lesson, LessonStatus, LessonType, User};

const TUTOR: &str = "Sarah Tan";

pub fn demo_user() -> User {
    User {
        id: "U001".to_string(),
        name: TUTOR.to_string(),
        email: "sarah.tan@champcode.com".to_string(),
        avatar: None,
    }
}

pub fn get_demo_lessons() -> Vec<Lesson> {
    use LessonStatus::{Available, Completed, Confirmed};
    use LessonType::{Historic, Upcoming};

    vec![
        // December 2025
        Lesson::demo("L001", "2025-12-15T14:00:00Z", Historic, "Minecraft Game Design - Level 1", &["Ethan", "Ava"], Some(TUTOR), Completed),
        Lesson::demo("L002", "2025-12-18T09:00:00Z", Historic, "Roblox Coding Basics", &["Lucas"], Some(TUTOR), Completed),
        Lesson::demo("L003", "2025-12-20T16:00:00Z", Historic, "Python for Kids - Introduction", &["Chloe", "Aaron"], Some(TUTOR), Completed),
        // January 2026
        Lesson::demo("L004", "2026-01-04T10:00:00Z", Upcoming, "Minecraft Redstone Logic", &["Emma", "Noah"], Some(TUTOR), Confirmed),
        Lesson::demo("L005", "2026-01-04T14:00:00Z", Upcoming, "Python Game Development", &["Olivia"], Some(TUTOR), Confirmed),
        Lesson::demo("L006", "2026-01-08T15:00:00Z", Upcoming, "Roblox Game Design - Level 2", &["Ryan", "Mia"], Some(TUTOR), Confirmed),
        Lesson::demo("L007", "2026-01-10T12:00:00Z", Upcoming, "Website Design for Beginners", &["Sophia"], Some(TUTOR), Confirmed),
        Lesson::demo("L008", "2026-01-15T10:00:00Z", Upcoming, "Python Automation for Kids", &["Elijah"], Some(TUTOR), Confirmed),
        Lesson::demo("L009", "2026-01-18T16:00:00Z", Upcoming, "Minecraft AI Coding Adventure", &["James", "Charlotte"], Some(TUTOR), Confirmed),
        Lesson::demo("L010", "2026-01-22T11:00:00Z", LessonType::Available, "Python for Kids - Game Projects", &[], None, Available),
        Lesson::demo("L011", "2026-01-25T14:00:00Z", LessonType::Available, "Roblox Game Design - Level 1", &[], None, Available),
        // February 2026
        Lesson::demo("L012", "2026-02-02T10:00:00Z", LessonType::Available, "Minecraft Game Design - Level 2", &[], None, Available),
        Lesson::demo("L013", "2026-02-05T15:00:00Z", LessonType::Available, "Web Development Basics", &[], None, Available),
        Lesson::demo("L014", "2026-02-10T09:00:00Z", LessonType::Available, "Python for Beginners", &[], None, Available),
        Lesson::demo("L015", "2026-02-15T16:00:00Z", LessonType::Available, "Roblox Scripting Advanced", &[], None, Available),
    ]
}
