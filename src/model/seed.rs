//! Sample editions written to an empty store on first access.

use serde_json::Number;

use super::edition::Edition;

/// Number of editions in the seed set
pub const SEED_COUNT: usize = 10;

struct SeedRow {
    id: u64,
    title: &'static str,
    issue_number: u64,
    cover_image_url: &'static str,
    publish_date: &'static str,
    summary: &'static str,
    tags: &'static [&'static str],
}

const SEED_ROWS: [SeedRow; SEED_COUNT] = [
    SeedRow {
        id: 1,
        title: "DTU Times — Spring 2025",
        issue_number: 42,
        cover_image_url: "https://images.unsplash.com/photo-1524995997946-a1c2e315a42f?w=400&h=300&fit=crop",
        publish_date: "2025-03-15",
        summary: "A look at campus innovation, research spotlights, and alumni stories.",
        tags: &["innovation", "alumni", "research"],
    },
    SeedRow {
        id: 2,
        title: "DTU Times — Summer 2025",
        issue_number: 43,
        cover_image_url: "https://images.unsplash.com/photo-1519681393784-d120267933ba?w=400&h=300&fit=crop",
        publish_date: "2025-06-10",
        summary: "Festival recap, internship diaries, and startup features.",
        tags: &["festival", "internships", "startups"],
    },
    SeedRow {
        id: 3,
        title: "DTU Times — Autumn 2024",
        issue_number: 41,
        cover_image_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=300&fit=crop",
        publish_date: "2024-09-20",
        summary: "New academic year highlights, faculty interviews, and tech trends.",
        tags: &["academics", "technology", "faculty"],
    },
    SeedRow {
        id: 4,
        title: "DTU Times — Winter 2024",
        issue_number: 40,
        cover_image_url: "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=400&h=300&fit=crop",
        publish_date: "2024-12-01",
        summary: "Year-end wrap-up, student achievements, and holiday traditions.",
        tags: &["achievements", "traditions", "year-end"],
    },
    SeedRow {
        id: 5,
        title: "DTU Times — Sports Special",
        issue_number: 39,
        cover_image_url: "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?w=400&h=300&fit=crop",
        publish_date: "2024-08-15",
        summary: "Athletic department highlights, team victories, and upcoming seasons.",
        tags: &["sports", "athletics", "teams"],
    },
    SeedRow {
        id: 6,
        title: "DTU Times — Research Edition",
        issue_number: 38,
        cover_image_url: "https://images.unsplash.com/photo-1532094349884-543bc11b234d?w=400&h=300&fit=crop",
        publish_date: "2024-07-05",
        summary: "Breakthrough discoveries, lab innovations, and doctoral dissertations.",
        tags: &["research", "science", "innovation"],
    },
    SeedRow {
        id: 7,
        title: "DTU Times — Career Guide",
        issue_number: 37,
        cover_image_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=300&fit=crop",
        publish_date: "2024-05-20",
        summary: "Job market insights, career counseling, and industry partnerships.",
        tags: &["careers", "industry", "guidance"],
    },
    SeedRow {
        id: 8,
        title: "DTU Times — Cultural Fest",
        issue_number: 36,
        cover_image_url: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=400&h=300&fit=crop",
        publish_date: "2024-04-10",
        summary: "Annual cultural celebrations, performances, and artistic showcases.",
        tags: &["culture", "arts", "performances"],
    },
    SeedRow {
        id: 9,
        title: "DTU Times — Tech Symposium",
        issue_number: 35,
        cover_image_url: "https://images.unsplash.com/photo-1518609878373-06d740f60d8b?w=400&h=300&fit=crop",
        publish_date: "2024-03-25",
        summary: "Latest in AI, robotics, and engineering breakthroughs from campus.",
        tags: &["technology", "AI", "robotics"],
    },
    SeedRow {
        id: 10,
        title: "DTU Times — Alumni Network",
        issue_number: 34,
        cover_image_url: "https://images.unsplash.com/photo-1523240795612-9a054b0db644?w=400&h=300&fit=crop",
        publish_date: "2024-02-15",
        summary: "Alumni success stories, networking events, and mentorship programs.",
        tags: &["alumni", "networking", "mentorship"],
    },
];

/// Builds the seed collection in its fixed order.
pub fn seed_editions() -> Vec<Edition> {
    SEED_ROWS
        .iter()
        .map(|row| Edition {
            id: row.id,
            title: row.title.to_string(),
            issue_number: Number::from(row.issue_number),
            cover_image_url: row.cover_image_url.to_string(),
            publish_date: row.publish_date.to_string(),
            summary: row.summary.to_string(),
            tags: row.tags.iter().map(|t| t.to_string()).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_has_ten_unique_ids() {
        let seed = seed_editions();
        assert_eq!(seed.len(), SEED_COUNT);

        let ids: HashSet<_> = seed.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), SEED_COUNT);
        assert_eq!(ids.iter().max(), Some(&10));
    }

    #[test]
    fn test_seed_dates_are_well_formed() {
        for edition in seed_editions() {
            assert!(
                chrono::NaiveDate::parse_from_str(&edition.publish_date, "%Y-%m-%d").is_ok(),
                "bad seed date {}",
                edition.publish_date
            );
        }
    }
}
