//! Groups and user the screen starts with before anything is changed.

use chrono::{DateTime, Local, TimeZone};

use super::{
    group::Group,
    ids::GroupId,
    member::Member,
    role::Role,
    status::Status,
};

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=100&width=100";

fn seed_date(year: i32, month: u32, day: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(year, month, day, 0, 0, 0)
        .earliest()
        .unwrap_or_default()
}

fn seed_group(
    id: &str,
    name: &str,
    description: &str,
    status: Status,
    rating: f32,
    created_at: DateTime<Local>,
    members: Vec<Member>,
) -> Group {
    Group::new_all(
        GroupId::new(id),
        name,
        description,
        status,
        rating,
        Some(PLACEHOLDER_IMAGE.to_owned()),
        members,
        created_at,
    )
}

pub fn initial_groups() -> Vec<Group> {
    vec![
        seed_group(
            "1",
            "Marketing Team",
            "Team responsible for marketing campaigns and strategies",
            Status::Active,
            4.5,
            seed_date(2023, 6, 15),
            vec![
                Member::new("m1", "John Doe", "john@example.com", Role::Leader),
                Member::new("m2", "Jane Smith", "jane@example.com", Role::Member),
                Member::new("m3", "Alex Johnson", "alex@example.com", Role::Member),
            ],
        ),
        seed_group(
            "2",
            "Development Team",
            "Software engineers and developers",
            Status::Active,
            4.8,
            seed_date(2023, 4, 10),
            vec![
                Member::new("m4", "Sarah Williams", "sarah@example.com", Role::Leader),
                Member::new("m5", "Mike Brown", "mike@example.com", Role::Member),
            ],
        ),
        seed_group(
            "3",
            "Design Team",
            "UI/UX designers and graphic artists",
            Status::Inactive,
            3.7,
            seed_date(2023, 2, 5),
            vec![
                Member::new("m6", "Emily Davis", "emily@example.com", Role::Leader),
                Member::new("m7", "Chris Wilson", "chris@example.com", Role::Member),
                Member::new("m8", "Taylor Moore", "taylor@example.com", Role::Member),
            ],
        ),
        seed_group(
            "4",
            "Research Team",
            "Market research and analysis",
            Status::Archived,
            4.0,
            seed_date(2022, 12, 20),
            vec![
                Member::new("m9", "Jordan Lee", "jordan@example.com", Role::Leader),
                Member::new("m10", "Casey Kim", "casey@example.com", Role::Member),
            ],
        ),
        seed_group(
            "5",
            "Customer Support",
            "Customer service and support",
            Status::Pending,
            3.5,
            seed_date(2023, 8, 1),
            vec![
                Member::new("m11", "Riley Parker", "riley@example.com", Role::Leader),
                Member::new("m12", "Morgan Taylor", "morgan@example.com", Role::Member),
                Member::new("m13", "Jamie Garcia", "jamie@example.com", Role::Member),
            ],
        ),
    ]
}

/// The signed in user, used for permission checks and as creator of new groups.
pub fn current_user() -> Member {
    Member::new("admin1", "Admin User", "admin@example.com", Role::Admin)
}
