//! Derives the visible part of the collection from the search box and status menu.

use std::collections::BTreeSet;

use super::{group::Group, status::Status};

const NO_MATCHES: &str = "No groups found matching your filters.";
const NO_GROUPS: &str = "No groups available. Create your first group!";

/// Statuses that are currently let through. Starts out with all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFilter(BTreeSet<Status>);

impl Default for StatusFilter {
    fn default() -> Self {
        Self(Status::ALL.into_iter().collect())
    }
}

impl FromIterator<Status> for StatusFilter {
    fn from_iter<T: IntoIterator<Item = Status>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl StatusFilter {
    pub fn contains(&self, status: Status) -> bool {
        self.0.contains(&status)
    }

    /// Removes `status` when present, adds it otherwise.
    pub fn toggle(&mut self, status: Status) {
        if !self.0.remove(&status) {
            self.0.insert(status);
        }
    }

    /// True while no status is filtered out.
    pub fn is_complete(&self) -> bool {
        Status::ALL.iter().all(|status| self.0.contains(status))
    }

    pub fn iter(&self) -> impl Iterator<Item = Status> + '_ {
        self.0.iter().copied()
    }
}

/// Case insensitive substring match on the group name. An empty search matches all.
pub fn name_matches(name: &str, search: &str) -> bool {
    search.is_empty() || name.to_lowercase().contains(&search.to_lowercase())
}

/// Groups whose name contains `search` and whose status is let through, in input order.
pub fn filter_groups<'a>(
    groups: &'a [Group],
    search: &str,
    statuses: &'a StatusFilter,
) -> impl Iterator<Item = &'a Group> + Clone + 'a {
    let search = search.to_lowercase();
    groups.iter().filter(move |group| {
        statuses.contains(group.status) && name_matches(&group.name, &search)
    })
}

/// Text shown in place of the card grid when nothing is visible.
pub fn empty_message(search: &str, statuses: &StatusFilter) -> &'static str {
    if !search.is_empty() || !statuses.is_complete() {
        NO_MATCHES
    } else {
        NO_GROUPS
    }
}

#[cfg(test)]
mod tests {
    use chrono::Local;

    use super::*;
    use crate::model::{groups::Groups, ids::GroupId};

    fn group(id: &str, name: &str, status: Status) -> Group {
        Group::new_all(
            GroupId::from(id),
            name,
            "",
            status,
            0.,
            None,
            vec![],
            Local::now(),
        )
    }

    fn names<'a>(groups: impl Iterator<Item = &'a Group>) -> Vec<&'a str> {
        groups.map(|group| group.name.as_str()).collect()
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let filters = [
            StatusFilter::default(),
            StatusFilter::from_iter([Status::Active]),
            StatusFilter::from_iter([]),
        ];
        for filter in filters {
            for status in Status::ALL {
                let mut toggled = filter.clone();
                toggled.toggle(status);
                assert_ne!(toggled, filter);
                toggled.toggle(status);
                assert_eq!(toggled, filter);
            }
        }
    }

    #[test]
    fn test_toggle_removes_then_adds() {
        let mut filter = StatusFilter::default();
        filter.toggle(Status::Archived);
        assert!(!filter.contains(Status::Archived));
        assert!(!filter.is_complete());
        filter.toggle(Status::Archived);
        assert!(filter.is_complete());
    }

    #[test]
    fn test_empty_search_and_all_statuses_is_identity() {
        let groups = Groups::seeded();
        let statuses = StatusFilter::default();
        let visible = filter_groups(groups.as_slice(), "", &statuses)
            .cloned()
            .collect::<Vec<_>>();
        assert_eq!(visible, groups.as_slice());
    }

    #[test]
    fn test_search_and_status_combine() {
        let groups = vec![
            group("1", "Marketing Team", Status::Active),
            group("3", "Design Team", Status::Inactive),
        ];
        let statuses = StatusFilter::from_iter([Status::Active]);
        assert_eq!(
            names(filter_groups(&groups, "team", &statuses)),
            vec!["Marketing Team"]
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let groups = Groups::seeded();
        let statuses = StatusFilter::default();
        assert_eq!(
            names(filter_groups(groups.as_slice(), "DEV", &statuses)),
            vec!["Development Team"]
        );
        assert_eq!(
            names(filter_groups(groups.as_slice(), "team", &statuses)),
            vec![
                "Marketing Team",
                "Development Team",
                "Design Team",
                "Research Team"
            ]
        );
    }

    #[test]
    fn test_filter_is_restartable() {
        let groups = Groups::seeded();
        let statuses = StatusFilter::from_iter([Status::Pending, Status::Archived]);
        let visible = filter_groups(groups.as_slice(), "", &statuses);
        assert_eq!(visible.clone().count(), 2);
        assert_eq!(
            names(visible),
            vec!["Research Team", "Customer Support"]
        );
    }

    #[test]
    fn test_empty_message() {
        let all = StatusFilter::default();
        assert_eq!(empty_message("", &all), NO_GROUPS);
        assert_eq!(empty_message("x", &all), NO_MATCHES);
        let mut without_active = all.clone();
        without_active.toggle(Status::Active);
        assert_eq!(empty_message("", &without_active), NO_MATCHES);
    }
}
