//! Summary statistics over the generated tables
//!
//! After generation the orchestrator builds a [`DatasetStatistics`] snapshot
//! that is printed to stdout: row counts per table, categorical distributions,
//! and a page-view summary over sessions.

use std::collections::BTreeMap;
use std::fmt;

use crate::events::EventRecord;
use crate::sessions::SessionRecord;
use crate::users::UserRecord;

/// Distribution counts and summary figures for a completed generation run
#[derive(Debug, Clone, Default)]
pub struct DatasetStatistics {
    /// Number of user rows
    pub users_total: usize,
    /// Number of session rows
    pub sessions_total: usize,
    /// Number of event rows
    pub events_total: usize,
    /// User count per plan label
    pub plan_counts: BTreeMap<String, usize>,
    /// User count per country code
    pub country_counts: BTreeMap<String, usize>,
    /// Session count per device label
    pub session_device_counts: BTreeMap<String, usize>,
    /// Event count per event type label
    pub event_type_counts: BTreeMap<String, usize>,
    /// Event count per device label
    pub event_device_counts: BTreeMap<String, usize>,
    /// Smallest page view count across sessions
    pub page_views_min: u32,
    /// Largest page view count across sessions
    pub page_views_max: u32,
    /// Mean page view count across sessions
    pub page_views_mean: f64,
}

impl DatasetStatistics {
    /// Build the statistics snapshot from the three generated tables
    pub fn from_tables(
        users: &[UserRecord],
        sessions: &[SessionRecord],
        events: &[EventRecord],
    ) -> Self {
        let mut stats = Self {
            users_total: users.len(),
            sessions_total: sessions.len(),
            events_total: events.len(),
            ..Default::default()
        };

        for user in users {
            *stats.plan_counts.entry(user.plan.to_string()).or_insert(0) += 1;
            *stats.country_counts.entry(user.country.clone()).or_insert(0) += 1;
        }

        let mut page_view_sum: u64 = 0;
        for session in sessions {
            *stats
                .session_device_counts
                .entry(session.device.to_string())
                .or_insert(0) += 1;
            page_view_sum += u64::from(session.page_view_count);
        }
        if !sessions.is_empty() {
            stats.page_views_min = sessions.iter().map(|s| s.page_view_count).min().unwrap_or(0);
            stats.page_views_max = sessions.iter().map(|s| s.page_view_count).max().unwrap_or(0);
            stats.page_views_mean = page_view_sum as f64 / sessions.len() as f64;
        }

        for event in events {
            *stats
                .event_type_counts
                .entry(event.event_type.to_string())
                .or_insert(0) += 1;
            *stats
                .event_device_counts
                .entry(event.device.to_string())
                .or_insert(0) += 1;
        }

        stats
    }

    /// Share of `count` in `total`, as a percentage
    pub fn percentage(count: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            count as f64 / total as f64 * 100.0
        }
    }

    fn write_distribution(
        f: &mut fmt::Formatter<'_>,
        label: &str,
        counts: &BTreeMap<String, usize>,
        total: usize,
    ) -> fmt::Result {
        writeln!(f, "  {} distribution:", label)?;
        let mut entries: Vec<_> = counts.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        for (key, count) in entries {
            writeln!(
                f,
                "    {:<12} {:>10} ({:.1}%)",
                key,
                count,
                Self::percentage(*count, total)
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for DatasetStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dataset Statistics")?;
        writeln!(f, "==================")?;
        writeln!(f, "Users: {} rows", self.users_total)?;
        Self::write_distribution(f, "plan", &self.plan_counts, self.users_total)?;
        Self::write_distribution(f, "country", &self.country_counts, self.users_total)?;
        writeln!(f)?;
        writeln!(f, "Sessions: {} rows", self.sessions_total)?;
        Self::write_distribution(f, "device", &self.session_device_counts, self.sessions_total)?;
        writeln!(
            f,
            "  page views: min {} / mean {:.2} / max {}",
            self.page_views_min, self.page_views_mean, self.page_views_max
        )?;
        writeln!(f)?;
        writeln!(f, "Events: {} rows", self.events_total)?;
        Self::write_distribution(f, "type", &self.event_type_counts, self.events_total)?;
        Self::write_distribution(f, "device", &self.event_device_counts, self.events_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventGenerator;
    use crate::sampling::RandomSources;
    use crate::sessions::SessionGenerator;
    use crate::types::GeneratorConfig;
    use crate::users::UserGenerator;
    use chrono::NaiveDate;

    fn small_run() -> (Vec<UserRecord>, Vec<SessionRecord>, Vec<EventRecord>) {
        let config = GeneratorConfig {
            user_count: 50,
            session_count: 100,
            event_count: 400,
            reference_time: NaiveDate::from_ymd_opt(2026, 6, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            ..Default::default()
        };
        let mut rng = RandomSources::from_seed(42);
        let users = UserGenerator::new().generate_users(&config, &mut rng).unwrap();
        let sessions = SessionGenerator::new()
            .generate_sessions(&config, &users, &mut rng)
            .unwrap();
        let events = EventGenerator::new()
            .generate_events(&config, &users, &sessions, &mut rng)
            .unwrap();
        (users, sessions, events)
    }

    #[test]
    fn test_totals_match_tables() {
        let (users, sessions, events) = small_run();
        let stats = DatasetStatistics::from_tables(&users, &sessions, &events);

        assert_eq!(stats.users_total, users.len());
        assert_eq!(stats.sessions_total, sessions.len());
        assert_eq!(stats.events_total, events.len());

        assert_eq!(stats.plan_counts.values().sum::<usize>(), users.len());
        assert_eq!(stats.country_counts.values().sum::<usize>(), users.len());
        assert_eq!(stats.event_type_counts.values().sum::<usize>(), events.len());
    }

    #[test]
    fn test_page_view_summary() {
        let (users, sessions, events) = small_run();
        let stats = DatasetStatistics::from_tables(&users, &sessions, &events);

        assert!(stats.page_views_min >= 1);
        assert!(stats.page_views_max >= stats.page_views_min);
        assert!(stats.page_views_mean >= f64::from(stats.page_views_min));
        assert!(stats.page_views_mean <= f64::from(stats.page_views_max));
    }

    #[test]
    fn test_percentage_helper() {
        assert_eq!(DatasetStatistics::percentage(1, 4), 25.0);
        assert_eq!(DatasetStatistics::percentage(0, 0), 0.0);
    }

    #[test]
    fn test_display_report() {
        let (users, sessions, events) = small_run();
        let stats = DatasetStatistics::from_tables(&users, &sessions, &events);

        let report = format!("{}", stats);
        assert!(report.contains("Dataset Statistics"));
        assert!(report.contains(&format!("Users: {} rows", users.len())));
        assert!(report.contains("plan distribution"));
        assert!(report.contains("page views: min"));
    }

    #[test]
    fn test_empty_tables() {
        let stats = DatasetStatistics::from_tables(&[], &[], &[]);
        assert_eq!(stats.users_total, 0);
        assert_eq!(stats.page_views_mean, 0.0);
        let report = format!("{}", stats);
        assert!(report.contains("Users: 0 rows"));
    }
}
