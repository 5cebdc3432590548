#[cfg(test)]
mod tests {
    use chrono::{Duration, Local, NaiveDateTime, NaiveTime};
    use logitrack::libs::history;
    use logitrack::libs::job::{Job, JobFilter};

    fn job(id: i64, created_at: NaiveDateTime) -> Job {
        Job {
            id,
            site_id: None,
            start_time: created_at,
            end_time: None,
            travel_km: None,
            travel_time: None,
            fuel_cost: None,
            work_summary: None,
            created_at,
            site: None,
        }
    }

    fn completed(id: i64, created_at: NaiveDateTime, hours: f64, km: f64, cost: f64) -> Job {
        Job {
            end_time: Some(created_at + Duration::hours(1)),
            travel_km: Some(km),
            travel_time: Some(hours),
            fuel_cost: Some(cost),
            work_summary: Some("done".to_string()),
            ..job(id, created_at)
        }
    }

    #[test]
    fn test_today_filter_bounds() {
        let now = Local::now();
        let midnight = now.date_naive().and_time(NaiveTime::MIN);
        let jobs = vec![
            job(1, midnight - Duration::hours(25)),
            job(2, midnight + Duration::minutes(1)),
        ];

        let filtered = history::filter(jobs, JobFilter::Today, now);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
    }

    #[test]
    fn test_week_filter_is_rolling_seven_days() {
        let now = Local::now();
        let jobs = vec![
            job(1, now.naive_local() - Duration::hours(7 * 24 + 1)),
            job(2, now.naive_local() - Duration::hours(7 * 24 - 1)),
        ];

        let filtered = history::filter(jobs, JobFilter::Week, now);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
    }

    #[test]
    fn test_month_filter_looks_back_one_calendar_month() {
        let now = Local::now();
        let jobs = vec![
            job(1, now.naive_local() - Duration::days(40)),
            job(2, now.naive_local() - Duration::days(20)),
        ];

        let filtered = history::filter(jobs, JobFilter::Month, now);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
    }

    #[test]
    fn test_filter_orders_newest_first() {
        let now = Local::now();
        let jobs = vec![
            job(1, now.naive_local() - Duration::hours(3)),
            job(2, now.naive_local() - Duration::hours(1)),
            job(3, now.naive_local() - Duration::hours(2)),
        ];

        let filtered = history::filter(jobs, JobFilter::All, now);
        let ids: Vec<i64> = filtered.iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_aggregate_empty_collection_is_all_zero() {
        let totals = history::aggregate(&[]);
        assert_eq!(totals.hours, 0.0);
        assert_eq!(totals.distance_km, 0.0);
        assert_eq!(totals.fuel_cost, 0.0);
    }

    #[test]
    fn test_aggregate_is_order_independent() {
        let now = Local::now().naive_local();
        let a = completed(1, now - Duration::hours(5), 2.0, 10.0, 1.25);
        let b = completed(2, now - Duration::hours(3), 1.5, 4.0, 0.5);
        let c = job(3, now - Duration::hours(1)); // active, counts as zero

        let forward = history::aggregate(&[a.clone(), b.clone(), c.clone()]);
        let backward = history::aggregate(&[c, b, a]);
        assert_eq!(forward, backward);
        assert_eq!(forward.hours, 3.5);
        assert_eq!(forward.distance_km, 14.0);
        assert_eq!(forward.fuel_cost, 1.75);
    }
}
