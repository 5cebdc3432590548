#[cfg(test)]
mod tests {
    use logitrack::db::LocalStore;
    use logitrack::libs::config::FuelConfig;
    use logitrack::libs::error::TrackError;
    use logitrack::libs::geo::{self, Coordinates};
    use logitrack::libs::store::Store;
    use logitrack::libs::tracker::Tracker;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;

    static DB_LOCK: Mutex<()> = Mutex::new(());

    fn setup() -> (MutexGuard<'static, ()>, TempDir) {
        let guard = DB_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let temp_dir = tempfile::tempdir().unwrap();
        std::env::set_var("HOME", temp_dir.path());
        std::env::set_var("LOCALAPPDATA", temp_dir.path());
        (guard, temp_dir)
    }

    async fn tracker() -> Tracker {
        let store = Store::Local(LocalStore::new().unwrap());
        Tracker::new(store).await.unwrap()
    }

    #[tokio::test]
    async fn test_start_then_end_without_site() {
        let _env = setup();
        let mut tracker = tracker().await;
        let here = Coordinates::new(45.0, 9.0);

        let job = tracker.start(here, None).await.unwrap();
        assert!(job.is_active());
        assert!(job.site.is_none());
        assert!(tracker.current().is_some());

        let ended = tracker.end(Some(here), &FuelConfig::default(), "quick check").await.unwrap();
        assert!(!ended.is_active());
        // Ending immediately: elapsed time within clock resolution of zero,
        // and no site means no travel and no fuel cost.
        let hours = ended.travel_time.unwrap();
        assert!(hours >= 0.0 && hours < 0.01);
        assert_eq!(ended.travel_km, Some(0.0));
        assert_eq!(ended.fuel_cost, Some(0.0));
        assert_eq!(ended.work_summary.as_deref(), Some("quick check"));
        assert!(tracker.current().is_none());
    }

    #[tokio::test]
    async fn test_round_trip_distance_doubles_the_one_way_leg() {
        let _env = setup();
        let mut tracker = tracker().await;

        let site_location = Coordinates::new(45.0, 9.0);
        tracker.create_site("Acme Plant", site_location).await.unwrap();

        // Start within the proximity radius so the site attaches.
        let job = tracker.start(Coordinates::new(45.0005, 9.0), None).await.unwrap();
        assert_eq!(job.site.as_ref().map(|s| s.name.as_str()), Some("Acme Plant"));

        // End a few kilometers away from the site.
        let end_location = Coordinates::new(45.02, 9.0);
        let fuel = FuelConfig { efficiency: 10.0, price: 1.5 };
        let ended = tracker.end(Some(end_location), &fuel, "").await.unwrap();

        let one_way = geo::distance(end_location.lat, end_location.lon, site_location.lat, site_location.lon);
        let travel = ended.travel_km.unwrap();
        assert!((travel - one_way * 2.0).abs() < 1e-9);
        assert_eq!(ended.fuel_cost, Some(geo::fuel_cost(travel, 10.0, 1.5)));
    }

    #[tokio::test]
    async fn test_ending_a_site_job_requires_a_location() {
        let _env = setup();
        let mut tracker = tracker().await;

        tracker.create_site("Depot", Coordinates::new(45.0, 9.0)).await.unwrap();
        tracker.start(Coordinates::new(45.0, 9.0), None).await.unwrap();

        let err = tracker.end(None, &FuelConfig::default(), "").await.unwrap_err();
        assert!(matches!(err.downcast_ref::<TrackError>(), Some(TrackError::LocationUnavailable)));
        // The job stays active after the rejected end.
        assert!(tracker.current().is_some());
    }

    #[tokio::test]
    async fn test_start_is_rejected_while_a_job_is_active() {
        let _env = setup();
        let mut tracker = tracker().await;
        let here = Coordinates::new(45.0, 9.0);

        let first = tracker.start(here, None).await.unwrap();
        let err = tracker.start(here, None).await.unwrap_err();
        assert!(matches!(err.downcast_ref::<TrackError>(), Some(TrackError::JobAlreadyActive(id)) if *id == first.id));
    }

    #[tokio::test]
    async fn test_end_without_active_job_is_rejected() {
        let _env = setup();
        let mut tracker = tracker().await;

        let err = tracker.end(None, &FuelConfig::default(), "").await.unwrap_err();
        assert!(matches!(err.downcast_ref::<TrackError>(), Some(TrackError::NoActiveJob)));
    }

    #[tokio::test]
    async fn test_deleting_the_active_job_returns_to_idle() {
        let _env = setup();
        let mut tracker = tracker().await;
        let here = Coordinates::new(45.0, 9.0);

        let job = tracker.start(here, None).await.unwrap();
        assert_eq!(tracker.delete(job.id).await.unwrap(), 1);
        assert!(tracker.current().is_none());

        // A new start succeeds now that the lifecycle is idle again.
        let next = tracker.start(here, None).await.unwrap();
        assert!(next.is_active());
    }

    #[tokio::test]
    async fn test_site_hint_creates_and_attaches_a_site() {
        let _env = setup();
        let mut tracker = tracker().await;
        let here = Coordinates::new(45.5, 9.5);

        let job = tracker.start(here, Some("New Depot")).await.unwrap();
        let site = job.site.expect("site should be attached");
        assert_eq!(site.name, "New Depot");
        assert_eq!(site.lat, here.lat);
        assert_eq!(site.lon, here.lon);

        // The registry resolves the same spot to the new site afterwards.
        let sites = tracker.sites().await.unwrap();
        assert_eq!(sites.len(), 1);
    }

    #[tokio::test]
    async fn test_restores_active_job_from_the_store() {
        let _env = setup();
        let job = {
            let mut tracker = tracker().await;
            tracker.start(Coordinates::new(45.0, 9.0), None).await.unwrap()
        };

        // A fresh session sees the same active job.
        let restored = tracker().await;
        assert_eq!(restored.current().map(|j| j.id), Some(job.id));
    }
}
