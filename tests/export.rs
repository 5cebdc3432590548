#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use logitrack::libs::export::{ExportFormat, Exporter};
    use logitrack::libs::job::Job;
    use logitrack::libs::report::Timesheet;
    use logitrack::libs::site::Site;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 7, day).unwrap().and_hms_opt(hour, 0, 0).unwrap()
    }

    fn sample_jobs() -> Vec<Job> {
        let site = Site {
            id: 7,
            name: "Acme Plant".to_string(),
            lat: 45.0,
            lon: 9.0,
            first_visited: at(1, 8),
        };
        vec![Job {
            id: 1,
            site_id: Some(7),
            start_time: at(9, 8),
            end_time: Some(at(9, 10)),
            travel_km: Some(12.0),
            travel_time: Some(2.0),
            fuel_cost: Some(1.5),
            work_summary: Some("swapped the pump".to_string()),
            created_at: at(9, 8),
            site: Some(site),
        }]
    }

    fn sheet() -> Timesheet {
        Timesheet::build(
            &sample_jobs(),
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 7, 15).unwrap(),
        )
    }

    #[test]
    fn test_export_csv_contains_header_rows_and_totals() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output_path = temp_dir.path().join("timesheet.csv");

        let timesheet = sheet();
        let exporter = Exporter::new(ExportFormat::Csv, Some(output_path.clone()), &timesheet);
        exporter.export(&timesheet).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Day,Date,Time Start,Time End,Hours,Customer,Work Order,Work Hours,Train Hours,Other Hours,Notes"
        );
        assert!(content.contains("WED,JUL 9TH,8:00 AM,10:00 AM,2.00,Acme Plant,7,2.00,0.00,0.00,swapped the pump"));
        assert!(content.contains(",Totals,"));
        assert!(content.contains("Summary"));
    }

    #[test]
    fn test_export_excel_creates_a_workbook() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output_path = temp_dir.path().join("timesheet.xlsx");

        let timesheet = sheet();
        let exporter = Exporter::new(ExportFormat::Excel, Some(output_path.clone()), &timesheet);
        exporter.export(&timesheet).unwrap();

        assert!(output_path.exists());
        assert!(std::fs::metadata(&output_path).unwrap().len() > 0);
    }

    #[test]
    fn test_default_file_name_is_derived_from_the_range() {
        let timesheet = sheet();
        assert_eq!(timesheet.file_name(ExportFormat::Excel.extension()), "July 1, 2025 to July 15.xlsx");
        assert_eq!(timesheet.file_name(ExportFormat::Csv.extension()), "July 1, 2025 to July 15.csv");
    }
}
