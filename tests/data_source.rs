use dash_forge::data_source::{ConnectionRequest, CsvFile, DataSourceConnector, SimulatedConnector};
use dash_forge::gui::{DataSourceForm, DataSourceTab};
use dash_forge::common::job::CancelToken;
use dash_forge::notice::NoticeQueue;
use std::io::Write;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn settle(form: &mut DataSourceForm, notices: &mut NoticeQueue) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while form.is_connecting() && Instant::now() < deadline {
        form.poll(notices);
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn csv_handle_reads_metadata_only() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sales.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"product,revenue\nA,10\n").unwrap();

    let csv = CsvFile::from_path(&path).unwrap();
    assert_eq!(csv.name, "sales.csv");
    assert_eq!(csv.size_bytes, 21);
    assert!(CsvFile::from_path(dir.path()).is_err());
    assert!(CsvFile::from_path(dir.path().join("missing.csv")).is_err());
}

#[test]
fn csv_upload_through_form() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("q3.csv");
    std::fs::write(&path, "a,b\n1,2\n").unwrap();

    let mut form = DataSourceForm::default();
    let mut notices = NoticeQueue::default();
    form.tab = DataSourceTab::Csv;
    form.select_csv(&path, &mut notices);
    assert_eq!(form.csv_file().unwrap().name, "q3.csv");
    form.submit(&mut notices);
    settle(&mut form, &mut notices);
    assert_eq!(notices.texts(), vec!["Successfully uploaded q3.csv"]);
}

#[test]
fn bad_csv_path_clears_selection() {
    let dir = tempdir().unwrap();
    let mut form = DataSourceForm::default();
    let mut notices = NoticeQueue::default();
    form.tab = DataSourceTab::Csv;
    form.select_csv(dir.path().join("nope.csv"), &mut notices);
    assert!(form.csv_file().is_none());
    assert_eq!(notices.len(), 1);
    form.submit(&mut notices);
    assert_eq!(notices.texts()[1], "Please select a CSV file");
}

#[test]
fn sheets_connection_message() {
    let mut form = DataSourceForm::default();
    let mut notices = NoticeQueue::default();
    form.tab = DataSourceTab::Sheets;
    form.sheets_url = "https://docs.google.com/spreadsheets/d/1".into();
    form.submit(&mut notices);
    settle(&mut form, &mut notices);
    assert_eq!(notices.texts(), vec!["Successfully connected to Google Sheets"]);
}

#[test]
fn api_key_is_optional() {
    let connector = SimulatedConnector::default();
    let request = ConnectionRequest::api("https://api.example.com", "");
    assert!(request.validate().is_ok());
    let report = connector.connect(&request, &CancelToken::new()).unwrap();
    assert_eq!(report.message, "Successfully connected to API");
    assert_eq!(
        ConnectionRequest::api("   ", "secret").validate(),
        Err("Please enter an API URL")
    );
}

#[test]
fn whitespace_urls_count_as_missing() {
    assert_eq!(
        ConnectionRequest::sheets(" \t ").validate(),
        Err("Please enter a Google Sheets URL")
    );
    let mut form = DataSourceForm::default();
    let mut notices = NoticeQueue::default();
    form.api_url = "   ".into();
    form.submit(&mut notices);
    assert!(!form.is_connecting());
    assert_eq!(notices.texts(), vec!["Please enter an API URL"]);
}
