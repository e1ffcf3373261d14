use std::fs;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tempfile::TempDir;

use quinpoint_core::{DatasetLoader, Message, MessageStore, SessionUser, UserRole, ValuationService};

fn write_file(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn write_fixture(dir: &Path) {
    write_file(
        dir,
        "clients.csv",
        "id,firstName,lastName,email,riskScore\n\
         C1,John,Smith,j.smith@example.com,42\n",
    );
    write_file(
        dir,
        "advisors.csv",
        "id,firstName,lastName,email,desk\n\
         A1,Mary,Jones,m.jones@example.com,Equities\n",
    );
    // C1 holds 5 units of I1 and 2 units of I2; I2 has no price file
    write_file(
        dir,
        "portfolio_holdings/C1.csv",
        "instrumentId,datePurchased,initialValue,quantity\n\
         I1,02/01/2024,\"40,000.00\",5\n\
         I2,03/01/2024,100.00,2\n",
    );
    write_file(
        dir,
        "prices/I1.csv",
        "date,open,high,low,close\n\
         01/02/2024,8.00,8.20,7.90,8.00\n\
         01/03/2024,9.90,10.10,9.80,10.00\n",
    );
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_load_value_and_reload_end_to_end() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path());

    let dataset = Arc::new(DatasetLoader::new(dir.path()).load_all().unwrap());
    let valuation = ValuationService::new(dataset.clone());

    // dashboard numbers
    assert_eq!(valuation.total_value("C1"), dec!(50.00));

    let breakdown = valuation.breakdown("C1");
    assert_eq!(breakdown.len(), 1);
    assert_eq!(breakdown["I1"], dec!(50.00));

    let history = valuation.history("C1");
    assert_eq!(history.len(), 2);
    assert_eq!(history[&date(2024, 1, 2)], dec!(40.00));
    assert_eq!(history[&date(2024, 1, 3)], dec!(50.00));

    // login flow
    let client = dataset
        .find_client_by_identity("john smith", "J.SMITH@EXAMPLE.COM")
        .unwrap();
    let session = SessionUser::from_client(client);
    assert_eq!(session.user_id(), "C1");
    assert_eq!(session.role(), UserRole::Client);

    // a fresh load over the same files gives identical results
    let reloaded = Arc::new(DatasetLoader::new(dir.path()).load_all().unwrap());
    let revaluation = ValuationService::new(reloaded);
    assert_eq!(revaluation.total_value("C1"), valuation.total_value("C1"));
    assert_eq!(revaluation.breakdown("C1"), breakdown);
    assert_eq!(revaluation.history("C1"), history);
}

#[test]
fn test_messaging_view_round_trip() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path());

    let dataset = Arc::new(DatasetLoader::new(dir.path()).load_all().unwrap());
    let advisor = dataset
        .find_advisor_by_identity("Mary Jones", "m.jones@example.com")
        .unwrap();
    let session = SessionUser::from_advisor(advisor);

    let store = MessageStore::new(dir.path());
    store
        .append(&Message::now(session.user_id(), "You", "welcome aboard"))
        .unwrap();

    let messages = store.load_for_user(session.user_id()).unwrap();
    assert_eq!(messages.last().unwrap().text, "welcome aboard");
    assert!(store.load_for_user("C1").unwrap().is_empty());
}
