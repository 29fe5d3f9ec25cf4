use anyhow::Result;
use chrono::NaiveDate;
use death_clock::{compute_target_date, RecordStore, Sex, UserAnswer, UserRecord};
use tempfile::TempDir;

fn answer(sex: Sex, birth: NaiveDate) -> UserAnswer {
    UserAnswer {
        name: "Test User".to_string(),
        sex,
        birth_date: birth,
        target_date: compute_target_date(birth, sex).unwrap(),
    }
}

#[test]
fn test_record_round_trip_keeps_dates_and_sex() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = RecordStore::new(temp_dir.path().join("cust_data.json"));

    for sex in [Sex::Male, Sex::Female, Sex::Unspecified] {
        let original = answer(sex, NaiveDate::from_ymd_opt(1985, 6, 15).unwrap());
        let record = UserRecord::from_answer(&original);
        store.save(&record)?;

        let loaded = store.load()?;
        assert_eq!(loaded, record);
        assert_eq!(loaded.sex, original.sex);
        assert_eq!(loaded.birth_date()?, original.birth_date);
        assert_eq!(loaded.target_date(), original.target_date);
    }

    Ok(())
}

#[test]
fn test_record_file_is_overwritten() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let store = RecordStore::new(temp_dir.path().join("cust_data.json"));

    store.save(&UserRecord::from_answer(&answer(
        Sex::Male,
        NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
    )))?;
    store.save(&UserRecord::from_answer(&answer(
        Sex::Female,
        NaiveDate::from_ymd_opt(2001, 3, 9).unwrap(),
    )))?;

    let loaded = store.load()?;
    assert_eq!(loaded.sex, Sex::Female);
    assert_eq!(loaded.birthday, "03/09/2001");
    Ok(())
}

#[test]
fn test_reads_record_written_by_hand() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("cust_data.json");
    std::fs::write(
        &path,
        r#"{
  "Name": "Grace",
  "Sex": "not specified",
  "Birthday": "12/09/1906",
  "BirthDayOfWeek": "Sunday",
  "RawLifeExp": 74.8,
  "LifeExpectancyDate": "1980-12-09T00:00:00",
  "LifeExpectancyDayOfWeek": "Tuesday"
}"#,
    )?;

    let record = RecordStore::new(&path).load()?;
    assert_eq!(record.sex, Sex::Unspecified);
    assert_eq!(record.birth_date()?, NaiveDate::from_ymd_opt(1906, 12, 9).unwrap());
    assert_eq!(record.target_date(), NaiveDate::from_ymd_opt(1980, 12, 9).unwrap());
    Ok(())
}

#[test]
fn test_corrupt_record_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("cust_data.json");
    std::fs::write(&path, "{ not json")?;

    assert!(RecordStore::new(&path).load().is_err());
    Ok(())
}
